pub mod svg;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid style: {0}")]
    Style(String),
}
