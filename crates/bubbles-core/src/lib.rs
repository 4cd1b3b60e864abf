//! Bubbles Core Types
//!
//! This crate provides the foundational types shared by the Bubbles layout
//! library and its renderers:
//!
//! - **Geometry**: Points, sizes, bounds and placement regions ([`geometry`] module)
//! - **Bubbles**: Bubble radius, spacing and the separation rule ([`bubble`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod bubble;
pub mod color;
pub mod geometry;
