//! Retry and ordering policies for the layout engine.

use serde::Deserialize;

/// Default number of candidates drawn per bubble before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// How many candidates the engine may draw for a single bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Keep sampling until a candidate fits.
    ///
    /// Never terminates when the region cannot hold the requested bubbles.
    Unbounded,

    /// Draw at most this many candidates per bubble, then report the layout
    /// as infeasible.
    Bounded(usize),
}

impl RetryPolicy {
    /// Returns `true` if another candidate may be drawn after `attempts` draws.
    pub fn allows_attempt(self, attempts: usize) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Bounded(max_attempts) => attempts < max_attempts,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::Bounded(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Order in which generated bubbles are returned.
///
/// Labels are attached by index, so the order decides which label lands on
/// which bubble.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemOrder {
    /// First placed bubble first.
    #[default]
    Placement,

    /// Most recently placed bubble first.
    Reverse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_policy_limits_attempts() {
        let policy = RetryPolicy::Bounded(3);
        assert!(policy.allows_attempt(0));
        assert!(policy.allows_attempt(2));
        assert!(!policy.allows_attempt(3));
    }

    #[test]
    fn test_zero_attempts_allows_nothing() {
        assert!(!RetryPolicy::Bounded(0).allows_attempt(0));
    }

    #[test]
    fn test_unbounded_policy() {
        assert!(RetryPolicy::Unbounded.allows_attempt(usize::MAX));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            RetryPolicy::default(),
            RetryPolicy::Bounded(DEFAULT_MAX_ATTEMPTS)
        );
        assert_eq!(ItemOrder::default(), ItemOrder::Placement);
    }
}
