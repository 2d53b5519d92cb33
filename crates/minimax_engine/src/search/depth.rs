//! Validated search depth

use crate::constants::DEFAULT_SEARCH_DEPTH;
use std::fmt;
use tracing::warn;

/// Number of plies to search, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchDepth(u32);

impl SearchDepth {
    /// Accept a requested depth, falling back to [`DEFAULT_SEARCH_DEPTH`] when it is not positive
    ///
    /// An invalid depth is a recoverable configuration mistake: it is logged and
    /// replaced, never reported as an error.
    pub fn new(requested: i64) -> Self {
        if requested < 1 {
            warn!(
                requested,
                default = DEFAULT_SEARCH_DEPTH,
                "Invalid search depth, using default"
            );
            return Self::default();
        }
        Self(u32::try_from(requested).unwrap_or(u32::MAX))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for SearchDepth {
    fn default() -> Self {
        Self(DEFAULT_SEARCH_DEPTH)
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_depth_is_kept() {
        assert_eq!(SearchDepth::new(1).get(), 1);
        assert_eq!(SearchDepth::new(7).get(), 7);
    }

    #[test]
    fn test_non_positive_depth_falls_back_to_default() {
        assert_eq!(SearchDepth::new(0).get(), DEFAULT_SEARCH_DEPTH);
        assert_eq!(SearchDepth::new(-5).get(), DEFAULT_SEARCH_DEPTH);
        assert_eq!(SearchDepth::new(i64::MIN), SearchDepth::default());
    }

    #[test]
    fn test_oversized_depth_saturates() {
        assert_eq!(SearchDepth::new(i64::MAX).get(), u32::MAX);
    }
}
