#![forbid(unsafe_code)]

//! Errors surfaced by the reorder engine.
//!
//! Only order rewrites can fail from the caller's point of view. Drag
//! bookkeeping anomalies are recovered internally by cancelling the drag
//! and restoring the original order; they are logged, never returned.

/// Error returned by [`crate::ReorderList::set_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// The supplied sequence is not a bijection on `[0, N)`.
    InvalidPermutation {
        /// Number of items in the list.
        expected_len: usize,
        /// What made the sequence invalid.
        defect: PermutationDefect,
    },
}

/// The specific way a permutation failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermutationDefect {
    /// Sequence length differs from the item count.
    LengthMismatch { got: usize },
    /// A value is outside `[0, N)`.
    OutOfRange { position: usize, value: usize },
    /// A value appears more than once.
    Duplicate { position: usize, value: usize },
}

impl core::fmt::Display for ReorderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidPermutation {
                expected_len,
                defect,
            } => {
                write!(
                    f,
                    "invalid permutation of [0, {}): {}",
                    expected_len, defect
                )
            }
        }
    }
}

impl core::fmt::Display for PermutationDefect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LengthMismatch { got } => write!(f, "length mismatch, got {}", got),
            Self::OutOfRange { position, value } => {
                write!(f, "value {} at position {} is out of range", value, position)
            }
            Self::Duplicate { position, value } => {
                write!(f, "value {} at position {} is a duplicate", value, position)
            }
        }
    }
}

impl std::error::Error for ReorderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_length_mismatch() {
        let err = ReorderError::InvalidPermutation {
            expected_len: 3,
            defect: PermutationDefect::LengthMismatch { got: 2 },
        };
        assert_eq!(
            err.to_string(),
            "invalid permutation of [0, 3): length mismatch, got 2"
        );
    }

    #[test]
    fn display_out_of_range() {
        let err = ReorderError::InvalidPermutation {
            expected_len: 3,
            defect: PermutationDefect::OutOfRange {
                position: 1,
                value: 7,
            },
        };
        assert!(err.to_string().contains("value 7 at position 1"));
    }

    #[test]
    fn display_duplicate() {
        let err = ReorderError::InvalidPermutation {
            expected_len: 3,
            defect: PermutationDefect::Duplicate {
                position: 2,
                value: 0,
            },
        };
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn implements_error_trait() {
        let err: &dyn std::error::Error = &ReorderError::InvalidPermutation {
            expected_len: 0,
            defect: PermutationDefect::LengthMismatch { got: 1 },
        };
        assert!(!err.to_string().is_empty());
    }
}
