use thiserror::Error;

/// Navigation requests the index model refuses.
///
/// None of these reach the visitor: boundary moves are reported as
/// [`crate::NavOutcome::AtBoundary`] and the page simply does nothing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    #[error("artist index {index} is outside 1..={total}")]
    OutOfRange { index: u32, total: u32 },
    #[error("artist list is not loaded yet")]
    Uninitialized,
}
