pub mod error;
pub mod loan_book;
pub mod schedule;
pub mod types;

#[cfg(feature = "portfolio")]
pub mod portfolio;

pub use error::LendingError;
pub use types::*;

/// Standard result type for all lending operations
pub type LendingResult<T> = Result<T, LendingError>;
