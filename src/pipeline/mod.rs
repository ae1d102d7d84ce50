//! Submission handling: validate, extract, encode, score.
//!
//! [`ResumeMatcher`] is a plain synchronous component with no UI coupling. The HTTP gateway
//! is one caller; tests drive it directly with mock collaborators.

pub mod error;
pub mod matcher;
pub mod types;


pub use error::{MatchError, ValidationError};
pub use matcher::ResumeMatcher;
pub use types::{MatchReport, Submission};
