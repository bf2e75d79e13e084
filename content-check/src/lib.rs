//! Content classification on top of a generative model.
//!
//! [`checker::ContentChecker`] builds a task-specific instruction, calls the
//! model and hands its reply to [`decoder::decode_reply`], which extracts a
//! [`ClassificationResult`] without ever failing.

pub mod checker;
pub mod decoder;
pub mod errors;
pub mod prompts;
pub mod result;

pub use checker::ContentChecker;
pub use decoder::decode_reply;
pub use errors::{CheckError, CheckResult};
pub use prompts::CheckKind;
pub use result::ClassificationResult;
