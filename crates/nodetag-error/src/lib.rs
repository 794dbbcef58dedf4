//! # nodetag-error
//!
//! Unified error handling for nodetag.
//!
//! - **ErrorKind**: what went wrong (e.g. `MalformedTagName`, `RangeOverflow`)
//! - **Error Context**: key/value pairs that help locate the cause
//! - **Error Source**: wraps an underlying error without leaking its type
//!
//! Generation is a deterministic batch transformation, so errors carry no
//! retry status: running the same input again fails the same way.
//!
//! ## Usage
//!
//! ```rust
//! use nodetag_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::MalformedTagName, "missing AST_ prefix")
//!         .with_operation("gen::visit_function_name")
//!         .with_context("tag", "STATEMENT_LIST"))
//! }
//! ```

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using nodetag Error
pub type Result<T> = std::result::Result<T, Error>;
