//! Diagnostics for runtime errors.
//!
//! The evaluator converts a failed batch into a single `Diagnostic` and hands
//! it to a `RuntimeErrorReporter` owned by the host. Reporters decide how to
//! surface it (an emitter, an in-memory list) and remember that a runtime
//! error happened so the host can choose an exit status.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod reporter;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use reporter::{CollectingReporter, EmittingReporter, RuntimeErrorReporter};
