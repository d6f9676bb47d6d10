//! Runtime error reporters.
//!
//! A reporter is the host-owned collaborator that receives the diagnostic of
//! each aborted statement batch. It replaces a process-wide "had runtime
//! error" flag: the host creates it, passes it to the interpreter, and reads
//! its state afterwards.

use crate::emitter::DiagnosticEmitter;
use crate::Diagnostic;

/// Exit status for a program that failed at runtime (`EX_SOFTWARE`).
pub const RUNTIME_ERROR_EXIT_CODE: i32 = 70;

/// Receives runtime errors from the interpreter.
pub trait RuntimeErrorReporter {
    /// Record one runtime error. Called once per aborted batch.
    fn report_runtime_error(&mut self, diagnostic: Diagnostic);

    /// Whether any runtime error has been reported since creation or the last `reset`.
    fn had_runtime_error(&self) -> bool;

    /// Forget previously reported errors, e.g. before the next REPL line.
    fn reset(&mut self);

    /// Process exit status the host should use.
    fn exit_code(&self) -> i32 {
        if self.had_runtime_error() {
            RUNTIME_ERROR_EXIT_CODE
        } else {
            0
        }
    }
}

/// Reporter that writes each diagnostic through an emitter.
pub struct EmittingReporter<E: DiagnosticEmitter> {
    emitter: E,
    error_count: usize,
}

impl<E: DiagnosticEmitter> EmittingReporter<E> {
    pub fn new(emitter: E) -> Self {
        EmittingReporter {
            emitter,
            error_count: 0,
        }
    }

    /// Number of errors reported since creation or the last `reset`.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Consume the reporter and return its emitter.
    pub fn into_emitter(self) -> E {
        self.emitter
    }
}

impl<E: DiagnosticEmitter> RuntimeErrorReporter for EmittingReporter<E> {
    fn report_runtime_error(&mut self, diagnostic: Diagnostic) {
        self.emitter.emit(&diagnostic);
        self.emitter.flush();
        self.error_count = self.error_count.saturating_add(1);
    }

    fn had_runtime_error(&self) -> bool {
        self.error_count > 0
    }

    fn reset(&mut self) {
        self.error_count = 0;
    }
}

/// Reporter that keeps diagnostics in memory.
#[derive(Default, Debug)]
pub struct CollectingReporter {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics reported so far, oldest first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take all collected diagnostics, leaving the reporter empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl RuntimeErrorReporter for CollectingReporter {
    fn report_runtime_error(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn had_runtime_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    fn reset(&mut self) {
        self.diagnostics.clear();
    }
}

#[cfg(test)]
mod tests;
