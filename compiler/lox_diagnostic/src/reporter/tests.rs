use super::*;
use crate::emitter::{ColorMode, TerminalEmitter};
use crate::ErrorCode;

fn diag(line: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E6001, line).with_message("Operand must be a number.")
}

mod collecting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_clean() {
        let reporter = CollectingReporter::new();
        assert!(!reporter.had_runtime_error());
        assert_eq!(reporter.exit_code(), 0);
    }

    #[test]
    fn records_diagnostics_in_order() {
        let mut reporter = CollectingReporter::new();
        reporter.report_runtime_error(diag(1));
        reporter.report_runtime_error(diag(2));
        assert!(reporter.had_runtime_error());
        assert_eq!(reporter.exit_code(), RUNTIME_ERROR_EXIT_CODE);
        let lines: Vec<u32> = reporter.diagnostics().iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn take_and_reset_clear_state() {
        let mut reporter = CollectingReporter::new();
        reporter.report_runtime_error(diag(1));
        assert_eq!(reporter.take().len(), 1);
        assert!(!reporter.had_runtime_error());

        reporter.report_runtime_error(diag(4));
        reporter.reset();
        assert!(reporter.diagnostics().is_empty());
    }
}

mod emitting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_through_emitter_and_counts() {
        let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
        let mut reporter = EmittingReporter::new(emitter);
        reporter.report_runtime_error(diag(7));

        assert!(reporter.had_runtime_error());
        assert_eq!(reporter.error_count(), 1);

        let out = reporter.into_emitter().into_inner();
        assert_eq!(
            String::from_utf8_lossy(&out),
            "Operand must be a number.\n[line 7]\n"
        );
    }

    #[test]
    fn reset_clears_flag() {
        let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
        let mut reporter = EmittingReporter::new(emitter);
        reporter.report_runtime_error(diag(1));
        reporter.reset();
        assert!(!reporter.had_runtime_error());
        assert_eq!(reporter.exit_code(), 0);
    }
}
