use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn render(diagnostics: &[Diagnostic], mode: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    emitter.emit_all(diagnostics);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

fn operands_error(line: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E6002, line).with_message("Operands must be numbers.")
}

#[test]
fn plain_output_uses_message_then_line() {
    let out = render(&[operands_error(3)], ColorMode::Never);
    assert_eq!(out, "Operands must be numbers.\n[line 3]\n");
}

#[test]
fn notes_follow_the_location() {
    let diag = operands_error(1).with_note("left operand is a string");
    let out = render(&[diag], ColorMode::Never);
    assert_eq!(
        out,
        "Operands must be numbers.\n[line 1]\n  = note: left operand is a string\n"
    );
}

#[test]
fn emit_all_writes_every_diagnostic() {
    let out = render(&[operands_error(1), operands_error(2)], ColorMode::Never);
    assert_eq!(out.lines().count(), 4);
    assert!(out.ends_with("[line 2]\n"));
}

#[test]
fn always_mode_adds_ansi_codes() {
    let out = render(&[operands_error(5)], ColorMode::Always);
    assert!(out.contains("\x1b[1;31mOperands must be numbers.\x1b[0m"));
    assert!(out.contains("\x1b[1m[line 5]\x1b[0m"));
}

#[test]
fn auto_mode_follows_tty_flag() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn stderr_emitter_respects_color_mode() {
    let mut emitter = TerminalEmitter::stderr(ColorMode::Never, true);
    assert!(!emitter.colors);
    emitter.flush();
}
