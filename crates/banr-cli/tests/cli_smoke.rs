//! CLI Smoke Tests
//!
//! Integration tests for the banr CLI commands:
//! - `render`: render text as block ASCII art
//! - `info`: display the font and border catalogs
//! - `demo`: render a sample in every font
//!
//! Tests cover both success cases and the never-fail fallbacks for
//! unknown font and border names.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Get the path to the banr binary
fn banr_binary() -> PathBuf {
    // During cargo test, the binary is in target/debug
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // crates
    path.pop(); // root
    path.push("target");
    path.push("debug");
    path.push("banr");
    path
}

/// Create a temporary file path
fn temp_output(ext: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("banr_test_{}.{}", id, ext));
    path
}

/// Run the binary and return (status_success, stdout)
fn run_banr(args: &[&str]) -> (bool, String) {
    let output = Command::new(banr_binary())
        .args(args)
        .output()
        .expect("Failed to execute banr");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

// ============================================================================
// General CLI Tests
// ============================================================================

#[test]
fn test_help() {
    let (ok, stdout) = run_banr(&["--help"]);
    assert!(ok, "--help should succeed");
    assert!(stdout.contains("render"), "Should list render command");
    assert!(stdout.contains("info"), "Should list info command");
    assert!(stdout.contains("demo"), "Should list demo command");
}

#[test]
fn test_version() {
    let (ok, stdout) = run_banr(&["--version"]);
    assert!(ok, "--version should succeed");
    assert!(stdout.contains("banr"), "Should show version info");
}

#[test]
fn test_unknown_command_fails() {
    let (ok, _) = run_banr(&["unknown_command"]);
    assert!(!ok, "unknown command should fail");
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_lists_everything_by_default() {
    let (ok, stdout) = run_banr(&["info"]);
    assert!(ok, "info should succeed");
    assert!(stdout.contains("standard"), "Should list the default font");
    assert!(stdout.contains("plain"), "Should list the plain border");
}

#[test]
fn test_info_fonts() {
    let (ok, stdout) = run_banr(&["info", "--fonts"]);
    assert!(ok, "info --fonts should succeed");
    assert!(stdout.contains("standard"));
    assert!(stdout.contains("banner"));
    assert!(stdout.contains("small"));
    assert!(!stdout.contains("Borders:"), "Should not list borders");
}

#[test]
fn test_info_borders() {
    let (ok, stdout) = run_banr(&["info", "--borders"]);
    assert!(ok, "info --borders should succeed");
    assert!(stdout.contains("plain"));
    assert!(stdout.contains("fancy"));
    assert!(stdout.contains("round"));
    assert!(!stdout.contains("Fonts:"), "Should not list fonts");
}

// ============================================================================
// Render Command Tests - Success Cases
// ============================================================================

#[test]
fn test_render_to_stdout() {
    let (ok, stdout) = run_banr(&["render", "HI", "-q"]);
    assert!(ok, "render should succeed");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "standard glyphs are five rows tall");
    assert_eq!(lines[0], "H   H IIIII");
}

#[test]
fn test_render_is_case_insensitive() {
    let (_, lower) = run_banr(&["render", "hi", "-q"]);
    let (_, upper) = run_banr(&["render", "HI", "-q"]);
    assert_eq!(lower, upper);
}

#[test]
fn test_render_shadow_and_border_shape() {
    let (ok, stdout) = run_banr(&["render", "A", "-b", "plain", "-s", "-q"]);
    assert!(ok, "render with shadow and border should succeed");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7, "five glyph rows plus two frame rows");
    assert_eq!(lines[0], "+------+");
    assert_eq!(lines[6], "+------+");
    assert!(lines[1].starts_with('|') && lines[1].ends_with('|'));
}

#[test]
fn test_render_from_stdin() {
    let mut child = Command::new(banr_binary())
        .args(["render", "-q"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn banr");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"HI\n")
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait on banr");
    assert!(output.status.success(), "render from stdin should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let (_, direct) = run_banr(&["render", "HI", "-q"]);
    assert_eq!(stdout, direct, "stdin text should render like an argument");
}

#[test]
fn test_render_to_file() {
    let output_file = temp_output("txt");

    let output = Command::new(banr_binary())
        .args(["render", "HI", "-o", output_file.to_str().unwrap(), "-q"])
        .output()
        .expect("Failed to execute banr render");

    assert!(
        output.status.success(),
        "render to file should succeed: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output_file.exists(), "Output file should be created");

    let data = fs::read_to_string(&output_file).expect("Failed to read output");
    assert!(data.starts_with("H   H IIIII"), "File should hold the art");

    // Cleanup
    let _ = fs::remove_file(output_file);
}

#[test]
fn test_render_empty_text() {
    let (ok, stdout) = run_banr(&["render", "", "-q"]);
    assert!(ok, "empty text should render successfully");
    assert!(stdout.trim().is_empty(), "empty text renders nothing");
}

// ============================================================================
// Render Command Tests - Fallback Cases
// ============================================================================

#[test]
fn test_render_unknown_font_falls_back() {
    let (ok, fallback) = run_banr(&["render", "HI", "-f", "nonexistent", "-q"]);
    assert!(ok, "unknown font must not fail the render");

    let (_, standard) = run_banr(&["render", "HI", "-f", "standard", "-q"]);
    assert_eq!(fallback, standard, "fallback output should match standard");
}

#[test]
fn test_render_unknown_border_matches_no_border() {
    let (ok, unknown) = run_banr(&["render", "HI", "-b", "nonexistent", "-q"]);
    assert!(ok, "unknown border must not fail the render");

    let (_, unbordered) = run_banr(&["render", "HI", "-q"]);
    assert_eq!(unknown, unbordered, "unknown border should mean no border");
}

// ============================================================================
// Demo Command Tests
// ============================================================================

#[test]
fn test_demo_renders_every_font() {
    let (ok, stdout) = run_banr(&["demo"]);
    assert!(ok, "demo should succeed");
    assert!(stdout.contains("Font: standard"));
    assert!(stdout.contains("Font: banner"));
    assert!(stdout.contains("Font: small"));
    assert!(stdout.contains('+'), "demo blocks carry a plain border");
}

#[test]
fn test_demo_custom_text() {
    let (ok, stdout) = run_banr(&["demo", "-t", "AB"]);
    assert!(ok, "demo with custom text should succeed");
    assert!(stdout.contains("Font: standard"));
}
