#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use kudos_export::error::ExportError;
use kudos_export::pdf::{HtmlToPdf, WeasyPrint};

/// Serializes script creation and execution so a script is never exec'd
/// while another test still holds it open for writing (ETXTBSY).
static SPAWN: Mutex<()> = Mutex::new(());

/// Stand-in renderer invoked as `<script> - <output.pdf>`.
fn script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("renderer.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn missing_program_is_pdf_error() {
    let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
    let err = WeasyPrint::new("/nonexistent/kudos/weasyprint")
        .render_pdf("<p>x</p>")
        .unwrap_err();

    let ExportError::Pdf(message) = err else {
        panic!("expected Pdf error, got {err:?}");
    };
    assert!(message.contains("failed to start"));
}

#[test]
fn non_zero_exit_carries_stderr() {
    let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let program = script(dir.path(), "cat > /dev/null\necho 'bad stylesheet' >&2\nexit 3");

    let err = WeasyPrint::new(program).render_pdf("<p>x</p>").unwrap_err();

    let ExportError::Pdf(message) = err else {
        panic!("expected Pdf error, got {err:?}");
    };
    assert!(message.contains("bad stylesheet"), "{message}");
}

#[test]
fn renderer_exiting_before_reading_input_is_pdf_error() {
    let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
    let html = "x".repeat(200_000);

    let err = WeasyPrint::new("false").render_pdf(&html).unwrap_err();

    assert!(matches!(err, ExportError::Pdf(_)), "got {err:?}");
}

#[test]
fn output_without_pdf_header_is_rejected() {
    let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let program = script(dir.path(), "cat > /dev/null\nprintf 'not a pdf' > \"$2\"");

    let err = WeasyPrint::new(program).render_pdf("<p>x</p>").unwrap_err();

    let ExportError::Pdf(message) = err else {
        panic!("expected Pdf error, got {err:?}");
    };
    assert!(message.contains("without a PDF header"), "{message}");
}

#[test]
fn pdf_output_is_returned() {
    let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let program = script(dir.path(), "cat > /dev/null\nprintf '%%PDF-1.7 stand-in' > \"$2\"");

    let bytes = WeasyPrint::new(program).render_pdf("<p>x</p>").unwrap();

    assert_eq!(bytes, b"%PDF-1.7 stand-in");
}

#[test]
fn html_is_piped_on_stdin() {
    let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let program = script(dir.path(), "{ printf '%%PDF-'; cat; } > \"$2\"");

    let bytes = WeasyPrint::new(program).render_pdf("<h1>Коллективу</h1>").unwrap();

    assert_eq!(bytes, "%PDF-<h1>Коллективу</h1>".as_bytes());
}
