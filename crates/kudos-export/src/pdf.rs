use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::ExportError;

/// Turns a complete HTML document into PDF bytes.
///
/// Implementations are synchronous; async callers should run them on a
/// blocking thread.
pub trait HtmlToPdf: Send + Sync {
    fn render_pdf(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}

/// Renders through the `weasyprint` command-line tool.
///
/// The HTML is piped on stdin and the PDF is read back from a temp file.
#[derive(Debug, Clone)]
pub struct WeasyPrint {
    program: PathBuf,
    base_url: Option<PathBuf>,
}

impl Default for WeasyPrint {
    fn default() -> Self {
        Self::new("weasyprint")
    }
}

impl WeasyPrint {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            base_url: None,
        }
    }

    /// Resolve relative asset references (e.g. the signature image)
    /// against this directory.
    pub fn with_base_url(mut self, base_url: impl Into<PathBuf>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl HtmlToPdf for WeasyPrint {
    fn render_pdf(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        let output = tempfile::Builder::new()
            .prefix("kudos-")
            .suffix(".pdf")
            .tempfile()?;

        let mut cmd = Command::new(&self.program);
        if let Some(base_url) = &self.base_url {
            cmd.arg("--base-url").arg(base_url);
        }
        cmd.arg("-")
            .arg(output.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        tracing::debug!(program = %self.program.display(), "running html to pdf renderer");

        let mut child = cmd.spawn().map_err(|e| {
            ExportError::Pdf(format!("failed to start {}: {e}", self.program.display()))
        })?;

        // Dropping stdin closes the pipe so the renderer sees EOF. The child
        // is always waited on, even when it stopped reading early.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(html.as_bytes()),
            None => Ok(()),
        };

        let result = child.wait_with_output()?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ExportError::Pdf(format!(
                "{} exited with {}: {}",
                self.program.display(),
                result.status,
                stderr.trim()
            )));
        }

        if let Err(e) = written
            && e.kind() != ErrorKind::BrokenPipe
        {
            return Err(e.into());
        }

        let bytes = std::fs::read(output.path())?;
        ensure_pdf(&bytes)?;
        Ok(bytes)
    }
}

/// Reject renderer output that is not a PDF document.
pub fn ensure_pdf(bytes: &[u8]) -> Result<(), ExportError> {
    if bytes.starts_with(b"%PDF-") {
        Ok(())
    } else {
        Err(ExportError::Pdf(format!(
            "renderer returned {} bytes without a PDF header",
            bytes.len()
        )))
    }
}
