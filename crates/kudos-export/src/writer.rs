use std::io::Write;
use std::path::{Path, PathBuf};

use kudos_core::models::letter::LetterData;

use crate::error::ExportError;
use crate::options::RenderOptions;
use crate::pdf::HtmlToPdf;
use crate::render::LetterTemplates;

#[derive(Debug, Clone)]
pub struct WrittenLetter {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Render `data` to a PDF at `output`.
///
/// Nothing is created at `output` unless the whole PDF was produced; the
/// bytes land in a sibling temp file first and are renamed into place.
pub fn write_letter(
    templates: &LetterTemplates,
    renderer: &dyn HtmlToPdf,
    data: &LetterData,
    options: &RenderOptions,
    output: &Path,
) -> Result<WrittenLetter, ExportError> {
    let document = templates.render_html(data, options)?;
    let pdf = renderer.render_pdf(&document.html)?;

    write_atomic(output, &pdf)?;

    if let Some(debug_path) = &options.debug_html {
        std::fs::write(debug_path, &document.html)?;
        tracing::debug!(path = %debug_path.display(), "debug html written");
    }

    tracing::info!(
        path = %output.display(),
        bytes = pdf.len(),
        entity_type = %data.entity_type(),
        "letter written"
    );

    Ok(WrittenLetter {
        path: output.to_path_buf(),
        bytes: pdf.len(),
    })
}

/// Write to a temp file in the destination directory, then rename.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".kudos-")
        .suffix(".part")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
