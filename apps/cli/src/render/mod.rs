//! Binary PDF output.
//!
//! Takes the paginated [`Document`] produced by the layout engine and emits
//! it through `printpdf` using the two built-in Helvetica weights — no
//! embedded font files, no images. A target path that cannot be created for
//! writing surfaces as an I/O error, unchanged.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use tracing::debug;

use crate::errors::AppError;
use crate::layout::{Document, LineKind, PageConfig};

const DOCUMENT_TITLE: &str = "Personalized Resume";
const LAYER_NAME: &str = "Layer 1";

/// Fraction of the line height from the line top down to the text baseline.
const BASELINE_FRACTION: f32 = 0.75;

/// Writes `document` as a PDF byte stream to `path`.
pub fn write_pdf(document: &Document, config: &PageConfig, path: &Path) -> Result<(), AppError> {
    let (pdf, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(f64::from(config.width_mm)),
        Mm(f64::from(config.height_mm)),
        LAYER_NAME,
    );

    let regular = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Pdf(e.to_string()))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    for (index, page) in document.pages.iter().enumerate() {
        let layer = if index == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = pdf.add_page(
                Mm(f64::from(config.width_mm)),
                Mm(f64::from(config.height_mm)),
                LAYER_NAME,
            );
            pdf.get_page(page_index).get_layer(layer_index)
        };

        for block in &page.blocks {
            let font: &IndirectFontRef = match block.kind {
                LineKind::Header => &bold,
                _ => &regular,
            };

            for (line_index, line) in block.lines.iter().enumerate() {
                let top_mm = block.y_mm
                    + line_index as f32 * config.line_height_mm
                    + BASELINE_FRACTION * config.line_height_mm;
                // printpdf's origin is the bottom-left corner
                let baseline_mm = config.height_mm - top_mm;

                layer.use_text(
                    line.clone(),
                    f64::from(config.font_size_pt),
                    Mm(f64::from(config.margin_left_mm)),
                    Mm(f64::from(baseline_mm)),
                    font,
                );
            }
        }
    }

    let file = File::create(path)?;
    pdf.save(&mut BufWriter::new(file))
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    debug!("wrote PDF to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_config, LayoutEngine};

    #[test]
    fn test_writes_pdf_magic_bytes() {
        let config = default_page_config();
        let doc = LayoutEngine::new(config.clone())
            .render("Summary:\n- Built X\n\nExperience:\nWorked at Z");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        write_pdf(&doc, &config, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output must be a PDF stream");
        assert!(bytes.len() > 500, "PDF should contain real content");
    }

    #[test]
    fn test_multi_page_document_renders() {
        let config = default_page_config();
        let text = (0..60)
            .map(|i| format!("entry number {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let doc = LayoutEngine::new(config.clone()).render(&text);
        assert!(doc.page_count() > 1);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.pdf");
        write_pdf(&doc, &config, &path).unwrap();
        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_uncreatable_target_path_is_io_error() {
        let config = default_page_config();
        let doc = LayoutEngine::new(config.clone()).render("Worked at Z");

        let err = write_pdf(&doc, &config, Path::new("/no/such/dir/out.pdf")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
