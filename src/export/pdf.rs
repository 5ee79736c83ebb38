//! PDF rendering collaborator
//!
//! Consumes the abstract paginated instructions from
//! [`crate::export::layout`] and turns them into PDF bytes with `printpdf`.
//! The layout cursor is top-down while PDF coordinates grow from the bottom
//! left, so every instruction's y is flipped against the page height here.

use crate::error::{ResumeBuilderError, Result};
use crate::export::layout::{PageOp, PaginatedDocument};
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
};

/// Render a paginated document to PDF bytes.
pub fn render_pdf(paginated: &PaginatedDocument) -> Result<Vec<u8>> {
    let metrics = paginated.metrics;
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Resume",
        Mm(metrics.width),
        Mm(metrics.height),
        "Layer 1",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_error)?;

    for (index, page) in paginated.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(metrics.width), Mm(metrics.height), "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for op in &page.ops {
            draw_op(&layer, op, metrics.height, &regular, &bold);
        }
    }

    doc.save_to_bytes().map_err(render_error)
}

fn draw_op(
    layer: &PdfLayerReference,
    op: &PageOp,
    page_height: f32,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    match op {
        PageOp::Text {
            x,
            y,
            size,
            bold: is_bold,
            content,
        } => {
            let font = if *is_bold { bold } else { regular };
            layer.use_text(content.clone(), *size, Mm(*x), Mm(page_height - *y), font);
        }
        PageOp::Rule {
            x1,
            x2,
            y,
            thickness,
        } => {
            let line = Line {
                points: vec![
                    (Point::new(Mm(*x1), Mm(page_height - *y)), false),
                    (Point::new(Mm(*x2), Mm(page_height - *y)), false),
                ],
                is_closed: false,
            };
            layer.set_outline_thickness(*thickness);
            layer.add_line(line);
        }
    }
}

fn render_error(err: printpdf::Error) -> ResumeBuilderError {
    ResumeBuilderError::Render(err.to_string())
}
