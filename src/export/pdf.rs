//! Minimal PDF 1.4 writer for laid-out documents.
//!
//! Only the standard Helvetica faces are used, so no font data is embedded.

use std::io::Write;

use super::layout::{Align, Color, Document, Page, PAGE_HEIGHT, PAGE_WIDTH};
use super::metrics::{encode_win_ansi, text_width, FontStyle, PT_PER_MM};
use crate::error::Result;

const FONTS: [FontStyle; 3] = [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic];

// Object numbers: 1 catalog, 2 page tree, 3..=5 fonts, then a page object and
// its content stream for every page.
const FIRST_PAGE_OBJECT: usize = 3 + FONTS.len();

pub fn write_pdf(document: &Document) -> Result<Vec<u8>> {
    let mut out: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();

    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let page_ids: Vec<usize> = (0..document.pages.len())
        .map(|index| FIRST_PAGE_OBJECT + index * 2)
        .collect();

    offsets.push(out.len());
    write!(out, "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n")?;

    offsets.push(out.len());
    let kids = page_ids
        .iter()
        .map(|id| format!("{id} 0 R"))
        .collect::<Vec<_>>()
        .join(" ");
    write!(
        out,
        "2 0 obj\n<< /Type /Pages /Kids [{kids}] /Count {} >>\nendobj\n",
        page_ids.len()
    )?;

    for (index, font) in FONTS.iter().enumerate() {
        offsets.push(out.len());
        write!(
            out,
            "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>\nendobj\n",
            3 + index,
            font.base_font()
        )?;
    }

    let font_resources = FONTS
        .iter()
        .enumerate()
        .map(|(index, font)| format!("/{} {} 0 R", font.resource_name(), 3 + index))
        .collect::<Vec<_>>()
        .join(" ");

    for (page, id) in document.pages.iter().zip(&page_ids) {
        let content = page_content(page)?;

        offsets.push(out.len());
        write!(
            out,
            "{id} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources << /Font << {font_resources} >> >> /Contents {} 0 R >>\nendobj\n",
            PAGE_WIDTH * PT_PER_MM,
            PAGE_HEIGHT * PT_PER_MM,
            id + 1
        )?;

        offsets.push(out.len());
        write!(out, "{} 0 obj\n<< /Length {} >>\nstream\n", id + 1, content.len())?;
        out.extend_from_slice(&content);
        write!(out, "\nendstream\nendobj\n")?;
    }

    let xref_offset = out.len();
    write!(out, "xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1)?;
    for offset in &offsets {
        write!(out, "{offset:010} 00000 n \n")?;
    }
    write!(
        out,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        offsets.len() + 1
    )?;

    Ok(out)
}

fn page_content(page: &Page) -> Result<Vec<u8>> {
    let mut content = Vec::new();

    for rule in &page.rules {
        let y = to_pdf_y(rule.y);
        write!(
            content,
            "{} G 0.2 w {:.2} {y:.2} m {:.2} {y:.2} l S\n",
            gray_component(rule.color),
            rule.x1 * PT_PER_MM,
            rule.x2 * PT_PER_MM,
        )?;
    }

    for run in &page.runs {
        let x = match run.align {
            Align::Left => run.x,
            Align::Center => run.x - text_width(&run.text, run.font.style, run.font.size) / 2.0,
        };
        let Color(r, g, b) = run.font.color;

        write!(
            content,
            "BT /{} {} Tf {:.3} {:.3} {:.3} rg {:.2} {:.2} Td (",
            run.font.style.resource_name(),
            run.font.size,
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            x * PT_PER_MM,
            to_pdf_y(run.y),
        )?;
        content.extend(escape_string(&encode_win_ansi(&run.text)));
        content.extend_from_slice(b") Tj ET\n");
    }

    Ok(content)
}

fn to_pdf_y(y_mm: f32) -> f32 {
    (PAGE_HEIGHT - y_mm) * PT_PER_MM
}

fn gray_component(color: Color) -> String {
    let Color(r, g, b) = color;
    let level = (r as f32 + g as f32 + b as f32) / 3.0 / 255.0;
    format!("{level:.3}")
}

fn escape_string(bytes: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'(' | b')' | b'\\' => {
                escaped.push(b'\\');
                escaped.push(byte);
            }
            b'\r' | b'\n' => escaped.push(b' '),
            _ => escaped.push(byte),
        }
    }
    escaped
}
