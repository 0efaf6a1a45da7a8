use std::fmt::Write;

use crate::model::geometry::{MarkerBox, Point};
use crate::render::Rgb;

const FONT_FAMILY: &str = "Liberation Mono, DejaVu Sans Mono, monospace";
// Text anchors are top-left corners; SVG places text on its baseline.
const BASELINE_RATIO: f64 = 0.8;

pub struct SvgWriter {
    out: String,
}

impl SvgWriter {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut out = String::with_capacity(16 * 1024);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        let _ = write!(
            out,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{background}"/>"#
        );
        Self { out }
    }

    pub fn text(&mut self, anchor: Point, font_px: f64, color: Rgb, text: &str) {
        self.out.push_str(r#"<text x=""#);
        push_num(&mut self.out, anchor.x);
        self.out.push_str(r#"" y=""#);
        push_num(&mut self.out, anchor.y + font_px * BASELINE_RATIO);
        self.out.push_str(r#"" font-size=""#);
        push_num(&mut self.out, font_px);
        let _ = write!(
            self.out,
            r#"" font-family="{FONT_FAMILY}" font-weight="bold" font-style="italic" fill="{color}">"#
        );
        escape_xml_into(&mut self.out, text);
        self.out.push_str("</text>");
    }

    pub fn ellipse(&mut self, bounds: &MarkerBox, fill: Rgb, outline: Rgb) {
        let center = bounds.center();
        let (rx, ry) = bounds.radii();
        self.out.push_str(r#"<ellipse cx=""#);
        push_num(&mut self.out, center.x);
        self.out.push_str(r#"" cy=""#);
        push_num(&mut self.out, center.y);
        self.out.push_str(r#"" rx=""#);
        push_num(&mut self.out, rx);
        self.out.push_str(r#"" ry=""#);
        push_num(&mut self.out, ry);
        let _ = write!(self.out, r#"" fill="{fill}" stroke="{outline}"/>"#);
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }
}

/// Writes `value` with at most three decimals and no trailing zeros.
fn push_num(out: &mut String, value: f64) {
    let start = out.len();
    let _ = write!(out, "{value:.3}");
    if out[start..].contains('.') {
        let trimmed = out[start..].trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(start + trimmed);
    }
    if &out[start..] == "-0" {
        out.truncate(start);
        out.push('0');
    }
}

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/svg.rs"]
mod tests;
