//! Print layout and pagination
//!
//! Projects the resume into an ordered sequence of pages of positioned
//! drawing instructions. This module owns *what goes where and when a page
//! breaks*; turning the instructions into PDF bytes is the renderer's job
//! (see [`crate::export::pdf`]).
//!
//! Pagination is an explicit cursor state machine: placing a block either
//! advances the cursor on the current page, or, when the block's rendered
//! lines would push the cursor past the bottom margin, emits a page break
//! and places the block starting at the top margin of a fresh page. Blocks
//! taller than a whole page degrade to line-at-a-time splitting.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::export::sections::{self, or_placeholder, FIELD_DELIMITER};
use crate::model::resume::ResumeDocument;

/// Points-to-millimeters conversion.
const PT_TO_MM: f32 = 0.352_778;
/// Average Helvetica glyph advance as a fraction of the font size.
const AVG_CHAR_WIDTH_RATIO: f32 = 0.5;
/// Stroke width of horizontal rules.
const RULE_THICKNESS: f32 = 0.5;

/// Page geometry in millimeters. Defaults to A4 with the fixed 20 mm margin
/// and 7 mm line height used throughout the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub line_height: f32,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin: 20.0,
            line_height: 7.0,
        }
    }
}

impl PageMetrics {
    /// Lowest cursor position still on the printable area.
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin
    }

    /// Horizontal span between the margins.
    pub fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
}

impl TextStyle {
    pub const fn new(size: f32, bold: bool) -> Self {
        Self { size, bold }
    }
}

/// One positioned drawing instruction. Coordinates are top-down in
/// millimeters; `y` is the text baseline (or rule position).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageOp {
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        content: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub ops: Vec<PageOp>,
}

/// Ordered pages of positioned instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedDocument {
    pub metrics: PageMetrics,
    pub pages: Vec<Page>,
}

impl PaginatedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Running layout state: the open page list plus the vertical cursor on the
/// last page.
pub struct PageComposer {
    metrics: PageMetrics,
    pages: Vec<Page>,
    cursor: f32,
}

impl PageComposer {
    pub fn new(metrics: PageMetrics) -> Self {
        Self {
            metrics,
            pages: vec![Page::default()],
            cursor: metrics.margin,
        }
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn break_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor = self.metrics.margin;
    }

    /// Break the page now unless `needed` millimeters still fit above the
    /// bottom margin.
    pub fn ensure_room(&mut self, needed: f32) {
        if self.cursor + needed > self.metrics.bottom_limit() {
            self.break_page();
        }
    }

    /// Move the cursor down without drawing (inter-block spacing).
    pub fn advance(&mut self, dy: f32) {
        self.cursor += dy;
    }

    /// Horizontal rule across the printable width.
    pub fn rule(&mut self) {
        self.ensure_room(self.metrics.line_height);
        let op = PageOp::Rule {
            x1: self.metrics.margin,
            x2: self.metrics.width - self.metrics.margin,
            y: self.cursor,
            thickness: RULE_THICKNESS,
        };
        self.push_op(op);
        self.cursor += self.metrics.line_height;
    }

    /// Wrapped left-aligned text starting at the left margin plus `indent`.
    pub fn text(&mut self, content: &str, style: TextStyle, indent: f32) {
        let width = self.metrics.usable_width() - indent;
        let lines = wrap_text(content, max_chars(width, style.size));
        self.reserve_block(lines.len());
        self.place_lines(&lines, style, self.metrics.margin + indent);
    }

    /// Single centered line (headers are never wrapped).
    pub fn centered_text(&mut self, content: &str, style: TextStyle) {
        self.ensure_room(self.metrics.line_height);
        let text_width = visual_len(content) as f32 * char_width_mm(style.size);
        let x = ((self.metrics.width - text_width) / 2.0).max(self.metrics.margin);
        let op = PageOp::Text {
            x,
            y: self.cursor,
            size: style.size,
            bold: style.bold,
            content: content.to_string(),
        };
        self.push_op(op);
        self.cursor += self.metrics.line_height;
    }

    /// Bulleted text: glyph near the margin, wrapped body indented by 8 mm.
    pub fn bullet(&mut self, content: &str, style: TextStyle) {
        let indent = 8.0;
        let width = self.metrics.usable_width() - indent;
        let lines = wrap_text(content, max_chars(width, style.size));
        self.reserve_block(lines.len());
        let glyph = PageOp::Text {
            x: self.metrics.margin + 2.0,
            y: self.cursor,
            size: style.size,
            bold: style.bold,
            content: "•".to_string(),
        };
        self.push_op(glyph);
        self.place_lines(&lines, style, self.metrics.margin + indent);
    }

    pub fn finish(self) -> PaginatedDocument {
        PaginatedDocument {
            metrics: self.metrics,
            pages: self.pages,
        }
    }

    /// Full printable height of one page.
    fn page_span(&self) -> f32 {
        self.metrics.bottom_limit() - self.metrics.margin
    }

    /// Whole block moves to a fresh page when it would spill past the
    /// bottom margin; a block taller than the page only reserves its first
    /// line and splits per-line while being placed.
    fn reserve_block(&mut self, line_count: usize) {
        let block_height = line_count as f32 * self.metrics.line_height;
        if block_height <= self.page_span() {
            self.ensure_room(block_height);
        } else {
            self.ensure_room(self.metrics.line_height);
        }
    }

    fn place_lines(&mut self, lines: &[String], style: TextStyle, x: f32) {
        for line in lines {
            self.ensure_room(self.metrics.line_height);
            let op = PageOp::Text {
                x,
                y: self.cursor,
                size: style.size,
                bold: style.bold,
                content: line.clone(),
            };
            self.push_op(op);
            self.cursor += self.metrics.line_height;
        }
    }

    fn push_op(&mut self, op: PageOp) {
        self.pages
            .last_mut()
            .expect("composer always has an open page")
            .ops
            .push(op);
    }
}

/// Estimated glyph width in millimeters for a font size in points.
fn char_width_mm(font_size: f32) -> f32 {
    font_size * AVG_CHAR_WIDTH_RATIO * PT_TO_MM
}

/// Usable characters per line for a width in millimeters.
fn max_chars(width_mm: f32, font_size: f32) -> usize {
    ((width_mm / char_width_mm(font_size)).floor() as usize).max(1)
}

fn visual_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Greedy word wrap at `width` characters. Tokens longer than a whole line
/// are split at the grapheme level.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let sep = if current.is_empty() { 0 } else { 1 };
        if visual_len(&current) + sep + visual_len(word) <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if visual_len(word) <= width {
            current.push_str(word);
        } else {
            for grapheme in word.graphemes(true) {
                if visual_len(&current) == width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push_str(grapheme);
            }
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

const NAME_STYLE: TextStyle = TextStyle::new(20.0, true);
const HEADING_STYLE: TextStyle = TextStyle::new(12.0, true);
const TITLE_STYLE: TextStyle = TextStyle::new(11.0, true);
const DETAIL_STYLE: TextStyle = TextStyle::new(11.0, false);
const BODY_STYLE: TextStyle = TextStyle::new(10.0, false);

/// Project the document into positioned pages.
pub fn to_print_layout(doc: &ResumeDocument, metrics: PageMetrics) -> PaginatedDocument {
    let sections = sections::normalize(doc);
    let mut c = PageComposer::new(metrics);

    // Header block: name, contact line, optional links line, rule.
    c.centered_text(or_placeholder(&sections.full_name, "Your Name"), NAME_STYLE);
    c.advance(2.0);
    if !sections.contact_line.is_empty() {
        c.centered_text(&sections.contact_line, BODY_STYLE);
    }
    if !sections.links_line.is_empty() {
        c.centered_text(&sections.links_line, BODY_STYLE);
    }
    c.advance(3.0);
    c.rule();
    c.advance(2.0);

    if let Some(summary) = &sections.summary {
        c.text("PROFESSIONAL SUMMARY", HEADING_STYLE, 0.0);
        c.text(summary, BODY_STYLE, 0.0);
        c.advance(5.0);
    }

    if !sections.experience.is_empty() {
        c.text("PROFESSIONAL EXPERIENCE", HEADING_STYLE, 0.0);
        c.advance(2.0);
        let last = sections.experience.len() - 1;
        for (index, exp) in sections.experience.iter().enumerate() {
            c.text(or_placeholder(&exp.title, "Job Title"), TITLE_STYLE, 0.0);
            let details = format!(
                "{}{}{}{}{}",
                or_placeholder(&exp.company, "Company"),
                FIELD_DELIMITER,
                exp.location,
                FIELD_DELIMITER,
                exp.date_range
            );
            c.text(&details, DETAIL_STYLE, 0.0);
            c.advance(1.0);
            for achievement in &exp.achievements {
                c.bullet(achievement, BODY_STYLE);
            }
            if index < last {
                c.advance(3.0);
            }
        }
        c.advance(5.0);
    }

    if !sections.education.is_empty() {
        // Keep the heading together with at least the first entry.
        c.ensure_room(40.0);
        c.text("EDUCATION", HEADING_STYLE, 0.0);
        c.advance(2.0);
        for edu in &sections.education {
            c.text(or_placeholder(&edu.degree, "Degree"), TITLE_STYLE, 0.0);
            let details = format!(
                "{}{}{}{}{}",
                or_placeholder(&edu.institution, "Institution"),
                FIELD_DELIMITER,
                edu.location,
                FIELD_DELIMITER,
                edu.graduation
            );
            c.text(&details, BODY_STYLE, 0.0);
            if !edu.extras.is_empty() {
                c.text(&edu.extras, BODY_STYLE, 0.0);
            }
            c.advance(2.0);
        }
        c.advance(3.0);
    }

    if !sections.skills.is_empty() {
        c.ensure_room(30.0);
        c.text("SKILLS & CERTIFICATIONS", HEADING_STYLE, 0.0);
        c.advance(2.0);
        for group in &sections.skills {
            c.text(&format!("{}: {}", group.label, group.items), BODY_STYLE, 0.0);
        }
    }

    c.finish()
}
