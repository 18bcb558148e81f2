//! Page model and the vertical cursor that fills it.
//!
//! Units are millimetres from the top-left corner of an A4 portrait page.
//! Font sizes are in points.

use super::metrics::{text_width, FontStyle};

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 20.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
/// Baseline of the footer, measured from the top edge.
pub const FOOTER_Y: f32 = PAGE_HEIGHT - 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const TEAL: Color = Color(13, 148, 136);

    pub const fn gray(level: u8) -> Color {
        Color(level, level, level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub style: FontStyle,
    pub size: f32,
    pub color: Color,
}

impl Font {
    pub const fn new(style: FontStyle, size: f32, color: Color) -> Self {
        Self { style, size, color }
    }
}

/// One line of text placed on a page. `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font: Font,
    pub align: Align,
}

/// A horizontal separator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub runs: Vec<TextRun>,
    pub rules: Vec<Rule>,
}

impl Page {
    pub fn text(&self) -> impl Iterator<Item = &str> {
        self.runs.iter().map(|run| run.text.as_str())
    }
}

/// A laid-out document, ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Split `text` into lines no wider than `max_width`.
///
/// Breaks at spaces; a single word wider than the line is split between
/// characters. Explicit newlines are kept.
pub fn wrap_text(text: &str, style: FontStyle, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if text_width(&candidate, style, size) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            for c in word.chars() {
                current.push(c);
                if text_width(&current, style, size) > max_width && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::replace(&mut current, c.to_string()));
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Sequential writer with automatic page breaks.
#[derive(Debug)]
pub struct PageWriter {
    pages: Vec<Page>,
    y: f32,
}

impl Default for PageWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PageWriter {
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: MARGIN,
        }
    }

    pub fn advance(&mut self, height: f32) {
        self.y += height;
    }

    /// Lowest baseline allowed for body text.
    pub fn bottom(&self) -> f32 {
        PAGE_HEIGHT - MARGIN
    }

    /// Start a new page when `height` no longer fits below the cursor.
    /// Returns whether a page was added.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if self.y + height > self.bottom() {
            self.new_page();
            return true;
        }
        false
    }

    pub fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = MARGIN;
    }

    fn current(&mut self) -> &mut Page {
        // `pages` always holds at least the first page.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Place a single run at the cursor without moving it.
    pub fn text_at(&mut self, x: f32, text: impl Into<String>, font: Font, align: Align) {
        let y = self.y;
        self.current().runs.push(TextRun {
            x,
            y,
            text: text.into(),
            font,
            align,
        });
    }

    /// Write already-wrapped lines as one block.
    ///
    /// The block moves to a new page when it does not fit; a block taller
    /// than a whole page continues line by line on the following pages.
    pub fn write_lines(&mut self, lines: &[String], x: f32, font: Font, line_height: f32) {
        let height = lines.len() as f32 * line_height;
        if height <= self.bottom() - MARGIN {
            self.ensure_space(height);
        }
        for line in lines {
            if self.y + line_height > self.bottom() {
                self.new_page();
            }
            self.text_at(x, line.clone(), font, Align::Left);
            self.y += line_height;
        }
    }

    /// Wrap `text` to `width` and write it as one block.
    pub fn paragraph(&mut self, text: &str, x: f32, width: f32, font: Font, line_height: f32) {
        let lines = wrap_text(text, font.style, font.size, width);
        self.write_lines(&lines, x, font, line_height);
    }

    pub fn rule(&mut self, color: Color) {
        let y = self.y;
        self.current().rules.push(Rule {
            x1: MARGIN,
            x2: PAGE_WIDTH - MARGIN,
            y,
            color,
        });
    }

    /// Stamp a footer on every page and return the finished document.
    pub fn finish(mut self, footer_font: Font, footer: impl Fn(usize, usize) -> String) -> Document {
        let total = self.pages.len();
        for (index, page) in self.pages.iter_mut().enumerate() {
            page.runs.push(TextRun {
                x: PAGE_WIDTH / 2.0,
                y: FOOTER_Y,
                text: footer(index + 1, total),
                font: footer_font,
                align: Align::Center,
            });
        }
        Document { pages: self.pages }
    }
}
