//! In-memory find backend over an extracted text layer
//!
//! Each page is a list of text lines in reading order, every line carrying
//! its vertical bounds and the x position of each character. This is the
//! shape a PDF text extraction produces, so matches map straight to page
//! rectangles.

use log::{debug, warn};
use regex::RegexBuilder;

use super::{DocumentFind, FindOptions, MatchRect, Page};

/// Page separator used by plain-text documents
pub const PAGE_BREAK: char = '\u{0c}';

/// Character position information
#[derive(Clone, Debug, PartialEq)]
pub struct TextChar {
    /// Left edge X coordinate
    pub x: f32,
    /// The character
    pub c: char,
}

/// Line bounding box with character information
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    /// Left edge X coordinate
    pub x0: f32,
    /// Top edge Y coordinate
    pub y0: f32,
    /// Right edge X coordinate
    pub x1: f32,
    /// Bottom edge Y coordinate
    pub y1: f32,
    /// Characters in this line with their positions
    pub chars: Vec<TextChar>,
}

impl TextLine {
    /// Lay out `text` with a fixed advance per character
    pub fn monospace(text: &str, x0: f32, y0: f32, advance: f32, height: f32) -> Self {
        let chars: Vec<TextChar> = text
            .chars()
            .enumerate()
            .map(|(i, c)| TextChar {
                x: x0 + i as f32 * advance,
                c,
            })
            .collect();
        let x1 = x0 + chars.len() as f32 * advance;
        Self {
            x0,
            y0,
            x1,
            y1: y0 + height,
            chars,
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().map(|ch| ch.c).collect()
    }

    /// Right edge of the character at `index`
    fn char_right_edge(&self, index: usize) -> f32 {
        self.chars
            .get(index + 1)
            .map(|next| next.x)
            .unwrap_or(self.x1)
    }
}

#[derive(Debug, Default)]
pub struct TextLayerFind {
    pages: Vec<Vec<TextLine>>,
}

impl TextLayerFind {
    pub fn new(pages: Vec<Vec<TextLine>>) -> Self {
        Self { pages }
    }

    /// Build a backend from plain text, one page per form-feed separated chunk.
    ///
    /// Lines are laid out top to bottom with a fixed advance and line height.
    pub fn from_plain_text(text: &str, advance: f32, line_height: f32) -> Self {
        let pages = text
            .split(PAGE_BREAK)
            .map(|page| {
                page.lines()
                    .enumerate()
                    .map(|(row, line)| {
                        TextLine::monospace(line, 0.0, row as f32 * line_height, advance, line_height)
                    })
                    .collect()
            })
            .collect();
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn lines(&self, page: &Page) -> Option<&[TextLine]> {
        self.pages.get(page.index).map(Vec::as_slice)
    }

    fn search(&self, page: &Page, text: &str, options: FindOptions) -> Vec<MatchRect> {
        if text.is_empty() {
            return Vec::new();
        }
        let Some(lines) = self.lines(page) else {
            debug!("Find on missing page {} ignored", page.index);
            return Vec::new();
        };

        let case_sensitive = options.contains(FindOptions::CASE_SENSITIVE);
        let whole_words = options.contains(FindOptions::WHOLE_WORDS_ONLY);

        let pattern = match RegexBuilder::new(&regex::escape(text))
            .case_insensitive(!case_sensitive)
            .build()
        {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!("Failed to build find pattern for {text:?}: {e}");
                return Vec::new();
            }
        };

        let mut results = Vec::new();
        for line in lines {
            let line_text = line.text();
            let offsets: Vec<usize> = line_text.char_indices().map(|(b, _)| b).collect();
            let char_at = |byte: usize| offsets.partition_point(|&b| b < byte);

            let mut from = 0;
            while let Some(m) = pattern.find_at(&line_text, from) {
                let start = char_at(m.start());
                let end = char_at(m.end());

                // A rejected match may overlap a valid one: retry from its next char
                let rejected =
                    start == end || (whole_words && !is_word_bounded(&line.chars, start, end));
                if rejected {
                    match offsets.get(start + 1) {
                        Some(&next) => {
                            from = next;
                            continue;
                        }
                        None => break,
                    }
                }

                results.push(MatchRect::new(
                    f64::from(line.chars[start].x),
                    f64::from(line.y0),
                    f64::from(line.char_right_edge(end - 1)),
                    f64::from(line.y1),
                ));
                from = m.end();
            }
        }

        debug!(
            "Find {:?} on page {} with {:?}: {} matches",
            text,
            page.index,
            options,
            results.len()
        );
        results
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when the chars `[start, end)` are not glued to neighbouring word chars
fn is_word_bounded(chars: &[TextChar], start: usize, end: usize) -> bool {
    let before = start
        .checked_sub(1)
        .and_then(|i| chars.get(i))
        .is_some_and(|ch| is_word_char(ch.c));
    let after = chars.get(end).is_some_and(|ch| is_word_char(ch.c));
    !before && !after
}

impl DocumentFind for TextLayerFind {
    fn find_text(&self, page: &Page, text: &str, case_sensitive: bool) -> Vec<MatchRect> {
        let options = if case_sensitive {
            FindOptions::CASE_SENSITIVE
        } else {
            FindOptions::DEFAULT
        };
        self.search(page, text, options)
    }

    fn find_text_with_options(
        &self,
        page: &Page,
        text: &str,
        options: FindOptions,
    ) -> Vec<MatchRect> {
        self.search(page, text, options & self.supported_options())
    }

    fn supported_options(&self) -> FindOptions {
        FindOptions::CASE_SENSITIVE | FindOptions::WHOLE_WORDS_ONLY
    }
}
