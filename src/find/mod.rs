//! Text-find capability for document backends
//!
//! A backend that can locate text on a page implements [`DocumentFind`].
//! The trait only fixes the shape of a search; how matching is done (and in
//! which order matches come back) belongs to the backend.

mod text_layer;

pub use text_layer::{TextChar, TextLayerFind, TextLine};

use bitflags::bitflags;

bitflags! {
    /// Match options for [`DocumentFind::find_text_with_options`].
    ///
    /// The empty set is the default search: case-insensitive, substring.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FindOptions: u32 {
        const CASE_SENSITIVE = 1 << 0;
        const WHOLE_WORDS_ONLY = 1 << 1;
    }
}

impl FindOptions {
    pub const DEFAULT: FindOptions = FindOptions::empty();
}

impl Default for FindOptions {
    fn default() -> Self {
        FindOptions::DEFAULT
    }
}

/// A page of a loaded document, identified by its 0-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    pub index: usize,
}

impl Page {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

/// Area of a page covered by one match, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl MatchRect {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// Search capability a document backend may provide.
///
/// Failures are reported as an empty result; callers cannot tell a failed
/// search from one that found nothing.
pub trait DocumentFind {
    /// Find every occurrence of `text` on `page`, honoring only case sensitivity.
    fn find_text(&self, page: &Page, text: &str, case_sensitive: bool) -> Vec<MatchRect>;

    /// Find every occurrence of `text` on `page` using `options`.
    ///
    /// Backends without richer matching fall back to [`DocumentFind::find_text`],
    /// so only the case-sensitivity flag is honored by default.
    fn find_text_with_options(
        &self,
        page: &Page,
        text: &str,
        options: FindOptions,
    ) -> Vec<MatchRect> {
        self.find_text(page, text, options.contains(FindOptions::CASE_SENSITIVE))
    }

    /// Options this backend actually honors. Anything else is ignored.
    fn supported_options(&self) -> FindOptions {
        FindOptions::DEFAULT
    }
}

/// Mask `requested` against what `backend` advertises.
///
/// The result is what a caller may rely on when interpreting matches.
pub fn effective_options<F: DocumentFind + ?Sized>(
    backend: &F,
    requested: FindOptions,
) -> FindOptions {
    requested & backend.supported_options()
}
