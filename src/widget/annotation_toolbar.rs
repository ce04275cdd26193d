use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::annotation::{AnnotationAction, AnnotationColor};

/// Terminal stand-in for a symbolic icon
pub fn glyph_for(icon_name: &str) -> &'static str {
    match icon_name {
        "note-symbolic" => "✎",
        "marker-symbolic" => "▌",
        "text-strikethrough-symbolic" => "‒",
        "text-underline-symbolic" => "_",
        "text-squiggly-symbolic" => "~",
        "pan-down-symbolic" => "▾",
        _ => "?",
    }
}

pub fn color_for(color: AnnotationColor) -> Option<Color> {
    match color {
        AnnotationColor::None => None,
        AnnotationColor::Yellow => Some(Color::Yellow),
        AnnotationColor::Cyan => Some(Color::Cyan),
        AnnotationColor::Magenta => Some(Color::Magenta),
        AnnotationColor::Green => Some(Color::Green),
    }
}

/// One-line rendering of an [`AnnotationAction`]: `[glyph label][▾]`.
///
/// The primary segment is reversed while armed; the glyph cell takes the
/// resolved annotation color as its background.
pub struct AnnotationToolbar<'a> {
    action: &'a AnnotationAction,
}

impl<'a> AnnotationToolbar<'a> {
    pub fn new(action: &'a AnnotationAction) -> Self {
        Self { action }
    }

    fn primary_text(&self) -> (String, String) {
        (
            format!(" {} ", glyph_for(self.action.icon_name())),
            format!("{} ", self.action.active_annot_type()),
        )
    }

    fn menu_text(&self) -> String {
        format!(" {} ", glyph_for(self.action.menu_icon_name()))
    }

    /// Columns needed to draw the whole control
    pub fn width(&self) -> u16 {
        let (glyph, label) = self.primary_text();
        let total = glyph.width() + label.width() + self.menu_text().width();
        u16::try_from(total).unwrap_or(u16::MAX)
    }

    pub fn line(&self) -> Line<'static> {
        let (glyph, label) = self.primary_text();
        let mut primary = Style::default().add_modifier(Modifier::BOLD);
        if self.action.is_armed() {
            primary = primary.add_modifier(Modifier::REVERSED);
        }

        let mut glyph_style = primary;
        if let Some(color) = color_for(self.action.active_annot_type().settings().color) {
            glyph_style = glyph_style.bg(color);
        }

        Line::from(vec![
            Span::styled(glyph, glyph_style),
            Span::styled(label, primary),
            Span::styled(self.menu_text(), Style::default().fg(Color::DarkGray)),
        ])
    }

    /// Render into a scratch buffer and return the symbols, styles dropped
    pub fn to_plain_string(&self) -> String {
        let area = Rect::new(0, 0, self.width(), 1);
        let mut buf = Buffer::empty(area);
        self.line().render(area, &mut buf);
        (0..area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }
}

impl Widget for AnnotationToolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}
