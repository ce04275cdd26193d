//! Annotation creation modes and the toolbar control that arms them

pub mod action;
pub mod toggle;

pub use action::{ActionState, AnnotationAction, AnnotationEvent};
pub use toggle::ToggleButton;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of annotation the host should start drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationType {
    Text,
    TextMarkup,
}

/// Visual treatment of a text-markup annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMarkupType {
    None,
    Highlight,
    Underline,
    StrikeOut,
    Squiggly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationColor {
    None,
    Yellow,
    Cyan,
    Magenta,
    Green,
}

/// What `BeginAddAnnot` asks the host to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotationSettings {
    pub annot_type: AnnotationType,
    pub markup: TextMarkupType,
    pub color: AnnotationColor,
}

impl AnnotationSettings {
    const fn markup(markup: TextMarkupType, color: AnnotationColor) -> Self {
        Self {
            annot_type: AnnotationType::TextMarkup,
            markup,
            color,
        }
    }
}

/// Identity of an entry in the annotation toolbar.
///
/// `Highlight` is an alias for whichever highlight color was picked last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationActionType {
    Note,
    Highlight,
    HighlightYellow,
    HighlightBlue,
    HighlightPink,
    HighlightGreen,
    Underline,
    StrikeOut,
    Squiggly,
}

impl AnnotationActionType {
    pub const ALL: [AnnotationActionType; 9] = [
        AnnotationActionType::Note,
        AnnotationActionType::Highlight,
        AnnotationActionType::HighlightYellow,
        AnnotationActionType::HighlightBlue,
        AnnotationActionType::HighlightPink,
        AnnotationActionType::HighlightGreen,
        AnnotationActionType::Underline,
        AnnotationActionType::StrikeOut,
        AnnotationActionType::Squiggly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationActionType::Note => "note",
            AnnotationActionType::Highlight => "highlight",
            AnnotationActionType::HighlightYellow => "highlight-yellow",
            AnnotationActionType::HighlightBlue => "highlight-blue",
            AnnotationActionType::HighlightPink => "highlight-pink",
            AnnotationActionType::HighlightGreen => "highlight-green",
            AnnotationActionType::Underline => "underline",
            AnnotationActionType::StrikeOut => "strike-out",
            AnnotationActionType::Squiggly => "squiggly",
        }
    }

    /// True for the four concrete highlight colors (not the alias)
    pub fn is_highlight_color(&self) -> bool {
        matches!(
            self,
            AnnotationActionType::HighlightYellow
                | AnnotationActionType::HighlightBlue
                | AnnotationActionType::HighlightPink
                | AnnotationActionType::HighlightGreen
        )
    }

    pub fn is_highlight(&self) -> bool {
        *self == AnnotationActionType::Highlight || self.is_highlight_color()
    }

    pub fn settings(&self) -> AnnotationSettings {
        use AnnotationColor as C;
        use TextMarkupType as M;

        match self {
            AnnotationActionType::Note => AnnotationSettings {
                annot_type: AnnotationType::Text,
                markup: M::None,
                color: C::Yellow,
            },
            AnnotationActionType::Highlight | AnnotationActionType::HighlightYellow => {
                AnnotationSettings::markup(M::Highlight, C::Yellow)
            }
            AnnotationActionType::HighlightBlue => AnnotationSettings::markup(M::Highlight, C::Cyan),
            AnnotationActionType::HighlightPink => {
                AnnotationSettings::markup(M::Highlight, C::Magenta)
            }
            AnnotationActionType::HighlightGreen => {
                AnnotationSettings::markup(M::Highlight, C::Green)
            }
            AnnotationActionType::Underline => AnnotationSettings::markup(M::Underline, C::None),
            AnnotationActionType::StrikeOut => AnnotationSettings::markup(M::StrikeOut, C::None),
            AnnotationActionType::Squiggly => AnnotationSettings::markup(M::Squiggly, C::None),
        }
    }

    /// Symbolic icon shown on the primary button
    pub fn icon_name(&self) -> &'static str {
        match self {
            AnnotationActionType::Note => "note-symbolic",
            AnnotationActionType::Highlight
            | AnnotationActionType::HighlightYellow
            | AnnotationActionType::HighlightBlue
            | AnnotationActionType::HighlightPink
            | AnnotationActionType::HighlightGreen => "marker-symbolic",
            AnnotationActionType::StrikeOut => "text-strikethrough-symbolic",
            AnnotationActionType::Underline => "text-underline-symbolic",
            AnnotationActionType::Squiggly => "text-squiggly-symbolic",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            AnnotationActionType::Note => "Add note",
            AnnotationActionType::Highlight
            | AnnotationActionType::HighlightYellow
            | AnnotationActionType::HighlightBlue
            | AnnotationActionType::HighlightPink
            | AnnotationActionType::HighlightGreen => "Add highlight annotation",
            AnnotationActionType::StrikeOut => "Add strikethrough annotation",
            AnnotationActionType::Underline => "Add underline annotation",
            AnnotationActionType::Squiggly => "Add squiggly annotation",
        }
    }
}

impl fmt::Display for AnnotationActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown annotation type '{0}'")]
pub struct ParseActionTypeError(pub String);

impl FromStr for AnnotationActionType {
    type Err = ParseActionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        AnnotationActionType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ParseActionTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_settings_mapping() {
        use AnnotationActionType as A;
        use AnnotationColor as C;
        use TextMarkupType as M;

        let expected = [
            (A::Note, AnnotationType::Text, M::None, C::Yellow),
            (A::HighlightYellow, AnnotationType::TextMarkup, M::Highlight, C::Yellow),
            (A::HighlightBlue, AnnotationType::TextMarkup, M::Highlight, C::Cyan),
            (A::HighlightPink, AnnotationType::TextMarkup, M::Highlight, C::Magenta),
            (A::HighlightGreen, AnnotationType::TextMarkup, M::Highlight, C::Green),
            (A::Underline, AnnotationType::TextMarkup, M::Underline, C::None),
            (A::StrikeOut, AnnotationType::TextMarkup, M::StrikeOut, C::None),
            (A::Squiggly, AnnotationType::TextMarkup, M::Squiggly, C::None),
        ];

        for (action, annot_type, markup, color) in expected {
            assert_eq!(
                action.settings(),
                AnnotationSettings {
                    annot_type,
                    markup,
                    color
                },
                "{action}"
            );
        }
    }

    #[test]
    fn test_icons_follow_family() {
        assert_eq!(AnnotationActionType::Note.icon_name(), "note-symbolic");
        for t in AnnotationActionType::ALL.iter().filter(|t| t.is_highlight()) {
            assert_eq!(t.icon_name(), "marker-symbolic");
            assert_eq!(t.tooltip(), "Add highlight annotation");
        }
        assert_eq!(
            AnnotationActionType::StrikeOut.icon_name(),
            "text-strikethrough-symbolic"
        );
    }

    #[test]
    fn test_parse_names() {
        for t in AnnotationActionType::ALL {
            assert_eq!(t.as_str().parse::<AnnotationActionType>(), Ok(t));
        }
        assert_eq!(
            "Highlight_Blue".parse::<AnnotationActionType>(),
            Ok(AnnotationActionType::HighlightBlue)
        );

        let err = "circle".parse::<AnnotationActionType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown annotation type 'circle'");
    }

    #[test]
    fn test_serde_names_match_display() {
        let yaml = serde_yaml::to_string(&AnnotationActionType::StrikeOut).unwrap();
        assert_eq!(yaml.trim(), "strike-out");
    }
}
