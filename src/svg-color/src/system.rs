//! CSS2 system colour keywords.
//!
//! Each keyword maps to a user-interface role of the host platform. The
//! default palette is the classic light desktop theme; hosts can swap in their
//! own through [`SystemPalette::with_color`] or configuration.

use std::fmt;

use crate::color::Color;

/// A system colour keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemColor {
    /// Active window border.
    ActiveBorder,
    /// Active window caption.
    ActiveCaption,
    /// Background of multiple-document interfaces.
    AppWorkspace,
    /// Desktop background.
    Background,
    /// Face of three-dimensional display elements.
    ButtonFace,
    /// Highlighted edge of three-dimensional elements.
    ButtonHighlight,
    /// Shadowed edge of three-dimensional elements.
    ButtonShadow,
    /// Text on push buttons.
    ButtonText,
    /// Text in captions and scrollbar arrows.
    CaptionText,
    /// Disabled text.
    GrayText,
    /// Selected items.
    Highlight,
    /// Text of selected items.
    HighlightText,
    /// Inactive window border.
    InactiveBorder,
    /// Inactive window caption.
    InactiveCaption,
    /// Text in an inactive caption.
    InactiveCaptionText,
    /// Tooltip background.
    InfoBackground,
    /// Tooltip text.
    InfoText,
    /// Menu background.
    Menu,
    /// Menu text.
    MenuText,
    /// Scrollbar gray area.
    ScrollBar,
    /// Dark shadow of three-dimensional elements.
    ThreeDDarkShadow,
    /// Face of three-dimensional elements.
    ThreeDFace,
    /// Highlight of three-dimensional elements.
    ThreeDHighlight,
    /// Light shadow of three-dimensional elements.
    ThreeDLightShadow,
    /// Window background.
    Window,
    /// Window frame.
    WindowFrame,
    /// Window text.
    WindowText,
}

impl SystemColor {
    /// Number of keywords.
    pub const COUNT: usize = 27;

    /// Every keyword, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::ActiveBorder,
        Self::ActiveCaption,
        Self::AppWorkspace,
        Self::Background,
        Self::ButtonFace,
        Self::ButtonHighlight,
        Self::ButtonShadow,
        Self::ButtonText,
        Self::CaptionText,
        Self::GrayText,
        Self::Highlight,
        Self::HighlightText,
        Self::InactiveBorder,
        Self::InactiveCaption,
        Self::InactiveCaptionText,
        Self::InfoBackground,
        Self::InfoText,
        Self::Menu,
        Self::MenuText,
        Self::ScrollBar,
        Self::ThreeDDarkShadow,
        Self::ThreeDFace,
        Self::ThreeDHighlight,
        Self::ThreeDLightShadow,
        Self::Window,
        Self::WindowFrame,
        Self::WindowText,
    ];

    /// The lowercase keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::ActiveBorder => "activeborder",
            Self::ActiveCaption => "activecaption",
            Self::AppWorkspace => "appworkspace",
            Self::Background => "background",
            Self::ButtonFace => "buttonface",
            Self::ButtonHighlight => "buttonhighlight",
            Self::ButtonShadow => "buttonshadow",
            Self::ButtonText => "buttontext",
            Self::CaptionText => "captiontext",
            Self::GrayText => "graytext",
            Self::Highlight => "highlight",
            Self::HighlightText => "highlighttext",
            Self::InactiveBorder => "inactiveborder",
            Self::InactiveCaption => "inactivecaption",
            Self::InactiveCaptionText => "inactivecaptiontext",
            Self::InfoBackground => "infobackground",
            Self::InfoText => "infotext",
            Self::Menu => "menu",
            Self::MenuText => "menutext",
            Self::ScrollBar => "scrollbar",
            Self::ThreeDDarkShadow => "threeddarkshadow",
            Self::ThreeDFace => "threedface",
            Self::ThreeDHighlight => "threedhighlight",
            Self::ThreeDLightShadow => "threedlightshadow",
            Self::Window => "window",
            Self::WindowFrame => "windowframe",
            Self::WindowText => "windowtext",
        }
    }

    /// Exact keyword match with ASCII-only case folding.
    pub fn from_keyword(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.keyword().eq_ignore_ascii_case(text))
    }

    /// The classic light-theme value.
    pub const fn default_color(self) -> Color {
        match self {
            Self::ActiveBorder => Color::rgb(0xB4, 0xB4, 0xB4),
            Self::ActiveCaption => Color::rgb(0x99, 0xB4, 0xD1),
            Self::AppWorkspace => Color::rgb(0xAB, 0xAB, 0xAB),
            Self::Background => Color::rgb(0x00, 0x00, 0x00),
            Self::ButtonFace | Self::Menu | Self::ThreeDFace => Color::rgb(0xF0, 0xF0, 0xF0),
            Self::ButtonHighlight
            | Self::HighlightText
            | Self::ThreeDLightShadow
            | Self::Window => Color::rgb(0xFF, 0xFF, 0xFF),
            Self::ButtonShadow => Color::rgb(0xA0, 0xA0, 0xA0),
            Self::ButtonText
            | Self::CaptionText
            | Self::InactiveCaptionText
            | Self::InfoText
            | Self::MenuText
            | Self::WindowText => Color::rgb(0x00, 0x00, 0x00),
            Self::GrayText => Color::rgb(0x6D, 0x6D, 0x6D),
            Self::Highlight => Color::rgb(0x00, 0x78, 0xD7),
            Self::InactiveBorder => Color::rgb(0xF4, 0xF7, 0xFC),
            Self::InactiveCaption => Color::rgb(0xBF, 0xCD, 0xDB),
            Self::InfoBackground => Color::rgb(0xFF, 0xFF, 0xE1),
            Self::ScrollBar => Color::rgb(0xC8, 0xC8, 0xC8),
            Self::ThreeDDarkShadow => Color::rgb(0x69, 0x69, 0x69),
            Self::ThreeDHighlight => Color::rgb(0xE3, 0xE3, 0xE3),
            Self::WindowFrame => Color::rgb(0x64, 0x64, 0x64),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SystemColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One colour per system keyword. Immutable once handed to a converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPalette {
    colors: [Color; SystemColor::COUNT],
}

impl Default for SystemPalette {
    fn default() -> Self {
        Self {
            colors: SystemColor::ALL.map(SystemColor::default_color),
        }
    }
}

impl SystemPalette {
    /// The classic light-theme palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: replace one entry.
    #[must_use]
    pub fn with_color(mut self, key: SystemColor, color: Color) -> Self {
        self.colors[key.index()] = color;
        self
    }

    /// The colour for a keyword.
    pub fn get(&self, key: SystemColor) -> Color {
        self.colors[key.index()]
    }

    /// Looks up keyword text case-insensitively. Unknown text is `None`, not
    /// an error.
    pub fn resolve(&self, text: &str) -> Option<Color> {
        SystemColor::from_keyword(text).map(|key| self.get(key))
    }

    /// Iterates `(keyword, colour)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (SystemColor, Color)> + '_ {
        SystemColor::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}
