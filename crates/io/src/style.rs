//! ANSI SGR styling
//!
//! Style descriptors use the `foreground|background|attribute` syntax, each
//! segment optional. Codes are emitted background first, then attribute,
//! then foreground.

use std::fmt;

/// Escape character that starts every control sequence
pub const ESC: &str = "\x1b";

/// SGR sequence that resets every attribute
pub const RESET: &str = "\x1b[0m";

/// Closed set of named colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Black
    Black,
    /// Red
    Red,
    /// Green
    Green,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Purple (magenta)
    Purple,
    /// Cyan
    Cyan,
    /// Light gray
    LightGray,
    /// Dark gray
    DarkGray,
    /// Light red
    LightRed,
    /// Light green
    LightGreen,
    /// Light yellow
    LightYellow,
    /// Light blue
    LightBlue,
    /// Light magenta
    LightMagenta,
    /// Light cyan
    LightCyan,
    /// White
    White,
}

impl Color {
    /// Every color, in table order
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Cyan,
        Color::LightGray,
        Color::DarkGray,
        Color::LightRed,
        Color::LightGreen,
        Color::LightYellow,
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightCyan,
        Color::White,
    ];

    /// Name used in descriptor strings
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Cyan => "cyan",
            Color::LightGray => "light_gray",
            Color::DarkGray => "dark_gray",
            Color::LightRed => "light_red",
            Color::LightGreen => "light_green",
            Color::LightYellow => "light_yellow",
            Color::LightBlue => "light_blue",
            Color::LightMagenta => "light_magenta",
            Color::LightCyan => "light_cyan",
            Color::White => "white",
        }
    }

    /// Look a color up by its descriptor name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }

    /// SGR code selecting this color as foreground
    pub const fn fg_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Purple => 35,
            Color::Cyan => 36,
            Color::LightGray => 37,
            Color::DarkGray => 90,
            Color::LightRed => 91,
            Color::LightGreen => 92,
            Color::LightYellow => 93,
            Color::LightBlue => 94,
            Color::LightMagenta => 95,
            Color::LightCyan => 96,
            Color::White => 97,
        }
    }

    /// SGR code selecting this color as background
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

/// Closed set of text attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Bold / increased intensity
    Bold,
    /// Faint / decreased intensity
    Faint,
    /// Italic
    Italic,
    /// Underline
    Underline,
    /// Slow blink
    Blink,
    /// Swap foreground and background
    Negative,
}

impl Attribute {
    /// Every attribute, in table order
    pub const ALL: [Attribute; 6] = [
        Attribute::Bold,
        Attribute::Faint,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Blink,
        Attribute::Negative,
    ];

    /// Name used in descriptor strings
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Faint => "faint",
            Attribute::Italic => "italic",
            Attribute::Underline => "underline",
            Attribute::Blink => "blink",
            Attribute::Negative => "negative",
        }
    }

    /// Look an attribute up by its descriptor name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.name() == name)
    }

    /// SGR code for this attribute
    pub const fn code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Faint => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::Blink => 5,
            Attribute::Negative => 7,
        }
    }
}

/// A parsed `foreground|background|attribute` request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleDescriptor {
    /// Foreground color
    pub foreground: Option<Color>,
    /// Background color
    pub background: Option<Color>,
    /// Text attribute
    pub attribute: Option<Attribute>,
}

impl StyleDescriptor {
    /// Descriptor that resolves to no codes at all
    pub const NONE: StyleDescriptor = StyleDescriptor::new(None, None, None);

    /// Build a descriptor from its parts
    pub const fn new(
        foreground: Option<Color>,
        background: Option<Color>,
        attribute: Option<Attribute>,
    ) -> Self {
        Self {
            foreground,
            background,
            attribute,
        }
    }

    /// Foreground-only descriptor
    pub const fn fg(color: Color) -> Self {
        Self::new(Some(color), None, None)
    }

    /// Parse the descriptor syntax.
    ///
    /// Missing segments and `none` mean "no code"; unknown names are
    /// ignored and segments past the third are dropped.
    pub fn parse(descriptor: &str) -> Self {
        let mut segments = descriptor.split('|');
        let foreground = segments.next().and_then(Color::from_name);
        let background = segments.next().and_then(Color::from_name);
        let attribute = segments.next().and_then(Attribute::from_name);
        Self::new(foreground, background, attribute)
    }

    /// Names in `descriptor` that are neither `none`, empty, nor in the tables
    pub fn unknown_names(descriptor: &str) -> Vec<String> {
        descriptor
            .split('|')
            .enumerate()
            .filter(|(index, name)| {
                let known = match index {
                    0 | 1 => Color::from_name(name).is_some(),
                    2 => Attribute::from_name(name).is_some(),
                    _ => false,
                };
                !known && !name.is_empty() && *name != "none"
            })
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// SGR parameters in emission order: background, attribute, foreground
    pub fn sgr_params(&self) -> Vec<u8> {
        [
            self.background.map(Color::bg_code),
            self.attribute.map(Attribute::code),
            self.foreground.map(Color::fg_code),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Whether no component is set
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Opening SGR sequence, e.g. `ESC[1;31m`
    pub fn opening_sequence(&self) -> String {
        let params = self
            .sgr_params()
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(";");
        format!("{ESC}[{params}m")
    }

    /// Wrap `text` in this style followed by a full reset
    pub fn apply(&self, text: &str) -> String {
        let mut out = self.opening_sequence();
        out.push_str(text);
        out.push_str(RESET);
        out
    }
}

impl From<&str> for StyleDescriptor {
    fn from(descriptor: &str) -> Self {
        Self::parse(descriptor)
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.foreground.map_or("none", Color::name),
            self.background.map_or("none", Color::name),
            self.attribute.map_or("none", Attribute::name),
        )
    }
}

/// Style `text` according to a descriptor string.
///
/// An absent or empty descriptor returns `text` untouched. Any other
/// descriptor wraps it, even one that resolves to no codes (`ESC[m`).
pub fn resolve(text: &str, descriptor: Option<&str>) -> String {
    match descriptor {
        None | Some("") => text.to_string(),
        Some(descriptor) => StyleDescriptor::parse(descriptor).apply(text),
    }
}
