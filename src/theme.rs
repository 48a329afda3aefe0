//! Colour palettes. A [`Theme`] is a plain value handed to the painter;
//! switching themes means passing a different value, nothing global changes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS colour, e.g. `#d4550080`.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgba,
    pub frame: Rgba,
    pub bar: Rgba,
    pub rod: Rgba,
    pub bead: Rgba,
    pub bead_active: Rgba,
    pub bead_stroke: Rgba,
    pub bead_hover: Rgba,
    pub text: Rgba,
    pub rod_label: Rgba,
    pub decimal_marker: Rgba,
}

impl Theme {
    /// Palette with the common parts filled in; frame and bar share a colour.
    const fn base(background: Rgba, frame: Rgba, rod: Rgba, bead: Rgba, bead_active: Rgba) -> Self {
        Self {
            background,
            frame,
            bar: frame,
            rod,
            bead,
            bead_active,
            bead_stroke: Rgba::BLACK,
            bead_hover: Rgba::rgb(255, 224, 130),
            text: Rgba::BLACK,
            rod_label: Rgba::rgb(0x7a, 0x00, 0x26),
            decimal_marker: Rgba::RED,
        }
    }

    const fn dark_text(mut self) -> Self {
        self.text = Rgba::rgb(0xea, 0xea, 0xea);
        self.rod_label = Rgba::rgb(0xff, 0xb3, 0x47);
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeName::default().palette()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeName {
    #[default]
    Classic,
    Dark,
    Light,
    Wood,
    ClassicWood,
    BlueSteel,
    Jade,
    Crimson,
    Solarized,
    Midnight,
    Ivory,
    HighContrast,
    Retro,
}

impl ThemeName {
    pub const ALL: [ThemeName; 13] = [
        ThemeName::Classic,
        ThemeName::Dark,
        ThemeName::Light,
        ThemeName::Wood,
        ThemeName::ClassicWood,
        ThemeName::BlueSteel,
        ThemeName::Jade,
        ThemeName::Crimson,
        ThemeName::Solarized,
        ThemeName::Midnight,
        ThemeName::Ivory,
        ThemeName::HighContrast,
        ThemeName::Retro,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThemeName::Classic => "Classic",
            ThemeName::Dark => "Dark",
            ThemeName::Light => "Light",
            ThemeName::Wood => "Wood",
            ThemeName::ClassicWood => "Classic Wood",
            ThemeName::BlueSteel => "Blue Steel",
            ThemeName::Jade => "Jade",
            ThemeName::Crimson => "Crimson",
            ThemeName::Solarized => "Solarized",
            ThemeName::Midnight => "Midnight",
            ThemeName::Ivory => "Ivory",
            ThemeName::HighContrast => "High Contrast",
            ThemeName::Retro => "Retro",
        }
    }

    pub fn palette(self) -> Theme {
        match self {
            ThemeName::Classic => Theme::base(
                Rgba::WHITE,
                Rgba::BLACK,
                Rgba::rgba(212, 85, 0, 128),
                Rgba::rgb(255, 255, 240),
                Rgba::rgb(160, 82, 45),
            ),
            ThemeName::Dark => Theme::base(
                Rgba::rgb(0x1e, 0x1e, 0x1e),
                Rgba::rgb(0xea, 0xea, 0xea),
                Rgba::rgb(0x99, 0x99, 0x99),
                Rgba::rgb(0x44, 0x44, 0x44),
                Rgba::rgb(0xff, 0x9f, 0x43),
            )
            .dark_text(),
            ThemeName::Light => Theme::base(
                Rgba::rgb(0xfd, 0xfd, 0xfd),
                Rgba::rgb(0x33, 0x33, 0x33),
                Rgba::rgb(0x77, 0x77, 0x77),
                Rgba::rgb(0xfa, 0xfa, 0xfa),
                Rgba::rgb(0xff, 0x6b, 0x6b),
            ),
            ThemeName::Wood => Theme::base(
                Rgba::rgb(0xf5, 0xe6, 0xcc),
                Rgba::rgb(0x3b, 0x1f, 0x00),
                Rgba::rgb(0xdd, 0x8d, 0x1d),
                Rgba::rgb(0xe8, 0xc8, 0x9b),
                Rgba::rgb(0x7a, 0x3b, 0x00),
            ),
            ThemeName::ClassicWood => Theme::base(
                Rgba::rgb(245, 235, 220),
                Rgba::rgb(139, 69, 19),
                Rgba::rgb(139, 69, 19),
                Rgba::rgb(255, 228, 196),
                Rgba::rgb(160, 82, 45),
            ),
            ThemeName::BlueSteel => Theme::base(
                Rgba::rgb(245, 245, 245),
                Rgba::rgb(0, 0, 128),
                Rgba::rgb(0, 0, 128),
                Rgba::rgb(176, 196, 222),
                Rgba::rgb(255, 215, 0),
            ),
            ThemeName::Jade => Theme::base(
                Rgba::rgb(240, 255, 240),
                Rgba::rgb(0, 100, 0),
                Rgba::rgb(0, 100, 0),
                Rgba::rgb(152, 251, 152),
                Rgba::rgb(34, 139, 34),
            ),
            ThemeName::Crimson => Theme::base(
                Rgba::rgb(255, 228, 225),
                Rgba::rgb(139, 0, 0),
                Rgba::rgb(139, 0, 0),
                Rgba::rgb(240, 128, 128),
                Rgba::rgb(178, 34, 34),
            ),
            ThemeName::Solarized => Theme::base(
                Rgba::rgb(245, 245, 220),
                Rgba::rgb(165, 42, 42),
                Rgba::rgb(139, 69, 19),
                Rgba::rgb(240, 230, 140),
                Rgba::rgb(255, 69, 0),
            ),
            ThemeName::Midnight => Theme::base(
                Rgba::rgb(15, 15, 30),
                Rgba::rgb(106, 90, 205),
                Rgba::rgb(106, 90, 205),
                Rgba::rgb(70, 130, 180),
                Rgba::rgb(0, 255, 255),
            )
            .dark_text(),
            ThemeName::Ivory => Theme::base(
                Rgba::rgb(255, 255, 240),
                Rgba::rgb(160, 82, 45),
                Rgba::rgb(160, 82, 45),
                Rgba::rgb(255, 228, 196),
                Rgba::rgb(205, 133, 63),
            ),
            ThemeName::HighContrast => Theme::base(
                Rgba::WHITE,
                Rgba::BLACK,
                Rgba::BLACK,
                Rgba::WHITE,
                Rgba::RED,
            ),
            ThemeName::Retro => Theme::base(
                Rgba::rgb(255, 255, 224),
                Rgba::rgb(128, 0, 0),
                Rgba::rgb(128, 0, 0),
                Rgba::rgb(210, 180, 140),
                Rgba::rgb(255, 140, 0),
            ),
        }
    }
}
