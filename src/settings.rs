use std::path::Path;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::abacus::PlaceValueMode;
use crate::error::Result;
use crate::paint::PaintOptions;
use crate::theme::ThemeName;

pub const MIN_RODS: usize = 1;
pub const MAX_RODS: usize = 25;
pub const MIN_FONT_SIZE: f32 = 12.0;
pub const MAX_FONT_SIZE: f32 = 48.0;

/// File looked up in the working directory on native builds.
pub const SETTINGS_FILE: &str = "soroban.json";

#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbacusSettings {
    pub rod_count: usize,
    pub decimal_mode: bool,
    /// Units rod in decimal mode.
    pub pivot: usize,
    pub theme: ThemeName,
    pub font_size: f32,
    pub show_total: bool,
    pub show_rod_values: bool,
}

impl Default for AbacusSettings {
    fn default() -> Self {
        Self {
            rod_count: 13,
            decimal_mode: false,
            pivot: 6,
            theme: ThemeName::Classic,
            font_size: 24.0,
            show_total: true,
            show_rod_values: true,
        }
    }
}

impl AbacusSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Reads `path`, falling back to defaults when it is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => return Self::default(),
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring settings file");
                Self::default()
            }
        }
    }

    /// Pulls every field back into the range the UI offers.
    pub fn sanitized(mut self) -> Self {
        self.rod_count = self.rod_count.clamp(MIN_RODS, MAX_RODS);
        if self.pivot >= self.rod_count {
            self.pivot = self.rod_count / 2;
        }
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self
    }

    pub fn place_value_mode(&self) -> PlaceValueMode {
        if self.decimal_mode {
            PlaceValueMode::Decimal { pivot: self.pivot }
        } else {
            PlaceValueMode::Standard
        }
    }

    pub fn paint_options(&self) -> PaintOptions {
        PaintOptions {
            font_size: self.font_size,
            show_total: self.show_total,
            show_rod_values: self.show_rod_values,
            hover: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = AbacusSettings::from_json(r#"{ "rod_count": 5, "theme": "Jade" }"#).unwrap();
        assert_eq!(settings.rod_count, 5);
        assert_eq!(settings.theme, ThemeName::Jade);
        assert_eq!(settings.font_size, 24.0);
        assert!(settings.show_total);
    }

    #[test]
    fn out_of_range_values_are_pulled_in() {
        let settings =
            AbacusSettings::from_json(r#"{ "rod_count": 0, "pivot": 9, "font_size": 100 }"#).unwrap();
        assert_eq!(settings.rod_count, 1);
        assert_eq!(settings.pivot, 0);
        assert_eq!(settings.font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AbacusSettings::from_json("{ rod_count: ").is_err());
        assert!(AbacusSettings::from_json(r#"{ "theme": "Neon" }"#).is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let settings = AbacusSettings::load("definitely/not/here/soroban.json");
        assert_eq!(settings, AbacusSettings::default());
    }

    #[test]
    fn decimal_mode_carries_pivot() {
        let settings = AbacusSettings {
            decimal_mode: true,
            pivot: 4,
            ..AbacusSettings::default()
        };
        assert_eq!(settings.place_value_mode(), PlaceValueMode::Decimal { pivot: 4 });
        assert_eq!(AbacusSettings::default().place_value_mode(), PlaceValueMode::Standard);
    }
}
