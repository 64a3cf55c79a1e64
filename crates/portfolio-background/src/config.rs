//! Rendering constants for the glyph rain

use serde::{Deserialize, Serialize};

/// Per-session rendering constants
///
/// The config is fixed for the lifetime of a renderer; changing any value
/// means constructing a new [`crate::RainEngine`]. `Default` carries the
/// reference look of the effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Alphabet the falling glyphs are drawn from
    pub glyphs: String,
    /// Width of one glyph column and height of one fall step, in pixels
    pub cell_size: u32,
    /// Opacity of the black rectangle painted over the surface each tick
    pub fade_alpha: f32,
    /// Opacity of the white glyphs
    pub glyph_alpha: f32,
    /// Fixed tick period of the redraw timer
    pub tick_interval_ms: u32,
    /// Chance per tick that a column past the bottom edge restarts from the top
    pub reset_probability: f64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            glyphs: "01".to_string(),
            cell_size: 14,
            fade_alpha: 0.05,
            glyph_alpha: 0.15,
            tick_interval_ms: 33,
            reset_probability: 0.025,
        }
    }
}

impl RainConfig {
    /// Number of glyph columns that fit a surface of the given width
    pub fn column_count(&self, surface_width: u32) -> u32 {
        if self.cell_size == 0 {
            return 0;
        }
        surface_width / self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RainConfig::default();
        assert_eq!(config.glyphs, "01");
        assert_eq!(config.cell_size, 14);
        assert!((config.fade_alpha - 0.05).abs() < 0.001);
        assert!((config.glyph_alpha - 0.15).abs() < 0.001);
        assert_eq!(config.tick_interval_ms, 33);
        assert!((config.reset_probability - 0.025).abs() < 1e-9);
    }

    #[test]
    fn test_column_count_floors() {
        let config = RainConfig::default();
        assert_eq!(config.column_count(140), 10);
        assert_eq!(config.column_count(139), 9);
        assert_eq!(config.column_count(13), 0);
        assert_eq!(config.column_count(0), 0);
    }

    #[test]
    fn test_column_count_zero_cell_size() {
        let config = RainConfig {
            cell_size: 0,
            ..Default::default()
        };
        assert_eq!(config.column_count(1920), 0);
    }

    #[test]
    fn test_config_serialize_deserialize() {
        let config = RainConfig::default();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: RainConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: RainConfig = serde_json::from_str(r#"{"cell_size": 20}"#).unwrap();
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.glyphs, "01");
        assert_eq!(config.tick_interval_ms, 33);
    }
}
