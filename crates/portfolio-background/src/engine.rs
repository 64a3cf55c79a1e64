//! The per-tick glyph rain algorithm

use crate::columns::ColumnTrails;
use crate::config::RainConfig;
use crate::paint::GlyphPainter;
use crate::rng::RandomSource;
use crate::surface::Surface;

/// Glyph rain renderer
///
/// Owns the per-column trail state and advances it one step per tick,
/// issuing draw calls through a [`GlyphPainter`]. The column grid is sized
/// once from the surface width at construction and kept for the session;
/// the surface itself stays owned by the surface manager.
pub struct RainEngine {
    config: RainConfig,
    glyphs: Vec<char>,
    trails: ColumnTrails,
}

impl RainEngine {
    /// Create a renderer for a surface of the given width
    pub fn new(config: RainConfig, surface_width: u32) -> Self {
        let glyphs: Vec<char> = if config.glyphs.is_empty() {
            RainConfig::default().glyphs.chars().collect()
        } else {
            config.glyphs.chars().collect()
        };
        let trails = ColumnTrails::for_width(surface_width, config.cell_size);
        Self {
            config,
            glyphs,
            trails,
        }
    }

    /// Rendering constants this engine was built with
    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    /// Current per-column trail offsets
    pub fn trails(&self) -> &ColumnTrails {
        &self.trails
    }

    /// Number of glyph columns
    pub fn column_count(&self) -> usize {
        self.trails.len()
    }

    /// Advance and draw one frame of the rain
    ///
    /// Dims the whole surface, then for each column draws one random glyph
    /// at the trail position, rolls the restart trial once the trail has
    /// left the bottom edge, and moves the trail down one row. The restart
    /// roll happens only for eligible columns, so the number of random
    /// draws per tick depends on trail positions.
    pub fn tick<P, R>(&mut self, surface: &Surface, painter: &mut P, rng: &mut R)
    where
        P: GlyphPainter,
        R: RandomSource,
    {
        let cell = self.config.cell_size;

        painter.fade(surface.width(), surface.height(), self.config.fade_alpha);
        painter.begin_glyphs(cell, self.config.glyph_alpha);

        for index in 0..self.trails.len() {
            let glyph = self.pick_glyph(rng);
            let offset = self.trails.offset(index);
            painter.glyph(glyph, index as u32 * cell, offset * cell);

            if offset * cell > surface.height()
                && rng.next_f64() > 1.0 - self.config.reset_probability
            {
                self.trails.restart(index);
            }
            self.trails.advance(index);
        }
    }

    fn pick_glyph<R: RandomSource>(&self, rng: &mut R) -> char {
        let index = (rng.next_f64() * self.glyphs.len() as f64) as usize;
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }
}
