//! Draw-call seam between the rain engine and a raster target

/// Draw calls one tick of the rain effect issues against a surface
///
/// The engine is pure state; everything it wants drawn goes through this
/// trait. The browser implementation forwards to a 2d canvas context, tests
/// record the calls instead.
pub trait GlyphPainter {
    /// Paint a translucent black rectangle over the whole surface
    ///
    /// Prior glyphs are dimmed, never erased; each tick compounds the
    /// dimming, which is what produces the fading trails.
    fn fade(&mut self, width: u32, height: u32, alpha: f32);

    /// Set the glyph paint state for this tick: white at `alpha`, monospace at `cell_size`
    fn begin_glyphs(&mut self, cell_size: u32, alpha: f32);

    /// Draw one glyph at the given pixel position
    fn glyph(&mut self, glyph: char, x: u32, y: u32);
}
