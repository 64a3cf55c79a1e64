//! Viewport-sized drawing surface

/// Pixel dimensions of the full-viewport drawing surface
///
/// The surface manager owns this object for the lifetime of the background
/// component and mutates it in place when the viewport changes; the renderer
/// only reads the dimensions. Reassigning canvas dimensions clears the raster
/// content on the host side, which the trail-fade technique tolerates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
}

impl Surface {
    /// Attach a surface with the current viewport dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Surface width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Apply new viewport dimensions to the existing surface
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Check whether the surface has no drawable area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
