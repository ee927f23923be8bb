//! Contract between the engine and the host's display layer.

use mandelgrid_core::PixelRect;

/// The only two operations the engine requires from a display surface.
/// The host decides what "backing store" and "visible surface" mean.
pub trait DisplaySurface {
    /// Copy `rect` out of an RGBA pixel buffer with the given row stride
    /// (in pixels) onto the backing store.
    fn put_region(&mut self, buffer: &[u8], rect: PixelRect, stride: u32);

    /// Blit the backing store onto the visible surface, scaling from the
    /// grid's dimensions to the view's.
    fn present_scaled(&mut self, source_w: u32, source_h: u32, dest_w: u32, dest_h: u32);
}

/// Discards everything - for headless computation.
#[derive(Clone, Copy, Default)]
pub struct NullSurface;

impl DisplaySurface for NullSurface {
    fn put_region(&mut self, _buffer: &[u8], _rect: PixelRect, _stride: u32) {}

    fn present_scaled(&mut self, _source_w: u32, _source_h: u32, _dest_w: u32, _dest_h: u32) {}
}
