// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright © 2023 Adrian <adrian.eddy at gmail>

use std::fmt;

use crate::types::Size;
use crate::transform::Transform;

/// Renderable target wrapping a texture owned by the rendering host.
///
/// The presenter only wraps what the host hands over, it never allocates the
/// underlying texture. Decoders render into it through [`Surface::texture`].
pub struct Surface<T> {
    texture: T,
    size: Size,
}

impl<T> Surface<T> {
    pub(crate) fn new(texture: T, size: Size) -> Self {
        Self { texture, size }
    }

    pub fn texture(&self) -> &T { &self.texture }

    /// Size of the texture buffer when it was created.
    pub fn size(&self) -> Size { self.size }
}

impl<T: fmt::Debug> fmt::Debug for Surface<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("texture", &self.texture)
            .field("size", &self.size)
            .finish()
    }
}

/// The view system the presenter is embedded in.
pub trait RenderingHost {
    type Texture;

    /// Current on-screen size of the view in pixels.
    fn view_size(&self) -> Size;
    fn transform(&self) -> Transform;
    fn set_transform(&mut self, transform: Transform);
    /// Schedule a redraw. Not awaited.
    fn invalidate(&mut self);
}

/// Owner of playback, which attaches the decoder output to the surface.
pub trait PlaybackController<T> {
    /// `None` means the previous surface is about to become invalid and must be detached.
    fn update_video_surface(&self, surface: Option<&Surface<T>>);
}

/// Texture lifecycle callbacks delivered by the host on the UI thread.
pub trait SurfaceTextureListener {
    type Texture;

    fn on_surface_texture_available(&mut self, texture: Self::Texture, width: u32, height: u32);
    fn on_surface_texture_size_changed(&mut self, width: u32, height: u32);
    fn on_surface_texture_updated(&mut self);
    /// Returns true when the host may release the texture right away.
    fn on_surface_texture_destroyed(&mut self) -> bool;
}

/// View tree attach/detach callbacks delivered by the host.
pub trait WindowAttachListener {
    fn on_attached_to_window(&mut self);
    fn on_detached_from_window(&mut self);
}
