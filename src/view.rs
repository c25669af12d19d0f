// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright © 2023 Adrian <adrian.eddy at gmail>

use crate::types::*;
use crate::scale::scale_transform;
use crate::surface::*;

/// Presents a decoder output surface on a host texture view.
///
/// Owns the [`Surface`] wrapping the host texture and lends it to the playback
/// controller. The controller is told about every edge of the surface lifetime:
/// with `Some` once the texture exists and the view is attached, and with `None`
/// before the texture goes away.
///
/// All methods must be called from the UI thread.
pub struct TextureView<'c, H, C>
where
    H: RenderingHost,
    C: PlaybackController<H::Texture> + ?Sized,
{
    host: H,
    controller: &'c C,
    surface: Option<Surface<H::Texture>>,
    attached: bool,
    options: PresenterOptions,
}

impl<'c, H, C> TextureView<'c, H, C>
where
    H: RenderingHost,
    C: PlaybackController<H::Texture> + ?Sized,
{
    pub fn new(host: H, controller: &'c C) -> Self {
        Self::with_options(host, controller, PresenterOptions::default())
    }

    pub fn with_options(host: H, controller: &'c C, options: PresenterOptions) -> Self {
        Self {
            host,
            controller,
            surface: None,
            attached: false,
            options: options.resolve(),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn surface(&self) -> Option<&Surface<H::Texture>> {
        self.surface.as_ref()
    }

    pub fn host(&self) -> &H { &self.host }
    pub fn host_mut(&mut self) -> &mut H { &mut self.host }

    pub fn options(&self) -> &PresenterOptions { &self.options }

    /// Scale the video frame into the view according to `scale_type`.
    ///
    /// Returns true if a new transform was applied and a redraw requested.
    /// Zero-sized videos, zero-sized views and unchanged transforms are no-ops.
    pub fn apply_scale<S: Into<Size>>(&mut self, video_size: S, scale_type: ScaleType) -> bool {
        let video_size = video_size.into();
        if video_size.is_empty() {
            return false;
        }

        let view_size = self.host.view_size();
        let Some(transform) = scale_transform(view_size, video_size, scale_type) else {
            return false;
        };
        if transform == self.host.transform() {
            return false;
        }

        log::trace!("Applying {} transform for {video_size:?} in {view_size:?}: {transform:?}", scale_type.name());
        self.host.set_transform(transform);
        self.host.invalidate();
        true
    }

    pub fn apply_resize_mode<S: Into<Size>>(&mut self, video_size: S, mode: ResizeMode) -> bool {
        self.apply_scale(video_size, mode.scale_type())
    }

    /// Scale with the scale type from this view's options.
    pub fn apply_default_scale<S: Into<Size>>(&mut self, video_size: S) -> bool {
        let scale_type = self.options.scale_type;
        self.apply_scale(video_size, scale_type)
    }
}

impl<'c, H, C> SurfaceTextureListener for TextureView<'c, H, C>
where
    H: RenderingHost,
    C: PlaybackController<H::Texture> + ?Sized,
{
    type Texture = H::Texture;

    fn on_surface_texture_available(&mut self, texture: H::Texture, width: u32, height: u32) {
        log::debug!("Surface texture available: {width}x{height}");
        let surface = self.surface.insert(Surface::new(texture, Size::new(width, height)));
        self.controller.update_video_surface(Some(&*surface));
    }

    // Scale is driven by explicit `apply_scale` calls, so the controller can
    // batch it with its own video size updates.
    fn on_surface_texture_size_changed(&mut self, _width: u32, _height: u32) { }

    fn on_surface_texture_updated(&mut self) { }

    fn on_surface_texture_destroyed(&mut self) -> bool {
        log::debug!("Surface texture destroyed");
        // Detach the decoder before the texture goes away.
        self.controller.update_video_surface(None);
        self.surface = None;
        true
    }
}

impl<'c, H, C> WindowAttachListener for TextureView<'c, H, C>
where
    H: RenderingHost,
    C: PlaybackController<H::Texture> + ?Sized,
{
    fn on_attached_to_window(&mut self) {
        log::debug!("Attached to window, surface present: {}", self.surface.is_some());
        self.attached = true;
        self.controller.update_video_surface(self.surface.as_ref());
    }

    fn on_detached_from_window(&mut self) {
        log::debug!("Detached from window");
        self.attached = false;
    }
}

impl<'c, H, C> Drop for TextureView<'c, H, C>
where
    H: RenderingHost,
    C: PlaybackController<H::Texture> + ?Sized,
{
    fn drop(&mut self) {
        if self.surface.is_some() {
            log::debug!("Dropping texture view with a live surface, detaching it");
            self.controller.update_video_surface(None);
            self.surface = None;
        }
    }
}
