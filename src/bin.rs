// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright © 2023 Adrian <adrian.eddy at gmail>

use texture_presenter::*;
use std::cell::Cell;
use std::io::Write;

struct InMemoryHost {
    size: Size,
    transform: Transform,
}

impl RenderingHost for InMemoryHost {
    type Texture = u64;
    fn view_size(&self) -> Size { self.size }
    fn transform(&self) -> Transform { self.transform }
    fn set_transform(&mut self, transform: Transform) { self.transform = transform; }
    fn invalidate(&mut self) { println!("  redraw requested"); }
}

#[derive(Default)]
struct PrintingController {
    surface: Cell<Option<u64>>,
}

impl PlaybackController<u64> for PrintingController {
    fn update_video_surface(&self, surface: Option<&Surface<u64>>) {
        let id = surface.map(|s| *s.texture());
        println!("controller: video surface -> {id:?}");
        self.surface.set(id);
    }
}

fn main() {
    let _ = simple_log::new(simple_log::LogConfig::default());

    let controller = PrintingController::default();
    let host = InMemoryHost { size: Size::new(1000, 500), transform: Transform::identity() };
    let mut view = TextureView::new(host, &controller);

    let events = HostEventQueue::new();
    events.post(HostEvent::SurfaceTextureAvailable { texture: 42, width: 1000, height: 500 });
    events.post(HostEvent::AttachedToWindow);
    view_dispatch(&events, &mut view);

    let video = Size::new(400, 400);
    for mode in [ResizeMode::Contain, ResizeMode::Cover, ResizeMode::Stretch] {
        let changed = view.apply_resize_mode(video, mode);
        let content = view.host().transform.map_rect(Rect { left: 0.0, top: 0.0, right: 1000.0, bottom: 500.0 });
        println!("{mode:?}: changed={changed} content={content:?}");
    }

    let release = events.post_surface_destroyed();
    events.post(HostEvent::DetachedFromWindow);
    view_dispatch(&events, &mut view);
    println!("host may release texture: {}", release.wait());

    println!("attached={} surface={:?} controller={:?}", view.is_attached(), view.surface().map(|s| *s.texture()), controller.surface.get());
    std::io::stdout().flush().unwrap();
}

fn view_dispatch<L>(events: &HostEventQueue<u64>, view: &mut L)
where
    L: SurfaceTextureListener<Texture = u64> + WindowAttachListener,
{
    let count = events.dispatch(view);
    println!("dispatched {count} host events");
}
