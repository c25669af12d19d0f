// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright © 2023 Adrian <adrian.eddy at gmail>

use std::{
    collections::VecDeque,
    fmt,
    sync::Arc,
    time::Duration,
};
use parking_lot::{Condvar, Mutex};

use crate::surface::{SurfaceTextureListener, WindowAttachListener};

/// One-shot answer to a destroyed texture: whether the host may release it now.
///
/// The posting thread keeps a clone and waits on it; delivery fills it in once the
/// listener has detached the decoder output.
#[derive(Clone, Default)]
pub struct ReleaseReply {
    inner: Arc<(Mutex<Option<bool>>, Condvar)>,
}

impl ReleaseReply {
    pub fn new() -> Self { Self::default() }

    pub(crate) fn send(&self, may_release: bool) {
        let (answer, ready) = &*self.inner;
        *answer.lock() = Some(may_release);
        ready.notify_all();
    }

    /// The answer if it has been delivered already.
    pub fn try_get(&self) -> Option<bool> {
        *self.inner.0.lock()
    }

    /// Block until the destroy event has been delivered.
    pub fn wait(&self) -> bool {
        let (answer, ready) = &*self.inner;
        let mut answer = answer.lock();
        loop {
            if let Some(may_release) = *answer {
                return may_release;
            }
            ready.wait(&mut answer);
        }
    }

    /// Like [`ReleaseReply::wait`], giving up after `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<bool> {
        let (answer, ready) = &*self.inner;
        let mut answer = answer.lock();
        if answer.is_none() {
            ready.wait_while_for(&mut answer, |a| a.is_none(), timeout);
        }
        *answer
    }
}

impl fmt::Debug for ReleaseReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseReply")
            .field("answer", &self.try_get())
            .finish()
    }
}

impl PartialEq for ReleaseReply {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
impl Eq for ReleaseReply {}

/// A host callback captured for later delivery on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent<T> {
    SurfaceTextureAvailable { texture: T, width: u32, height: u32 },
    SurfaceTextureSizeChanged { width: u32, height: u32 },
    SurfaceTextureUpdated,
    /// The host must not free the texture before `reply` (if any) is answered.
    SurfaceTextureDestroyed { reply: Option<ReleaseReply> },
    AttachedToWindow,
    DetachedFromWindow,
}

impl<T> HostEvent<T> {
    /// Deliver this event to `listener`.
    ///
    /// Returns the listener's answer for `SurfaceTextureDestroyed`, `None` otherwise.
    /// The answer is also sent to the event's reply, if it carries one.
    pub fn deliver<L>(self, listener: &mut L) -> Option<bool>
    where
        L: SurfaceTextureListener<Texture = T> + WindowAttachListener + ?Sized,
    {
        match self {
            Self::SurfaceTextureAvailable { texture, width, height } => listener.on_surface_texture_available(texture, width, height),
            Self::SurfaceTextureSizeChanged { width, height } => listener.on_surface_texture_size_changed(width, height),
            Self::SurfaceTextureUpdated => listener.on_surface_texture_updated(),
            Self::SurfaceTextureDestroyed { reply } => {
                let may_release = listener.on_surface_texture_destroyed();
                if let Some(reply) = reply {
                    reply.send(may_release);
                }
                return Some(may_release);
            }
            Self::AttachedToWindow => listener.on_attached_to_window(),
            Self::DetachedFromWindow => listener.on_detached_from_window(),
        }
        None
    }
}

/// Queue the host posts its callbacks to from any thread.
///
/// Cloning gives another handle to the same queue. The UI thread drains it with
/// [`HostEventQueue::dispatch`].
pub struct HostEventQueue<T> {
    events: Arc<Mutex<VecDeque<HostEvent<T>>>>,
}

impl<T> Clone for HostEventQueue<T> {
    fn clone(&self) -> Self {
        Self { events: self.events.clone() }
    }
}

impl<T> Default for HostEventQueue<T> {
    fn default() -> Self { Self::new() }
}

impl<T> fmt::Debug for HostEventQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostEventQueue")
            .field("pending", &self.len())
            .finish()
    }
}

impl<T> HostEventQueue<T> {
    pub fn new() -> Self {
        Self { events: Arc::new(Mutex::new(VecDeque::new())) }
    }

    pub fn post(&self, event: HostEvent<T>) {
        self.events.lock().push_back(event);
    }

    /// Post a texture destruction and get the reply the host must wait on before
    /// releasing the texture.
    pub fn post_surface_destroyed(&self) -> ReleaseReply {
        let reply = ReleaseReply::new();
        self.post(HostEvent::SurfaceTextureDestroyed { reply: Some(reply.clone()) });
        reply
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Deliver every pending event to `listener` in posting order.
    ///
    /// The lock is not held while the listener runs; events posted meanwhile
    /// are left for the next dispatch. Returns the number of events delivered.
    pub fn dispatch<L>(&self, listener: &mut L) -> usize
    where
        L: SurfaceTextureListener<Texture = T> + WindowAttachListener + ?Sized,
    {
        let pending = std::mem::take(&mut *self.events.lock());
        let count = pending.len();
        for event in pending {
            event.deliver(listener);
        }
        if count > 0 {
            log::trace!("Dispatched {count} host events");
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl SurfaceTextureListener for Recorder {
        type Texture = &'static str;
        fn on_surface_texture_available(&mut self, texture: &'static str, width: u32, height: u32) {
            self.calls.push(format!("available {texture} {width}x{height}"));
        }
        fn on_surface_texture_size_changed(&mut self, width: u32, height: u32) {
            self.calls.push(format!("size {width}x{height}"));
        }
        fn on_surface_texture_updated(&mut self) { self.calls.push("updated".into()); }
        fn on_surface_texture_destroyed(&mut self) -> bool {
            self.calls.push("destroyed".into());
            true
        }
    }

    impl WindowAttachListener for Recorder {
        fn on_attached_to_window(&mut self) { self.calls.push("attached".into()); }
        fn on_detached_from_window(&mut self) { self.calls.push("detached".into()); }
    }

    #[test]
    fn test_dispatch_in_order() {
        let queue = HostEventQueue::new();
        queue.post(HostEvent::AttachedToWindow);
        queue.post(HostEvent::SurfaceTextureAvailable { texture: "tex", width: 640, height: 360 });
        queue.post(HostEvent::SurfaceTextureSizeChanged { width: 320, height: 180 });
        queue.post(HostEvent::SurfaceTextureUpdated);
        queue.post(HostEvent::SurfaceTextureDestroyed { reply: None });
        queue.post(HostEvent::DetachedFromWindow);
        assert_eq!(queue.len(), 6);

        let mut recorder = Recorder::default();
        assert_eq!(queue.dispatch(&mut recorder), 6);
        assert!(queue.is_empty());
        assert_eq!(recorder.calls, [
            "attached", "available tex 640x360", "size 320x180", "updated", "destroyed", "detached",
        ]);
        assert_eq!(queue.dispatch(&mut recorder), 0);
    }

    #[test]
    fn test_post_from_other_thread() {
        let queue = HostEventQueue::new();
        let poster = queue.clone();
        std::thread::spawn(move || {
            poster.post(HostEvent::SurfaceTextureAvailable { texture: "remote", width: 1, height: 1 });
            poster.post(HostEvent::AttachedToWindow);
        }).join().unwrap();

        let mut recorder = Recorder::default();
        assert_eq!(queue.dispatch(&mut recorder), 2);
        assert_eq!(recorder.calls, ["available remote 1x1", "attached"]);
    }

    #[test]
    fn test_deliver_reports_destroy_answer() {
        let mut recorder = Recorder::default();
        let reply = ReleaseReply::new();
        assert_eq!(reply.try_get(), None);
        let event = HostEvent::SurfaceTextureDestroyed { reply: Some(reply.clone()) };
        assert_eq!(event.deliver(&mut recorder), Some(true));
        assert_eq!(reply.try_get(), Some(true));
        assert!(reply.wait());
        assert_eq!(HostEvent::<&'static str>::SurfaceTextureUpdated.deliver(&mut recorder), None);
    }

    #[test]
    fn test_release_reply_times_out_without_dispatch() {
        let queue = HostEventQueue::<&'static str>::new();
        let reply = queue.post_surface_destroyed();
        assert_eq!(reply.wait_timeout(Duration::from_millis(10)), None);

        let mut recorder = Recorder::default();
        assert_eq!(queue.dispatch(&mut recorder), 1);
        assert_eq!(reply.wait_timeout(Duration::from_millis(10)), Some(true));
    }
}
