use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use log::debug;

pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Schedules a one-shot callback for the next display frame.
pub trait FrameScheduler: 'static {
    type Handle: 'static;

    fn schedule(&self, callback: FrameCallback) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// `requestAnimationFrame` backed scheduler. Dropping the handle cancels the frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
    type Handle = AnimationFrame;

    fn schedule(&self, callback: FrameCallback) -> AnimationFrame {
        request_animation_frame(callback)
    }

    fn cancel(&self, handle: AnimationFrame) {
        drop(handle);
    }
}

struct Inner<S: FrameScheduler> {
    scheduler: S,
    on_frame: Box<dyn Fn(f64)>,
    running: Cell<bool>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: FrameScheduler> Inner<S> {
    fn schedule_next(this: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(this);
        let handle = this.scheduler.schedule(Box::new(move |timestamp| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.running.get() {
                return;
            }
            // this frame's handle is spent
            drop(inner.pending.borrow_mut().take());
            (inner.on_frame)(timestamp);
            if inner.running.get() {
                Inner::schedule_next(&inner);
            }
        }));
        *this.pending.borrow_mut() = Some(handle);
    }
}

/// Invokes `on_frame` once per display frame until stopped or dropped.
///
/// At most one frame is pending at any time. Stopping cancels it, and a
/// callback that still fires afterwards (or after the loop is dropped) does
/// nothing.
pub struct FrameLoop<S: FrameScheduler> {
    inner: Rc<Inner<S>>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn start(scheduler: S, on_frame: impl Fn(f64) + 'static) -> Self {
        let inner = Rc::new(Inner {
            scheduler,
            on_frame: Box::new(on_frame),
            running: Cell::new(true),
            pending: RefCell::new(None),
        });
        Inner::schedule_next(&inner);
        debug!("frame loop started");
        FrameLoop { inner }
    }

    pub fn stop(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        let pending = self.inner.pending.borrow_mut().take();
        if let Some(handle) = pending {
            self.inner.scheduler.cancel(handle);
        }
        debug!("frame loop stopped");
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frames only fire when the test calls `tick`.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        queue: Rc<RefCell<Vec<(usize, FrameCallback)>>>,
        next_id: Rc<Cell<usize>>,
        ignore_cancel: bool,
    }

    impl ManualScheduler {
        fn ignoring_cancel() -> Self {
            ManualScheduler { ignore_cancel: true, ..Default::default() }
        }

        fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        fn tick(&self, timestamp: f64) {
            let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for (_, callback) in due {
                callback(timestamp);
            }
        }
    }

    impl FrameScheduler for ManualScheduler {
        type Handle = usize;

        fn schedule(&self, callback: FrameCallback) -> usize {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            id
        }

        fn cancel(&self, handle: usize) {
            if !self.ignore_cancel {
                self.queue.borrow_mut().retain(|(id, _)| *id != handle);
            }
        }
    }

    fn counting(scheduler: &ManualScheduler) -> (FrameLoop<ManualScheduler>, Rc<Cell<u32>>) {
        let frames = Rc::new(Cell::new(0));
        let counter = frames.clone();
        let frame_loop = FrameLoop::start(scheduler.clone(), move |_| counter.set(counter.get() + 1));
        (frame_loop, frames)
    }

    #[test]
    fn start_requests_one_frame() {
        let scheduler = ManualScheduler::default();
        let (frame_loop, frames) = counting(&scheduler);
        assert!(frame_loop.inner.running.get());
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(frames.get(), 0);
    }

    #[test]
    fn every_frame_requests_the_next() {
        let scheduler = ManualScheduler::default();
        let (_frame_loop, frames) = counting(&scheduler);
        for n in 1..=3 {
            scheduler.tick(n as f64 * 16.0);
            assert_eq!(frames.get(), n);
            assert_eq!(scheduler.pending(), 1);
        }
    }

    #[test]
    fn stop_cancels_the_pending_frame() {
        let scheduler = ManualScheduler::default();
        let (frame_loop, frames) = counting(&scheduler);
        scheduler.tick(16.0);
        frame_loop.stop();
        assert!(!frame_loop.inner.running.get());
        assert_eq!(scheduler.pending(), 0);
        scheduler.tick(32.0);
        assert_eq!(frames.get(), 1);
    }

    #[test]
    fn drop_releases_the_scheduled_callback() {
        let scheduler = ManualScheduler::default();
        let (frame_loop, frames) = counting(&scheduler);
        drop(frame_loop);
        assert_eq!(scheduler.pending(), 0);
        scheduler.tick(16.0);
        assert_eq!(frames.get(), 0);
    }

    #[test]
    fn late_callback_after_drop_does_nothing() {
        let scheduler = ManualScheduler::ignoring_cancel();
        let (frame_loop, frames) = counting(&scheduler);
        drop(frame_loop);
        assert_eq!(scheduler.pending(), 1);
        scheduler.tick(16.0);
        assert_eq!(frames.get(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn stop_from_inside_a_frame_does_not_reschedule() {
        let scheduler = ManualScheduler::default();
        let slot: Rc<RefCell<Option<FrameLoop<ManualScheduler>>>> = Rc::new(RefCell::new(None));
        let frames = Rc::new(Cell::new(0));
        let frame_loop = {
            let slot = slot.clone();
            let frames = frames.clone();
            FrameLoop::start(scheduler.clone(), move |_| {
                frames.set(frames.get() + 1);
                if let Some(frame_loop) = slot.borrow().as_ref() {
                    frame_loop.stop();
                }
            })
        };
        *slot.borrow_mut() = Some(frame_loop);

        scheduler.tick(16.0);
        assert_eq!(frames.get(), 1);
        assert_eq!(scheduler.pending(), 0);
        scheduler.tick(32.0);
        assert_eq!(frames.get(), 1);

        // break the Rc cycle between the loop and its own callback
        slot.borrow_mut().take();
    }

    #[test]
    fn stop_is_idempotent() {
        let scheduler = ManualScheduler::default();
        let (frame_loop, _) = counting(&scheduler);
        frame_loop.stop();
        frame_loop.stop();
        assert_eq!(scheduler.pending(), 0);
    }
}
