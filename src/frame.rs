//! Animation-frame scheduling with "latest wins" coalescing.
//!
//! Scroll and resize events arrive far more often than the browser paints.
//! A [`Coalescer`] keeps at most one task queued per source: scheduling a new
//! one drops the unexecuted previous frame, which cancels it.

use std::cell::RefCell;
use std::rc::Rc;

/// Something that can run a one-shot task on the next frame.
///
/// The returned frame handle cancels the task when dropped, if it has not
/// run yet. Tasks receive the frame timestamp in milliseconds.
pub trait FrameScheduler {
    type Frame: 'static;

    fn request(&self, task: Box<dyn FnOnce(f64)>) -> Self::Frame;
}

/// `requestAnimationFrame` through `gloo-render`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    type Frame = gloo_render::AnimationFrame;

    fn request(&self, task: Box<dyn FnOnce(f64)>) -> Self::Frame {
        gloo_render::request_animation_frame(move |timestamp| task(timestamp))
    }
}

pub struct Coalescer<S: FrameScheduler> {
    scheduler: S,
    pending: Rc<RefCell<Option<S::Frame>>>,
}

impl<S: FrameScheduler + Clone> Clone for Coalescer<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<S: FrameScheduler + Default> Default for Coalescer<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: FrameScheduler> Coalescer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Queue `task` for the next frame, cancelling whatever this source had
    /// queued before.
    pub fn schedule(&self, task: impl FnOnce(f64) + 'static) {
        self.cancel();
        let pending = self.pending.clone();
        let frame = self.scheduler.request(Box::new(move |timestamp| {
            let spent = pending.borrow_mut().take();
            task(timestamp);
            drop(spent);
        }));
        *self.pending.borrow_mut() = Some(frame);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::FrameScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Task = Box<dyn FnOnce(f64)>;

    /// Frame queue driven by hand from tests.
    #[derive(Clone, Default)]
    pub struct ManualFrames {
        queue: Rc<RefCell<Vec<(u64, Option<Task>)>>>,
        next_id: Rc<RefCell<u64>>,
    }

    pub struct ManualFrame {
        id: u64,
        queue: Rc<RefCell<Vec<(u64, Option<Task>)>>>,
    }

    impl Drop for ManualFrame {
        fn drop(&mut self) {
            if let Ok(mut queue) = self.queue.try_borrow_mut() {
                queue.retain(|(id, _)| *id != self.id);
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        type Frame = ManualFrame;

        fn request(&self, task: Task) -> ManualFrame {
            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            self.queue.borrow_mut().push((id, Some(task)));
            ManualFrame {
                id,
                queue: self.queue.clone(),
            }
        }
    }

    impl ManualFrames {
        pub fn queued(&self) -> usize {
            self.queue.borrow().len()
        }

        /// Run every task queued before this call, as one painted frame.
        pub fn run_frame(&self, timestamp: f64) {
            let tasks: Vec<Task> = {
                let mut queue = self.queue.borrow_mut();
                queue.drain(..).filter_map(|(_, task)| task).collect()
            };
            for task in tasks {
                task(timestamp);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualFrames;
    use super::*;
    use std::cell::Cell;

    #[test]
    fn burst_runs_only_the_last_task() {
        let frames = ManualFrames::default();
        let coalescer = Coalescer::new(frames.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));

        for i in 0..5 {
            let seen = seen.clone();
            coalescer.schedule(move |_| seen.borrow_mut().push(i));
        }
        assert_eq!(frames.queued(), 1);
        assert!(coalescer.is_pending());

        frames.run_frame(16.0);
        assert_eq!(*seen.borrow(), vec![4]);
        assert!(!coalescer.is_pending());
    }

    #[test]
    fn cancel_prevents_execution() {
        let frames = ManualFrames::default();
        let coalescer = Coalescer::new(frames.clone());
        let ran = Rc::new(Cell::new(false));
        {
            let ran = ran.clone();
            coalescer.schedule(move |_| ran.set(true));
        }
        coalescer.cancel();
        frames.run_frame(16.0);
        assert!(!ran.get());
        assert_eq!(frames.queued(), 0);
    }

    #[test]
    fn task_can_reschedule_itself() {
        let frames = ManualFrames::default();
        let coalescer = Coalescer::new(frames.clone());
        let count = Rc::new(Cell::new(0));

        fn tick(coalescer: Coalescer<ManualFrames>, count: Rc<Cell<u32>>) {
            let next = coalescer.clone();
            coalescer.schedule(move |_| {
                count.set(count.get() + 1);
                if count.get() < 3 {
                    tick(next, count);
                }
            });
        }

        tick(coalescer.clone(), count.clone());
        for frame in 0..5 {
            frames.run_frame(frame as f64 * 16.0);
        }
        assert_eq!(count.get(), 3);
        assert!(!coalescer.is_pending());
    }

    /// Generic over the scheduler, the way components hold a coalescer.
    fn burst<S: FrameScheduler>(coalescer: &Coalescer<S>, log: &Rc<RefCell<Vec<&'static str>>>) {
        for label in ["scroll", "resize", "scroll"] {
            let log = log.clone();
            coalescer.schedule(move |_| log.borrow_mut().push(label));
        }
    }

    #[test]
    fn generic_holder_keeps_one_pending_frame() {
        let frames = ManualFrames::default();
        let coalescer = Coalescer::new(frames.clone());
        let log = Rc::new(RefCell::new(Vec::new()));
        burst(&coalescer, &log);
        assert_eq!(frames.queued(), 1);
        frames.run_frame(16.0);
        assert_eq!(*log.borrow(), vec!["scroll"]);
    }

    #[test]
    fn independent_sources_do_not_cancel_each_other() {
        let frames = ManualFrames::default();
        let first = Coalescer::new(frames.clone());
        let second = Coalescer::new(frames.clone());
        let hits = Rc::new(Cell::new(0));
        for source in [&first, &second] {
            let hits = hits.clone();
            source.schedule(move |_| hits.set(hits.get() + 1));
        }
        frames.run_frame(16.0);
        assert_eq!(hits.get(), 2);
    }
}
