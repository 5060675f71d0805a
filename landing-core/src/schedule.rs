//! Self-rescheduling work: timeouts, intervals and per-frame tasks.
//!
//! Every scheduled job hands back a `TaskHandle`. Cancelling the handle
//! suppresses all later firings of that job; a job already running finishes.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

/// Cancellation handle shared between a scheduled job and its owner.
#[derive(Debug, Clone, Default)]
pub struct TaskHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Host event-loop services. Implementations never run a job synchronously
/// from inside the scheduling call.
pub trait Scheduler {
    /// Monotonic milliseconds, same clock as frame timestamps.
    fn now_ms(&self) -> f64;

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;

    fn set_interval(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle;

    /// Run `task` on the next animation frame with that frame's timestamp.
    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> TaskHandle;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    Continue,
    Done,
}

/// Work advanced once per animation frame.
pub trait FrameTask {
    fn step(&mut self, now_ms: f64) -> FrameStep;
}

/// Step `task` immediately, then once per frame until it reports `Done` or
/// the returned handle is cancelled.
pub fn run_frames<T>(scheduler: Rc<dyn Scheduler>, task: T) -> TaskHandle
where
    T: FrameTask + 'static,
{
    let handle = TaskHandle::new();
    let now = scheduler.now_ms();
    drive_frame(scheduler, Rc::new(RefCell::new(task)), handle.clone(), now);
    handle
}

fn drive_frame<T>(
    scheduler: Rc<dyn Scheduler>,
    task: Rc<RefCell<T>>,
    handle: TaskHandle,
    now_ms: f64,
) where
    T: FrameTask + 'static,
{
    if handle.is_cancelled() {
        return;
    }

    if task.borrow_mut().step(now_ms) == FrameStep::Done {
        return;
    }

    let next = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move |timestamp| {
        drive_frame(next, task, handle, timestamp);
    }));
}

// ============================================================================
// Deterministic scheduler
// ============================================================================

enum Job {
    Once(Box<dyn FnOnce()>),
    Repeat { period_ms: f64, task: Box<dyn FnMut()> },
    Frame(Box<dyn FnOnce(f64)>),
}

struct Pending {
    due_ms: f64,
    seq: u64,
    job: Job,
    handle: TaskHandle,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    // Reversed so the heap pops the earliest job first, FIFO among equals.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .total_cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
struct VirtualState {
    now_ms: f64,
    next_seq: u64,
    queue: BinaryHeap<Pending>,
}

/// Simulated clock for tests. Time only moves through `advance`; frames
/// fire on fixed `frame_ms` boundaries.
pub struct VirtualScheduler {
    state: RefCell<VirtualState>,
    frame_ms: f64,
}

impl Default for VirtualScheduler {
    fn default() -> Self {
        Self::new(16.0)
    }
}

impl VirtualScheduler {
    pub fn new(frame_ms: f64) -> Self {
        Self {
            state: RefCell::new(VirtualState::default()),
            frame_ms: frame_ms.max(1.0),
        }
    }

    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Jobs still queued, including cancelled ones not yet reached.
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Move the clock forward by `ms`, running every job due on the way.
    pub fn advance(&self, ms: f64) {
        let target = self.state.borrow().now_ms + ms.max(0.0);

        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                match state.queue.peek() {
                    Some(pending) if pending.due_ms <= target => state.queue.pop(),
                    _ => None,
                }
            };
            let Some(pending) = next else {
                break;
            };

            self.state.borrow_mut().now_ms = pending.due_ms;
            if pending.handle.is_cancelled() {
                continue;
            }

            match pending.job {
                Job::Once(task) => task(),
                Job::Frame(task) => task(pending.due_ms),
                Job::Repeat {
                    period_ms,
                    mut task,
                } => {
                    task();
                    if !pending.handle.is_cancelled() {
                        self.push(
                            pending.due_ms + period_ms,
                            Job::Repeat { period_ms, task },
                            pending.handle,
                        );
                    }
                }
            }
        }

        self.state.borrow_mut().now_ms = target;
    }

    fn push(&self, due_ms: f64, job: Job, handle: TaskHandle) {
        let mut state = self.state.borrow_mut();
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.push(Pending {
            due_ms,
            seq,
            job,
            handle,
        });
    }
}

impl Scheduler for VirtualScheduler {
    fn now_ms(&self) -> f64 {
        self.state.borrow().now_ms
    }

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = TaskHandle::new();
        self.push(
            self.now_ms() + f64::from(delay_ms),
            Job::Once(task),
            handle.clone(),
        );
        handle
    }

    fn set_interval(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
        let handle = TaskHandle::new();
        let period_ms = f64::from(period_ms.max(1));
        self.push(
            self.now_ms() + period_ms,
            Job::Repeat { period_ms, task },
            handle.clone(),
        );
        handle
    }

    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> TaskHandle {
        let handle = TaskHandle::new();
        let next_frame = ((self.now_ms() / self.frame_ms).floor() + 1.0) * self.frame_ms;
        self.push(next_frame, Job::Frame(task), handle.clone());
        handle
    }
}
