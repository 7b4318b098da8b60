use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

/// Deferred unit of work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks after a delay. Each table owns its scheduler; nothing global.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, task: Task, delay: Duration);
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn schedule(&self, task: Task, delay: Duration) {
        (**self).schedule(task, delay)
    }
}

/// Ignores the delay and runs the task on the caller's stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct Immediate;

impl Scheduler for Immediate {
    fn schedule(&self, task: Task, _: Duration) {
        task()
    }
}

/// Queues tasks until someone drains them. Lets tests step through time.
#[derive(Default)]
pub struct Deferred {
    queue: Mutex<Vec<(Task, Duration)>>,
}

impl Deferred {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn pending(&self) -> usize {
        self.lock().len()
    }
    /// Delays of queued tasks, oldest first.
    pub fn delays(&self) -> Vec<Duration> {
        self.lock().iter().map(|(_, d)| *d).collect()
    }
    /// Runs the oldest queued task. The queue is released first, so the task
    /// may schedule more work.
    pub fn run_next(&self) -> bool {
        let next = {
            let mut queue = self.lock();
            match queue.is_empty() {
                true => None,
                false => Some(queue.remove(0)),
            }
        };
        match next {
            Some((task, _)) => {
                task();
                true
            }
            None => false,
        }
    }
    /// Runs tasks until the queue stays empty. Returns how many ran.
    pub fn run_all(&self) -> usize {
        let mut n = 0;
        while self.run_next() {
            n += 1;
        }
        n
    }
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Task, Duration)>> {
        self.queue.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Scheduler for Deferred {
    fn schedule(&self, task: Task, delay: Duration) {
        self.lock().push((task, delay));
    }
}

impl std::fmt::Debug for Deferred {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Deferred").field("pending", &self.pending()).finish()
    }
}

/// Sleeps on a tokio runtime, then runs the task there.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct Tokio(tokio::runtime::Handle);

#[cfg(feature = "server")]
impl Tokio {
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self(handle)
    }
    /// Binds to the runtime of the calling task.
    pub fn current() -> Self {
        Self(tokio::runtime::Handle::current())
    }
}

#[cfg(feature = "server")]
impl Scheduler for Tokio {
    fn schedule(&self, task: Task, delay: Duration) {
        self.0.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}
