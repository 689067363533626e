use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, trace};
use parking_lot::Mutex;

use crate::{Error, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Fixed-size pool of worker threads fed from one bounded FIFO queue
///
/// Submitting blocks while the queue is full. Dropping the pool (or calling
/// [`ThreadPool::shutdown`]) closes the queue and joins every worker after the
/// already-queued tasks have run.
pub struct ThreadPool {
    workers: Vec<Worker>,
    sender: Option<SyncSender<Job>>,
    queue_capacity: usize,
}

struct Worker {
    id: usize,
    handle: Option<JoinHandle<()>>,
}

/// Completion handle for a task submitted with [`ThreadPool::submit`]
#[must_use = "a task handle does nothing unless joined"]
pub struct TaskHandle<T> {
    result: Receiver<std::thread::Result<T>>,
}

impl ThreadPool {
    /// Creates a pool with `size` workers and a queue of `4 * size` pending tasks
    pub fn new(size: usize) -> Result<Self> {
        Self::with_queue_capacity(size, size.saturating_mul(4))
    }

    /// Creates a pool with `size` workers and at most `queue_capacity` pending tasks
    pub fn with_queue_capacity(size: usize, queue_capacity: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidPoolSize(size));
        }
        if queue_capacity == 0 {
            return Err(Error::InvalidConfig("queue capacity must be positive".into()));
        }

        let (sender, receiver) = mpsc::sync_channel::<Job>(queue_capacity);
        let receiver = Arc::new(Mutex::new(receiver));

        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            workers.push(Worker::spawn(id, Arc::clone(&receiver))?);
        }
        debug!("thread pool started: {} workers, queue capacity {}", size, queue_capacity);

        Ok(ThreadPool {
            workers,
            sender: Some(sender),
            queue_capacity,
        })
    }

    /// Number of worker threads
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// Queues `task` for execution, blocking while the queue is full
    ///
    /// A panic inside the task is caught on the worker and reported by
    /// [`TaskHandle::join`]; the worker keeps serving the queue.
    pub fn submit<F, T>(&self, task: F) -> Result<TaskHandle<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| Error::ThreadPool("pool is shut down".into()))?;

        let (tx, rx) = mpsc::sync_channel(1);
        let job: Job = Box::new(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(task));
            // The submitter may have stopped waiting; nothing to report then.
            let _ = tx.send(outcome);
        });

        sender
            .send(job)
            .map_err(|_| Error::ThreadPool("all workers have exited".into()))?;
        Ok(TaskHandle { result: rx })
    }

    /// Closes the queue and waits for every queued and running task to finish
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        // Dropping the sender makes `recv` fail once the queue is drained.
        if self.sender.take().is_none() {
            return;
        }
        for worker in &mut self.workers {
            if let Some(handle) = worker.handle.take() {
                if handle.join().is_err() {
                    debug!("worker {} exited abnormally", worker.id);
                }
            }
        }
        debug!("thread pool stopped: {} workers joined", self.workers.len());
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for ThreadPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadPool")
            .field("workers", &self.workers.len())
            .field("queue_capacity", &self.queue_capacity)
            .field("running", &self.sender.is_some())
            .finish()
    }
}

impl Worker {
    fn spawn(id: usize, receiver: Arc<Mutex<Receiver<Job>>>) -> Result<Self> {
        let handle = thread::Builder::new()
            .name(format!("sssp-worker-{}", id))
            .spawn(move || loop {
                // The guard is a temporary, so the lock is released before the job runs.
                let job = receiver.lock().recv();
                match job {
                    Ok(job) => job(),
                    Err(_) => {
                        trace!("worker {} shutting down", id);
                        break;
                    }
                }
            })
            .map_err(|e| Error::ThreadPool(format!("failed to spawn worker {}: {}", id, e)))?;

        Ok(Worker {
            id,
            handle: Some(handle),
        })
    }
}

impl<T> TaskHandle<T> {
    /// Blocks until the task has run and returns its output
    pub fn join(self) -> Result<T> {
        match self.result.recv() {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(payload)) => Err(Error::ThreadPool(format!(
                "task panicked: {}",
                panic_message(payload.as_ref())
            ))),
            Err(_) => Err(Error::ThreadPool("task was dropped before running".into())),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
