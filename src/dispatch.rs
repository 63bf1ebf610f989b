use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc::{self, TrySendError},
        Arc, Mutex, PoisonError,
    },
    thread,
};

use log::debug;

use crate::calculator::Calculator;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A fixed-size worker pool with a bounded job queue.
///
/// The pool spawns its threads up front and feeds them through a bounded
/// channel. When the queue is full, [`execute`] runs the job synchronously on
/// the submitting thread instead of blocking or dropping it, which bounds
/// queue growth without losing work. Dropping the pool closes the queue,
/// lets the workers drain what was already submitted, and joins them.
///
/// [`execute`]: WorkerPool::execute
pub struct WorkerPool {
    sender:  Option<mpsc::SyncSender<Job>>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl WorkerPool {
    /// Queue slots per worker before the caller-runs policy kicks in.
    const QUEUE_SLOTS_PER_WORKER: usize = 4;

    /// Creates a pool with an explicit thread count and queue capacity.
    ///
    /// # Panics
    /// Panics if the operating system refuses to spawn a worker thread.
    #[must_use]
    pub fn new(threads: usize, queue_capacity: usize) -> Self {
        let (sender, receiver) = mpsc::sync_channel::<Job>(queue_capacity);
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..threads).map(|id| {
                                      let receiver = Arc::clone(&receiver);
                                      thread::Builder::new()
                .name(format!("calc-worker-{id}"))
                .spawn(move || {
                    debug!("worker {id} started");
                    loop {
                        let job = receiver.lock()
                                          .unwrap_or_else(PoisonError::into_inner)
                                          .recv();
                        match job {
                            Ok(job) => job(),
                            Err(_) => break,
                        }
                    }
                    debug!("worker {id} stopped");
                })
                .expect("failed to spawn worker thread")
                                  })
                                  .collect();

        Self { sender: Some(sender),
               workers }
    }

    /// Creates a pool sized to the host.
    ///
    /// Thread count is the available hardware parallelism with a floor of 2,
    /// so even single-core hosts get some concurrency.
    #[must_use]
    pub fn with_default_size() -> Self {
        let threads = thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
                                                     .max(2);
        Self::new(threads, threads * Self::QUEUE_SLOTS_PER_WORKER)
    }

    /// Submits a job.
    ///
    /// The job is queued for a worker when a slot is free; otherwise it runs
    /// to completion on the calling thread before this method returns.
    pub fn execute(&self, job: impl FnOnce() + Send + 'static) {
        let job: Job = Box::new(job);
        match &self.sender {
            Some(sender) => match sender.try_send(job) {
                Ok(()) => {},
                Err(TrySendError::Full(job) | TrySendError::Disconnected(job)) => job(),
            },
            // Only reachable during shutdown; run the job inline.
            None => job(),
        }
    }

    /// Closes the queue and joins every worker.
    ///
    /// Jobs already queued are still executed before the workers stop.
    /// Called automatically on drop.
    pub fn shutdown(&mut self) {
        self.sender.take();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Controls how the dispatcher numbers requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScope {
    /// Identifiers increase monotonically across the service's lifetime.
    Service,
    /// Identifiers restart from 1 for every batch.
    Batch,
}

/// The result of evaluating one request.
///
/// Exactly one of the snapshot or the error message is present, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    /// The identifier assigned at submission time.
    pub request_id: usize,
    /// The final snapshot on success, or the error message on failure.
    pub result:     Result<String, String>,
}

impl RequestOutcome {
    /// Returns `true` when the request failed.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.result.is_err()
    }
}

impl std::fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Ok(snapshot) => write!(f, "Request {} Result: {snapshot}", self.request_id),
            Err(message) => write!(f, "Request {} Error: {message}", self.request_id),
        }
    }
}

/// Evaluates batches of independent requests concurrently.
///
/// Every request is assigned an identifier at submission time and evaluated
/// against its own freshly constructed [`Calculator`], so no two requests
/// ever observe each other's variables. A failure in one request becomes
/// that request's error outcome and never affects, delays, or cancels its
/// siblings.
pub struct CalculatorService {
    pool:     WorkerPool,
    id_scope: IdScope,
    next_id:  AtomicUsize,
}

impl CalculatorService {
    /// Creates a service with a host-sized worker pool.
    #[must_use]
    pub fn new(id_scope: IdScope) -> Self {
        Self::with_pool(WorkerPool::with_default_size(), id_scope)
    }

    /// Creates a service over an explicitly sized pool.
    #[must_use]
    pub const fn with_pool(pool: WorkerPool, id_scope: IdScope) -> Self {
        Self { pool,
               id_scope,
               next_id: AtomicUsize::new(1) }
    }

    /// Evaluates a single request.
    ///
    /// Equivalent to a one-element batch.
    #[must_use]
    pub fn process_request(&self, lines: &[String]) -> RequestOutcome {
        let batch = vec![lines.to_vec()];
        let Some(outcome) = self.process_batch(&batch).pop() else {
            unreachable!("a one-element batch yields exactly one outcome")
        };
        outcome
    }

    /// Evaluates a batch of requests concurrently.
    ///
    /// Blocks until every request has completed, successfully or with an
    /// error, and returns the outcomes in submission order regardless of
    /// completion order.
    ///
    /// # Parameters
    /// - `requests`: One ordered list of statement lines per request.
    #[must_use]
    pub fn process_batch(&self, requests: &[Vec<String>]) -> Vec<RequestOutcome> {
        debug!("dispatching batch of {} request(s)", requests.len());
        let (sender, receiver) = mpsc::channel();

        for (slot, request) in requests.iter().enumerate() {
            let request_id = match self.id_scope {
                IdScope::Service => self.next_id.fetch_add(1, Ordering::Relaxed),
                IdScope::Batch => slot + 1,
            };
            let sender = sender.clone();
            let lines = request.clone();

            self.pool.execute(move || {
                         let result = Calculator::new().process_statements(&lines)
                                                       .map_err(|e| e.to_string());
                         let _ = sender.send((slot, RequestOutcome { request_id, result }));
                     });
        }
        drop(sender);

        let mut outcomes: Vec<(usize, RequestOutcome)> = receiver.iter().collect();
        outcomes.sort_by_key(|(slot, _)| *slot);
        outcomes.into_iter().map(|(_, outcome)| outcome).collect()
    }

    /// Shuts the worker pool down, draining queued work first.
    pub fn shutdown(&mut self) {
        self.pool.shutdown();
    }
}
