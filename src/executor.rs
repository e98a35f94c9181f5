use crate::error::{Error, Result};
use clap::ValueEnum;
use rayon::prelude::*;
use std::sync::mpsc::channel;
use std::sync::Arc;
use threadpool::ThreadPool;

/// Runs independent tasks, possibly in parallel.
/// Results always come back in the order of the items they were computed from.
pub trait Executor {
    fn map<T, R, F>(&self, items: Vec<T>, task: F) -> Result<Vec<R>>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static;

    fn workers(&self) -> usize;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// A fixed pool of OS threads (threadpool crate)
    Threadpool,
    /// A dedicated rayon pool
    Rayon,
}

pub struct ThreadPoolExecutor {
    pool: ThreadPool,
}

impl ThreadPoolExecutor {
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }
        Ok(ThreadPoolExecutor {
            pool: ThreadPool::with_name("qscore-worker".to_string(), workers),
        })
    }
}

impl Executor for ThreadPoolExecutor {
    fn map<T, R, F>(&self, items: Vec<T>, task: F) -> Result<Vec<R>>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let total = items.len();
        let task = Arc::new(task);
        let (sender, receiver) = channel();

        for (index, item) in items.into_iter().enumerate() {
            let sender = sender.clone();
            let task = Arc::clone(&task);
            self.pool.execute(move || {
                // The receiver outlives every job, so a failed send is impossible
                let _ = sender.send((index, task(item)));
            });
        }
        // Once every job has finished (or panicked) the channel closes
        drop(sender);

        let mut slots: Vec<Option<R>> = (0..total).map(|_| None).collect();
        for (index, result) in receiver.iter() {
            slots[index] = Some(result);
        }

        slots
            .into_iter()
            .collect::<Option<Vec<R>>>()
            .ok_or(Error::WorkerPanicked)
    }

    fn workers(&self) -> usize {
        self.pool.max_count()
    }
}

pub struct RayonExecutor {
    pool: rayon::ThreadPool,
}

impl RayonExecutor {
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("qscore-rayon-{}", i))
            .build()?;
        Ok(RayonExecutor { pool })
    }
}

impl Executor for RayonExecutor {
    fn map<T, R, F>(&self, items: Vec<T>, task: F) -> Result<Vec<R>>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let results = self.pool.install(|| {
            items
                .into_par_iter()
                .map(|item| std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| task(item))))
                .collect::<Vec<_>>()
        });

        results
            .into_iter()
            .map(|result| result.map_err(|_| Error::WorkerPanicked))
            .collect()
    }

    fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

/// Runs every task on the calling thread.
/// Used for single-worker runs and as the reference the parallel executors must match.
#[derive(Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn map<T, R, F>(&self, items: Vec<T>, task: F) -> Result<Vec<R>>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Ok(items.into_iter().map(task).collect())
    }

    fn workers(&self) -> usize {
        1
    }
}

/// The executor chosen on the command line
pub enum AnyExecutor {
    Sequential(SequentialExecutor),
    Threadpool(ThreadPoolExecutor),
    Rayon(RayonExecutor),
}

impl AnyExecutor {
    /// A single worker skips the pool entirely, whichever backend was asked for
    pub fn new(backend: Backend, workers: usize) -> Result<Self> {
        Ok(match (backend, workers) {
            (_, 0) => return Err(Error::InvalidWorkerCount),
            (_, 1) => AnyExecutor::Sequential(SequentialExecutor),
            (Backend::Threadpool, _) => AnyExecutor::Threadpool(ThreadPoolExecutor::new(workers)?),
            (Backend::Rayon, _) => AnyExecutor::Rayon(RayonExecutor::new(workers)?),
        })
    }
}

impl Executor for AnyExecutor {
    fn map<T, R, F>(&self, items: Vec<T>, task: F) -> Result<Vec<R>>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        match self {
            AnyExecutor::Sequential(executor) => executor.map(items, task),
            AnyExecutor::Threadpool(executor) => executor.map(items, task),
            AnyExecutor::Rayon(executor) => executor.map(items, task),
        }
    }

    fn workers(&self) -> usize {
        match self {
            AnyExecutor::Sequential(executor) => executor.workers(),
            AnyExecutor::Threadpool(executor) => executor.workers(),
            AnyExecutor::Rayon(executor) => executor.workers(),
        }
    }
}
