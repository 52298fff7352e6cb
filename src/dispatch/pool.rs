use std::panic::{self, AssertUnwindSafe};
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, error};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::job::{Job, JobResult};
use crate::config::{PoolConfig, SearchConfig};
use crate::engine;
use crate::error::DispatchError;

type Envelope = (Job, Sender<JobResult>);

type JobRunner = fn(Job, &SearchConfig, &mut StdRng) -> JobResult;

/// Fixed pool of long-lived search workers behind a bounded job queue.
///
/// The pool is sized once at construction and each worker runs one job at
/// a time to completion; there is no cancellation or timeout. Results are
/// delivered to each submitter exactly once, in whatever order workers
/// finish.
pub struct SearchPool {
    jobs: Option<Sender<Envelope>>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl SearchPool {
    /// Spawn the workers. `pool.workers == 0` sizes the pool to the host's
    /// available parallelism.
    pub fn new(pool: &PoolConfig, search: SearchConfig) -> Self {
        Self::with_runner(pool, search, run_job)
    }

    fn with_runner(pool: &PoolConfig, search: SearchConfig, runner: JobRunner) -> Self {
        let count = if pool.workers == 0 {
            thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            pool.workers
        };

        let (jobs_tx, jobs_rx) = bounded::<Envelope>(pool.queue_capacity);

        let workers = (0..count)
            .map(|id| {
                let jobs = jobs_rx.clone();
                let search = search.clone();
                let rng = match pool.seed {
                    // offset by worker id so seeded workers draw distinct streams
                    Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(id as u64)),
                    None => StdRng::from_os_rng(),
                };
                thread::spawn(move || worker_loop(id, jobs, search, rng, runner))
            })
            .collect();

        SearchPool {
            jobs: Some(jobs_tx),
            workers,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Queue a job for the next available worker. Blocks only while the
    /// queue is at capacity.
    pub fn submit(&self, job: Job) -> JobHandle {
        let (reply_tx, reply_rx) = bounded(1);
        if let Some(jobs) = &self.jobs {
            // A send error means shutdown has begun; the dropped reply
            // sender then surfaces as a failed job on the handle.
            let _ = jobs.send((job, reply_tx));
        }
        JobHandle { reply: reply_rx }
    }
}

impl Drop for SearchPool {
    fn drop(&mut self) {
        // Closing the queue lets workers drain outstanding jobs and exit
        self.jobs.take();
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

/// Pending result of a submitted job.
pub struct JobHandle {
    reply: Receiver<JobResult>,
}

impl JobHandle {
    /// Block until the worker replies. A worker that panicked mid-job drops
    /// its reply sender, which surfaces here as `JobFailed` rather than a
    /// hang.
    pub fn wait(self) -> Result<JobResult, DispatchError> {
        self.reply.recv().map_err(|_| DispatchError::JobFailed)
    }
}

fn worker_loop(
    id: usize,
    jobs: Receiver<Envelope>,
    search: SearchConfig,
    mut rng: StdRng,
    runner: JobRunner,
) {
    debug!("search worker {id} started");

    while let Ok((job, reply)) = jobs.recv() {
        match panic::catch_unwind(AssertUnwindSafe(|| runner(job, &search, &mut rng))) {
            Ok(result) => {
                // The submitter may have gone away; that is its choice
                let _ = reply.send(result);
            }
            Err(_) => error!("search worker {id} panicked while running a job"),
        }
    }

    debug!("search worker {id} stopped");
}

fn run_job(job: Job, search: &SearchConfig, rng: &mut StdRng) -> JobResult {
    let Job {
        mut board,
        color,
        difficulty,
    } = job;

    debug!(
        "searching {} move at {} difficulty on:\n{board}",
        color.name(),
        difficulty.name()
    );
    let column = engine::select_move(&mut board, color, difficulty, search, rng);
    debug!("selected column: {column:?}");

    JobResult { column }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Algorithm, Difficulty, SearchSpec};
    use crate::game::{Board, Cell, Player};

    fn pool_config(workers: usize, seed: Option<u64>) -> PoolConfig {
        PoolConfig {
            workers,
            queue_capacity: 16,
            seed,
        }
    }

    #[test]
    fn test_pool_sizes_to_config() {
        let pool = SearchPool::new(&pool_config(3, None), SearchConfig::default());
        assert_eq!(pool.worker_count(), 3);
    }

    #[test]
    fn test_auto_sizing_spawns_at_least_one_worker() {
        let pool = SearchPool::new(&pool_config(0, None), SearchConfig::default());
        assert!(pool.worker_count() >= 1);
    }

    #[test]
    fn test_mixed_difficulty_jobs_all_complete() {
        let pool = SearchPool::new(&pool_config(2, Some(11)), SearchConfig::default());

        let mut board = Board::new();
        board.apply_move(3, Cell::Red).unwrap();

        let handles: Vec<_> = [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Easy,
        ]
        .into_iter()
        .map(|difficulty| {
            pool.submit(Job {
                board,
                color: Player::Yellow,
                difficulty,
            })
        })
        .collect();

        for handle in handles {
            let result = handle.wait().expect("job should complete");
            let column = result.column.expect("board has moves");
            assert!(!board.is_column_full(column));
        }
    }

    #[test]
    fn test_winning_column_found_through_pool() {
        let pool = SearchPool::new(&pool_config(2, Some(3)), SearchConfig::default());

        // Yellow three in a row on the bottom, col 3 wins
        let mut board = Board::new();
        for col in 0..3 {
            board.apply_move(col, Cell::Yellow).unwrap();
            board.apply_move(col, Cell::Red).unwrap();
        }

        for difficulty in [Difficulty::Medium, Difficulty::Hard, Difficulty::Expert] {
            let result = pool
                .submit(Job {
                    board,
                    color: Player::Yellow,
                    difficulty,
                })
                .wait()
                .unwrap();
            assert_eq!(result.column, Some(3), "{} missed the win", difficulty.name());
        }
    }

    #[test]
    fn test_single_worker_serializes_and_is_deterministic() {
        // Yellow has two open-ended threats; every red move at depth 2 is
        // a proven loss, so minimax falls through to its random valid
        // column. Same seed, same worker, same column sequence.
        let mut board = Board::new();
        for col in 2..5 {
            board.apply_move(col, Cell::Yellow).unwrap();
        }
        board.apply_move(3, Cell::Red).unwrap();

        let search = SearchConfig {
            medium: SearchSpec {
                algorithm: Algorithm::Minimax,
                depth: 2,
            },
            ..SearchConfig::default()
        };

        let run = || {
            let pool = SearchPool::new(&pool_config(1, Some(99)), search.clone());
            let handles: Vec<_> = (0..6)
                .map(|_| {
                    pool.submit(Job {
                        board,
                        color: Player::Red,
                        difficulty: Difficulty::Medium,
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.wait().unwrap().column)
                .collect::<Vec<_>>()
        };

        assert_eq!(run(), run(), "seeded single-worker runs must agree");
    }

    #[test]
    fn test_panicking_job_fails_without_hanging() {
        fn touchy_runner(job: Job, search: &SearchConfig, rng: &mut StdRng) -> JobResult {
            if job.difficulty == Difficulty::Expert {
                panic!("search blew up");
            }
            run_job(job, search, rng)
        }

        let pool = SearchPool::with_runner(&pool_config(1, Some(0)), SearchConfig::default(), touchy_runner);

        let failed = pool
            .submit(Job {
                board: Board::new(),
                color: Player::Red,
                difficulty: Difficulty::Expert,
            })
            .wait();
        assert!(matches!(failed, Err(DispatchError::JobFailed)));

        // The worker survives the panic and keeps serving
        let result = pool
            .submit(Job {
                board: Board::new(),
                color: Player::Red,
                difficulty: Difficulty::Easy,
            })
            .wait()
            .expect("worker should still be alive");
        assert!(result.column.is_some());
    }

    #[test]
    fn test_more_jobs_than_workers() {
        let pool = SearchPool::new(&pool_config(2, Some(5)), SearchConfig::default());

        let handles: Vec<_> = (0..12)
            .map(|_| {
                pool.submit(Job {
                    board: Board::new(),
                    color: Player::Red,
                    difficulty: Difficulty::Easy,
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.wait().unwrap().column.is_some());
        }
    }

    #[test]
    fn test_full_board_job_yields_none() {
        let pool = SearchPool::new(&pool_config(1, None), SearchConfig::default());

        let mut board = Board::new();
        let r = Cell::Red;
        let y = Cell::Yellow;
        // Paired-row fill pattern with no four anywhere
        for (col, &first) in [r, y, r, y, r, y, r].iter().enumerate() {
            let second = if first == r { y } else { r };
            for cell in [first, first, second, second, first, first] {
                board.apply_move(col, cell).unwrap();
            }
        }
        assert!(board.is_full());

        let result = pool
            .submit(Job {
                board,
                color: Player::Red,
                difficulty: Difficulty::Expert,
            })
            .wait()
            .unwrap();
        assert_eq!(result.column, None);
    }
}
