//! Concurrent execution of independent search jobs over a fixed pool of
//! worker threads.
//!
//! Workers pull from one shared bounded queue, so dispatch follows
//! availability instead of blindly rotating over workers; a slow expert
//! search never queues jobs behind itself while other workers sit idle.

mod job;
mod pool;

pub use job::{Job, JobResult};
pub use pool::{JobHandle, SearchPool};
