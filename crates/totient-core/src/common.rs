//! Fork/join execution of chunk tasks.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use tracing::debug;

use crate::calculator::TotientError;
use crate::constants::FALLBACK_PARALLELISM;
use crate::range::Chunk;

/// Run `task` once per chunk, one worker thread per chunk, and wait for all
/// of them.
///
/// The pool lives only for the duration of this call. Each task hands back
/// its value through its own result slot, so results come back in chunk
/// order. The first task error in chunk order is returned unchanged and no
/// partial results are kept. A panicking task or a pool that cannot be built
/// becomes `TotientError::WorkerFailure`.
///
/// Panics are only caught when the binary unwinds; under `panic = "abort"`
/// (the release profile) a panicking task aborts the process.
pub fn execute_chunks<T, F>(chunks: &[Chunk], task: F) -> Result<Vec<T>, TotientError>
where
    T: Send,
    F: Fn(&Chunk) -> Result<T, TotientError> + Sync,
{
    if chunks.is_empty() {
        return Ok(Vec::new());
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(chunks.len())
        .thread_name(|i| format!("totient-worker-{i}"))
        .build()
        .map_err(|e| TotientError::WorkerFailure {
            chunk: 0,
            reason: format!("failed to create thread pool: {e}"),
        })?;

    debug!(workers = chunks.len(), "dispatching chunks");

    let results: Vec<Result<T, TotientError>> =
        pool.install(|| chunks.par_iter().map(|chunk| run_chunk(chunk, &task)).collect());

    results.into_iter().collect()
}

fn run_chunk<T, F>(chunk: &Chunk, task: &F) -> Result<T, TotientError>
where
    F: Fn(&Chunk) -> Result<T, TotientError>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| task(chunk))) {
        Ok(result) => result,
        Err(payload) => Err(TotientError::WorkerFailure {
            chunk: chunk.index,
            reason: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}

/// Get the default parallelism level (hardware concurrency).
#[must_use]
pub fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(FALLBACK_PARALLELISM)
}
