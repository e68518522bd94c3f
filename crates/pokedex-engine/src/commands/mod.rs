//! Command orchestration layer.
//!
//! Provides high-level command functions that coordinate between
//! core domain logic and persistence layer.

pub mod engine_command;
pub mod engine_query;
pub mod response;

use pokedex_core::errors::ExError;
use pokedex_core::{log_op_end, log_op_error, log_op_start};
use pokedex_core_types::RequestId;

/// Run `f` as one logged operation
///
/// Emits exactly one `start` and one of `end` / `end_error`, all tagged
/// with `request_id`. Errors leave with the request id attached.
pub(crate) fn run_logged<T, F>(op: &'static str, request_id: &RequestId, f: F) -> Result<T, ExError>
where
    F: FnOnce() -> Result<T, ExError>,
{
    log_op_start!(op, request_id = %request_id);
    let start = std::time::Instant::now();

    let result = f().map_err(|e| e.with_request_id(request_id.clone()));

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = elapsed, request_id = %request_id);
        }
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(op, e_clone, duration_ms = elapsed, request_id = %request_id);
        }
    }
    result
}
