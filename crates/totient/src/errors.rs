//! Error handling and exit codes.

use totient_core::calculator::TotientError;
use totient_core::constants::exit_codes;

/// Map a computation error to the process exit code.
pub fn handle_error(err: &TotientError) -> i32 {
    match err {
        TotientError::InvalidInput(_) | TotientError::Overflow { .. } => {
            exit_codes::ERROR_GENERIC
        }
        TotientError::Config(_) => exit_codes::ERROR_CONFIG,
        TotientError::WorkerFailure { .. } => exit_codes::ERROR_WORKER,
        TotientError::NonDeterministic { .. } => exit_codes::ERROR_NON_DETERMINISTIC,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<TotientError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
