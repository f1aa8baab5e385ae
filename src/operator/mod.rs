// Dataflow operator layer — lifecycle contract, row types, and the
// topic-modeling operator.

pub mod row;
pub mod topic_model;
pub mod traits;

use anyhow::Result;
use tracing::error;

/// Log-and-propagate helper for operator call sites.
///
/// The driver wraps each lifecycle call in this so every failure is logged
/// once, uniformly, before it surfaces to whatever supervises the run.
/// Errors are never swallowed here.
pub fn logged<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    if let Err(ref e) = result {
        error!(operation, error = %e, "operator call failed");
    }
    result
}
