// Operator lifecycle trait — the contract the surrounding dataflow
// framework drives.
//
// An operator is opened with a positional argument list (the first
// argument is reserved by the framework), fed rows one at a time, told
// when input is exhausted, then drained through has_next/next and closed.
// Implementations that buffer-and-train do all their heavy work in
// `input_exhausted`. Calls are serialized by the framework; nothing here
// needs to be thread-safe.

use anyhow::Result;

use super::row::{OutputRow, Row};

/// A dataflow operator consuming rows and producing rows.
pub trait Operator {
    /// Initialize from the framework's argument list.
    fn open(&mut self, args: &[String]) -> Result<()>;

    /// Consume one input row. `nth_child` identifies which upstream
    /// operator produced the row; single-input operators ignore it.
    fn accept(&mut self, row: Row, nth_child: usize) -> Result<()>;

    /// Signal that no further rows will arrive. Blocking operators run
    /// their computation here and stage results for draining.
    fn input_exhausted(&mut self) -> Result<()>;

    /// Whether a staged output row remains.
    fn has_next(&self) -> bool;

    /// Take the next staged output row, in production order.
    fn next(&mut self) -> Option<OutputRow>;

    /// Release any held resources. Called exactly once, last.
    fn close(&mut self) -> Result<()>;
}
