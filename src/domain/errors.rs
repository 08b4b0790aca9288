// Domain-level errors for scoring workflows.

// A caller handing over out-of-domain slider state is a caller bug; the
// engine fails loudly instead of producing NaN/Infinity scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    InvalidInput { field: &'static str },
}
