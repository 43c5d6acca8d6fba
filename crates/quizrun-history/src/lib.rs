//! quizrun-history — append-only JSON score log.
//!
//! One entry per completed session. Reads tolerate a corrupt existing log
//! (it is treated as empty, with a surfaced warning); writes rewrite the
//! whole array through a temp file and an atomic rename, so an interrupted
//! process cannot leave a torn log behind.

mod store;

pub use store::{
    aggregate, append, load, AppendOutcome, HistoryEntry, HistoryError, HistoryTotals,
    LoadedHistory,
};
