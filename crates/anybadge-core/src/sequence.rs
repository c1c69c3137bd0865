//! Monotonic identifiers for badge masks.
//!
//! Several badges embedded in one HTML page must not share mask ids, so each
//! badge draws a fresh number from an [`IdSequence`].

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

pub const MASK_ID_PREFIX: &str = "anybadge_";

/// Atomic counter handing out increasing ids, starting at 1.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: AtomicU64,
}

impl IdSequence {
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// A sequence whose next id is `last + 1`.
    pub const fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }

    /// The sequence shared by every badge built without an explicit one.
    pub fn process() -> &'static IdSequence {
        static PROCESS: OnceLock<IdSequence> = OnceLock::new();
        PROCESS.get_or_init(IdSequence::new)
    }

    pub fn next_id(&self) -> u64 {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Next mask id string, e.g. `anybadge_1`.
    pub fn next_mask_id(&self) -> String {
        format!("{MASK_ID_PREFIX}{}", self.next_id())
    }
}
