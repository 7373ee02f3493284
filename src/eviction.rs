//! Two-tier LRU victim selection
//!
//! A faulting process first gives up its own least recently used frame. Only
//! when it holds no frames at all does selection fall back to the least
//! recently used frame across every process.
//!
//! Ties on `last_accessed` go to the lowest frame index: frames are scanned
//! in ascending order and a candidate only replaces the current best when it
//! is strictly older.

use crate::memory::{FrameTable, ResidentRecord, Timestamp};

/// Which pass of the policy produced the victim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionScope {
    /// The victim belongs to the faulting process
    Local,
    /// The faulting process held no frames; oldest frame overall
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Victim {
    pub frame: usize,
    pub scope: EvictionScope,
}

/// Oldest resident frame accepted by `filter`, lowest index on ties
fn least_recent<F>(frames: &FrameTable, filter: F) -> Option<usize>
where
    F: Fn(&ResidentRecord) -> bool,
{
    let mut best: Option<(usize, Timestamp)> = None;

    for (frame, record) in frames.resident() {
        if !filter(record) {
            continue;
        }
        match best {
            Some((_, oldest)) if record.last_accessed >= oldest => {}
            _ => best = Some((frame, record.last_accessed)),
        }
    }

    best.map(|(frame, _)| frame)
}

/// Pick the frame to evict on behalf of `process_id`
///
/// Returns `None` only when no frame is resident.
pub fn select_victim(frames: &FrameTable, process_id: usize) -> Option<Victim> {
    if let Some(frame) = least_recent(frames, |r| r.process_id == process_id) {
        return Some(Victim { frame, scope: EvictionScope::Local });
    }

    least_recent(frames, |_| true).map(|frame| Victim { frame, scope: EvictionScope::Global })
}
