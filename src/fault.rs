//! Page fault handling: hit, load into a free frame, or evict and load

use log::{debug, trace};

use crate::eviction::{select_victim, EvictionScope};
use crate::memory::{FrameTable, PageTable, ResidentRecord, Timestamp};

/// A page removed from its frame to make room for a faulting page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eviction {
    pub record: ResidentRecord,
    pub scope: EvictionScope,
}

/// Result of a single page access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Page was resident; only its timestamp moved
    Hit { frame: usize },
    /// Page was loaded into `frame`, evicting another page if RAM was full
    Miss { frame: usize, evicted: Option<Eviction> },
}

impl AccessOutcome {
    #[inline]
    pub fn frame(&self) -> usize {
        match *self {
            AccessOutcome::Hit { frame } | AccessOutcome::Miss { frame, .. } => frame,
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessOutcome::Hit { .. })
    }

    pub fn evicted(&self) -> Option<&Eviction> {
        match self {
            AccessOutcome::Miss { evicted, .. } => evicted.as_ref(),
            AccessOutcome::Hit { .. } => None,
        }
    }
}

/// Resolve an access to `(process, page)` at `timestamp`
///
/// On a miss the page goes into the lowest free frame, or into the frame
/// chosen by [`select_victim`] when RAM is full.
///
/// # Panics
/// If RAM has no free frame and no resident frame. That state cannot be
/// reached while the page and frame tables agree.
pub fn handle_access(
    page_table: &mut PageTable,
    frame_table: &mut FrameTable,
    process: usize,
    page: usize,
    timestamp: Timestamp,
) -> AccessOutcome {
    if let Some(frame) = page_table.lookup(process, page) {
        frame_table.touch(frame, timestamp);
        trace!("t={} hit p{}:{} in frame {}", timestamp, process, page, frame);
        return AccessOutcome::Hit { frame };
    }

    let (frame, evicted) = match frame_table.first_free() {
        Some(frame) => (frame, None),
        None => {
            let victim = match select_victim(frame_table, process) {
                Some(victim) => victim,
                None => panic!(
                    "no free or resident frame while loading p{}:{} ({} frames)",
                    process,
                    page,
                    frame_table.len()
                ),
            };

            let eviction = frame_table.vacate(victim.frame).map(|record| {
                page_table.unbind(record.process_id, record.page_num);
                debug!(
                    "t={} {:?} eviction of p{}:{} (last used t={}) from frame {}",
                    timestamp,
                    victim.scope,
                    record.process_id,
                    record.page_num,
                    record.last_accessed,
                    victim.frame
                );
                Eviction { record, scope: victim.scope }
            });
            (victim.frame, eviction)
        }
    };

    frame_table.occupy(frame, ResidentRecord::new(process, page, timestamp));
    page_table.bind(process, page, frame);
    trace!("t={} miss p{}:{} loaded into frame {}", timestamp, process, page, frame);

    AccessOutcome::Miss { frame, evicted }
}
