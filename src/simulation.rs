use log::info;

use crate::config::Geometry;
use crate::eviction::EvictionScope;
use crate::fault::{handle_access, AccessOutcome};
use crate::io::Trace;
use crate::memory::{FrameTable, PageTable, Timestamp};

/// Counters accumulated over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub accesses: u64,
    pub hits: u64,
    pub misses: u64,
    pub local_evictions: u64,
    pub global_evictions: u64,
}

impl Stats {
    fn record(&mut self, outcome: &AccessOutcome) {
        self.accesses += 1;
        if outcome.is_hit() {
            self.hits += 1;
            return;
        }
        self.misses += 1;
        match outcome.evicted().map(|e| e.scope) {
            Some(EvictionScope::Local) => self.local_evictions += 1,
            Some(EvictionScope::Global) => self.global_evictions += 1,
            None => {}
        }
    }

    pub fn evictions(&self) -> u64 {
        self.local_evictions + self.global_evictions
    }

    pub fn hit_ratio(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }
}

/// Owns every piece of mutable simulation state
///
/// Each process walks its pages round-robin through a private cursor, while
/// one logical clock shared by all processes stamps every access.
pub struct Simulation {
    geometry: Geometry,
    page_table: PageTable,
    frame_table: FrameTable,
    clock: Timestamp,
    cursors: Vec<usize>,
    stats: Stats,
}

impl Simulation {
    pub fn new(geometry: Geometry) -> Self {
        Simulation {
            geometry,
            page_table: PageTable::new(geometry.processes(), geometry.pages_per_process()),
            frame_table: FrameTable::new(geometry.frames()),
            clock: 0,
            cursors: vec![0; geometry.processes()],
            stats: Stats::default(),
        }
    }

    /// Access the next page of `process` at the current clock tick
    ///
    /// `process` must be below `geometry().processes()`.
    pub fn step(&mut self, process: usize) -> AccessOutcome {
        let page = self.cursors[process];
        let outcome = handle_access(
            &mut self.page_table,
            &mut self.frame_table,
            process,
            page,
            self.clock,
        );

        self.cursors[process] = (page + 1) % self.geometry.pages_per_process();
        self.clock += 1;
        self.stats.record(&outcome);

        outcome
    }

    /// Replay a whole trace
    pub fn run(&mut self, trace: &Trace) -> &Stats {
        info!("replaying {} accesses over {}", trace.len(), self.geometry);

        for &process in trace.events() {
            self.step(process);
        }

        info!(
            "{} hits, {} misses, {} local / {} global evictions",
            self.stats.hits, self.stats.misses, self.stats.local_evictions, self.stats.global_evictions
        );
        &self.stats
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn frame_table(&self) -> &FrameTable {
        &self.frame_table
    }

    /// Timestamp the next access will receive
    pub fn clock(&self) -> Timestamp {
        self.clock
    }

    /// Page the next access of `process` will touch
    pub fn cursor(&self, process: usize) -> usize {
        self.cursors[process]
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Verify capacity and page table / frame table agreement
    pub fn check_invariants(&self) -> Result<(), String> {
        let mapped_pages = self.page_table.resident_count();
        if mapped_pages > self.frame_table.len() {
            return Err(format!(
                "page table maps {} pages onto {} frames",
                mapped_pages,
                self.frame_table.len()
            ));
        }
        let occupied = self.frame_table.resident_count();
        if mapped_pages != occupied {
            return Err(format!(
                "page table maps {} pages but {} frames are occupied",
                mapped_pages, occupied
            ));
        }

        for (frame, record) in self.frame_table.resident() {
            let mapped = self.page_table.lookup(record.process_id, record.page_num);
            if mapped != Some(frame) {
                return Err(format!(
                    "frame {} holds p{}:{} but page table maps it to {:?}",
                    frame, record.process_id, record.page_num, mapped
                ));
            }
        }

        for (process, row) in self.page_table.rows().enumerate() {
            for (page, entry) in row.iter().enumerate() {
                let Some(frame) = *entry else { continue };
                match self.frame_table.get(frame) {
                    Some(record) if record.is_page(process, page) => {}
                    other => {
                        return Err(format!(
                            "page table maps p{}:{} to frame {} holding {:?}",
                            process, page, frame, other
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
