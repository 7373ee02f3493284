use crate::constants::*;
use crate::error::{Error, Result};

/// Dimensions of a simulation: P processes with K pages each, F frames of RAM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    processes: usize,
    pages_per_process: usize,
    frames: usize,
}

impl Geometry {
    pub fn new(processes: usize, pages_per_process: usize, frames: usize) -> Result<Self> {
        for (name, value) in [
            ("processes", processes),
            ("pages per process", pages_per_process),
            ("frames", frames),
        ] {
            if value == 0 {
                return Err(Error::InvalidGeometry(format!("{} must be at least 1", name)));
            }
            if value > MAX_DIMENSION {
                return Err(Error::InvalidGeometry(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_DIMENSION, value
                )));
            }
        }

        match processes.checked_mul(pages_per_process) {
            Some(entries) if entries <= MAX_PAGE_TABLE_ENTRIES => {}
            _ => {
                return Err(Error::InvalidGeometry(format!(
                    "{} processes x {} pages exceeds {} page table entries",
                    processes, pages_per_process, MAX_PAGE_TABLE_ENTRIES
                )));
            }
        }

        Ok(Geometry { processes, pages_per_process, frames })
    }

    #[inline]
    pub fn processes(&self) -> usize {
        self.processes
    }

    #[inline]
    pub fn pages_per_process(&self) -> usize {
        self.pages_per_process
    }

    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            processes: DEFAULT_PROCESSES,
            pages_per_process: DEFAULT_PAGES_PER_PROCESS,
            frames: DEFAULT_FRAMES,
        }
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} processes x {} pages, {} frames",
            self.processes, self.pages_per_process, self.frames
        )
    }
}

/// Layout of the final report file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportLayout {
    /// One `p,k,t` entry per frame
    #[default]
    Compact,
    /// Each frame written once per legacy RAM slot, entries as `p, k, t`
    Legacy,
}
