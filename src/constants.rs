pub const DEFAULT_PROCESSES: usize = 4;
pub const DEFAULT_PAGES_PER_PROCESS: usize = 4;

// 16 legacy RAM slots, two slots per frame
pub const LEGACY_RAM_SLOTS: usize = 16;
pub const LEGACY_SLOTS_PER_FRAME: usize = 2;
pub const DEFAULT_FRAMES: usize = LEGACY_RAM_SLOTS / LEGACY_SLOTS_PER_FRAME;

/// Value printed in the page table report for a page that is not resident.
pub const NOT_RESIDENT: usize = 99;

pub const EMPTY_FRAME: &str = "empty";

// Upper bounds accepted for user-supplied geometry
pub const MAX_DIMENSION: usize = 1 << 16;
pub const MAX_PAGE_TABLE_ENTRIES: usize = 1 << 24;
