/// Logical clock value used as an LRU timestamp
pub type Timestamp = u64;

/// Metadata of a page occupying a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidentRecord {
    pub process_id: usize,
    pub page_num: usize,
    pub last_accessed: Timestamp,
}

impl ResidentRecord {
    pub fn new(process_id: usize, page_num: usize, last_accessed: Timestamp) -> Self {
        ResidentRecord { process_id, page_num, last_accessed }
    }

    #[inline]
    pub fn is_page(&self, process_id: usize, page_num: usize) -> bool {
        self.process_id == process_id && self.page_num == page_num
    }
}

impl std::fmt::Display for ResidentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.process_id, self.page_num, self.last_accessed)
    }
}

/// Residency map of every (process, page) pair
pub struct PageTable {
    pages_per_process: usize,
    /// Row-major: entries[process * pages_per_process + page]
    entries: Vec<Option<usize>>,
}

impl PageTable {
    /// Create a page table with every page non-resident
    pub fn new(processes: usize, pages_per_process: usize) -> Self {
        PageTable {
            pages_per_process,
            entries: vec![None; processes * pages_per_process],
        }
    }

    #[inline]
    fn index(&self, process: usize, page: usize) -> usize {
        debug_assert!(page < self.pages_per_process, "page {} out of range", page);
        process * self.pages_per_process + page
    }

    /// Frame currently holding the page, if any
    #[inline]
    pub fn lookup(&self, process: usize, page: usize) -> Option<usize> {
        self.entries[self.index(process, page)]
    }

    pub fn bind(&mut self, process: usize, page: usize, frame: usize) {
        let idx = self.index(process, page);
        self.entries[idx] = Some(frame);
    }

    pub fn unbind(&mut self, process: usize, page: usize) {
        let idx = self.index(process, page);
        self.entries[idx] = None;
    }

    pub fn processes(&self) -> usize {
        self.entries.len() / self.pages_per_process
    }

    pub fn pages_per_process(&self) -> usize {
        self.pages_per_process
    }

    /// Entries of one process, indexed by page number
    pub fn row(&self, process: usize) -> &[Option<usize>] {
        let start = process * self.pages_per_process;
        &self.entries[start..start + self.pages_per_process]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<usize>]> {
        self.entries.chunks(self.pages_per_process)
    }

    pub fn resident_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

/// Physical frames, each holding at most one resident page
pub struct FrameTable {
    frames: Vec<Option<ResidentRecord>>,
}

impl FrameTable {
    /// Create a frame table with every frame empty
    pub fn new(frames: usize) -> Self {
        FrameTable { frames: vec![None; frames] }
    }

    /// Lowest-indexed empty frame
    pub fn first_free(&self) -> Option<usize> {
        self.frames.iter().position(Option::is_none)
    }

    /// Place a record in a frame, replacing whatever was there
    pub fn occupy(&mut self, frame: usize, record: ResidentRecord) {
        self.frames[frame] = Some(record);
    }

    /// Empty a frame, returning its prior occupant
    pub fn vacate(&mut self, frame: usize) -> Option<ResidentRecord> {
        self.frames[frame].take()
    }

    /// Refresh the timestamp of an occupied frame
    pub fn touch(&mut self, frame: usize, timestamp: Timestamp) {
        match self.frames[frame].as_mut() {
            Some(record) => record.last_accessed = timestamp,
            None => panic!("touch on empty frame {}", frame),
        }
    }

    #[inline]
    pub fn get(&self, frame: usize) -> Option<&ResidentRecord> {
        self.frames[frame].as_ref()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Occupied frames in ascending index order
    pub fn resident(&self) -> impl Iterator<Item = (usize, &ResidentRecord)> {
        self.frames
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|r| (i, r)))
    }

    pub fn resident_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&ResidentRecord>> {
        self.frames.iter().map(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_table_initialization() {
        let pt = PageTable::new(4, 4);
        assert_eq!(pt.processes(), 4);
        assert_eq!(pt.pages_per_process(), 4);
        assert_eq!(pt.resident_count(), 0);
        for p in 0..4 {
            for k in 0..4 {
                assert_eq!(pt.lookup(p, k), None);
            }
        }
    }

    #[test]
    fn test_page_table_bind_unbind() {
        let mut pt = PageTable::new(4, 4);
        pt.bind(2, 3, 7);
        assert_eq!(pt.lookup(2, 3), Some(7));
        assert_eq!(pt.row(2), &[None, None, None, Some(7)]);

        // Neighbouring entries are untouched
        assert_eq!(pt.lookup(3, 0), None);
        assert_eq!(pt.lookup(2, 2), None);

        pt.unbind(2, 3);
        assert_eq!(pt.lookup(2, 3), None);
    }

    #[test]
    fn test_page_table_rows() {
        let mut pt = PageTable::new(2, 3);
        pt.bind(0, 1, 4);
        pt.bind(1, 0, 5);
        let rows: Vec<&[Option<usize>]> = pt.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[None, Some(4), None]);
        assert_eq!(rows[1], &[Some(5), None, None]);
    }

    #[test]
    fn test_first_free_lowest_index() {
        let mut ft = FrameTable::new(4);
        assert_eq!(ft.first_free(), Some(0));

        ft.occupy(0, ResidentRecord::new(0, 0, 0));
        ft.occupy(2, ResidentRecord::new(0, 1, 1));
        assert_eq!(ft.first_free(), Some(1));

        ft.occupy(1, ResidentRecord::new(0, 2, 2));
        ft.occupy(3, ResidentRecord::new(0, 3, 3));
        assert_eq!(ft.first_free(), None);
    }

    #[test]
    fn test_vacate_returns_prior_occupant() {
        let mut ft = FrameTable::new(2);
        let record = ResidentRecord::new(1, 2, 9);
        ft.occupy(1, record);

        assert_eq!(ft.vacate(1), Some(record));
        assert_eq!(ft.vacate(1), None);
        assert_eq!(ft.first_free(), Some(0));
    }

    #[test]
    fn test_touch_keeps_occupant() {
        let mut ft = FrameTable::new(2);
        ft.occupy(0, ResidentRecord::new(3, 1, 2));
        ft.touch(0, 17);

        let record = ft.get(0).unwrap();
        assert!(record.is_page(3, 1));
        assert_eq!(record.last_accessed, 17);
    }

    #[test]
    #[should_panic]
    fn test_touch_empty_frame_panics() {
        let mut ft = FrameTable::new(2);
        ft.touch(1, 5);
    }

    #[test]
    fn test_resident_iteration_order() {
        let mut ft = FrameTable::new(5);
        ft.occupy(3, ResidentRecord::new(0, 0, 1));
        ft.occupy(1, ResidentRecord::new(1, 0, 2));

        let frames: Vec<usize> = ft.resident().map(|(i, _)| i).collect();
        assert_eq!(frames, vec![1, 3]);
        assert_eq!(ft.resident_count(), 2);
        assert_eq!(ft.len(), 5);
    }

    #[test]
    fn test_record_display() {
        assert_eq!(ResidentRecord::new(2, 1, 9).to_string(), "2,1,9");
    }
}
