use std::fs;
use std::path::Path;

use log::warn;

use crate::config::ReportLayout;
use crate::constants::*;
use crate::error::{Error, Result};
use crate::memory::{FrameTable, PageTable};

/// Validated sequence of process ids, in access order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    events: Vec<usize>,
}

impl Trace {
    pub fn from_file<P: AsRef<Path>>(path: P, processes: usize) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, processes)
    }

    /// Tokenize and bounds-check a whole trace
    ///
    /// Tokens are separated by whitespace. The first token that is not an
    /// integer, or whose value is outside `[0, processes)`, rejects the
    /// entire trace.
    pub fn parse(content: &str, processes: usize) -> Result<Self> {
        let mut events = Vec::new();

        for (position, token) in content.split_whitespace().enumerate() {
            if !is_integer(token) {
                return Err(Error::MalformedToken { token: token.to_string(), position });
            }

            // Integers too wide for i64 are out of range like any other
            let process = token.parse::<i64>().ok().and_then(|v| usize::try_from(v).ok());
            match process {
                Some(process) if process < processes => events.push(process),
                _ => {
                    return Err(Error::ProcessOutOfRange {
                        value: token.to_string(),
                        position,
                        processes,
                    });
                }
            }
        }

        if events.is_empty() {
            warn!("trace contains no accesses");
        }

        Ok(Trace { events })
    }

    pub fn events(&self) -> &[usize] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Optional sign followed by at least one ASCII digit
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Render the final page table and frame table
pub fn render_report(page_table: &PageTable, frame_table: &FrameTable, layout: ReportLayout) -> String {
    let mut out = String::new();

    for row in page_table.rows() {
        let values: Vec<String> = row
            .iter()
            .map(|entry| entry.unwrap_or(NOT_RESIDENT).to_string())
            .collect();
        out.push_str(&values.join(", "));
        out.push('\n');
    }

    let copies = match layout {
        ReportLayout::Compact => 1,
        ReportLayout::Legacy => LEGACY_SLOTS_PER_FRAME,
    };

    for slot in frame_table.iter() {
        let entry = match (slot, layout) {
            (Some(r), ReportLayout::Compact) => r.to_string(),
            (Some(r), ReportLayout::Legacy) => {
                format!("{}, {}, {}", r.process_id, r.page_num, r.last_accessed)
            }
            (None, _) => EMPTY_FRAME.to_string(),
        };
        for _ in 0..copies {
            out.push_str(&entry);
            out.push_str("; ");
        }
    }

    if layout == ReportLayout::Compact {
        out.push('\n');
    }

    out
}

pub fn write_report<P: AsRef<Path>>(
    path: P,
    page_table: &PageTable,
    frame_table: &FrameTable,
    layout: ReportLayout,
) -> Result<()> {
    let path = path.as_ref();
    let content = render_report(page_table, frame_table, layout);
    fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
