//! Flat buffer protocol for zero-copy WASM bridge
//!
//! Binary format for the page strip, one `u32` array:
//!
//! ```text
//! Header:
//! [0]     MAGIC (0x5057494E = "PWIN" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     total_pages
//! [3]     current_page (0 when empty)
//! [4]     current_item
//! [5]     page_count (number of page records that follow)
//! [6..8]  current range start, end (0, 0 when absent)
//! [8..10] previous range start, end
//! [10..12] next range start, end
//! [12..]  page records
//!
//! Per-page: [page, kind, flags]
//!   kind:  KIND_WINDOW | KIND_LOW_EDGE | KIND_HIGH_EDGE | KIND_MIDDLE
//!   flags: bit0 = current page, bit1 = hidden pages before this one
//! ```

use crate::window::{ItemRange, PageKind, PageWindow};

/// Magic number for format validation: "PWIN"
pub const MAGIC: u32 = 0x5057_494E;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 12;

/// Number of u32 values per page record
pub const U32_PER_PAGE: usize = 3;

/// Opcodes for page kinds
pub const KIND_WINDOW: u32 = 0;
pub const KIND_LOW_EDGE: u32 = 1;
pub const KIND_HIGH_EDGE: u32 = 2;
pub const KIND_MIDDLE: u32 = 3;

/// Flags bitmask
pub const FLAG_CURRENT: u32 = 0b01;
pub const FLAG_GAP_BEFORE: u32 = 0b10;

/// Reusable buffer JS reads through a pointer into linear memory
#[derive(Debug, Default)]
pub struct StripBuffer {
    pub u32_data: Vec<u32>,
}

impl StripBuffer {
    pub fn new() -> Self {
        Self {
            u32_data: Vec::with_capacity(HEADER_SIZE + 16 * U32_PER_PAGE),
        }
    }

    /// Rewrite the buffer for `window`.
    /// JS holds a pointer into this buffer, so re-read the pointer after each call.
    pub fn write(&mut self, window: &PageWindow) {
        self.u32_data.clear();
        self.u32_data
            .reserve(HEADER_SIZE + window.pages.len() * U32_PER_PAGE);

        self.u32_data.push(MAGIC);
        self.u32_data.push(SCHEMA_VERSION);
        self.u32_data.push(to_u32(window.total_pages));
        self.u32_data.push(to_u32(window.current_page));
        self.u32_data.push(to_u32(window.current_item));
        self.u32_data.push(to_u32(window.pages.len()));
        for range in [window.current_range, window.previous_range, window.next_range] {
            self.write_range(range);
        }
        debug_assert_eq!(self.u32_data.len(), HEADER_SIZE);

        let mut previous: Option<usize> = None;
        for desc in &window.pages {
            let mut flags = 0;
            if desc.page == window.current_page {
                flags |= FLAG_CURRENT;
            }
            if previous.is_some_and(|p| desc.page - p > 1) {
                flags |= FLAG_GAP_BEFORE;
            }
            self.u32_data.push(to_u32(desc.page));
            self.u32_data.push(kind_to_opcode(desc.kind));
            self.u32_data.push(flags);
            previous = Some(desc.page);
        }
    }

    fn write_range(&mut self, range: Option<ItemRange>) {
        let (start, end) = range.map_or((0, 0), |r| (to_u32(r.start), to_u32(r.end)));
        self.u32_data.push(start);
        self.u32_data.push(end);
    }

    // Accessors for WASM
    // Return u32 instead of usize for explicit WASM contract
    // (wasm32 linear memory uses u32 offsets)

    pub fn u32_ptr(&self) -> u32 {
        self.u32_data.as_ptr() as usize as u32
    }

    pub fn u32_len(&self) -> u32 {
        to_u32(self.u32_data.len())
    }
}

/// Convert PageKind to its opcode
pub fn kind_to_opcode(kind: PageKind) -> u32 {
    match kind {
        PageKind::Window => KIND_WINDOW,
        PageKind::LowEdge => KIND_LOW_EDGE,
        PageKind::HighEdge => KIND_HIGH_EDGE,
        PageKind::Middle => KIND_MIDDLE,
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
