//! Page window selection: which page buttons a pagination control shows

mod calculator;
mod math;

pub use calculator::{PageDescriptor, PageKind, PageList, PageWindow};
pub use math::{clamp, ItemRange};
