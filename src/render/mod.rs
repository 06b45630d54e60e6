//! Render output: the ordered strip of buttons and gap markers a host draws

mod strip;

pub use strip::{PageStrip, StripItem};
