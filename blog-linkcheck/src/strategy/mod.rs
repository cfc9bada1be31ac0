//! Document source strategies.
//!
//! Only the filesystem strategy exists. Resolution is already abstracted via
//! `PathProbe`; documents themselves are always read from disk.

pub mod fs;
