//! Command implementations for hostwire CLI

pub mod add;
pub mod check;
pub mod completions;
pub mod hosts;
pub mod version;
pub mod versions;
