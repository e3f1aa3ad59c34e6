//! Input/output helpers.
//!
//! - kernel JSON read/write (`kernel_file`)
//! - dense CSV matrix export (`export`)

pub mod export;
pub mod kernel_file;

pub use export::*;
pub use kernel_file::*;
