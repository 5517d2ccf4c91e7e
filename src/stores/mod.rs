//! DurableStore implementations.

pub mod fs;
pub mod mem;
