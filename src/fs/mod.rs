//! Filesystem utilities for writing the rendered artifact.

pub mod atomic;

pub use atomic::atomic_write_file;
