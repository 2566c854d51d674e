pub mod client;

pub use client::{ArchiveSource, HttpArchiveSource};
