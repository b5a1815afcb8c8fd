//! Seams to the format decoders and renderers that live outside this crate.

pub mod decoder;
pub mod render;
