//! Shared types for KeyCanvas: addresses, glyphs, patterns and errors.

pub mod address;
pub mod constants;
pub mod error;
pub mod glyph;

pub use address::{Address, AddressKind};
pub use error::{KeyCanvasError, Result};
pub use glyph::{Color, GlyphDescriptor, Pattern, Shape};
