// ABOUTME: Library module for the gsd-deck program.
// ABOUTME: Contains the presentation model, slide composer and PPTX serializer.

// Reexport modules
pub mod color;
pub mod composer;
pub mod config;
pub mod deck;
pub mod document;
pub mod errors;
pub mod pptx;
pub mod units;
pub mod utils;

// Reexport common types and functions
pub use color::Color;
pub use composer::{BulletStyle, TextStyle};
pub use config::Config;
pub use deck::build_deck;
pub use document::{Alignment, Outline, Paragraph, Presentation, Shape, ShapeKind, Slide, TextFrame};
pub use errors::{DeckError, Result};
pub use pptx::write_pptx;
pub use units::{inches, points, Emu, Geometry};

#[cfg(test)]
mod tests;
