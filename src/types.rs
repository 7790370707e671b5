//! Data types used throughout the prismforge library.
//!
//! This module is organized by direction:
//! - [`figma`] - Figma REST API response types (input to the reducer)
//! - [`simplified`] - Reduced tree types (output of the reducer)

pub mod figma;
pub mod simplified;

// Re-export Figma types
pub use figma::{FigmaDocument, FigmaFileResponse, FigmaNode};

// Re-export reduced tree types
pub use simplified::{KeptNode, SimplifiedNode, TextContent, WrapperNode};
