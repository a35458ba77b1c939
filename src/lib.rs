//! ChromaWardrobe
//!
//! Clothing catalog API that suggests outfits from color harmony.
//! Color math and scoring live in the `color-harmony` crate; this library
//! exposes the HTTP layer for the binary and for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
