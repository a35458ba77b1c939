//! Color types and conversion utilities
//!
//! A [`Color`] is an 8-bit sRGB value whose canonical external form is a
//! `#RRGGBB` hex string. Two derived views are available:
//!
//! - [`Hsl`]: cylindrical hue/saturation/lightness, used to rotate hues
//!   around the color wheel when building harmonies.
//! - [`Lab`]: CIE L*a*b* under D65, used for perceptual distance.
//!
//! # Example
//!
//! ```
//! use color_harmony::{hex_to_hsl, hsl_to_hex, Color};
//!
//! let hsl = hex_to_hsl("#FF0000").unwrap();
//! assert_eq!(hsl_to_hex(hsl.h + 180.0, hsl.s, hsl.l), "#00FFFF");
//!
//! let red: Color = "#F00".parse().unwrap();
//! let cyan: Color = "#0FF".parse().unwrap();
//! assert!(red.to_lab().distance(&cyan.to_lab()) > 50.0);
//! ```

mod hex;
mod hsl;
mod lab;

pub use hex::{normalize_hex, Color};
pub use hsl::{hex_to_hsl, hsl_to_hex, Hsl};
pub use lab::{hex_to_lab, Lab};
