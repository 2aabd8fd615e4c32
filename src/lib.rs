//! _Atlas Font_ describes how a bitmap font is laid out inside a texture atlas.
//!
//! A [`Font`] is an immutable value holding:
//! - The UV offset of the cell for character code `0`
//! - The UV size of a single character cell
//! - The default on-screen size of a rendered symbol
//! - Optionally, the relative width of each of the 256 character codes
//!
//! Fonts without relative widths are _monospaced_. Text layout and rendering are left to whatever
//! consumes the font; this crate only carries the data.
//!
//! # Usage
//!
//! ```
//! use atlas_font::prelude::*;
//!
//! let font = FontBuilder::new()
//!     .letter_widths(vec![1.0, 0.5, 0.75])
//!     .build();
//!
//! assert!(!font.monospaced());
//! assert_eq!(font.letter_width(1), Ok(0.5));
//! assert_eq!(font.letter_width(3), Ok(0.0));
//! assert!(font.letter_width(256).is_err());
//! ```
//!
//! ## `.pak` File Format
//!
//! Built fonts may be written to and read from `.pak` files using the [`pak`] module. With the
//! `bake` feature (enabled by default) fonts may also be described by `.toml` asset files and
//! baked using the `atlas-font-bake` program:
//!
//! ```toml
//! [font]
//! uv-symbol-size = [0.0625, 0.0625]
//! symbol-size = [8.0, 16.0]
//! letter-widths = [1.0, 0.5, 0.75]
//! compression = "snap"
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

#[cfg(feature = "bake")]
pub mod bake;

pub mod math;
pub mod pak;

mod error;
mod font;

pub use self::{
    error::{Error, LetterWidthError},
    font::{Font, FontBuilder, LetterWidths, LETTER_COUNT},
};

/// Things which are used in almost every program which uses fonts.
pub mod prelude {
    pub use super::{
        math::{vec2, Vec2},
        Error, Font, FontBuilder, LetterWidthError,
    };
}
