//! Contains functions and types used to bake font assets into `.pak` files.
//!
//! Font assets are `.toml` files which describe how a bitmap font is laid out in its texture:
//!
//! ```toml
//! [font]
//! uv-symbol-offset = [0.0, 0.5]
//! uv-symbol-size = [0.0625, 0.03125]
//! symbol-size = [8.0, 16.0]
//! letter-widths = [1.0, 0.5, 0.75]
//! compression = "snap"
//! ```
//!
//! Every key is optional. Fonts without `letter-widths` are monospaced.

mod asset;
mod font;

pub use self::{asset::FontAsset, font::bake_font};
