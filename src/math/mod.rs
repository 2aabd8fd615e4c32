//! Vector types used by fonts, re-exported from [`glam`].

pub use glam::{vec2, Vec2};

/// Returns `true` if the given vector is neither infinite nor `NaN`.
#[inline]
pub fn vec2_is_finite(val: Vec2) -> bool {
    // Saturating casts let this be two `and` instructions instead of branches
    let x = val.x.is_finite() as u8;
    let y = val.y.is_finite() as u8;

    x * y == 1
}
