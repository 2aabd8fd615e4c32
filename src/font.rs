use {
    crate::{
        error::LetterWidthError,
        math::{vec2, Vec2},
    },
    serde::{Deserialize, Serialize},
    std::ops::Deref,
};

/// The number of character codes which a [`Font`] may hold relative widths for.
pub const LETTER_COUNT: usize = 256;

/// Holds the relative widths of all 256 character codes of a proportional [`Font`].
///
/// There are always exactly [`LETTER_COUNT`] widths, no matter how many were provided: missing
/// widths are zero and extra widths are dropped.
#[derive(Clone, Deserialize, PartialEq, Serialize)]
#[serde(from = "Vec<f32>", into = "Vec<f32>")]
pub struct LetterWidths(Box<[f32; LETTER_COUNT]>);

impl LetterWidths {
    /// Gets the relative width of the given character code, if it is in range.
    pub fn get(&self, code: u32) -> Option<f32> {
        self.0.get(code as usize).copied()
    }
}

impl Deref for LetterWidths {
    type Target = [f32; LETTER_COUNT];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for LetterWidths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl From<&[f32]> for LetterWidths {
    fn from(widths: &[f32]) -> Self {
        let len = widths.len().min(LETTER_COUNT);
        if widths.len() > LETTER_COUNT {
            warn!(
                "Ignoring {} letter widths past code {}",
                widths.len() - LETTER_COUNT,
                LETTER_COUNT - 1
            );
        }

        let mut res = Box::new([0.0; LETTER_COUNT]);
        res[..len].copy_from_slice(&widths[..len]);

        Self(res)
    }
}

impl From<Vec<f32>> for LetterWidths {
    fn from(widths: Vec<f32>) -> Self {
        Self::from(widths.as_slice())
    }
}

impl From<LetterWidths> for Vec<f32> {
    fn from(widths: LetterWidths) -> Self {
        widths.0.to_vec()
    }
}

/// Describes the layout of a bitmap font within a texture atlas.
///
/// Character cells are `uv_symbol_size` in size, starting from `uv_symbol_offset` for character
/// code `0`. A font is either _monospaced_, in which case every symbol is `symbol_size` wide, or it
/// holds a relative width for each character code.
///
/// Fonts are immutable once built; use a [`FontBuilder`] to create one.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Font {
    uv_symbol_offset: Vec2,
    uv_symbol_size: Vec2,
    symbol_size: Vec2,
    letter_widths: Option<LetterWidths>,
}

impl Font {
    /// Gets the relative width of the symbol for the given character code.
    ///
    /// Returns an error if `code` is outside of `[0, 255]`, or if this font is monospaced and so
    /// has no relative widths at all. Check [`Font::monospaced`] before calling this function.
    pub fn letter_width(&self, code: u32) -> Result<f32, LetterWidthError> {
        if code as usize >= LETTER_COUNT {
            return Err(LetterWidthError::OutOfRange(code));
        }

        let widths = self
            .letter_widths
            .as_ref()
            .ok_or(LetterWidthError::Monospaced)?;

        Ok(widths[code as usize])
    }

    /// The relative widths of all character codes, or `None` for monospaced fonts.
    pub fn letter_widths(&self) -> Option<&LetterWidths> {
        self.letter_widths.as_ref()
    }

    /// Returns `true` if this font has no relative widths.
    pub fn monospaced(&self) -> bool {
        self.letter_widths.is_none()
    }

    /// Default size of a symbol when drawing text with this font.
    pub fn symbol_size(&self) -> Vec2 {
        self.symbol_size
    }

    /// The offset of the cell for character code `0` in the texture, in UV coordinates.
    pub fn uv_symbol_offset(&self) -> Vec2 {
        self.uv_symbol_offset
    }

    /// Size of one character cell in the texture, in UV coordinates.
    pub fn uv_symbol_size(&self) -> Vec2 {
        self.uv_symbol_size
    }
}

/// Collects settings used to create [`Font`]s.
///
/// The fields may be set directly or using the chaining functions of the same name. No values are
/// validated; degenerate sizes are carried into the built fonts as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct FontBuilder {
    /// The offset of the cell for character code `0` in the texture, in UV coordinates.
    ///
    /// The default is `(0, 0)`.
    pub uv_symbol_offset: Vec2,

    /// Size of one character cell in the texture, in UV coordinates.
    ///
    /// The default is `(1/16, 1/16)`, which is a 16x16 grid of cells.
    pub uv_symbol_size: Vec2,

    /// Default size of a symbol when drawing text with built fonts.
    ///
    /// The default is `(1, 1)`.
    pub symbol_size: Vec2,

    /// Relative widths of the symbols, indexed by character code. `None` builds monospaced fonts.
    ///
    /// Only the first 256 widths are used; missing widths are zero.
    pub letter_widths: Option<Vec<f32>>,
}

impl FontBuilder {
    /// Creates a builder with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Font`] from the current settings.
    ///
    /// The builder is left unchanged and may be used again.
    pub fn build(&self) -> Font {
        let letter_widths = self.letter_widths.as_deref().map(LetterWidths::from);

        trace!(
            "Building {} font",
            if letter_widths.is_some() {
                "proportional"
            } else {
                "monospaced"
            }
        );

        Font {
            uv_symbol_offset: self.uv_symbol_offset,
            uv_symbol_size: self.uv_symbol_size,
            symbol_size: self.symbol_size,
            letter_widths,
        }
    }

    /// Sets the relative widths of the symbols.
    pub fn letter_widths(mut self, widths: Vec<f32>) -> Self {
        self.letter_widths = Some(widths);
        self
    }

    /// Removes any relative widths so that built fonts are monospaced.
    pub fn monospaced(mut self) -> Self {
        self.letter_widths = None;
        self
    }

    /// Sets the default size of a symbol.
    pub fn symbol_size(mut self, size: Vec2) -> Self {
        self.symbol_size = size;
        self
    }

    /// Sets the offset of the cell for character code `0`, in UV coordinates.
    pub fn uv_symbol_offset(mut self, offset: Vec2) -> Self {
        self.uv_symbol_offset = offset;
        self
    }

    /// Sets the size of one character cell, in UV coordinates.
    pub fn uv_symbol_size(mut self, size: Vec2) -> Self {
        self.uv_symbol_size = size;
        self
    }
}

impl Default for FontBuilder {
    fn default() -> Self {
        Self {
            uv_symbol_offset: Vec2::ZERO,
            uv_symbol_size: vec2(1.0 / 16.0, 1.0 / 16.0),
            symbol_size: Vec2::ONE,
            letter_widths: None,
        }
    }
}

impl From<&Font> for FontBuilder {
    fn from(font: &Font) -> Self {
        Self {
            uv_symbol_offset: font.uv_symbol_offset,
            uv_symbol_size: font.uv_symbol_size,
            symbol_size: font.symbol_size,
            letter_widths: font.letter_widths.clone().map(Vec::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder() {
        let font = FontBuilder::new().build();

        assert_eq!(font.uv_symbol_size(), vec2(0.0625, 0.0625));
        assert_eq!(font.uv_symbol_offset(), Vec2::ZERO);
        assert_eq!(font.symbol_size(), vec2(1.0, 1.0));
        assert!(font.monospaced());
        assert!(font.letter_widths().is_none());
    }

    #[test]
    fn proportional_font() {
        let font = FontBuilder::new().letter_widths(vec![1.0, 0.5, 0.75]).build();

        assert!(!font.monospaced());
        assert_eq!(font.letter_width(0), Ok(1.0));
        assert_eq!(font.letter_width(1), Ok(0.5));
        assert_eq!(font.letter_width(2), Ok(0.75));
        assert_eq!(font.letter_width(3), Ok(0.0));
        assert_eq!(font.letter_width(255), Ok(0.0));
        assert_eq!(
            font.letter_width(256),
            Err(LetterWidthError::OutOfRange(256))
        );
    }

    #[test]
    fn proportional_font_all_codes() {
        let widths = (0..LETTER_COUNT).map(|i| i as f32 / 4.0).collect::<Vec<_>>();
        let font = FontBuilder::new().letter_widths(widths.clone()).build();

        for code in 0..LETTER_COUNT as u32 {
            assert_eq!(font.letter_width(code), Ok(widths[code as usize]));
        }
    }

    #[test]
    fn monospaced_font_has_no_widths() {
        let font = FontBuilder::new().build();

        assert_eq!(font.letter_width(0), Err(LetterWidthError::Monospaced));
        assert_eq!(font.letter_width(65), Err(LetterWidthError::Monospaced));
        assert_eq!(font.letter_width(255), Err(LetterWidthError::Monospaced));
    }

    #[test]
    fn out_of_range_codes() {
        let monospaced = FontBuilder::new().build();
        let proportional = FontBuilder::new().letter_widths(vec![1.0]).build();

        for &code in &[256, 257, 1024, u32::MAX] {
            assert_eq!(
                monospaced.letter_width(code),
                Err(LetterWidthError::OutOfRange(code))
            );
            assert_eq!(
                proportional.letter_width(code),
                Err(LetterWidthError::OutOfRange(code))
            );
        }
    }

    #[test]
    fn empty_widths_are_proportional() {
        let font = FontBuilder::new().letter_widths(Vec::new()).build();

        assert!(!font.monospaced());
        assert!(font.letter_widths().unwrap().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn extra_widths_are_dropped() {
        let widths = vec![2.0; LETTER_COUNT + 10];
        let font = FontBuilder::new().letter_widths(widths).build();

        assert_eq!(font.letter_widths().unwrap().len(), LETTER_COUNT);
        assert_eq!(font.letter_width(255), Ok(2.0));
        assert!(font.letter_width(256).is_err());
    }

    #[test]
    fn degenerate_geometry_is_kept() {
        let font = FontBuilder::new()
            .uv_symbol_offset(vec2(-1.0, 2.0))
            .uv_symbol_size(Vec2::ZERO)
            .symbol_size(vec2(-3.0, 0.0))
            .build();

        assert_eq!(font.uv_symbol_offset(), vec2(-1.0, 2.0));
        assert_eq!(font.uv_symbol_size(), Vec2::ZERO);
        assert_eq!(font.symbol_size(), vec2(-3.0, 0.0));
    }

    #[test]
    fn builder_is_reusable() {
        let mut builder = FontBuilder::new().letter_widths(vec![0.25, 0.5]);
        builder.symbol_size = vec2(8.0, 16.0);

        let a = builder.build();
        let b = builder.build();

        assert_eq!(a, b);
        assert_eq!(builder.letter_widths, Some(vec![0.25, 0.5]));

        builder.letter_widths = None;
        let c = builder.build();

        assert!(c.monospaced());
        assert!(!a.monospaced());
    }

    #[test]
    fn builder_from_font() {
        let font = FontBuilder::new()
            .uv_symbol_offset(vec2(0.5, 0.0))
            .letter_widths(vec![1.0, 0.5])
            .build();

        assert_eq!(FontBuilder::from(&font).build(), font);
        assert!(FontBuilder::from(&font).monospaced().build().monospaced());
    }
}
