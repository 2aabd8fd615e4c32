use {
    crate::{
        error::Error,
        font::FontBuilder,
        math::{vec2_is_finite, Vec2},
        pak::{BrotliCompression, Compression as PakCompression},
    },
    serde::Deserialize,
    std::{fs::read_to_string, path::Path, str::FromStr},
    toml::from_str,
};

/// Holds a description of a bitmap font, as read from a `.toml` asset file.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontAsset {
    compression: Option<Compression>,

    // Brotli-specific compression fields
    quality: Option<u32>,
    #[serde(rename = "window-size")]
    window_size: Option<u32>,

    #[serde(rename = "letter-widths")]
    letter_widths: Option<Vec<f32>>,

    #[serde(rename = "symbol-size")]
    symbol_size: Option<[f32; 2]>,

    #[serde(rename = "uv-symbol-offset")]
    uv_symbol_offset: Option<[f32; 2]>,

    #[serde(rename = "uv-symbol-size")]
    uv_symbol_size: Option<[f32; 2]>,
}

impl FontAsset {
    /// Reads a font asset from a `.toml` file.
    pub fn read<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        read_to_string(filename)?.parse()
    }

    /// Creates a builder using the settings of this asset; unset values keep the builder defaults.
    pub fn builder(&self) -> FontBuilder {
        let mut res = FontBuilder::default();

        if let Some(val) = self.uv_symbol_offset {
            res.uv_symbol_offset = Vec2::from(val);
        }

        if let Some(val) = self.uv_symbol_size {
            res.uv_symbol_size = Vec2::from(val);
        }

        if let Some(val) = self.symbol_size {
            res.symbol_size = Vec2::from(val);
        }

        res.letter_widths = self.letter_widths.clone();
        res
    }

    /// The compression to use when baking this font.
    ///
    /// The default is no compression.
    pub fn compression(&self) -> Option<PakCompression> {
        self.compression.map(|compression| match compression {
            Compression::Brotli => PakCompression::Brotli(BrotliCompression {
                quality: self
                    .quality
                    .unwrap_or_else(|| BrotliCompression::default().quality),
                window_size: self
                    .window_size
                    .unwrap_or_else(|| BrotliCompression::default().window_size),
            }),
            Compression::Snap => PakCompression::Snap,
        })
    }

    fn warn_non_finite(&self) {
        let values = [
            ("uv-symbol-offset", self.uv_symbol_offset),
            ("uv-symbol-size", self.uv_symbol_size),
            ("symbol-size", self.symbol_size),
        ];

        for (key, val) in values.iter() {
            if let Some(val) = val {
                if !vec2_is_finite(Vec2::from(*val)) {
                    warn!("Font asset `{}` is not finite: {:?}", key, val);
                }
            }
        }

        if let Some(widths) = &self.letter_widths {
            if widths.iter().any(|width| !width.is_finite()) {
                warn!("Font asset `letter-widths` contains values which are not finite");
            }
        }
    }
}

impl FromStr for FontAsset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let schema: Schema = from_str(s)?;
        schema.font.warn_non_finite();

        Ok(schema.font)
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
enum Compression {
    #[serde(rename = "brotli")]
    Brotli,
    #[serde(rename = "snap")]
    Snap,
}

#[derive(Deserialize)]
struct Schema {
    font: FontAsset,
}
