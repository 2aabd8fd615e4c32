//! Contains functions for reading and writing `.pak` font files.
//!
//! A `.pak` font is a built [`Font`] which has been:
//! 1. Serialized using the [`bincode`](https://github.com/servo/bincode) library
//! 1. Optionally compressed using either [`brotli`](https://github.com/dropbox/rust-brotli) or
//!    [`snap`](https://github.com/BurntSushi/rust-snappy)
//!
//! The compression used is stored, uncompressed, at the start of the file so that readers do not
//! need to know it ahead of time.
//!
//! ```
//! use atlas_font::{pak::{read_font, write_font, Compression}, FontBuilder};
//!
//! let font = FontBuilder::new().letter_widths(vec![1.0, 0.5]).build();
//!
//! let mut buf = vec![];
//! write_font(&font, Some(Compression::Snap), &mut buf).unwrap();
//!
//! assert_eq!(read_font(buf.as_slice()).unwrap(), font);
//! ```

use {
    crate::{error::Error, font::Font},
    bincode::{deserialize_from, serialize, serialize_into},
    brotli::{enc::BrotliEncoderParams, BrotliCompress, Decompressor as BrotliReader},
    serde::{Deserialize, Serialize},
    snap::{read::FrameDecoder as SnapReader, write::FrameEncoder as SnapWriter},
    std::{
        fs::File,
        io::{BufReader, BufWriter, Read, Write},
        path::Path,
    },
};

/// Size of the buffer used while decompressing brotli streams, in bytes.
const BROTLI_BUF_SIZE: usize = 4096;

/// Settings for [`brotli`](https://github.com/dropbox/rust-brotli) compression.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BrotliCompression {
    /// Compression quality, from `0` to `11`.
    pub quality: u32,

    /// Base two logarithm of the sliding window size, from `10` to `24`.
    pub window_size: u32,
}

impl Default for BrotliCompression {
    fn default() -> Self {
        Self {
            quality: 10,
            window_size: 20,
        }
    }
}

/// The compression applied to the font data of a `.pak` file.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Compression {
    /// Slower, but smaller.
    Brotli(BrotliCompression),

    /// Faster, but larger.
    Snap,
}

impl Compression {
    fn reader<'r, R: Read + 'r>(compression: Option<Self>, reader: R) -> Box<dyn Read + 'r> {
        // Encoder settings are not needed to decode
        match compression {
            Some(Compression::Brotli(_)) => Box::new(BrotliReader::new(reader, BROTLI_BUF_SIZE)),
            Some(Compression::Snap) => Box::new(SnapReader::new(reader)),
            None => Box::new(reader),
        }
    }
}

impl Default for Compression {
    fn default() -> Self {
        Self::Brotli(Default::default())
    }
}

/// Reads a [`Font`] previously written by [`write_font`].
pub fn read_font<R: Read>(mut reader: R) -> Result<Font, Error> {
    let compression: Option<Compression> = deserialize_from(&mut reader)?;

    trace!("Reading font pak ({:?} compression)", compression);

    let reader = Compression::reader(compression, reader);

    Ok(deserialize_from(reader)?)
}

/// Reads a [`Font`] from a `.pak` file.
pub fn read_font_file<P: AsRef<Path>>(path: P) -> Result<Font, Error> {
    let path = path.as_ref();

    debug!("Reading font `{}`", path.display());

    read_font(BufReader::new(File::open(path)?))
}

/// Writes a [`Font`] using the given compression, or none.
///
/// Every compressed stream is finished before this returns, so a failure to write any part of the
/// font is returned as an error.
pub fn write_font<W: Write>(
    font: &Font,
    compression: Option<Compression>,
    mut writer: W,
) -> Result<(), Error> {
    serialize_into(&mut writer, &compression)?;

    trace!("Writing font pak ({:?} compression)", compression);

    let buf = serialize(font)?;
    match compression {
        Some(Compression::Brotli(b)) => {
            let mut params = BrotliEncoderParams::default();
            params.quality = b.quality as i32;
            params.lgwin = b.window_size as i32;

            BrotliCompress(&mut buf.as_slice(), &mut writer, &params)?;
        }
        Some(Compression::Snap) => {
            // Snappy frames have no trailer: flushing writes the whole stream
            let mut snap = SnapWriter::new(&mut writer);
            snap.write_all(&buf)?;
            snap.flush()?;
        }
        None => writer.write_all(&buf)?,
    }

    writer.flush()?;

    Ok(())
}

/// Writes a [`Font`] to a `.pak` file, replacing any existing file.
pub fn write_font_file<P: AsRef<Path>>(
    font: &Font,
    compression: Option<Compression>,
    path: P,
) -> Result<(), Error> {
    let path = path.as_ref();

    debug!("Writing font `{}`", path.display());

    let mut writer = BufWriter::new(File::create(path)?);
    write_font(font, compression, &mut writer)?;
    writer.flush()?;

    Ok(())
}
