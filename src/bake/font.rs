use {
    super::FontAsset,
    crate::{error::Error, pak::write_font_file},
    std::{
        fs::create_dir_all,
        io::{Error as IoError, ErrorKind},
        path::{Path, PathBuf},
    },
};

#[cfg(debug_assertions)]
use {
    num_format::{Locale, ToFormattedString},
    std::fs::metadata,
};

/// Reads a `.toml` font asset and writes the built font into `pak_dir` as a `.pak` file of the
/// same name.
///
/// Returns the path of the `.pak` file.
pub fn bake_font<P1: AsRef<Path>, P2: AsRef<Path>>(
    asset_filename: P1,
    pak_dir: P2,
) -> Result<PathBuf, Error> {
    let asset_filename = asset_filename.as_ref();
    let pak_dir = pak_dir.as_ref();

    info!("Processing asset: {}", asset_filename.display());

    let asset = FontAsset::read(asset_filename)?;
    let font = asset.builder().build();

    // Create the output directory as needed
    if !pak_dir.exists() {
        create_dir_all(pak_dir)?;
    }

    let mut pak_filename = asset_filename
        .file_stem()
        .ok_or_else(|| IoError::new(ErrorKind::InvalidInput, "asset has no file name"))?
        .to_owned();
    pak_filename.push(".pak");

    let pak_path = pak_dir.join(pak_filename);
    write_font_file(&font, asset.compression(), &pak_path)?;

    #[cfg(debug_assertions)]
    debug!(
        "Wrote `{}` ({} bytes)",
        pak_path.display(),
        metadata(&pak_path)?.len().to_formatted_string(&Locale::en)
    );

    Ok(pak_path)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{pak::read_font_file, FontBuilder},
        std::{
            env::temp_dir,
            fs::{remove_dir_all, write},
            process,
        },
    };

    fn test_dir(name: &str) -> PathBuf {
        let res = temp_dir().join(format!("atlas-font-{}-{}", process::id(), name));
        create_dir_all(&res).unwrap();
        res
    }

    #[test]
    fn bake_proportional_font() {
        let dir = test_dir("bake-proportional");
        let asset_path = dir.join("small.font.toml");
        write(
            &asset_path,
            "[font]\nsymbol-size = [8.0, 8.0]\nletter-widths = [1.0, 0.5]\ncompression = \"snap\"\n",
        )
        .unwrap();

        let pak_path = bake_font(&asset_path, dir.join("out")).unwrap();
        let font = read_font_file(&pak_path).unwrap();

        assert_eq!(pak_path, dir.join("out").join("small.font.pak"));
        assert_eq!(
            font,
            FontBuilder::new()
                .symbol_size(crate::math::vec2(8.0, 8.0))
                .letter_widths(vec![1.0, 0.5])
                .build()
        );

        remove_dir_all(dir).unwrap();
    }

    #[test]
    fn bake_missing_asset() {
        let dir = test_dir("bake-missing");

        assert!(matches!(
            bake_font(dir.join("nope.toml"), &dir),
            Err(Error::Io(_))
        ));

        remove_dir_all(dir).unwrap();
    }
}
