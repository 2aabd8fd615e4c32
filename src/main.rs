#[macro_use]
extern crate log;

use {
    atlas_font::{bake::bake_font, Error},
    pretty_env_logger::init,
    std::{
        env::{args, current_dir},
        io::{Error as IoError, ErrorKind},
        path::PathBuf,
        process::exit,
    },
};

fn main() {
    // Enable logging
    init();

    if let Err(err) = run() {
        error!("{}", err);
        exit(1);
    }
}

fn run() -> Result<(), Error> {
    // What to bake (the input font asset)
    let asset_arg = args().nth(1).ok_or_else(|| {
        IoError::new(
            ErrorKind::InvalidInput,
            "No font asset specified; re-run this command with the name of an asset file as the \
            argument. Example: `atlas-font-bake my_font.toml`",
        )
    })?;

    let asset_path = current_dir()?.join(&asset_arg).canonicalize()?;

    // Where to put the baked .pak; defaults to next to the asset
    let pak_dir = match args().nth(2) {
        Some(pak_arg) => PathBuf::from(pak_arg),
        None => asset_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default(),
    };

    debug!("Baking font `{}`", asset_path.display());
    debug!("Output directory `{}`", pak_dir.display());

    let pak_path = bake_font(&asset_path, &pak_dir)?;

    info!("Baked `{}`", pak_path.display());

    Ok(())
}
