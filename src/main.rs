mod glyph;
mod pack;

use std::fs;
use std::path::Path;
use std::process;

/// Frame edge lengths bundled into the ICO, in the order they are written.
const ICO_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 256];

/// Output locations, relative to the crate root.
const ICO_PATH: &str = "assets/gsou_icon.ico";
const PNG_PATH: &str = "assets/gsou_icon_256.png";

fn main() {
    if let Err(e) = run() {
        eprintln!("icon generation failed: {}", e);
        process::exit(1);
    }
}

/// Resolves the output paths against the crate root, makes sure the assets
/// directory exists, and runs the packer.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ico_path = root.join(ICO_PATH);
    let png_path = root.join(PNG_PATH);

    if let Some(assets_dir) = ico_path.parent() {
        fs::create_dir_all(assets_dir)?;
    }

    pack::generate(ICO_SIZES, &ico_path, &png_path)
}
