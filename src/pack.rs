use crate::glyph;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Rasterizes one frame per entry in `sizes`, preserving the given order,
/// and announces each frame on stdout.
fn render_frames(sizes: &[u32]) -> Vec<RgbaImage> {
    let mut frames = Vec::with_capacity(sizes.len());
    for &size in sizes {
        println!("  - Generating {}x{} size (optimized for clarity)", size, size);
        frames.push(glyph::rasterize(size));
    }
    frames
}

/// Bundles the frames into one multi-resolution ICO file at `path`, keeping
/// their order.
fn write_ico(frames: &[RgbaImage], path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for frame in frames {
        let icon_image =
            IconImage::from_rgba_data(frame.width(), frame.height(), frame.as_raw().clone());
        icon_dir.add_entry(IconDirEntry::encode(&icon_image)?);
    }
    let file = BufWriter::new(File::create(path)?);
    icon_dir.write(file)?;
    Ok(())
}

/// Rasterizes every size in order, writes the ICO container to `ico_path`,
/// then writes the largest frame as a PNG preview to `png_path`. Any
/// filesystem or encoder failure propagates unhandled.
pub fn generate(
    sizes: &[u32],
    ico_path: &Path,
    png_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating high-clarity icons...");
    let frames = render_frames(sizes);
    let preview = frames.last().ok_or("no sizes to pack")?;

    println!("Saving ICO file to: {}", ico_path.display());
    write_ico(&frames, ico_path)?;
    preview.save(png_path)?;

    println!("Icon generation completed!");
    println!("   ICO file: {}", ico_path.display());
    println!("   PNG preview: {}", png_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    const SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 256];

    #[test]
    fn test_render_frames_keeps_size_order() {
        let frames = render_frames(SIZES);
        assert_eq!(frames.len(), 7);
        for (frame, &size) in frames.iter().zip(SIZES) {
            assert_eq!(frame.width(), size);
            assert_eq!(frame.height(), size);
        }
    }

    #[test]
    fn test_generate_writes_ico_and_png() {
        let dir = tempfile::tempdir().unwrap();
        let ico_path = dir.path().join("gsou_icon.ico");
        let png_path = dir.path().join("gsou_icon_256.png");

        generate(SIZES, &ico_path, &png_path).unwrap();

        let reader = BufReader::new(File::open(&ico_path).unwrap());
        let icon_dir = IconDir::read(reader).unwrap();
        assert_eq!(icon_dir.entries().len(), SIZES.len());
        for (entry, &size) in icon_dir.entries().iter().zip(SIZES) {
            assert_eq!(entry.width(), size);
            assert_eq!(entry.height(), size);
        }

        // Stored frames round-trip to the rasterizer's exact pixels.
        let smallest = icon_dir.entries()[0].decode().unwrap();
        assert_eq!(smallest.rgba_data(), glyph::rasterize(16).as_raw().as_slice());
        let largest = icon_dir.entries()[6].decode().unwrap();
        assert_eq!(largest.rgba_data(), glyph::rasterize(256).as_raw().as_slice());

        // The PNG preview equals the 256 frame, pixel for pixel.
        let preview = image::open(&png_path).unwrap().to_rgba8();
        assert_eq!(preview, glyph::rasterize(256));
    }

    #[test]
    fn test_generate_rejects_empty_size_list() {
        let dir = tempfile::tempdir().unwrap();
        let ico_path = dir.path().join("gsou_icon.ico");
        let png_path = dir.path().join("gsou_icon_256.png");

        assert!(generate(&[], &ico_path, &png_path).is_err());
        assert!(!ico_path.exists());
        assert!(!png_path.exists());
    }

    #[test]
    fn test_generate_propagates_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let ico_path = missing.join("gsou_icon.ico");
        let png_path = missing.join("gsou_icon_256.png");

        assert!(generate(&[16], &ico_path, &png_path).is_err());
    }
}
