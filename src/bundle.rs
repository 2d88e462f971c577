//! Multi-resolution ICO assembly
//!
//! The bundle starts from a 16x16 frame rendered in memory and appends each
//! icon PNG already written to disk. A missing PNG is skipped rather than
//! treated as fatal, so a partial icon set still yields a usable bundle.

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::icon::render_tiny_icon;
use crate::output::{load_png, OutputError};

/// Frame sizes loaded from the PNG set, in addition to the 16x16 frame.
pub const FRAME_SIZES: [u32; 5] = [32, 48, 64, 128, 256];

/// Assemble a multi-resolution ICO file from the PNGs in `png_dir`.
///
/// Returns the number of frames written (the 16x16 frame plus one per PNG
/// found on disk).
pub fn assemble_ico(png_dir: &Path, ico_path: &Path) -> Result<usize, OutputError> {
    let mut dir = IconDir::new(ResourceType::Icon);

    add_frame(&mut dir, render_tiny_icon())?;

    for size in FRAME_SIZES {
        let path = png_dir.join(format!("icon_{}.png", size));
        if !path.exists() {
            continue;
        }
        add_frame(&mut dir, load_png(&path)?)?;
    }

    let count = dir.entries().len();
    let file = File::create(ico_path)?;
    dir.write(file)?;
    Ok(count)
}

fn add_frame(dir: &mut IconDir, image: RgbaImage) -> io::Result<()> {
    let (width, height) = image.dimensions();
    let frame = IconImage::from_rgba_data(width, height, image.into_raw());
    dir.add_entry(IconDirEntry::encode(&frame)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::render_icon;
    use crate::output::save_png;
    use tempfile::tempdir;

    fn read_frame_sizes(path: &Path) -> Vec<u32> {
        let file = File::open(path).unwrap();
        let dir = IconDir::read(file).unwrap();
        dir.entries().iter().map(|e| e.width()).collect()
    }

    #[test]
    fn test_assemble_ico_full_set() {
        let dir = tempdir().unwrap();
        let png_dir = dir.path().join("png");
        for size in FRAME_SIZES {
            save_png(&render_icon(size), &png_dir.join(format!("icon_{}.png", size))).unwrap();
        }

        let ico_path = dir.path().join("canview.ico");
        let count = assemble_ico(&png_dir, &ico_path).unwrap();
        assert_eq!(count, 6);

        let mut sizes = read_frame_sizes(&ico_path);
        sizes.sort_unstable();
        assert_eq!(sizes, vec![16, 32, 48, 64, 128, 256]);
    }

    #[test]
    fn test_assemble_ico_skips_missing_pngs() {
        let dir = tempdir().unwrap();
        let png_dir = dir.path().join("png");
        save_png(&render_icon(32), &png_dir.join("icon_32.png")).unwrap();
        save_png(&render_icon(48), &png_dir.join("icon_48.png")).unwrap();

        let ico_path = dir.path().join("canview.ico");
        let count = assemble_ico(&png_dir, &ico_path).unwrap();
        assert_eq!(count, 3);

        let mut sizes = read_frame_sizes(&ico_path);
        sizes.sort_unstable();
        assert_eq!(sizes, vec![16, 32, 48]);
    }

    #[test]
    fn test_assemble_ico_tiny_frame_only() {
        // No PNGs on disk at all: the bundle still carries the 16x16 frame.
        let dir = tempdir().unwrap();
        let ico_path = dir.path().join("canview.ico");
        let count = assemble_ico(&dir.path().join("png"), &ico_path).unwrap();
        assert_eq!(count, 1);
        assert_eq!(read_frame_sizes(&ico_path), vec![16]);
    }

    #[test]
    fn test_assemble_ico_unwritable_path() {
        let dir = tempdir().unwrap();
        // Target directory does not exist, so creating the file fails.
        let ico_path = dir.path().join("absent").join("canview.ico");
        assert!(assemble_ico(&dir.path().join("png"), &ico_path).is_err());
    }
}
