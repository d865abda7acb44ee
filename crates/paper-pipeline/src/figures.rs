use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Raster, vector and print-ready image formats recognized in source trees.
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "svg", "eps", "pdf",
];

/// Copy every image file found anywhere under `source_root` into a flat
/// `figures_dir`. Name collisions resolve last-write-wins. Returns the
/// number of copies performed (collisions counted each time).
pub fn copy_figures(source_root: &Path, figures_dir: &Path) -> io::Result<usize> {
    fs::create_dir_all(figures_dir)?;

    let mut copied = 0usize;
    for entry in WalkDir::new(source_root).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            continue;
        };
        if !IMAGE_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()) {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        fs::copy(path, figures_dir.join(name))?;
        copied += 1;
    }

    Ok(copied)
}
