//! PNG rendering of a finished grid
//!
//! The core hands over module identities only; this is the presentation
//! collaborator that turns them into pixels. Each module gets a stable color
//! from a golden-angle hue walk, so the same catalog always renders the same
//! palette regardless of grid contents.

use image::{ImageBuffer, Rgba};

use crate::algorithm::solver::GeneratedGrid;
use crate::io::configuration::PIXELS_PER_CELL;
use crate::io::error::GenerationError;

/// Build a deterministic RGBA color per registry module
pub fn module_palette(module_count: usize) -> Vec<[u8; 4]> {
    (0..module_count)
        .map(|index| {
            // Golden-angle steps keep adjacent registry entries far apart in hue
            let hue = (index as f64 * 137.508) % 360.0;
            hue_to_rgba(hue)
        })
        .collect()
}

fn hue_to_rgba(hue: f64) -> [u8; 4] {
    let sector = hue / 60.0;
    let fraction = sector - sector.floor();
    let rising = (fraction * 255.0) as u8;
    let falling = ((1.0 - fraction) * 255.0) as u8;

    match sector as u32 {
        0 => [255, rising, 40, 255],
        1 => [falling, 255, 40, 255],
        2 => [40, 255, rising, 255],
        3 => [40, falling, 255, 255],
        4 => [rising, 40, 255, 255],
        _ => [255, 40, falling, 255],
    }
}

/// Export a finished grid as a PNG, one colored block per cell
///
/// # Errors
///
/// Returns an error if:
/// - A placement refers past the end of the palette
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    result: &GeneratedGrid,
    palette: &[[u8; 4]],
    output_path: &str,
) -> crate::io::error::Result<()> {
    let width = result.cols as u32 * PIXELS_PER_CELL;
    let height = result.rows as u32 * PIXELS_PER_CELL;
    let mut img = ImageBuffer::new(width, height);

    for placement in &result.placements {
        let rgba = palette.get(placement.module).copied().ok_or_else(|| {
            crate::io::error::invalid_parameter(
                "palette",
                &placement.module,
                &format!("no color for module '{}'", placement.identity),
            )
        })?;
        let color = Rgba(rgba);

        let base_x = placement.col as u32 * PIXELS_PER_CELL;
        let base_y = placement.row as u32 * PIXELS_PER_CELL;
        for dy in 0..PIXELS_PER_CELL {
            for dx in 0..PIXELS_PER_CELL {
                img.put_pixel(base_x + dx, base_y + dy, color);
            }
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
