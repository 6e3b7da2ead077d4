//! Diagnostic visualizer: renders a height map and its basins to a PNG.
//! Not part of the main pipeline.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use basin_core::{find_basins, find_low_points, rank_basins, Basin, Cell, HeightMap, SENTINEL};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "visualize", about = "Render a height map with its largest basins highlighted")]
struct Args {
    /// Height map text file.
    input: PathBuf,

    /// Output PNG path.
    #[arg(short, long, default_value = "basins.png")]
    output: PathBuf,

    /// Pixels per cell edge.
    #[arg(short, long, default_value = "8")]
    scale: u32,
}

// ── Colour helpers ────────────────────────────────────────────────────────────

/// Tints for the three largest basins, largest first.
const BASIN_TINTS: [[u8; 3]; 3] = [
    [ 70, 130, 180], // steel blue
    [ 60, 179, 113], // sea green
    [218, 165,  32], // goldenrod
];

const LOW_POINT: [u8; 3] = [220, 30, 30];
const RIDGE: [u8; 3] = [40, 40, 40];

/// Height → grayscale stretched over the map's own range, brighter is higher.
fn gray(value: u8, min: u8, max: u8) -> [u8; 3] {
    let span = u16::from(max.saturating_sub(min)).max(1);
    let c = (60 + u16::from(value - min) * 195 / span) as u8;
    [c, c, c]
}

/// Blend a tint over the height shade so relief stays visible inside basins.
fn tint(shade: [u8; 3], tint: [u8; 3]) -> [u8; 3] {
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = ((shade[i] as u16 + 2 * tint[i] as u16) / 3) as u8;
    }
    out
}

/// Per-cell colours, row-major. `basins` must already be ranked.
fn cell_colours(map: &HeightMap, low_points: &[Cell], basins: &[Basin]) -> Vec<[u8; 3]> {
    let (min, max) = (map.min_height(), map.max_height());
    let shade = |value: u8| gray(value, min, max);

    // Later basins are painted first; each tint starts from the plain shade,
    // so the largest basin wins on shared cells.
    let mut colour: Vec<[u8; 3]> = map
        .cells()
        .map(|c| if c.value >= SENTINEL { RIDGE } else { shade(c.value) })
        .collect();
    for (basin, &basin_tint) in basins.iter().zip(BASIN_TINTS.iter()).rev() {
        for cell in basin.iter() {
            let i = cell.row * map.width() + cell.col;
            colour[i] = tint(shade(cell.value), basin_tint);
        }
    }
    for low in low_points {
        colour[low.row * map.width() + low.col] = LOW_POINT;
    }
    colour
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let scale = args.scale.max(1);

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let map: HeightMap = content
        .parse()
        .with_context(|| format!("parsing {}", args.input.display()))?;

    let low_points = find_low_points(&map);
    let mut basins = find_basins(&map, &low_points);
    rank_basins(&mut basins);
    println!("{} low points, {} basins", low_points.len(), basins.len());

    let colour = cell_colours(&map, &low_points, &basins);

    let w = map.width() as u32 * scale;
    let h = map.height() as u32 * scale;
    let mut img = image::RgbImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let i = (y / scale) as usize * map.width() + (x / scale) as usize;
            img.put_pixel(x, y, image::Rgb(colour[i]));
        }
    }

    img.save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
