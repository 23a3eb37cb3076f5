use std::path::Path;

use garden_planner::prelude::*;
use glam::Vec2;
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honouring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// `per_species` varieties of every species, names repeating so the multiset has duplicates.
pub fn sample_varieties(per_species: usize) -> Vec<PlantVariety> {
    const NAMES: [&str; 3] = ["Dwarf", "Classic", "Trailing"];
    Species::ALL
        .iter()
        .flat_map(|&species| {
            (0..per_species).map(move |i| {
                PlantVariety::new(format!("{} {}", NAMES[i % NAMES.len()], species), species)
            })
        })
        .collect()
}

/// Image settings for [`render_placements_to_png`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub garden_extent: Vec2,
    pub background: [u8; 3],
    /// Dot radius in pixels per garden unit of plant radius.
    pub pixels_per_unit: f32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), garden_extent: Vec2) -> Self {
        let scale = image_size.0 as f32 / garden_extent.x.max(1.0);
        Self {
            image_size,
            garden_extent,
            background: [24, 30, 22],
            pixels_per_unit: scale * 0.45,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }
}

fn species_color(species: Species) -> [u8; 3] {
    match species {
        Species::Rhododendron => [214, 92, 170],
        Species::Geranium => [226, 70, 60],
        Species::Begonia => [245, 190, 80],
    }
}

/// Draw each placement as a filled disc coloured by species.
pub fn render_placements_to_png(
    placements: &[Placement],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    let sx = w as f32 / config.garden_extent.x.max(f32::EPSILON);
    let sy = h as f32 / config.garden_extent.y.max(f32::EPSILON);

    for placement in placements {
        let cx = placement.position.x * sx;
        // Garden y grows upwards, image rows grow downwards.
        let cy = h as f32 - placement.position.y * sy;
        let r = (placement.variety.radius * config.pixels_per_unit).max(1.0);
        let color = Rgb(species_color(placement.variety.species));

        let x0 = (cx - r).floor().max(0.0) as u32;
        let x1 = ((cx + r).ceil() as u32).min(w.saturating_sub(1));
        let y0 = (cy - r).floor().max(0.0) as u32;
        let y1 = ((cy + r).ceil() as u32).min(h.saturating_sub(1));
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if dx * dx + dy * dy <= r * r {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }

    img.save(path)?;
    Ok(())
}
