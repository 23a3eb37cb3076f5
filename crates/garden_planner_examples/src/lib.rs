#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_placements_to_png, sample_varieties, RenderConfig};
