//! wallgen procedurally generates raster wallpapers by compositing visual
//! layers onto a single pixel surface: a filled or patterned background,
//! randomized circle scatter and sine-wave bands, and an optionally aligned
//! vector logo panel. The result is encoded as PNG.
//!
//! Given a fixed [`Config`] the output is byte-identical across runs: every
//! stochastic parameter comes from one deterministic [`RandomSource`]
//! stream that is never reseeded. Random mode only uses OS entropy to pick
//! shape counts, not to seed the stream.
#![forbid(unsafe_code)]

pub mod background;
pub mod color;
pub mod config;
pub mod error;
pub mod logo;
pub mod pipeline;
pub mod rng;
pub mod shapes;
pub mod surface;

pub use color::Rgba;
pub use config::{Config, LogoAlignment, MAX_RANDOM_CIRCLES, MAX_RANDOM_WAVES};
pub use error::{WallgenError, WallgenResult};
pub use logo::{LogoAsset, LogoLayout};
pub use pipeline::Pipeline;
pub use rng::RandomSource;
pub use shapes::WaveBaseline;
pub use surface::{Frame, Surface};

/// Golden ratio, the vertical anchor for the logo panel and the secondary
/// wave baseline.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_7;
