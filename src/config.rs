//! Resolved generation parameters and their validation.

use std::path::PathBuf;

use crate::error::{WallgenError, WallgenResult};
use crate::rng::entropy_u32;
use crate::shapes::WaveBaseline;
use crate::surface::MAX_DIM;

/// Cap on the circle count chosen in random mode.
pub const MAX_RANDOM_CIRCLES: u32 = 5000;
/// Cap on the wave count chosen in random mode.
pub const MAX_RANDOM_WAVES: u32 = 5000;
/// Output path used when none is given.
pub const DEFAULT_OUT_FILE: &str = "wallpaper.png";
/// Logo asset used when none is given.
pub const DEFAULT_LOGO_FILE: &str = "assets/logo.svg";

/// Horizontal placement of the logo panel. Closed set; invalid values are
/// rejected at argument-parsing time and never reach the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Everything one generation run needs, produced by the CLI layer.
#[derive(Clone, Debug)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub circles: u32,
    pub waves: u32,
    pub quads: bool,
    pub stripes: bool,
    pub dots: bool,
    pub gradient: bool,
    pub no_logo: bool,
    pub alignment: LogoAlignment,
    pub wave_baseline: WaveBaseline,
    pub out_file: PathBuf,
    pub logo_path: PathBuf,
}

impl Config {
    /// A configuration with required dimensions and all defaults: no shapes,
    /// no patterns, centered logo, `wallpaper.png`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            circles: 0,
            waves: 0,
            quads: false,
            stripes: false,
            dots: false,
            gradient: false,
            no_logo: false,
            alignment: LogoAlignment::default(),
            wave_baseline: WaveBaseline::default(),
            out_file: PathBuf::from(DEFAULT_OUT_FILE),
            logo_path: PathBuf::from(DEFAULT_LOGO_FILE),
        }
    }

    pub fn validate(&self) -> WallgenResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WallgenError::config("width and height must be positive"));
        }
        if self.width > MAX_DIM || self.height > MAX_DIM {
            return Err(WallgenError::config(format!(
                "dimensions {}x{} exceed the {MAX_DIM}x{MAX_DIM} limit",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Random mode: replace the circle and wave counts with OS-entropy
    /// values bounded by the fixed maxima. Does not touch the drawing rng.
    pub fn randomize_counts(&mut self) -> WallgenResult<()> {
        self.circles = entropy_u32()? % MAX_RANDOM_CIRCLES;
        self.waves = entropy_u32()? % MAX_RANDOM_WAVES;
        Ok(())
    }
}
