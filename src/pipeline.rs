//! Layer orchestration.
//!
//! The layer order is fixed: flat background, gradient overlay, quad grid,
//! stripes, circle scatter, wave bands, dot grid, logo panel. Toggles skip
//! a stage entirely; enabled stages share one sequential [`RandomSource`]
//! stream, so output depends on stage order as well as on the draws each
//! stage makes.

use tracing::info;

use crate::background;
use crate::config::Config;
use crate::error::WallgenResult;
use crate::logo::{LogoAsset, compose_logo};
use crate::rng::RandomSource;
use crate::shapes;
use crate::surface::{Frame, Surface};

pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> WallgenResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run a full generation pass, loading the logo from the configured
    /// path unless the logo is disabled. The asset is loaded before any
    /// drawing so asset errors abort with nothing painted.
    pub fn render(&self, rng: &mut RandomSource) -> WallgenResult<Frame> {
        let logo = if self.config.no_logo {
            None
        } else {
            Some(LogoAsset::load(&self.config.logo_path)?)
        };
        self.render_with_logo(rng, logo)
    }

    /// Run a full generation pass with an already-loaded logo asset
    /// (or none, in which case the logo stage is skipped).
    pub fn render_with_logo(
        &self,
        rng: &mut RandomSource,
        logo: Option<LogoAsset>,
    ) -> WallgenResult<Frame> {
        let cfg = &self.config;
        let mut surface = Surface::new(cfg.width, cfg.height)?;

        background::flat_fill(&mut surface);
        if cfg.gradient {
            background::gradient_overlay(&mut surface)?;
        }
        if cfg.quads {
            background::quad_grid(&mut surface, rng);
        }
        if cfg.stripes {
            background::stripes(&mut surface, rng);
        }
        info!("background filled");

        shapes::scatter_circles(&mut surface, rng, cfg.circles);
        info!(count = cfg.circles, "circles drawn");

        shapes::wave_bands(&mut surface, rng, cfg.waves, cfg.wave_baseline);
        info!(count = cfg.waves, "waves drawn");

        if cfg.dots {
            background::dot_grid(&mut surface);
            info!("dot pattern drawn");
        }

        if let Some(asset) = logo {
            compose_logo(&mut surface, asset, cfg.alignment)?;
            info!("logo drawn");
        }

        surface.finish()
    }
}
