use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "wallgen", version)]
#[command(about = "Generates simple, nice looking wallpapers through argument variation.")]
struct Cli {
    /// Screen resolution width [px].
    #[arg(long)]
    width: u32,

    /// Screen resolution height [px].
    #[arg(long)]
    height: u32,

    /// Number of circles drawn.
    #[arg(long, default_value_t = 0)]
    circles: u32,

    /// Number of wave bands drawn.
    #[arg(long, default_value_t = 0)]
    waves: u32,

    /// Draw a random number of circles and waves (max. 5000 each),
    /// overriding --circles and --waves.
    #[arg(long)]
    random: bool,

    /// Draw quads in the background.
    #[arg(long)]
    quads: bool,

    /// Draw a dot raster.
    #[arg(long)]
    dots: bool,

    /// Draw a striped background.
    #[arg(long)]
    stripes: bool,

    /// Overlay a diagonal gradient on the background.
    #[arg(long)]
    gradient: bool,

    /// Omit the logo panel.
    #[arg(long)]
    nologo: bool,

    /// Horizontal alignment of the logo panel.
    #[arg(long = "logopos", value_enum, default_value_t = AlignmentChoice::Center)]
    logopos: AlignmentChoice,

    /// Baseline distribution for the primary wave.
    #[arg(long = "wave-baseline", value_enum, default_value_t = BaselineChoice::Uniform)]
    wave_baseline: BaselineChoice,

    /// Logo SVG path.
    #[arg(long, default_value = wallgen::config::DEFAULT_LOGO_FILE)]
    logo: PathBuf,

    /// Path of the generated wallpaper.
    #[arg(long, default_value = wallgen::config::DEFAULT_OUT_FILE)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignmentChoice {
    Left,
    Center,
    Right,
}

impl From<AlignmentChoice> for wallgen::LogoAlignment {
    fn from(c: AlignmentChoice) -> Self {
        match c {
            AlignmentChoice::Left => Self::Left,
            AlignmentChoice::Center => Self::Center,
            AlignmentChoice::Right => Self::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BaselineChoice {
    Uniform,
    Lower,
}

impl From<BaselineChoice> for wallgen::WaveBaseline {
    fn from(c: BaselineChoice) -> Self {
        match c {
            BaselineChoice::Uniform => Self::Uniform,
            BaselineChoice::Lower => Self::LowerBiased,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_logo_alignment() {
        let args = ["wallgen", "--width", "10", "--height", "10", "--logopos", "up"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn rejects_malformed_numeric_arguments() {
        assert!(Cli::try_parse_from(["wallgen", "--width", "abc", "--height", "10"]).is_err());
        assert!(Cli::try_parse_from(["wallgen", "--width", "10", "--height", "1.5"]).is_err());
        assert!(Cli::try_parse_from(["wallgen", "--width", "10", "--height", "10", "--circles", "-3"]).is_err());
    }

    #[test]
    fn requires_both_dimensions() {
        assert!(Cli::try_parse_from(["wallgen"]).is_err());
        assert!(Cli::try_parse_from(["wallgen", "--width", "10"]).is_err());
        assert!(Cli::try_parse_from(["wallgen", "--height", "10"]).is_err());
    }

    #[test]
    fn parses_a_full_argument_set() {
        let cli = Cli::try_parse_from([
            "wallgen", "--width", "1920", "--height", "1080", "--circles", "200", "--waves",
            "30", "--stripes", "--logopos", "right", "--out", "w.png",
        ])
        .unwrap();
        assert_eq!(cli.width, 1920);
        assert_eq!(cli.height, 1080);
        assert_eq!(cli.circles, 200);
        assert_eq!(cli.waves, 30);
        assert!(cli.stripes);
        assert!(!cli.quads);
        assert!(matches!(cli.logopos, AlignmentChoice::Right));
        assert_eq!(cli.out, PathBuf::from("w.png"));
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = wallgen::Config::new(cli.width, cli.height);
    config.circles = cli.circles;
    config.waves = cli.waves;
    config.quads = cli.quads;
    config.dots = cli.dots;
    config.stripes = cli.stripes;
    config.gradient = cli.gradient;
    config.no_logo = cli.nologo;
    config.alignment = cli.logopos.into();
    config.wave_baseline = cli.wave_baseline.into();
    config.logo_path = cli.logo;
    config.out_file = cli.out;

    if cli.random {
        config.randomize_counts()?;
        info!(
            circles = config.circles,
            waves = config.waves,
            "random mode"
        );
    }

    let pipeline = wallgen::Pipeline::new(config)?;
    let mut rng = wallgen::RandomSource::new();
    let frame = pipeline.render(&mut rng)?;

    let out = &pipeline.config().out_file;
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame.write_png(out)?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
