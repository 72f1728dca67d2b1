use wallgen::{Config, Pipeline, RandomSource};

fn render(config: Config) -> wallgen::Frame {
    let pipeline = Pipeline::new(config).unwrap();
    let mut rng = RandomSource::new();
    pipeline.render_with_logo(&mut rng, None).unwrap()
}

fn bare_config(width: u32, height: u32) -> Config {
    let mut config = Config::new(width, height);
    config.no_logo = true;
    config
}

#[test]
fn frame_matches_requested_dimensions() {
    let frame = render(bare_config(123, 77));
    assert_eq!(frame.width, 123);
    assert_eq!(frame.height, 77);
    assert_eq!(frame.data.len(), 123 * 77 * 4);
}

#[test]
fn empty_config_yields_the_flat_background_only() {
    let frame = render(bare_config(64, 48));
    let first = &frame.data[..4];
    assert_eq!(first[3], 255);
    // Background grey, quantized.
    assert!((i16::from(first[0]) - 38).abs() <= 1);
    assert!((i16::from(first[1]) - 39).abs() <= 1);
    assert!((i16::from(first[2]) - 33).abs() <= 1);
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, first);
    }
}

#[test]
fn full_layer_stack_is_deterministic() {
    let mut config = bare_config(160, 90);
    config.circles = 25;
    config.waves = 8;
    config.quads = true;
    config.stripes = true;
    config.dots = true;

    let a = render(config.clone());
    let b = render(config);
    assert_eq!(a, b);
}

#[test]
fn shape_layers_change_the_output() {
    let flat = render(bare_config(80, 60));

    let mut config = bare_config(80, 60);
    config.circles = 40;
    config.waves = 10;
    let shaped = render(config);

    assert_ne!(flat.data, shaped.data);
}

#[test]
fn toggling_a_later_stage_advances_the_shared_stream() {
    // Stripes draw before circles, so enabling them must shift every
    // circle parameter drawn from the shared stream.
    let mut with_stripes = bare_config(80, 60);
    with_stripes.circles = 10;
    with_stripes.stripes = true;

    let mut without = bare_config(80, 60);
    without.circles = 10;

    assert_ne!(render(with_stripes).data, render(without).data);
}

#[test]
fn gradient_overlay_is_additive_over_the_flat_fill() {
    let mut config = bare_config(64, 48);
    config.gradient = true;
    let frame = render(config);
    let first = frame.data[..4].to_vec();
    let last = frame.data[frame.data.len() - 4..].to_vec();
    // Opposite corners of the diagonal ramp differ.
    assert_ne!(first, last);
}

#[test]
fn invalid_dimensions_fail_before_any_drawing() {
    assert!(Pipeline::new(Config::new(0, 10)).is_err());
    assert!(Pipeline::new(Config::new(10, 0)).is_err());
}

#[test]
fn missing_logo_file_is_a_fatal_asset_error() {
    let mut config = Config::new(32, 32);
    config.logo_path = "no/such/logo.svg".into();
    let pipeline = Pipeline::new(config).unwrap();
    let mut rng = RandomSource::new();
    assert!(pipeline.render(&mut rng).is_err());
}
