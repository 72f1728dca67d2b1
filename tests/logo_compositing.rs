use wallgen::{Config, GOLDEN_RATIO, LogoAlignment, LogoAsset, Pipeline, RandomSource};

const LOGO_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="90" height="30">
  <rect x="0" y="0" width="90" height="30" fill="#1793d1"/>
</svg>"##;

fn render_with_logo(alignment: LogoAlignment) -> wallgen::Frame {
    let mut config = Config::new(200, 160);
    config.alignment = alignment;
    let pipeline = Pipeline::new(config).unwrap();
    let mut rng = RandomSource::new();
    let asset = LogoAsset::from_bytes(LOGO_SVG).unwrap();
    pipeline.render_with_logo(&mut rng, Some(asset)).unwrap()
}

fn row_differs_from_background(frame: &wallgen::Frame, y: u32) -> bool {
    let stride = (frame.width as usize) * 4;
    let row = &frame.data[(y as usize) * stride..(y as usize + 1) * stride];
    let bg = &frame.data[..4];
    row.chunks_exact(4).any(|px| px != bg)
}

#[test]
fn panel_band_sits_at_the_golden_ratio_line() {
    let frame = render_with_logo(LogoAlignment::Center);

    let panel_height = 0.17 * 160.0;
    let panel_y = 160.0 / GOLDEN_RATIO - panel_height / 2.0;
    let mid = (panel_y + panel_height / 2.0) as u32;

    assert!(row_differs_from_background(&frame, mid));
    // Rows far above and below the band are untouched background.
    assert!(!row_differs_from_background(&frame, 2));
    assert!(!row_differs_from_background(&frame, 157));
}

#[test]
fn alignment_changes_only_the_horizontal_placement() {
    let left = render_with_logo(LogoAlignment::Left);
    let center = render_with_logo(LogoAlignment::Center);
    let right = render_with_logo(LogoAlignment::Right);

    assert_ne!(left.data, center.data);
    assert_ne!(center.data, right.data);

    // The band's vertical extent is identical: for every row, either all
    // three frames touch it or none does.
    for y in 0..160 {
        let touched = row_differs_from_background(&left, y);
        assert_eq!(touched, row_differs_from_background(&center, y), "row {y}");
        assert_eq!(touched, row_differs_from_background(&right, y), "row {y}");
    }
}

#[test]
fn malformed_svg_is_rejected() {
    assert!(LogoAsset::from_bytes(b"not an svg at all").is_err());
}

#[test]
fn intrinsic_size_comes_from_the_document() {
    let asset = LogoAsset::from_bytes(LOGO_SVG).unwrap();
    let (w, h) = asset.intrinsic_size();
    assert_eq!(w, 90.0);
    assert_eq!(h, 30.0);
}
