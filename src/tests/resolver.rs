use image::{Rgb, Rgba};

use crate::{
    dithering::error_diffusion::{PixelError, find_color},
    error::DitherflowError,
    tests::utils::black_white,
};

#[test]
fn test_empty_palette_is_rejected() {
    let result = find_color(PixelError::default(), Rgba([0, 0, 0, 255]), &[]);
    assert!(matches!(result, Err(DitherflowError::EmptyPalette)));
}

#[test]
fn test_single_entry_palette() {
    let palette = vec![Rgb([10u8, 20, 30])];
    let (index, residual, distance) =
        find_color(PixelError::default(), Rgba([200, 100, 50, 255]), &palette).unwrap();

    assert_eq!(index, 0);
    // residual is exactly (source + damped zero error) - entry
    assert_eq!(residual.r, 190.0);
    assert_eq!(residual.g, 80.0);
    assert_eq!(residual.b, 20.0);
    assert!(residual.is_set());
    assert_eq!(distance, 290);
}

#[test]
fn test_nearest_by_manhattan_distance() {
    let palette = black_white();

    // (200,100,50): distance to black is 350, to white is 415
    let (index, _, distance) =
        find_color(PixelError::default(), Rgba([200, 100, 50, 255]), &palette).unwrap();
    assert_eq!(index, 0);
    assert_eq!(distance, 350);

    let (index, _, _) =
        find_color(PixelError::default(), Rgba([250, 200, 180, 255]), &palette).unwrap();
    assert_eq!(index, 1);
}

#[test]
fn test_ties_resolve_to_earliest_index() {
    let gray = Rgb([128u8, 128, 128]);
    let palette = vec![gray, gray, gray];

    let (index, _, distance) =
        find_color(PixelError::default(), Rgba([128, 128, 128, 255]), &palette).unwrap();
    assert_eq!(index, 0);
    assert_eq!(distance, 0);
}

#[test]
fn test_error_is_damped_before_use() {
    let palette = vec![Rgb([0u8, 0, 0])];

    // accumulated error of 100 is damped to 75 and truncated
    let (_, residual, _) = find_color(
        PixelError::new(100.0, 100.0, 100.0),
        Rgba([0, 0, 0, 255]),
        &palette,
    )
    .unwrap();
    assert_eq!(residual.r, 75.0);

    // truncation toward zero, not rounding: 10 * 0.75 = 7.5 -> 7
    let (_, residual, _) = find_color(
        PixelError::new(10.0, 10.0, 10.0),
        Rgba([0, 0, 0, 255]),
        &palette,
    )
    .unwrap();
    assert_eq!(residual.r, 7.0);
}

#[test]
fn test_negative_error_pulls_choice_down() {
    let palette = black_white();

    // source 160 alone picks white; error of -80 damps to -60,
    // working value 100 picks black
    let (index, _, _) = find_color(
        PixelError::new(-80.0, -80.0, -80.0),
        Rgba([160, 160, 160, 255]),
        &palette,
    )
    .unwrap();
    assert_eq!(index, 0);
}

#[test]
fn test_working_value_may_leave_channel_range() {
    let palette = black_white();

    // working value 255 + 150 = 405, distances computed without clamping
    let (index, residual, distance) = find_color(
        PixelError::new(200.0, 200.0, 200.0),
        Rgba([255, 255, 255, 255]),
        &palette,
    )
    .unwrap();
    assert_eq!(index, 1);
    assert_eq!(distance, 450);
    assert_eq!(residual.r, 150.0);
}
