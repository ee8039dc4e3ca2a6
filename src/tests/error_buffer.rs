use crate::{
    dithering::error_diffusion::error_buffer::{ErrorBuffer, PixelError},
    utils::rect::Rect,
};

#[test]
fn test_unwritten_cells_read_as_zero() {
    let buffer = ErrorBuffer::new(Rect::from_size(4, 4));

    for y in 0..4 {
        for x in 0..4 {
            let error = buffer.error_at(x, y);
            assert_eq!(error, PixelError::default());
            assert!(!error.is_set());
        }
    }
}

#[test]
fn test_write_then_read_back() {
    let mut buffer = ErrorBuffer::new(Rect::from_size(4, 4));
    let error = PixelError::new(1.5, -2.0, 3.25);

    buffer.set_error(2, 3, error);

    assert_eq!(buffer.error_at(2, 3), error);
    assert!(buffer.error_at(2, 3).is_set());
}

#[test]
fn test_out_of_range_writes_are_discarded() {
    let mut buffer = ErrorBuffer::new(Rect::from_size(4, 4));
    let error = PixelError::new(7.0, 7.0, 7.0);

    let outside = [
        (-1, 0),
        (0, -1),
        (-3, -3),
        (4, 0),
        (0, 4),
        (4, 4),
        (100, 100),
        (i32::MIN, i32::MAX),
    ];
    for (x, y) in outside {
        buffer.set_error(x, y, error);
        assert_eq!(buffer.error_at(x, y), PixelError::default());
    }

    // in-range cells stay untouched as well
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(buffer.error_at(x, y), PixelError::default());
        }
    }
}

#[test]
fn test_offset_rect_addressing() {
    let rect = Rect::new(10, 20, 14, 24);
    let mut buffer = ErrorBuffer::new(rect);
    let error = PixelError::new(1.0, 2.0, 3.0);

    buffer.set_error(10, 20, error);
    buffer.set_error(13, 23, error);

    assert_eq!(buffer.error_at(10, 20), error);
    assert_eq!(buffer.error_at(13, 23), error);
    // origin is outside an offset rect
    buffer.set_error(0, 0, error);
    assert_eq!(buffer.error_at(0, 0), PixelError::default());
}

#[test]
fn test_pixel_error_add() {
    let a = PixelError::new(1.0, 2.0, 3.0);
    let b = PixelError::new(0.5, -1.0, -4.0);

    let sum = a + b;
    assert_eq!(sum.r, 1.5);
    assert_eq!(sum.g, 1.0);
    assert_eq!(sum.b, -1.0);
    assert!(sum.is_set());
}

#[test]
fn test_pixel_error_add_identity() {
    let a = PixelError::new(1.0, 2.0, 3.0);
    assert_eq!(a + PixelError::default(), a);
    assert_eq!(PixelError::default() + a, a);
}

#[test]
fn test_pixel_error_mul_scales_channels() {
    let a = PixelError::new(8.0, -8.0, 2.0);

    let scaled = a * 0.25;
    assert_eq!(scaled.r, 2.0);
    assert_eq!(scaled.g, -2.0);
    assert_eq!(scaled.b, 0.5);
    assert!(scaled.is_set());

    // scaling the default keeps it unset
    assert!(!(PixelError::default() * 0.25).is_set());
}

#[test]
fn test_pixel_error_mul_by_zero_is_identity() {
    let a = PixelError::new(8.0, -8.0, 2.0);

    let zeroed = a * 0.0;
    assert_eq!(zeroed, PixelError::default());
    assert!(!zeroed.is_set());

    // adding it to an unset cell must not mark the cell as accumulated
    let cell = PixelError::default() + zeroed;
    assert!(!cell.is_set());
}
