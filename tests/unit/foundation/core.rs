use super::*;

#[test]
fn scale_context_rejects_non_positive() {
    assert!(ScaleContext::new(0.0).is_err());
    assert!(ScaleContext::new(-1.5).is_err());
    assert!(ScaleContext::new(f64::NAN).is_err());
    assert_eq!(ScaleContext::new(2.0).unwrap().scaled(10.0), 20.0);
}

#[test]
fn live_scale_is_read_on_every_call() {
    let live = Cell::new(1.0_f64);
    assert_eq!(live.scaled(8.0), 8.0);
    live.set(1.5);
    assert_eq!(live.scaled(8.0), 12.0);
}

#[test]
fn axis_projection_picks_component() {
    let s = Size::new(3.0, 4.0);
    assert_eq!(Axis::Horizontal.of_size(s), 3.0);
    assert_eq!(Axis::Vertical.of_size(s), 4.0);
    assert_eq!(Axis::Vertical.of_vec(Vec2::new(1.0, 2.0)), 2.0);
    assert_eq!(Axis::Horizontal.of_point(Point::new(7.0, 9.0)), 7.0);
}
