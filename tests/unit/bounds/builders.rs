use super::*;

#[test]
fn builders_return_modified_copies() {
    let base = BoundsSpec::fixed_size(10.0, 20.0);
    let grown = base.fixed_grow(5.0);
    assert_eq!((base.fixed_width, base.fixed_height), (10.0, 20.0));
    assert_eq!((grown.fixed_width, grown.fixed_height), (15.0, 25.0));
    assert_eq!(grown.fixed_shrink(5.0), base);
}

#[test]
fn relative_placement_helpers() {
    let title = BoundsSpec::fixed(0.0, 10.0, 200.0, 30.0);
    let below = BoundsSpec::fixed_size(200.0, 20.0).fixed_under(&title, 5.0);
    assert_eq!(below.fixed_y, 45.0);

    let left = BoundsSpec::fixed(10.0, 0.0, 50.0, 20.0);
    let right = BoundsSpec::fixed_size(30.0, 20.0).fixed_right_of(&left, 4.0);
    assert_eq!(right.fixed_x, 64.0);

    let before = BoundsSpec::fixed_size(30.0, 20.0).fixed_left_of(&right, 4.0);
    assert_eq!(before.fixed_x, 30.0);
}

#[test]
fn with_scale_multiplies_lengths_and_fractions() {
    let spec = BoundsSpec::fixed(1.0, 2.0, 3.0, 4.0)
        .with_fixed_padding_xy(1.0, 2.0)
        .with_fixed_margin(3.0)
        .with_scale(2.0);
    assert_eq!((spec.fixed_x, spec.fixed_y), (2.0, 4.0));
    assert_eq!((spec.fixed_width, spec.fixed_height), (6.0, 8.0));
    assert_eq!((spec.fixed_padding_x, spec.fixed_padding_y), (2.0, 4.0));
    assert_eq!((spec.fixed_margin_x, spec.fixed_margin_y), (6.0, 6.0));

    let pct = BoundsSpec::fill().with_scale(0.5);
    assert_eq!((pct.percent_width, pct.percent_height), (0.5, 0.5));
}

#[test]
fn sizing_and_alignment_builders() {
    let spec = BoundsSpec::default()
        .with_sizing_axes(Sizing::Percentual, Sizing::FitToChildren)
        .with_alignment(Alignment::CenterFixed)
        .with_fixed_alignment_offset(2.0, -2.0)
        .with_fixed_position(7.0, 8.0)
        .with_added_fixed_position(1.0, 1.0);
    assert_eq!(spec.horizontal_sizing, Sizing::Percentual);
    assert_eq!(spec.vertical_sizing, Sizing::FitToChildren);
    assert_eq!(spec.alignment, Alignment::CenterFixed);
    assert_eq!((spec.fixed_offset_x, spec.fixed_offset_y), (2.0, -2.0));
    assert_eq!((spec.fixed_x, spec.fixed_y), (8.0, 9.0));
}
