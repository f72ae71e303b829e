use crate::{
    bounds::model::{Alignment, AxisAlign},
    foundation::core::{Size, Vec2},
};

/// Margin that places a box of `own_outer` inside a parent inner box of `parent_inner`.
///
/// Axes whose placement is [`AxisAlign::Fixed`] keep `fixed_margin` (the externally supplied,
/// already scaled margin). [`Alignment::None`] yields a zero margin on both axes. The result may
/// be negative when the box is larger than the parent.
pub fn resolve_alignment_margin(
    alignment: Alignment,
    parent_inner: Size,
    own_outer: Size,
    fixed_margin: Vec2,
) -> Vec2 {
    let (h, v) = alignment.split();
    Vec2::new(
        axis_margin(h, parent_inner.width, own_outer.width).unwrap_or(fixed_margin.x),
        axis_margin(v, parent_inner.height, own_outer.height).unwrap_or(fixed_margin.y),
    )
}

fn axis_margin(align: AxisAlign, available: f64, outer: f64) -> Option<f64> {
    match align {
        AxisAlign::Start => Some(0.0),
        AxisAlign::Center => Some(available / 2.0 - outer / 2.0),
        AxisAlign::End => Some(available - outer),
        AxisAlign::Fixed => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/align.rs"]
mod tests;
