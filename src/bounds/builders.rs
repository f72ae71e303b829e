//! Pure-copy builders over [`BoundsSpec`].
//!
//! Every method here consumes a `BoundsSpec` and returns the modified value; none of them touch a
//! [`crate::BoundsTree`]. In-place edits of nodes that already live in a tree go through
//! [`crate::BoundsTree::update_spec`] instead.

use crate::bounds::model::{Alignment, BoundsSpec, Sizing};

impl BoundsSpec {
    pub fn with_fixed_size(mut self, width: f64, height: f64) -> Self {
        self.fixed_width = width;
        self.fixed_height = height;
        self
    }

    pub fn with_fixed_width(mut self, width: f64) -> Self {
        self.fixed_width = width;
        self
    }

    pub fn with_fixed_height(mut self, height: f64) -> Self {
        self.fixed_height = height;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Same sizing on both axes.
    pub fn with_sizing(mut self, sizing: Sizing) -> Self {
        self.horizontal_sizing = sizing;
        self.vertical_sizing = sizing;
        self
    }

    pub fn with_sizing_axes(mut self, horizontal: Sizing, vertical: Sizing) -> Self {
        self.horizontal_sizing = horizontal;
        self.vertical_sizing = vertical;
        self
    }

    /// Uniform fixed margin; only used on axes whose alignment is `Fixed`.
    pub fn with_fixed_margin(self, margin: f64) -> Self {
        self.with_fixed_margin_xy(margin, margin)
    }

    pub fn with_fixed_margin_xy(mut self, horizontal: f64, vertical: f64) -> Self {
        self.fixed_margin_x = horizontal;
        self.fixed_margin_y = vertical;
        self
    }

    /// Uniform fixed padding on all four sides.
    pub fn with_fixed_padding(self, padding: f64) -> Self {
        self.with_fixed_padding_xy(padding, padding)
    }

    /// Fixed padding: `left_right` on both horizontal sides, `up_down` on both vertical sides.
    pub fn with_fixed_padding_xy(mut self, left_right: f64, up_down: f64) -> Self {
        self.fixed_padding_x = left_right;
        self.fixed_padding_y = up_down;
        self
    }

    /// Offset applied after alignment, e.g. center horizontally and then nudge by `x`.
    pub fn with_fixed_alignment_offset(mut self, x: f64, y: f64) -> Self {
        self.fixed_offset_x = x;
        self.fixed_offset_y = y;
        self
    }

    pub fn with_fixed_position(mut self, x: f64, y: f64) -> Self {
        self.fixed_x = x;
        self.fixed_y = y;
        self
    }

    pub fn with_added_fixed_position(mut self, dx: f64, dy: f64) -> Self {
        self.fixed_x += dx;
        self.fixed_y += dy;
        self
    }

    /// Multiply every length and fraction by `factor`.
    pub fn with_scale(mut self, factor: f64) -> Self {
        self.fixed_x *= factor;
        self.fixed_y *= factor;
        self.fixed_width *= factor;
        self.fixed_height *= factor;
        self.fixed_padding_x *= factor;
        self.fixed_padding_y *= factor;
        self.fixed_margin_x *= factor;
        self.fixed_margin_y *= factor;

        self.percent_x *= factor;
        self.percent_y *= factor;
        self.percent_width *= factor;
        self.percent_height *= factor;
        self.percent_padding_x *= factor;
        self.percent_padding_y *= factor;
        self
    }

    pub fn fixed_shrink(self, amount: f64) -> Self {
        self.fixed_grow_xy(-amount, -amount)
    }

    pub fn fixed_grow(self, amount: f64) -> Self {
        self.fixed_grow_xy(amount, amount)
    }

    pub fn fixed_grow_xy(mut self, width: f64, height: f64) -> Self {
        self.fixed_width += width;
        self.fixed_height += height;
        self
    }

    /// Move below `above`, adding its fixed bottom edge plus `spacing` to the current y.
    pub fn fixed_under(mut self, above: &BoundsSpec, spacing: f64) -> Self {
        self.fixed_y += above.fixed_y + above.fixed_height + spacing;
        self
    }

    /// Place right of `left`, `spacing` after its fixed right edge.
    pub fn fixed_right_of(mut self, left: &BoundsSpec, spacing: f64) -> Self {
        self.fixed_x = left.fixed_x + left.fixed_width + spacing;
        self
    }

    /// Place left of `right` so that this box ends `spacing` before it.
    pub fn fixed_left_of(mut self, right: &BoundsSpec, spacing: f64) -> Self {
        self.fixed_x = right.fixed_x - self.fixed_width - spacing;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/builders.rs"]
mod tests;
