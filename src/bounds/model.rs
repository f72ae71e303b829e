use crate::foundation::core::Axis;

/// Per-axis sizing strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sizing {
    /// Position, size and padding come from the fixed inputs, scaled by the UI scale.
    #[default]
    Fixed,
    /// Position, size and padding are fractions of the parent's outer size.
    Percentual,
    /// Like [`Sizing::Percentual`], minus the scaled fixed size on that axis.
    PercentualSubtractFixed,
    /// Size is the maximum extent of the children on that axis.
    FitToChildren,
}

/// Placement rule along a single axis, as used by [`Alignment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisAlign {
    /// Left / top: margin is zero.
    Start,
    /// Center / middle.
    Center,
    /// Right / bottom.
    End,
    /// Margin is supplied externally (the fixed margin).
    Fixed,
}

/// Alignment of a node within its parent's inner box.
///
/// The variants are the combinations of horizontal {Left, Center, Right, Fixed} and vertical
/// {Top, Middle, Bottom, Fixed} placement, without Fixed/Fixed, plus `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// No alignment; both margins are zero.
    #[default]
    None,
    LeftTop,
    LeftMiddle,
    LeftBottom,
    LeftFixed,
    CenterTop,
    CenterMiddle,
    CenterBottom,
    CenterFixed,
    RightTop,
    RightMiddle,
    RightBottom,
    RightFixed,
    FixedTop,
    FixedMiddle,
    FixedBottom,
}

impl Alignment {
    /// All 16 tags, `None` first.
    pub const ALL: [Alignment; 16] = [
        Alignment::None,
        Alignment::LeftTop,
        Alignment::LeftMiddle,
        Alignment::LeftBottom,
        Alignment::LeftFixed,
        Alignment::CenterTop,
        Alignment::CenterMiddle,
        Alignment::CenterBottom,
        Alignment::CenterFixed,
        Alignment::RightTop,
        Alignment::RightMiddle,
        Alignment::RightBottom,
        Alignment::RightFixed,
        Alignment::FixedTop,
        Alignment::FixedMiddle,
        Alignment::FixedBottom,
    ];

    /// Split into horizontal and vertical placement. `None` behaves as start/start.
    pub fn split(self) -> (AxisAlign, AxisAlign) {
        use AxisAlign::{Center, End, Fixed, Start};
        match self {
            Alignment::None | Alignment::LeftTop => (Start, Start),
            Alignment::LeftMiddle => (Start, Center),
            Alignment::LeftBottom => (Start, End),
            Alignment::LeftFixed => (Start, Fixed),
            Alignment::CenterTop => (Center, Start),
            Alignment::CenterMiddle => (Center, Center),
            Alignment::CenterBottom => (Center, End),
            Alignment::CenterFixed => (Center, Fixed),
            Alignment::RightTop => (End, Start),
            Alignment::RightMiddle => (End, Center),
            Alignment::RightBottom => (End, End),
            Alignment::RightFixed => (End, Fixed),
            Alignment::FixedTop => (Fixed, Start),
            Alignment::FixedMiddle => (Fixed, Center),
            Alignment::FixedBottom => (Fixed, End),
        }
    }

    /// Placement along one axis.
    pub fn along(self, axis: Axis) -> AxisAlign {
        let (h, v) = self.split();
        match axis {
            Axis::Horizontal => h,
            Axis::Vertical => v,
        }
    }

    /// Combine per-axis placements into a tag. Fixed/Fixed has no tag.
    pub fn from_axes(horizontal: AxisAlign, vertical: AxisAlign) -> Option<Alignment> {
        Alignment::ALL
            .into_iter()
            .skip(1)
            .find(|a| a.split() == (horizontal, vertical))
    }
}

/// Raw, unscaled geometry inputs of one bounds node.
///
/// Fixed lengths are in unscaled UI units; percent values are fractions (`1.0` = 100%) of the
/// parent's outer box. `BoundsSpec` is a plain value: the `with_*` builders consume it and
/// return a modified copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoundsSpec {
    pub horizontal_sizing: Sizing,
    pub vertical_sizing: Sizing,
    pub alignment: Alignment,

    pub fixed_x: f64,
    pub fixed_y: f64,
    pub fixed_width: f64,
    pub fixed_height: f64,
    pub fixed_padding_x: f64,
    pub fixed_padding_y: f64,
    /// Margin used on axes whose alignment is `Fixed`.
    pub fixed_margin_x: f64,
    pub fixed_margin_y: f64,
    /// Offset applied after alignment.
    pub fixed_offset_x: f64,
    pub fixed_offset_y: f64,

    pub percent_x: f64,
    pub percent_y: f64,
    pub percent_width: f64,
    pub percent_height: f64,
    pub percent_padding_x: f64,
    pub percent_padding_y: f64,
}

impl BoundsSpec {
    /// Fixed sizing at `(x, y)` with size `(width, height)`.
    pub fn fixed(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            fixed_x: x,
            fixed_y: y,
            fixed_width: width,
            fixed_height: height,
            ..Self::default()
        }
    }

    /// Fixed sizing at `(x, y)` with zero size.
    pub fn fixed_at(x: f64, y: f64) -> Self {
        Self::fixed(x, y, 0.0, 0.0)
    }

    /// Fixed sizing with position left at zero.
    pub fn fixed_size(width: f64, height: f64) -> Self {
        Self::fixed(0.0, 0.0, width, height)
    }

    /// Aligned fixed sizing with position left at zero.
    pub fn fixed_size_aligned(alignment: Alignment, width: f64, height: f64) -> Self {
        Self {
            alignment,
            ..Self::fixed_size(width, height)
        }
    }

    /// Aligned fixed position without size.
    pub fn fixed_pos(alignment: Alignment, x: f64, y: f64) -> Self {
        Self {
            alignment,
            ..Self::fixed_at(x, y)
        }
    }

    /// Aligned fixed sizing.
    pub fn fixed_aligned(alignment: Alignment, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            alignment,
            ..Self::fixed(x, y, width, height)
        }
    }

    /// Aligned fixed size, shifted after alignment by `(offset_x, offset_y)`.
    pub fn fixed_offseted(
        alignment: Alignment,
        offset_x: f64,
        offset_y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            alignment,
            fixed_offset_x: offset_x,
            fixed_offset_y: offset_y,
            ..Self::fixed_size(width, height)
        }
    }

    /// Percentual sizing; `0.5` is half of the parent's outer size.
    pub fn percentual(alignment: Alignment, percent_width: f64, percent_height: f64) -> Self {
        Self {
            alignment,
            horizontal_sizing: Sizing::Percentual,
            vertical_sizing: Sizing::Percentual,
            percent_width,
            percent_height,
            ..Self::default()
        }
    }

    /// Percentual sizing with a percentual position.
    pub fn percentual_at(
        percent_x: f64,
        percent_y: f64,
        percent_width: f64,
        percent_height: f64,
    ) -> Self {
        Self {
            percent_x,
            percent_y,
            ..Self::percentual(Alignment::None, percent_width, percent_height)
        }
    }

    /// Fills 100% of the parent. Useful for backgrounds.
    pub fn fill() -> Self {
        Self::percentual(Alignment::None, 1.0, 1.0)
    }

    /// Fit-to-children sizing on both axes.
    pub fn fit_to_children() -> Self {
        Self::default().with_sizing(Sizing::FitToChildren)
    }

    /// Sizing on one axis.
    pub fn sizing(&self, axis: Axis) -> Sizing {
        match axis {
            Axis::Horizontal => self.horizontal_sizing,
            Axis::Vertical => self.vertical_sizing,
        }
    }

    /// Whether both axes size to the children.
    pub fn fits_children(&self) -> bool {
        self.horizontal_sizing == Sizing::FitToChildren
            && self.vertical_sizing == Sizing::FitToChildren
    }

    pub(crate) fn is_finite(&self) -> bool {
        [
            self.fixed_x,
            self.fixed_y,
            self.fixed_width,
            self.fixed_height,
            self.fixed_padding_x,
            self.fixed_padding_y,
            self.fixed_margin_x,
            self.fixed_margin_y,
            self.fixed_offset_x,
            self.fixed_offset_y,
            self.percent_x,
            self.percent_y,
            self.percent_width,
            self.percent_height,
            self.percent_padding_x,
            self.percent_padding_y,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Explicit deltas applied by the offsetting derivation helpers.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoundsDelta {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundsDelta {
    /// Position-only delta.
    pub fn offset(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }
}

/// Spacing around a wrapped node (see [`crate::BoundsTree::fork_bounding_parent`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Spacing {
    /// Same spacing on all four sides.
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/model.rs"]
mod tests;
