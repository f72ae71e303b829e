use crate::{
    bounds::model::BoundsSpec,
    foundation::core::{Point, Size, Vec2},
};

/// Handle of a node inside a [`crate::BoundsTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct BoundsId(pub(crate) u32);

impl BoundsId {
    /// Raw arena index.
    pub fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for BoundsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Resolution lifecycle of a node.
///
/// `Dirty -> Measured -> Aligned`. A node is `Measured` when its position, size and padding are
/// valid but its alignment margin still waits for an initialized parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub enum BoundsState {
    /// Resolved outputs are stale.
    #[default]
    Dirty,
    /// Size, position and padding are resolved; margin is not.
    Measured,
    /// Fully resolved.
    Aligned,
}

impl BoundsState {
    /// Resolved outputs are readable (`Measured` or `Aligned`).
    pub fn is_initialized(self) -> bool {
        self != BoundsState::Dirty
    }
}

/// Scaled geometry written by the resolver, relative to the parent's content origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ResolvedBounds {
    /// Resolved position before margin and alignment offset.
    pub position: Point,
    /// Content size, excluding padding.
    pub inner: Size,
    /// Padding on each side.
    pub padding: Vec2,
    /// Margin from alignment (or the fixed margin on `Fixed` axes).
    pub margin: Vec2,
    /// Scaled fixed offset applied after alignment.
    pub align_offset: Vec2,
}

impl ResolvedBounds {
    /// Inner size plus padding on both sides.
    pub fn outer(&self) -> Size {
        Size::new(
            self.inner.width + 2.0 * self.padding.x,
            self.inner.height + 2.0 * self.padding.y,
        )
    }

    /// Position within the parent's content box including margin and alignment offset.
    pub fn relative(&self) -> Point {
        self.position + self.margin + self.align_offset
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct BoundsNode {
    pub(crate) name: String,
    pub(crate) spec: BoundsSpec,
    pub(crate) resolved: ResolvedBounds,
    pub(crate) state: BoundsState,
    pub(crate) drawing_surface: bool,
    pub(crate) render_offset: Vec2,
    // Geometry back-reference; `None` resolves against the empty sentinel.
    pub(crate) parent: Option<BoundsId>,
    // Node whose children list holds this one.
    pub(crate) owner: Option<BoundsId>,
    pub(crate) children: Vec<BoundsId>,
}

impl BoundsNode {
    pub(crate) fn new(name: String, spec: BoundsSpec) -> Self {
        Self {
            name,
            spec,
            ..Self::default()
        }
    }
}
