//! Derived geometry over resolved bounds.
//!
//! Three coordinate spaces are exposed and must not be mixed up:
//! - **UI space** ([`BoundsFrame::absolute_position`]): what pointer input is tested against.
//! - **Draw space** ([`BoundsFrame::draw_position`]): relative to the nearest drawing surface.
//! - **Render space** ([`BoundsFrame::render_position`]): UI space plus each ancestor's render
//!   offset, for render targets that do not coincide with the screen.
//!
//! None of the getters resolve anything. Reading a node that is not initialized returns stale
//! (or zero) values.

use crate::{
    bounds::{
        model::{Alignment, BoundsSpec},
        node::{BoundsId, BoundsNode, BoundsState, ResolvedBounds},
        tree::BoundsTree,
    },
    foundation::core::{Point, Rect, Size, Vec2},
};

/// Geometry a child needs from whatever it is placed in.
pub trait BoundsFrame {
    /// Resolved outputs are valid.
    fn is_initialized(&self) -> bool;

    /// Descendant draw positions accumulate from this frame's padding box.
    fn is_drawing_surface(&self) -> bool;

    /// Content size, excluding padding.
    fn inner_size(&self) -> Size;

    /// Padding on each side: `x` left and right, `y` top and bottom.
    fn padding(&self) -> Vec2;

    /// Inner size plus padding on both sides.
    fn outer_size(&self) -> Size {
        let inner = self.inner_size();
        let pad = self.padding();
        Size::new(inner.width + 2.0 * pad.x, inner.height + 2.0 * pad.y)
    }

    /// Top-left of the outer box in UI space.
    fn absolute_position(&self) -> Point;

    /// Top-left of the content box in draw space.
    fn draw_position(&self) -> Point;

    /// Top-left of the outer box in render space.
    fn render_position(&self) -> Point;
}

/// The sentinel parent of standalone trees.
///
/// Sizes to its (absent) children with a degenerate inner box; every offset and padding is
/// zero and it always counts as initialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyFrame;

impl BoundsFrame for EmptyFrame {
    fn is_initialized(&self) -> bool {
        true
    }

    fn is_drawing_surface(&self) -> bool {
        true
    }

    fn inner_size(&self) -> Size {
        Size::ZERO
    }

    fn padding(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn absolute_position(&self) -> Point {
        Point::ORIGIN
    }

    fn draw_position(&self) -> Point {
        Point::ORIGIN
    }

    fn render_position(&self) -> Point {
        Point::ORIGIN
    }
}

/// The frame a node is resolved and positioned against.
#[derive(Clone, Copy, Debug)]
pub enum ParentFrame<'a> {
    /// No parent reference: the sentinel.
    Empty(EmptyFrame),
    /// A real node.
    Node(NodeRef<'a>),
}

impl ParentFrame<'_> {
    fn inner(&self) -> &dyn BoundsFrame {
        match self {
            ParentFrame::Empty(e) => e,
            ParentFrame::Node(n) => n,
        }
    }

    /// Id of the parent node, `None` for the sentinel.
    pub fn id(&self) -> Option<BoundsId> {
        match self {
            ParentFrame::Empty(_) => None,
            ParentFrame::Node(n) => Some(n.id()),
        }
    }
}

impl BoundsFrame for ParentFrame<'_> {
    fn is_initialized(&self) -> bool {
        self.inner().is_initialized()
    }

    fn is_drawing_surface(&self) -> bool {
        self.inner().is_drawing_surface()
    }

    fn inner_size(&self) -> Size {
        self.inner().inner_size()
    }

    fn padding(&self) -> Vec2 {
        self.inner().padding()
    }

    fn outer_size(&self) -> Size {
        self.inner().outer_size()
    }

    fn absolute_position(&self) -> Point {
        self.inner().absolute_position()
    }

    fn draw_position(&self) -> Point {
        self.inner().draw_position()
    }

    fn render_position(&self) -> Point {
        self.inner().render_position()
    }
}

/// Borrowed view of one node with its derived geometry.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a BoundsTree,
    id: BoundsId,
    node: &'a BoundsNode,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a BoundsTree, id: BoundsId, node: &'a BoundsNode) -> Self {
        Self { tree, id, node }
    }

    pub fn id(&self) -> BoundsId {
        self.id
    }

    pub fn name(&self) -> &'a str {
        &self.node.name
    }

    pub fn spec(&self) -> &'a BoundsSpec {
        &self.node.spec
    }

    pub fn alignment(&self) -> Alignment {
        self.node.spec.alignment
    }

    pub fn state(&self) -> BoundsState {
        self.node.state
    }

    pub fn resolved(&self) -> &'a ResolvedBounds {
        &self.node.resolved
    }

    pub fn children(&self) -> &'a [BoundsId] {
        &self.node.children
    }

    /// Node whose children list holds this node.
    pub fn owner(&self) -> Option<BoundsId> {
        self.node.owner
    }

    pub fn render_offset(&self) -> Vec2 {
        self.node.render_offset
    }

    /// The frame this node is positioned against; the sentinel when no parent is set.
    pub fn parent_frame(&self) -> ParentFrame<'a> {
        match self.node.parent.and_then(|p| self.tree.get(p)) {
            Some(parent) => ParentFrame::Node(parent),
            None => ParentFrame::Empty(EmptyFrame),
        }
    }

    pub fn parent(&self) -> Option<BoundsId> {
        self.node.parent
    }

    /// Resolved position before margin and alignment offset.
    pub fn position(&self) -> Point {
        self.node.resolved.position
    }

    pub fn margin(&self) -> Vec2 {
        self.node.resolved.margin
    }

    pub fn align_offset(&self) -> Vec2 {
        self.node.resolved.align_offset
    }

    pub fn outer_width(&self) -> f64 {
        self.outer_size().width
    }

    pub fn outer_height(&self) -> f64 {
        self.outer_size().height
    }

    /// Outer width truncated toward zero.
    pub fn outer_width_int(&self) -> i32 {
        self.outer_width() as i32
    }

    /// Outer height truncated toward zero.
    pub fn outer_height_int(&self) -> i32 {
        self.outer_height() as i32
    }

    /// Position relative to the parent's content origin, margin and alignment offset included.
    pub fn relative_position(&self) -> Point {
        self.node.resolved.relative()
    }

    /// Where the background (padding box) is drawn, in draw space.
    pub fn background_draw_position(&self) -> Point {
        let parent = self.parent_frame();
        let base = if parent.is_drawing_surface() {
            parent.padding()
        } else {
            parent.draw_position().to_vec2()
        };
        self.relative_position() + base
    }

    /// Outer box in UI space.
    pub fn outer_rect(&self) -> Rect {
        Rect::from_origin_size(self.absolute_position(), self.outer_size())
    }

    /// Whether `(x, y)` lies inside the outer box, both edges inclusive.
    pub fn point_inside(&self, x: f64, y: f64) -> bool {
        let origin = self.absolute_position();
        let outer = self.outer_size();
        x >= origin.x
            && x <= origin.x + outer.width
            && y >= origin.y
            && y <= origin.y + outer.height
    }

    /// `(x, y)` relative to the outer box origin, if inside.
    pub fn position_inside(&self, x: f64, y: f64) -> Option<Vec2> {
        if !self.point_inside(x, y) {
            return None;
        }
        Some(Point::new(x, y) - self.absolute_position())
    }

    /// Whether any corner of this node's outer box lies inside `other`.
    pub fn partially_inside(&self, other: &NodeRef<'_>) -> bool {
        let r = self.outer_rect();
        [
            (r.x0, r.y0),
            (r.x1, r.y0),
            (r.x0, r.y1),
            (r.x1, r.y1),
        ]
        .into_iter()
        .any(|(x, y)| other.point_inside(x, y))
    }
}

impl BoundsFrame for NodeRef<'_> {
    fn is_initialized(&self) -> bool {
        self.node.state.is_initialized()
    }

    fn is_drawing_surface(&self) -> bool {
        self.node.drawing_surface
    }

    fn inner_size(&self) -> Size {
        self.node.resolved.inner
    }

    fn padding(&self) -> Vec2 {
        self.node.resolved.padding
    }

    fn outer_size(&self) -> Size {
        self.node.resolved.outer()
    }

    fn absolute_position(&self) -> Point {
        let parent = self.parent_frame();
        self.relative_position() + parent.padding() + parent.absolute_position().to_vec2()
    }

    fn draw_position(&self) -> Point {
        self.background_draw_position() + self.padding()
    }

    fn render_position(&self) -> Point {
        let parent = self.parent_frame();
        self.relative_position()
            + parent.padding()
            + parent.render_position().to_vec2()
            + self.node.render_offset
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("name", &self.node.name)
            .field("state", &self.node.state)
            .field("resolved", &self.node.resolved)
            .finish()
    }
}

impl std::fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = self.absolute_position();
        let o = self.outer_size();
        write!(f, "{}/{} -> {} / {}", p.x, p.y, p.x + o.width, p.y + o.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/frame.rs"]
mod tests;
