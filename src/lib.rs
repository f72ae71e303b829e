//! uibounds is a box-sizing engine for hierarchical UI element bounds.
//!
//! Every UI element owns one bounds node. A node declares, per axis, how it is sized:
//!
//! - **Fixed**: unscaled lengths multiplied by the UI scale.
//! - **Percentual**: fractions of the parent's outer box.
//! - **PercentualSubtractFixed**: a fraction of the parent minus a fixed gutter.
//! - **FitToChildren**: the maximum extent of the node's children.
//!
//! On top of that, one of 15 alignment tags (or `None`) places the node inside its parent.
//!
//! # Workflow
//!
//! 1. Insert nodes into a [`BoundsTree`] from [`BoundsSpec`] values and [`BoundsTree::attach`]
//!    them.
//! 2. Call [`BoundsTree::resolve`] on the root with a [`ScaleSource`].
//! 3. Read geometry back through [`NodeRef`] and the [`BoundsFrame`] getters: UI space
//!    (`absolute_position`, hit-testing), draw space (`draw_position`) and render space
//!    (`render_position`).
//! 4. After changing inputs, [`BoundsTree::mark_dirty_recursive`] and resolve again.
//!
//! Layouts can also be declared as JSON with [`LayoutDocument`].
#![forbid(unsafe_code)]

mod bounds;
mod document;
mod foundation;

pub use bounds::align::resolve_alignment_margin;
pub use bounds::frame::{BoundsFrame, EmptyFrame, NodeRef, ParentFrame};
pub use bounds::model::{Alignment, AxisAlign, BoundsDelta, BoundsSpec, Sizing, Spacing};
pub use bounds::node::{BoundsId, BoundsState, ResolvedBounds};
pub use bounds::snapshot::{LayoutSnapshot, SnapshotNode};
pub use bounds::tree::BoundsTree;
pub use document::model::{LayoutDocument, NodeDecl};
pub use foundation::core::{Axis, Point, Rect, ScaleContext, ScaleSource, Size, Vec2};
pub use foundation::error::{LayoutError, LayoutResult};
