//! Sizing resolver.
//!
//! Percentual sizes flow top-down (a child needs its parent's outer size), fit-to-children sizes
//! flow bottom-up (a parent needs its children's extents). Both are handled in one traversal:
//! top-down nodes resolve themselves before recursing, fit-to-children nodes first measure their
//! children and then recurse to finish whatever the measurement left unaligned.

use crate::{
    bounds::{
        align::resolve_alignment_margin,
        frame::BoundsFrame,
        model::{BoundsSpec, Sizing},
        node::{BoundsId, BoundsState, ResolvedBounds},
        tree::BoundsTree,
    },
    foundation::core::{Axis, Point, ScaleSource, Size, Vec2},
    foundation::error::{LayoutError, LayoutResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pass {
    // Measuring for a fit-to-children parent: alignment disabled, margin zero.
    Measure,
    Place,
}

#[derive(Clone, Copy, Debug)]
struct ParentMetrics {
    initialized: bool,
    inner: Size,
    outer: Size,
}

impl BoundsTree {
    /// Resolve `id` and every child that is not yet fully resolved.
    ///
    /// `id` itself is always recomputed; descendants in state [`BoundsState::Aligned`] are left
    /// alone, so call [`BoundsTree::mark_dirty_recursive`] after changing raw inputs. The
    /// parent of `id` (if any) should already be resolved; otherwise percentual sizes read its
    /// stale geometry and the alignment of `id` is deferred until its owner re-resolves it.
    #[tracing::instrument(skip(self, scale), fields(scale = scale.scale()))]
    pub fn resolve<S: ScaleSource + ?Sized>(
        &mut self,
        id: BoundsId,
        scale: &S,
    ) -> LayoutResult<()> {
        self.place(id, scale, Pass::Place)
    }

    /// Resolve every root of the arena (nodes without an owner).
    pub fn resolve_all<S: ScaleSource + ?Sized>(&mut self, scale: &S) -> LayoutResult<()> {
        let roots: Vec<BoundsId> = self.roots().collect();
        for root in roots {
            self.place(root, scale, Pass::Place)?;
        }
        Ok(())
    }

    fn place<S: ScaleSource + ?Sized>(
        &mut self,
        id: BoundsId,
        scale: &S,
        pass: Pass,
    ) -> LayoutResult<()> {
        let s = scale.scale();
        let (spec, prev_state, mut r) = {
            let node = self.node_raw(id)?;
            (node.spec, node.state, node.resolved)
        };
        let prev_outer = r.outer();
        let parent = self.parent_metrics(id)?;

        r.align_offset = Vec2::new(spec.fixed_offset_x * s, spec.fixed_offset_y * s);

        if spec.fits_children() {
            r.position = Point::new(spec.fixed_x * s, spec.fixed_y * s);
            r.padding = Vec2::new(spec.fixed_padding_x * s, spec.fixed_padding_y * s);
            // Children measured below must not see the previous pass's size.
            r.inner = Size::ZERO;
            self.node_raw_mut(id)?.resolved = r;

            let width = self.measure_children(id, scale, Axis::Horizontal)?;
            let height = self.measure_children(id, scale, Axis::Vertical)?;
            r.inner = Size::new(width, height);
        } else {
            let mut fit_axes = Vec::new();
            for axis in Axis::BOTH {
                match resolve_axis(&spec, axis, parent.outer, s) {
                    Some(geom) => geom.write(&mut r, axis),
                    None => {
                        AxisGeometry::fixed_origin(&spec, axis, s).write(&mut r, axis);
                        fit_axes.push(axis);
                    }
                }
            }
            if !fit_axes.is_empty() {
                self.node_raw_mut(id)?.resolved = r;
                for axis in fit_axes {
                    let extent = self.measure_children(id, scale, axis)?;
                    match axis {
                        Axis::Horizontal => r.inner.width = extent,
                        Axis::Vertical => r.inner.height = extent,
                    }
                }
            }
        }

        let state = match pass {
            Pass::Measure => {
                r.margin = Vec2::ZERO;
                BoundsState::Measured
            }
            Pass::Place if parent.initialized => {
                let fixed_margin = Vec2::new(spec.fixed_margin_x * s, spec.fixed_margin_y * s);
                r.margin =
                    resolve_alignment_margin(spec.alignment, parent.inner, r.outer(), fixed_margin);
                BoundsState::Aligned
            }
            Pass::Place => {
                tracing::trace!(node = %id, "parent not initialized, alignment deferred");
                BoundsState::Measured
            }
        };

        let children = {
            let node = self.node_raw_mut(id)?;
            node.resolved = r;
            node.state = state;
            node.children.clone()
        };

        if prev_state.is_initialized() && prev_outer != r.outer() {
            for &child in &children {
                self.mark_dirty_recursive(child)?;
            }
        }

        for child in children {
            if self.node_raw(child)?.state != BoundsState::Aligned {
                self.place(child, scale, Pass::Place)?;
            }
        }
        Ok(())
    }

    // Largest `relative + outer` extent on `axis` over children not percentual on that axis,
    // with alignment margins ignored. Dirty children are resolved first.
    fn measure_children<S: ScaleSource + ?Sized>(
        &mut self,
        id: BoundsId,
        scale: &S,
        axis: Axis,
    ) -> LayoutResult<f64> {
        let (name, children) = {
            let node = self.node_raw(id)?;
            (node.name.clone(), node.children.clone())
        };
        if children.is_empty() {
            return Err(LayoutError::configuration(format!(
                "cannot fit {} to children: it has no children",
                describe(id, &name)
            )));
        }

        let mut extent = 0.0f64;
        for child in children {
            if !self.node_raw(child)?.state.is_initialized() {
                self.place(child, scale, Pass::Measure)?;
            }
            let node = self.node_raw(child)?;
            if node.spec.sizing(axis) == Sizing::Percentual {
                continue;
            }
            let r = &node.resolved;
            let start = axis.of_point(r.position) + axis.of_vec(r.align_offset);
            extent = extent.max(start + axis.of_size(r.outer()));
        }

        if extent == 0.0 {
            return Err(LayoutError::configuration(format!(
                "cannot fit {} to children on the {axis} axis: no child with non-percentual sizing and non-zero size",
                describe(id, &name)
            )));
        }
        tracing::debug!(node = %id, %axis, extent, "measured children");
        Ok(extent)
    }

    fn parent_metrics(&self, id: BoundsId) -> LayoutResult<ParentMetrics> {
        let parent = self.node(id)?.parent_frame();
        Ok(ParentMetrics {
            initialized: parent.is_initialized(),
            inner: parent.inner_size(),
            outer: parent.outer_size(),
        })
    }
}

#[derive(Clone, Copy, Debug)]
struct AxisGeometry {
    position: f64,
    size: f64,
    padding: f64,
}

impl AxisGeometry {
    // Position and padding of a fit-to-children axis; size is measured later.
    fn fixed_origin(spec: &BoundsSpec, axis: Axis, s: f64) -> Self {
        let (position, padding) = match axis {
            Axis::Horizontal => (spec.fixed_x, spec.fixed_padding_x),
            Axis::Vertical => (spec.fixed_y, spec.fixed_padding_y),
        };
        Self {
            position: position * s,
            size: 0.0,
            padding: padding * s,
        }
    }

    fn write(self, r: &mut ResolvedBounds, axis: Axis) {
        match axis {
            Axis::Horizontal => {
                r.position.x = self.position;
                r.inner.width = self.size;
                r.padding.x = self.padding;
            }
            Axis::Vertical => {
                r.position.y = self.position;
                r.inner.height = self.size;
                r.padding.y = self.padding;
            }
        }
    }
}

// `None` for fit-to-children axes.
fn resolve_axis(spec: &BoundsSpec, axis: Axis, parent_outer: Size, s: f64) -> Option<AxisGeometry> {
    let (fixed_pos, fixed_size, fixed_pad, pct_pos, pct_size, pct_pad) = match axis {
        Axis::Horizontal => (
            spec.fixed_x,
            spec.fixed_width,
            spec.fixed_padding_x,
            spec.percent_x,
            spec.percent_width,
            spec.percent_padding_x,
        ),
        Axis::Vertical => (
            spec.fixed_y,
            spec.fixed_height,
            spec.fixed_padding_y,
            spec.percent_y,
            spec.percent_height,
            spec.percent_padding_y,
        ),
    };
    let parent = axis.of_size(parent_outer);

    match spec.sizing(axis) {
        Sizing::Fixed => Some(AxisGeometry {
            position: fixed_pos * s,
            size: fixed_size * s,
            padding: fixed_pad * s,
        }),
        sizing @ (Sizing::Percentual | Sizing::PercentualSubtractFixed) => {
            let mut size = pct_size * parent;
            if sizing == Sizing::PercentualSubtractFixed {
                size -= fixed_size * s;
            }
            Some(AxisGeometry {
                position: pct_pos * parent,
                size,
                padding: fixed_pad * s + pct_pad * parent,
            })
        }
        Sizing::FitToChildren => None,
    }
}

fn describe(id: BoundsId, name: &str) -> String {
    if name.is_empty() {
        format!("node {id}")
    } else {
        format!("node {id} ('{name}')")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/resolve.rs"]
mod tests;
