//! Constructors that derive new nodes from an existing one.
//!
//! All helpers insert a new, unowned node and leave the source untouched, except
//! [`BoundsTree::fork_bounding_parent`], which also rewrites the source in place.

use crate::{
    bounds::{
        model::{Alignment, BoundsDelta, BoundsSpec, Spacing},
        node::{BoundsId, BoundsNode},
        tree::BoundsTree,
    },
    foundation::error::LayoutResult,
};

impl BoundsTree {
    /// Copy of `id` without children, sharing its parent reference.
    pub fn flat_copy(&mut self, id: BoundsId) -> LayoutResult<BoundsId> {
        self.copy_offseted_sibling(id, BoundsDelta::default())
    }

    /// Copy of `id` shifted by `delta`, sharing its parent reference.
    pub fn copy_offseted_sibling(
        &mut self,
        id: BoundsId,
        delta: BoundsDelta,
    ) -> LayoutResult<BoundsId> {
        let (spec, parent) = self.source(id)?;
        self.push_derived(id, with_delta(spec, delta), parent)
    }

    /// Sibling copy placed directly below `id` (fixed height plus both vertical paddings),
    /// then shifted by `delta`.
    pub fn below_copy(&mut self, id: BoundsId, delta: BoundsDelta) -> LayoutResult<BoundsId> {
        let (spec, parent) = self.source(id)?;
        let mut copy = with_delta(spec, delta);
        copy.fixed_y += spec.fixed_height + 2.0 * spec.fixed_padding_y;
        self.push_derived(id, copy, parent)
    }

    /// Sibling copy placed directly right of `id` (fixed width plus both horizontal
    /// paddings), then shifted by `delta`.
    pub fn right_copy(&mut self, id: BoundsId, delta: BoundsDelta) -> LayoutResult<BoundsId> {
        let (spec, parent) = self.source(id)?;
        let mut copy = with_delta(spec, delta);
        copy.fixed_x += spec.fixed_width + 2.0 * spec.fixed_padding_x;
        self.push_derived(id, copy, parent)
    }

    /// Copy of `id` whose parent reference is `id` itself.
    ///
    /// The fork is not added to `id`'s children list; attach it if it should be owned and
    /// resolved together with `id`.
    pub fn fork_child(&mut self, id: BoundsId) -> LayoutResult<BoundsId> {
        self.fork_child_offseted(id, BoundsDelta::default())
    }

    pub fn fork_child_offseted(
        &mut self,
        id: BoundsId,
        delta: BoundsDelta,
    ) -> LayoutResult<BoundsId> {
        let (spec, _) = self.source(id)?;
        self.push_derived(id, with_delta(spec, delta), Some(id))
    }

    /// Copy of the sizing inputs of `id` only (sizing modes, fixed and percent size), parented
    /// to the empty sentinel. Resolving it measures `id`'s standalone size.
    pub fn copy_only_size(&mut self, id: BoundsId) -> LayoutResult<BoundsId> {
        let (spec, _) = self.source(id)?;
        let copy = BoundsSpec {
            horizontal_sizing: spec.horizontal_sizing,
            vertical_sizing: spec.vertical_sizing,
            fixed_width: spec.fixed_width,
            fixed_height: spec.fixed_height,
            percent_width: spec.percent_width,
            percent_height: spec.percent_height,
            ..BoundsSpec::default()
        };
        self.push_derived(id, copy, None)
    }

    /// Wrap `id` in a new parent that surrounds it with `spacing`. Returns the new parent.
    ///
    /// This is one in-place edit of the tree:
    /// - the new parent takes over the source's fixed position, sizing, alignment, alignment
    ///   offset and percent size; its fixed size is the source's outer fixed size plus spacing;
    /// - the new parent replaces the source in its owner's children list and inherits its
    ///   parent reference;
    /// - the source becomes the only child of the new parent, moves to `(left, top)`, gets a
    ///   percent size of `(1, 1)`, and loses its alignment and alignment offset.
    ///
    /// Unlike the copy helpers, this moves alignment and alignment offset instead of copying
    /// them: the source keeps neither, so it is not aligned a second time inside the wrapper.
    ///
    /// Both nodes are marked dirty.
    pub fn fork_bounding_parent(
        &mut self,
        id: BoundsId,
        spacing: Spacing,
    ) -> LayoutResult<BoundsId> {
        let (name, spec, parent, owner) = {
            let node = self.node_raw(id)?;
            (node.name.clone(), node.spec, node.parent, node.owner)
        };

        let wrapper_spec = BoundsSpec {
            horizontal_sizing: spec.horizontal_sizing,
            vertical_sizing: spec.vertical_sizing,
            alignment: spec.alignment,
            fixed_x: spec.fixed_x,
            fixed_y: spec.fixed_y,
            fixed_width: spec.fixed_width
                + 2.0 * spec.fixed_padding_x
                + spacing.left
                + spacing.right,
            fixed_height: spec.fixed_height
                + 2.0 * spec.fixed_padding_y
                + spacing.top
                + spacing.bottom,
            fixed_offset_x: spec.fixed_offset_x,
            fixed_offset_y: spec.fixed_offset_y,
            percent_width: spec.percent_width,
            percent_height: spec.percent_height,
            ..BoundsSpec::default()
        };
        let wrapper_name = if name.is_empty() {
            String::new()
        } else {
            format!("{name}:bounds")
        };

        let wrapper = BoundsId(self.nodes.len() as u32);
        let mut wrapper_node = BoundsNode::new(wrapper_name, wrapper_spec);
        wrapper_node.parent = parent;
        wrapper_node.owner = owner;
        wrapper_node.children = vec![id];
        self.nodes.push(Some(wrapper_node));

        if let Some(owner) = owner {
            for slot in self.node_raw_mut(owner)?.children.iter_mut() {
                if *slot == id {
                    *slot = wrapper;
                }
            }
        }

        let source = self.node_raw_mut(id)?;
        source.spec.fixed_x = spacing.left;
        source.spec.fixed_y = spacing.top;
        source.spec.percent_width = 1.0;
        source.spec.percent_height = 1.0;
        source.spec.alignment = Alignment::None;
        source.spec.fixed_offset_x = 0.0;
        source.spec.fixed_offset_y = 0.0;
        source.parent = Some(wrapper);
        source.owner = Some(wrapper);

        self.mark_dirty_recursive(wrapper)?;
        tracing::debug!(source = %id, %wrapper, "wrapped node in bounding parent");
        Ok(wrapper)
    }

    fn source(&self, id: BoundsId) -> LayoutResult<(BoundsSpec, Option<BoundsId>)> {
        let node = self.node_raw(id)?;
        Ok((node.spec, node.parent))
    }

    fn push_derived(
        &mut self,
        from: BoundsId,
        spec: BoundsSpec,
        parent: Option<BoundsId>,
    ) -> LayoutResult<BoundsId> {
        let name = self.node_raw(from)?.name.clone();
        let id = self.insert_named(name, spec);
        self.node_raw_mut(id)?.parent = parent;
        Ok(id)
    }
}

fn with_delta(mut spec: BoundsSpec, delta: BoundsDelta) -> BoundsSpec {
    spec.fixed_x += delta.x;
    spec.fixed_y += delta.y;
    spec.fixed_width += delta.width;
    spec.fixed_height += delta.height;
    spec
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/derive.rs"]
mod tests;
