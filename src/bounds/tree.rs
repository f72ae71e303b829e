use crate::{
    bounds::{
        frame::NodeRef,
        model::BoundsSpec,
        node::{BoundsId, BoundsNode, BoundsState},
    },
    foundation::core::Vec2,
    foundation::error::{LayoutError, LayoutResult},
};

/// Arena owning every bounds node of one or more trees.
///
/// A node exclusively owns the nodes in its children list: [`BoundsTree::discard`] removes the
/// whole owned subtree. The parent reference used for geometry is a separate, non-owning link
/// that usually (but not necessarily) points at the owner.
#[derive(Clone, Debug, Default)]
pub struct BoundsTree {
    pub(crate) nodes: Vec<Option<BoundsNode>>,
}

impl BoundsTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a detached node.
    pub fn insert(&mut self, spec: BoundsSpec) -> BoundsId {
        self.insert_named(String::new(), spec)
    }

    /// Insert a detached node with a diagnostic name.
    pub fn insert_named(&mut self, name: impl Into<String>, spec: BoundsSpec) -> BoundsId {
        let id = BoundsId(self.nodes.len() as u32);
        self.nodes.push(Some(BoundsNode::new(name.into(), spec)));
        id
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: BoundsId) -> bool {
        self.slot(id).is_some()
    }

    /// Read access to a node.
    pub fn node(&self, id: BoundsId) -> LayoutResult<NodeRef<'_>> {
        self.get(id)
            .ok_or_else(|| LayoutError::tree(format!("unknown bounds node {id}")))
    }

    pub fn get(&self, id: BoundsId) -> Option<NodeRef<'_>> {
        self.slot(id).map(|node| NodeRef::new(self, id, node))
    }

    /// Live nodes not owned by any other node.
    pub fn roots(&self) -> impl Iterator<Item = BoundsId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| {
            n.as_ref()
                .filter(|n| n.owner.is_none())
                .map(|_| BoundsId(i as u32))
        })
    }

    pub fn children(&self, id: BoundsId) -> LayoutResult<&[BoundsId]> {
        Ok(&self.node_raw(id)?.children)
    }

    /// Raw inputs of a node.
    pub fn spec(&self, id: BoundsId) -> LayoutResult<&BoundsSpec> {
        Ok(&self.node_raw(id)?.spec)
    }

    /// Mutable raw inputs. The caller is responsible for [`BoundsTree::mark_dirty_recursive`].
    pub fn spec_mut(&mut self, id: BoundsId) -> LayoutResult<&mut BoundsSpec> {
        Ok(&mut self.node_raw_mut(id)?.spec)
    }

    /// Apply `f` to the raw inputs of `id` and mark its subtree dirty.
    pub fn update_spec(
        &mut self,
        id: BoundsId,
        f: impl FnOnce(&mut BoundsSpec),
    ) -> LayoutResult<()> {
        f(&mut self.node_raw_mut(id)?.spec);
        self.mark_dirty_recursive(id)
    }

    pub fn set_name(&mut self, id: BoundsId, name: impl Into<String>) -> LayoutResult<()> {
        self.node_raw_mut(id)?.name = name.into();
        Ok(())
    }

    /// Mark `id` as a drawing surface: descendants' draw positions restart at its padding box.
    pub fn set_drawing_surface(&mut self, id: BoundsId, drawing_surface: bool) -> LayoutResult<()> {
        self.node_raw_mut(id)?.drawing_surface = drawing_surface;
        Ok(())
    }

    /// Translation between UI space and the render target, applied in the render position
    /// chain only.
    pub fn set_render_offset(&mut self, id: BoundsId, offset: Vec2) -> LayoutResult<()> {
        self.node_raw_mut(id)?.render_offset = offset;
        Ok(())
    }

    /// Add `child` to `parent`'s children list and take ownership of it.
    ///
    /// The geometry back-reference of `child` is set to `parent` only if it was unset.
    /// Attaching an already attached child to the same parent is a no-op.
    pub fn attach(&mut self, parent: BoundsId, child: BoundsId) -> LayoutResult<()> {
        self.node_raw(parent)?;
        let owner = self.node_raw(child)?.owner;
        match owner {
            Some(o) if o == parent => return Ok(()),
            Some(o) => {
                return Err(LayoutError::tree(format!(
                    "cannot attach {child} to {parent}: already owned by {o}"
                )));
            }
            None => {}
        }
        if self.owns_transitively(child, parent) {
            return Err(LayoutError::tree(format!(
                "cannot attach {child} to {parent}: would create an ownership cycle"
            )));
        }

        self.node_raw_mut(parent)?.children.push(child);
        let node = self.node_raw_mut(child)?;
        node.owner = Some(parent);
        if node.parent.is_none() {
            node.parent = Some(parent);
        }
        Ok(())
    }

    pub fn attach_all(&mut self, parent: BoundsId, children: &[BoundsId]) -> LayoutResult<()> {
        for &child in children {
            self.attach(parent, child)?;
        }
        Ok(())
    }

    /// Remove `child` from its owner's children list. A parent reference pointing at the old
    /// owner is cleared too.
    pub fn detach(&mut self, child: BoundsId) -> LayoutResult<()> {
        let Some(owner) = self.node_raw(child)?.owner else {
            return Ok(());
        };
        self.node_raw_mut(owner)?.children.retain(|c| *c != child);
        let node = self.node_raw_mut(child)?;
        node.owner = None;
        if node.parent == Some(owner) {
            node.parent = None;
        }
        Ok(())
    }

    /// Point the geometry back-reference at `parent` without changing ownership.
    pub fn set_parent(&mut self, child: BoundsId, parent: BoundsId) -> LayoutResult<()> {
        self.node_raw(parent)?;
        self.node_raw_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Resolve `child` against the empty sentinel parent from now on.
    pub fn clear_parent(&mut self, child: BoundsId) -> LayoutResult<()> {
        self.node_raw_mut(child)?.parent = None;
        Ok(())
    }

    /// Reset `id` and its entire owned subtree to [`BoundsState::Dirty`].
    pub fn mark_dirty_recursive(&mut self, id: BoundsId) -> LayoutResult<()> {
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            let node = self.node_raw_mut(cur)?;
            node.state = BoundsState::Dirty;
            stack.extend(node.children.iter().copied());
        }
        Ok(())
    }

    /// Destroy `id` and everything it owns.
    ///
    /// Surviving nodes whose parent reference pointed into the removed subtree fall back to the
    /// empty sentinel parent.
    pub fn discard(&mut self, id: BoundsId) -> LayoutResult<()> {
        self.detach(id)?;

        let mut removed = Vec::new();
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(cur.0 as usize).and_then(Option::take) {
                stack.extend(node.children);
                removed.push(cur);
            }
        }

        for node in self.nodes.iter_mut().flatten() {
            if node.parent.is_some_and(|p| removed.contains(&p)) {
                node.parent = None;
            }
        }
        tracing::debug!(root = %id, count = removed.len(), "discarded bounds subtree");
        Ok(())
    }

    // Whether `ancestor` is `id` or owns it through the children lists.
    fn owns_transitively(&self, ancestor: BoundsId, id: BoundsId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            if c == ancestor {
                return true;
            }
            cur = self.slot(c).and_then(|n| n.owner);
        }
        false
    }

    pub(crate) fn slot(&self, id: BoundsId) -> Option<&BoundsNode> {
        self.nodes.get(id.0 as usize).and_then(Option::as_ref)
    }

    pub(crate) fn node_raw(&self, id: BoundsId) -> LayoutResult<&BoundsNode> {
        self.slot(id)
            .ok_or_else(|| LayoutError::tree(format!("unknown bounds node {id}")))
    }

    pub(crate) fn node_raw_mut(&mut self, id: BoundsId) -> LayoutResult<&mut BoundsNode> {
        self.nodes
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or_else(|| LayoutError::tree(format!("unknown bounds node {id}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/tree.rs"]
mod tests;
