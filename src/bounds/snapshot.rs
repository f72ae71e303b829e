use crate::{
    bounds::{frame::BoundsFrame, node::BoundsId, tree::BoundsTree},
    foundation::core::{Point, Size, Vec2},
    foundation::error::{LayoutError, LayoutResult},
};

/// Immutable copy of the resolved geometry of a subtree, safe to hand to other threads.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayoutSnapshot {
    /// Nodes in pre-order (parents before children).
    pub nodes: Vec<SnapshotNode>,
}

/// Resolved geometry of one node inside a [`LayoutSnapshot`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SnapshotNode {
    pub id: BoundsId,
    pub name: String,
    /// Distance from the snapshot root.
    pub depth: usize,
    /// Owner within the snapshot; `None` for the snapshot root.
    pub owner: Option<BoundsId>,
    pub absolute: Point,
    pub relative: Point,
    pub draw: Point,
    pub render: Point,
    pub inner: Size,
    pub outer: Size,
    pub padding: Vec2,
    pub margin: Vec2,
}

impl LayoutSnapshot {
    pub fn find(&self, name: &str) -> Option<&SnapshotNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn get(&self, id: BoundsId) -> Option<&SnapshotNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

impl BoundsTree {
    /// Capture the resolved geometry of `root` and its owned subtree.
    ///
    /// Fails if any node of the subtree is not initialized; resolve first.
    pub fn snapshot(&self, root: BoundsId) -> LayoutResult<LayoutSnapshot> {
        let mut nodes = Vec::new();
        let mut stack = vec![(root, 0usize, None)];
        while let Some((id, depth, owner)) = stack.pop() {
            let node = self.node(id)?;
            if !node.is_initialized() {
                return Err(LayoutError::tree(format!(
                    "cannot snapshot {id}: bounds are not resolved"
                )));
            }
            nodes.push(SnapshotNode {
                id,
                name: node.name().to_string(),
                depth,
                owner,
                absolute: node.absolute_position(),
                relative: node.relative_position(),
                draw: node.draw_position(),
                render: node.render_position(),
                inner: node.inner_size(),
                outer: node.outer_size(),
                padding: node.padding(),
                margin: node.margin(),
            });
            for &child in node.children().iter().rev() {
                stack.push((child, depth + 1, Some(id)));
            }
        }
        Ok(LayoutSnapshot { nodes })
    }

    /// Nodes of the subtree at `root` whose outer box contains `(x, y)`, outermost first.
    ///
    /// Children are visited even when their parent does not contain the point, since nothing
    /// clips a child to its parent's box.
    pub fn hit_test(&self, root: BoundsId, x: f64, y: f64) -> LayoutResult<Vec<BoundsId>> {
        let mut hits = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let node = self.node(id)?;
            if node.point_inside(x, y) {
                hits.push(id);
            }
            stack.extend(node.children().iter().rev().copied());
        }
        Ok(hits)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/snapshot.rs"]
mod tests;
