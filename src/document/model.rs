use crate::{
    bounds::{
        model::{BoundsSpec, Sizing},
        node::BoundsId,
        tree::BoundsTree,
    },
    foundation::core::{ScaleContext, Vec2},
    foundation::error::{LayoutError, LayoutResult},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A declarative bounds tree plus the UI scale it is resolved with.
///
/// Documents are plain serde data (JSON). Building one produces a fresh [`BoundsTree`];
/// resolving one also runs the sizing resolver.
pub struct LayoutDocument {
    /// UI scale factor; defaults to 1.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Root node.
    pub root: NodeDecl,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// One node of a [`LayoutDocument`].
pub struct NodeDecl {
    /// Diagnostic name; reported in errors, snapshots and hit-tests.
    #[serde(default)]
    pub name: String,
    /// Whether this node is a drawing surface.
    #[serde(default)]
    pub drawing_surface: bool,
    /// Render-space translation of this node.
    #[serde(default)]
    pub render_offset: Vec2,
    /// Raw geometry inputs, flattened into the node object.
    #[serde(flatten)]
    pub bounds: BoundsSpec,
    /// Owned children.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDecl>,
}

fn default_scale() -> f64 {
    1.0
}

impl NodeDecl {
    /// Unnamed node with the given inputs.
    pub fn new(bounds: BoundsSpec) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub fn named(name: impl Into<String>, bounds: BoundsSpec) -> Self {
        Self {
            name: name.into(),
            ..Self::new(bounds)
        }
    }

    pub fn child(mut self, child: NodeDecl) -> Self {
        self.children.push(child);
        self
    }

    pub fn drawing_surface(mut self) -> Self {
        self.drawing_surface = true;
        self
    }
}

impl LayoutDocument {
    pub fn new(root: NodeDecl) -> Self {
        Self { scale: 1.0, root }
    }

    pub fn from_json_str(json: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_reader(reader: impl std::io::Read) -> LayoutResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_pretty(&self) -> LayoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check values the resolver cannot handle: non-finite numbers, non-positive scale, and
    /// fit-to-children nodes without children.
    pub fn validate(&self) -> LayoutResult<()> {
        ScaleContext::new(self.scale)?;
        let mut stack = vec![(&self.root, "root".to_string())];
        while let Some((node, path)) = stack.pop() {
            let path = if node.name.is_empty() {
                path
            } else {
                format!("{path}/{}", node.name)
            };
            if !node.bounds.is_finite() {
                return Err(LayoutError::validation(format!(
                    "{path}: geometry values must be finite"
                )));
            }
            if !node.render_offset.is_finite() {
                return Err(LayoutError::validation(format!(
                    "{path}: render_offset must be finite"
                )));
            }
            let fits = node.bounds.horizontal_sizing == Sizing::FitToChildren
                || node.bounds.vertical_sizing == Sizing::FitToChildren;
            if fits && node.children.is_empty() {
                return Err(LayoutError::validation(format!(
                    "{path}: fit-to-children sizing requires at least one child"
                )));
            }
            for (i, child) in node.children.iter().enumerate() {
                stack.push((child, format!("{path}[{i}]")));
            }
        }
        Ok(())
    }

    /// Build the declared nodes into a fresh tree. Returns the tree and its root.
    pub fn build(&self) -> LayoutResult<(BoundsTree, BoundsId)> {
        let mut tree = BoundsTree::new();
        let root = insert_decl(&mut tree, &self.root)?;
        Ok((tree, root))
    }

    /// Validate, build and resolve with the document's scale, or `scale_override` if given.
    #[tracing::instrument(skip(self), fields(root = %self.root.name))]
    pub fn resolve(&self, scale_override: Option<f64>) -> LayoutResult<(BoundsTree, BoundsId)> {
        self.validate()?;
        let scale = ScaleContext::new(scale_override.unwrap_or(self.scale))?;
        let (mut tree, root) = self.build()?;
        tree.resolve(root, &scale)?;
        Ok((tree, root))
    }
}

fn insert_decl(tree: &mut BoundsTree, decl: &NodeDecl) -> LayoutResult<BoundsId> {
    let id = tree.insert_named(decl.name.clone(), decl.bounds);
    tree.set_drawing_surface(id, decl.drawing_surface)?;
    tree.set_render_offset(id, decl.render_offset)?;
    for child in &decl.children {
        let child_id = insert_decl(tree, child)?;
        tree.attach(id, child_id)?;
    }
    Ok(id)
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
