use super::*;
use crate::BoundsFrame;

fn boxed(tree: &mut BoundsTree, name: &str) -> BoundsId {
    tree.insert_named(name, BoundsSpec::fixed_size(10.0, 10.0))
}

#[test]
fn attach_takes_ownership_and_sets_unset_parent() {
    let mut tree = BoundsTree::new();
    let parent = boxed(&mut tree, "parent");
    let child = boxed(&mut tree, "child");

    tree.attach(parent, child).unwrap();
    let node = tree.node(child).unwrap();
    assert_eq!(node.owner(), Some(parent));
    assert_eq!(node.parent(), Some(parent));
    assert_eq!(tree.children(parent).unwrap(), &[child]);
    assert_eq!(tree.roots().collect::<Vec<_>>(), vec![parent]);
}

#[test]
fn attach_keeps_an_existing_parent_reference() {
    let mut tree = BoundsTree::new();
    let owner = boxed(&mut tree, "owner");
    let anchor = boxed(&mut tree, "anchor");
    let child = boxed(&mut tree, "child");

    tree.set_parent(child, anchor).unwrap();
    tree.attach(owner, child).unwrap();
    let node = tree.node(child).unwrap();
    assert_eq!(node.owner(), Some(owner));
    assert_eq!(node.parent(), Some(anchor));
}

#[test]
fn attaching_twice_to_the_same_parent_is_a_no_op() {
    let mut tree = BoundsTree::new();
    let parent = boxed(&mut tree, "parent");
    let child = boxed(&mut tree, "child");
    tree.attach(parent, child).unwrap();
    tree.attach(parent, child).unwrap();
    assert_eq!(tree.children(parent).unwrap().len(), 1);
}

#[test]
fn attach_rejects_a_child_owned_elsewhere() {
    let mut tree = BoundsTree::new();
    let a = boxed(&mut tree, "a");
    let b = boxed(&mut tree, "b");
    let child = boxed(&mut tree, "child");
    tree.attach(a, child).unwrap();

    let err = tree.attach(b, child).unwrap_err();
    assert!(matches!(err, LayoutError::Tree(ref m) if m.contains("already owned")));
    assert!(tree.children(b).unwrap().is_empty());
}

#[test]
fn attach_rejects_ownership_cycles() {
    let mut tree = BoundsTree::new();
    let a = boxed(&mut tree, "a");
    let b = boxed(&mut tree, "b");
    let c = boxed(&mut tree, "c");
    tree.attach(a, b).unwrap();
    tree.attach(b, c).unwrap();

    assert!(tree.attach(c, a).is_err());
    assert!(tree.attach(a, a).is_err());
}

#[test]
fn detach_releases_ownership_and_owner_parent_reference() {
    let mut tree = BoundsTree::new();
    let parent = boxed(&mut tree, "parent");
    let child = boxed(&mut tree, "child");
    tree.attach(parent, child).unwrap();

    tree.detach(child).unwrap();
    let node = tree.node(child).unwrap();
    assert_eq!(node.owner(), None);
    assert_eq!(node.parent(), None);
    assert!(tree.children(parent).unwrap().is_empty());
    assert_eq!(tree.roots().count(), 2);
}

#[test]
fn discard_removes_owned_subtree_and_clears_dangling_parents() {
    let mut tree = BoundsTree::new();
    let root = boxed(&mut tree, "root");
    let panel = boxed(&mut tree, "panel");
    let label = boxed(&mut tree, "label");
    let tooltip = boxed(&mut tree, "tooltip");
    tree.attach(root, panel).unwrap();
    tree.attach(panel, label).unwrap();
    tree.attach(root, tooltip).unwrap();
    tree.set_parent(tooltip, label).unwrap();

    tree.discard(panel).unwrap();
    assert!(!tree.contains(panel));
    assert!(!tree.contains(label));
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.children(root).unwrap(), &[tooltip]);
    assert_eq!(tree.node(tooltip).unwrap().parent(), None);
    assert!(tree.node(label).is_err());
}

#[test]
fn update_spec_marks_the_subtree_dirty() {
    let mut tree = BoundsTree::new();
    let parent = boxed(&mut tree, "parent");
    let child = boxed(&mut tree, "child");
    tree.attach(parent, child).unwrap();
    tree.resolve(parent, &1.0).unwrap();
    assert_eq!(tree.node(child).unwrap().state(), BoundsState::Aligned);

    tree.update_spec(parent, |spec| spec.fixed_width = 40.0).unwrap();
    assert_eq!(tree.node(parent).unwrap().state(), BoundsState::Dirty);
    assert_eq!(tree.node(child).unwrap().state(), BoundsState::Dirty);
    assert_eq!(tree.spec(parent).unwrap().fixed_width, 40.0);
}

#[test]
fn unknown_ids_are_tree_errors() {
    let mut tree = BoundsTree::new();
    let id = boxed(&mut tree, "only");
    tree.discard(id).unwrap();

    assert!(tree.is_empty());
    assert!(tree.get(id).is_none());
    assert!(matches!(tree.spec(id), Err(LayoutError::Tree(_))));
    assert!(tree.resolve(id, &1.0).is_err());
}

#[test]
fn node_metadata_setters_apply() {
    let mut tree = BoundsTree::new();
    let id = tree.insert(BoundsSpec::default());
    tree.set_name(id, "dialog").unwrap();
    tree.set_drawing_surface(id, true).unwrap();
    tree.set_render_offset(id, Vec2::new(3.0, 4.0)).unwrap();

    let node = tree.node(id).unwrap();
    assert_eq!(node.name(), "dialog");
    assert!(node.is_drawing_surface());
    assert_eq!(node.render_offset(), Vec2::new(3.0, 4.0));
}
