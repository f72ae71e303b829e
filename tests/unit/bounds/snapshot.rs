use super::*;
use crate::{Alignment, BoundsSpec};

fn dialog() -> (BoundsTree, BoundsId) {
    let mut tree = BoundsTree::new();
    let root = tree.insert_named(
        "dialog",
        BoundsSpec::fixed_size(100.0, 80.0).with_fixed_padding(4.0),
    );
    let title = tree.insert_named("title", BoundsSpec::fixed(0.0, 0.0, 100.0, 10.0));
    let body = tree.insert_named("body", BoundsSpec::fixed(0.0, 20.0, 100.0, 50.0));
    let button = tree.insert_named(
        "button",
        BoundsSpec::fixed_size_aligned(Alignment::RightBottom, 20.0, 10.0),
    );
    tree.attach_all(root, &[title, body]).unwrap();
    tree.attach(body, button).unwrap();
    (tree, root)
}

#[test]
fn snapshot_lists_nodes_in_pre_order_with_depth() {
    let (mut tree, root) = dialog();
    tree.resolve(root, &1.0).unwrap();
    let snap = tree.snapshot(root).unwrap();

    let names: Vec<_> = snap.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["dialog", "title", "body", "button"]);
    let depths: Vec<_> = snap.nodes.iter().map(|n| n.depth).collect();
    assert_eq!(depths, [0, 1, 1, 2]);
    assert_eq!(snap.nodes[0].owner, None);
    assert_eq!(snap.find("button").unwrap().owner, Some(snap.find("body").unwrap().id));
}

#[test]
fn snapshot_captures_derived_positions() {
    let (mut tree, root) = dialog();
    tree.resolve(root, &1.0).unwrap();
    let snap = tree.snapshot(root).unwrap();

    let button = snap.find("button").unwrap();
    assert_eq!(button.margin, Vec2::new(80.0, 40.0));
    assert_eq!(button.relative, Point::new(80.0, 40.0));
    assert_eq!(button.absolute, Point::new(84.0, 64.0));
    assert_eq!(button.outer, Size::new(20.0, 10.0));
    assert_eq!(snap.find("dialog").unwrap().outer, Size::new(108.0, 88.0));
}

#[test]
fn snapshot_of_an_unresolved_tree_fails() {
    let (tree, root) = dialog();
    let err = tree.snapshot(root).unwrap_err();
    assert!(matches!(err, LayoutError::Tree(_)));
}

#[test]
fn hit_test_returns_every_containing_node_outermost_first() {
    let (mut tree, root) = dialog();
    tree.resolve(root, &1.0).unwrap();
    let name = |id: BoundsId| tree.node(id).unwrap().name().to_string();

    let hits: Vec<_> = tree.hit_test(root, 90.0, 70.0).unwrap().into_iter().map(name).collect();
    assert_eq!(hits, ["dialog", "body", "button"]);

    let hits: Vec<_> = tree.hit_test(root, 10.0, 8.0).unwrap().into_iter().map(name).collect();
    assert_eq!(hits, ["dialog", "title"]);

    assert!(tree.hit_test(root, 500.0, 500.0).unwrap().is_empty());
}

#[test]
fn snapshot_serializes_to_json() {
    let (mut tree, root) = dialog();
    tree.resolve(root, &1.0).unwrap();
    let json = serde_json::to_value(tree.snapshot(root).unwrap()).unwrap();
    assert_eq!(json["nodes"][3]["name"], "button");
    assert_eq!(json["nodes"][0]["depth"], 0);
}
