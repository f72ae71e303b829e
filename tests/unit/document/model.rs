use super::*;
use crate::{Alignment, BoundsFrame, Point, Size};

const DIALOG: &str = r#"{
    "scale": 2.0,
    "root": {
        "name": "dialog",
        "drawing_surface": true,
        "horizontal_sizing": "fit_to_children",
        "vertical_sizing": "fit_to_children",
        "fixed_padding_x": 5,
        "fixed_padding_y": 5,
        "children": [
            { "name": "title", "fixed_width": 100, "fixed_height": 10 },
            { "name": "body", "fixed_y": 15, "fixed_width": 100, "fixed_height": 40 },
            {
                "name": "close",
                "alignment": "right_top",
                "fixed_width": 8,
                "fixed_height": 8
            },
            {
                "name": "background",
                "horizontal_sizing": "percentual",
                "vertical_sizing": "percentual",
                "percent_width": 1,
                "percent_height": 1
            }
        ]
    }
}"#;

#[test]
fn parses_with_defaults() {
    let doc = LayoutDocument::from_json_str(r#"{ "root": { "fixed_width": 10 } }"#).unwrap();
    assert_eq!(doc.scale, 1.0);
    assert_eq!(doc.root.name, "");
    assert!(!doc.root.drawing_surface);
    assert_eq!(doc.root.bounds, BoundsSpec::fixed_size(10.0, 0.0));
    assert!(doc.root.children.is_empty());
}

#[test]
fn unknown_alignment_tag_is_a_serde_error() {
    let err = LayoutDocument::from_json_str(r#"{ "root": { "alignment": "upside_down" } }"#)
        .unwrap_err();
    assert!(matches!(err, LayoutError::Serde(_)));
}

#[test]
fn build_preserves_structure_and_metadata() {
    let doc = LayoutDocument::from_json_str(DIALOG).unwrap();
    let (tree, root) = doc.build().unwrap();

    assert_eq!(tree.len(), 5);
    let node = tree.node(root).unwrap();
    assert_eq!(node.name(), "dialog");
    assert!(node.is_drawing_surface());
    let names: Vec<_> = node
        .children()
        .iter()
        .map(|&c| tree.node(c).unwrap().name().to_string())
        .collect();
    assert_eq!(names, ["title", "body", "close", "background"]);
    assert_eq!(
        tree.spec(node.children()[2]).unwrap().alignment,
        Alignment::RightTop
    );
}

#[test]
fn resolve_uses_document_scale() {
    let doc = LayoutDocument::from_json_str(DIALOG).unwrap();
    let (tree, root) = doc.resolve(None).unwrap();
    let snap = tree.snapshot(root).unwrap();

    let dialog = snap.find("dialog").unwrap();
    assert_eq!(dialog.inner, Size::new(200.0, 110.0));
    assert_eq!(dialog.outer, Size::new(220.0, 130.0));

    let close = snap.find("close").unwrap();
    assert_eq!(close.relative, Point::new(184.0, 0.0));
    assert_eq!(close.absolute, Point::new(194.0, 10.0));

    assert_eq!(snap.find("background").unwrap().inner, Size::new(220.0, 130.0));
}

#[test]
fn scale_override_wins() {
    let doc = LayoutDocument::from_json_str(DIALOG).unwrap();
    let (tree, root) = doc.resolve(Some(1.0)).unwrap();
    assert_eq!(tree.node(root).unwrap().outer_size(), Size::new(110.0, 65.0));
    assert!(doc.resolve(Some(-1.0)).is_err());
}

#[test]
fn validate_rejects_bad_scale() {
    let mut doc = LayoutDocument::new(NodeDecl::new(BoundsSpec::fixed_size(1.0, 1.0)));
    doc.scale = 0.0;
    assert!(matches!(doc.validate(), Err(LayoutError::Validation(_))));
}

#[test]
fn validate_reports_the_path_of_a_childless_fit_node() {
    let doc = LayoutDocument::new(
        NodeDecl::named("dialog", BoundsSpec::fixed_size(10.0, 10.0))
            .child(NodeDecl::named("list", BoundsSpec::fixed_size(5.0, 5.0)))
            .child(NodeDecl::named(
                "empty",
                BoundsSpec::fixed_size(10.0, 0.0)
                    .with_sizing_axes(Sizing::Fixed, Sizing::FitToChildren),
            )),
    );
    let err = doc.validate().unwrap_err();
    assert!(matches!(err, LayoutError::Validation(_)));
    assert!(err.to_string().contains("root/dialog[1]/empty"), "{err}");
}

#[test]
fn validate_rejects_non_finite_values() {
    let doc = LayoutDocument::new(NodeDecl::new(BoundsSpec {
        fixed_width: f64::NAN,
        ..BoundsSpec::default()
    }));
    assert!(doc.validate().is_err());

    let mut decl = NodeDecl::new(BoundsSpec::fixed_size(1.0, 1.0));
    decl.render_offset = Vec2::new(f64::INFINITY, 0.0);
    assert!(LayoutDocument::new(decl).validate().is_err());
}

#[test]
fn documents_survive_a_json_round_trip() {
    let doc = LayoutDocument::from_json_str(DIALOG).unwrap();
    let json = doc.to_json_pretty().unwrap();
    assert!(!json.contains("\"children\": []"));
    let again = LayoutDocument::from_json_str(&json).unwrap();

    let (a, ra) = doc.resolve(None).unwrap();
    let (b, rb) = again.resolve(None).unwrap();
    assert_eq!(a.snapshot(ra).unwrap(), b.snapshot(rb).unwrap());
}
