//! SVG Conversion Integration Tests
//!
//! Tests the complete markup-to-scene-graph flow for SVG input:
//! - Transform attribute parsing and bounds folding
//! - Group translation composition
//! - Shape geometry and presentation attributes
//! - Observable warnings for ignored transform input

use sceneforge_convert::{convert_html, convert_tree, DomNode};
use sceneforge_scene::{NodeType, SceneNode};

fn root_of(node: &DomNode) -> SceneNode {
    convert_tree(node).node.expect("root should convert")
}

// ============================================================================
// Full Document Flow
// ============================================================================

#[test]
fn test_svg_document_from_json() {
    let json = r##"{
        "type": "element",
        "tagName": "svg",
        "attributes": { "width": "400", "height": "300" },
        "children": [
            {
                "type": "element",
                "tagName": "g",
                "attributes": { "id": "shapes", "transform": "translate(20, 30)" },
                "children": [
                    {
                        "type": "element",
                        "tagName": "rect",
                        "attributes": { "x": "5", "y": "5", "width": "90", "height": "40", "fill": "#336699", "rx": "4" }
                    },
                    {
                        "type": "element",
                        "tagName": "circle",
                        "attributes": { "cx": "150", "cy": "25", "r": "20", "fill": "red" }
                    }
                ]
            }
        ]
    }"##;

    let conversion = convert_html(json).expect("should ingest");
    let root = conversion.node.expect("root should convert");

    assert_eq!(root.node_type, NodeType::Frame);
    assert_eq!(root.name, "svg");
    assert_eq!(root.width, Some(400.0));
    assert_eq!(root.height, Some(300.0));

    let group = &root.children.as_ref().expect("svg children")[0];
    assert_eq!(group.node_type, NodeType::Group);
    assert_eq!(group.name, "g#shapes");
    assert_eq!(group.x, Some(20.0));
    assert_eq!(group.y, Some(30.0));

    let shapes = group.children.as_ref().expect("group children");
    assert_eq!(shapes[0].node_type, NodeType::Rectangle);
    assert_eq!(shapes[0].corner_radius, Some(4.0));
    assert_eq!(shapes[1].node_type, NodeType::Rectangle);
    assert_eq!(shapes[1].corner_radius, Some(20.0));
    assert!(conversion.warnings.is_empty());
}

// ============================================================================
// Transform Semantics
// ============================================================================

#[test]
fn test_nested_group_translations_compose_per_level() {
    let root = root_of(
        &DomNode::element("g")
            .with_attr("transform", "translate(10, 10) translate(5, 5)")
            .with_children(vec![DomNode::element("g")
                .with_attr("transform", "translate(100, 0)")
                .with_children(vec![DomNode::element("rect")])]),
    );

    assert_eq!(root.x, Some(15.0));
    assert_eq!(root.y, Some(15.0));
    let inner = &root.children.as_ref().expect("children")[0];
    assert_eq!(inner.x, Some(100.0));
    assert!(inner.y.is_some());
}

#[test]
fn test_rotation_does_not_move_bounds() {
    let rotated = root_of(
        &DomNode::element("rect")
            .with_attr("x", "10")
            .with_attr("y", "20")
            .with_attr("width", "100")
            .with_attr("height", "50")
            .with_attr("transform", "rotate(45, 60, 45)"),
    );
    assert_eq!(rotated.x, Some(10.0));
    assert_eq!(rotated.y, Some(20.0));
    assert_eq!(rotated.width, Some(100.0));
    assert_eq!(rotated.height, Some(50.0));
}

#[test]
fn test_scale_then_translate_order_matters() {
    let scaled_first = root_of(
        &DomNode::element("rect")
            .with_attr("x", "10")
            .with_attr("width", "10")
            .with_attr("height", "10")
            .with_attr("transform", "scale(2) translate(5)"),
    );
    let translated_first = root_of(
        &DomNode::element("rect")
            .with_attr("x", "10")
            .with_attr("width", "10")
            .with_attr("height", "10")
            .with_attr("transform", "translate(5) scale(2)"),
    );

    assert_eq!(scaled_first.x, Some(25.0));
    assert_eq!(translated_first.x, Some(30.0));
}

#[test]
fn test_ignored_transform_input_is_reported() {
    let conversion = convert_tree(
        &DomNode::element("rect").with_attr("transform", "warp(3) translate(1, bad)"),
    );
    let node = conversion.node.expect("rect should convert");
    assert_eq!(node.x, Some(1.0));
    assert_eq!(conversion.warnings.len(), 2);
    assert!(conversion.warnings.iter().any(|w| w.contains("warp(3)")));
    assert!(conversion.warnings.iter().any(|w| w.contains("bad")));
}

// ============================================================================
// Mixed HTML/SVG
// ============================================================================

#[test]
fn test_svg_embedded_in_html() {
    let root = root_of(&DomNode::element("div").with_children(vec![
        DomNode::element("p").with_children(vec![DomNode::text("Chart:")]),
        DomNode::element("svg")
            .with_attr("width", "100")
            .with_attr("height", "100")
            .with_children(vec![DomNode::element("polygon")
                .with_attr("points", "0,100 50,0 100,100")]),
    ]));

    let children = root.children.expect("div children");
    assert_eq!(children[0].node_type, NodeType::Text);
    assert_eq!(children[1].node_type, NodeType::Frame);
    let polygon = &children[1].children.as_ref().expect("svg children")[0];
    assert_eq!(polygon.node_type, NodeType::Polygon);
    assert_eq!(polygon.width, Some(100.0));
    assert_eq!(polygon.height, Some(100.0));
}
