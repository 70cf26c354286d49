use serde_json::json;

use crate::render::HtmlRenderer;
use crate::walker::{DEFAULT_PALETTE, walk};

fn render_source(source: &str, roots: &[serde_json::Value]) -> String {
    let tree = walk(roots, source.as_bytes(), &DEFAULT_PALETTE);
    HtmlRenderer::new(&tree, source).render().unwrap()
}

#[test]
fn internal_nodes_get_a_toggle_and_child_container() {
    let roots = vec![json!({
        "Bold": {
            "location": {"start": 0, "end": 5},
            "content": [
                {"Text": {"location": {"start": 2, "end": 5}}}
            ]
        }
    })];
    let html = render_source("**abc**", &roots);

    assert!(html.contains("toggleNode('node_0')"));
    assert!(html.contains("<div id=\"node_0\" class=\"tree-children\">"));
    assert!(html.contains("<span class=\"tree-element\">Bold</span>"));
    assert!(html.contains("<span class=\"tree-position\">(0~5)</span>"));
    assert!(html.contains("<span class=\"tree-content\">\"abc\"</span>"));
}

#[test]
fn leaves_get_a_marker_and_no_container() {
    let roots = vec![json!({"Text": {"location": {"start": 1, "end": 4}}})];
    let html = render_source("**abc**", &roots);

    assert!(html.contains("class=\"leaf-icon\""));
    assert!(!html.contains("toggleNode('"));
    assert!(!html.contains("class=\"tree-children\""));
    assert!(html.contains("(1~4)"));
}

#[test]
fn source_section_starts_collapsed_and_tree_expanded() {
    let html = render_source("abc", &[]);

    assert!(html.contains("<div class=\"section-content collapsed\" id=\"original-section\">"));
    assert!(html.contains("<div class=\"section-content\" id=\"tree-section\">"));
    assert!(html.contains("id=\"original-toggle\">\u{25b6}<"));
    assert!(html.contains("id=\"tree-toggle\">\u{25bc}<"));
}

#[test]
fn full_source_text_is_escaped() {
    let html = render_source("<b>&\"q\"</b>", &[]);
    assert!(html.contains("&lt;b&gt;&amp;&quot;q&quot;&lt;/b&gt;"));
    assert!(!html.contains("<b>&\"q\"</b>"));
}

#[test]
fn node_kinds_are_escaped() {
    let roots = vec![json!({"<script>": {"location": {"start": 0, "end": 1}}})];
    let html = render_source("x", &roots);
    assert!(html.contains("<span class=\"tree-element\">&lt;script&gt;</span>"));
}

#[test]
fn empty_preview_omits_the_content_span() {
    let roots = vec![json!({"Null": {"location": {"start": 0, "end": 0}}})];
    let html = render_source("x", &roots);
    assert!(!html.contains("class=\"tree-content\""));
}

#[test]
fn empty_tree_still_renders_a_complete_document() {
    let html = render_source("", &[]);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.trim_end().ends_with("</html>"));
    assert!(html.contains("Expand All"));
    assert!(html.contains("Collapse All"));
    assert!(!html.contains("class=\"tree-node\""));
}

#[test]
fn document_is_self_contained() {
    let roots = vec![json!({"Text": {"location": {"start": 0, "end": 1}}})];
    let html = render_source("x", &roots);

    assert!(html.contains("<style>"));
    assert!(html.contains("<script>"));
    assert!(!html.contains("src="));
    assert!(!html.contains("href="));
    assert!(!html.contains("http://"));
    assert!(!html.contains("https://"));
}

#[test]
fn title_is_configurable_and_escaped() {
    let tree = walk(&[], b"", &DEFAULT_PALETTE);
    let html = HtmlRenderer::new(&tree, "")
        .with_title("My <Grammar>")
        .render()
        .unwrap();

    assert!(html.contains("<title>My &lt;Grammar&gt;</title>"));
    assert!(html.contains("<h1>My &lt;Grammar&gt;</h1>"));
}

#[test]
fn siblings_nest_independently() {
    let roots = vec![
        json!({"A": {"location": {"start": 0, "end": 2}, "content": [
            {"Text": {"location": {"start": 0, "end": 1}}}
        ]}}),
        json!({"B": {"location": {"start": 2, "end": 4}, "content": [
            {"Text": {"location": {"start": 2, "end": 3}}}
        ]}}),
    ];
    let html = render_source("wxyz", &roots);

    assert!(html.contains("toggleNode('node_0')"));
    assert!(html.contains("toggleNode('node_1')"));
    assert!(html.contains("<div id=\"node_0\" class=\"tree-children\">"));
    assert!(html.contains("<div id=\"node_1\" class=\"tree-children\">"));

    // Pre-order: A's child container opens before B's node line.
    let a_container = html.find("<div id=\"node_0\" class=\"tree-children\">").unwrap();
    let b_parent = html.find("toggleNode('node_1')").unwrap();
    assert!(a_container < b_parent);
}
