//! Run-to-element conversion.

use leafmark_core::{RunKind, TextRun};
use leafmark_html::{LeafNode, Props};

/// Convert a text run into a leaf element.
///
/// | kind   | tag    | value  | props          |
/// |--------|--------|--------|----------------|
/// | Plain  | none   | text   | none           |
/// | Bold   | `b`    | text   | none           |
/// | Italic | `i`    | text   | none           |
/// | Code   | `code` | text   | none           |
/// | Link   | `a`    | text   | `href`         |
/// | Image  | `img`  | empty  | `src`, `alt`   |
///
/// An image moves its text into the `alt` prop. A link or image without a
/// url keeps the attribute with no value, which serializes as `None`.
pub fn text_run_to_leaf(run: &TextRun) -> LeafNode {
    let url = run.url().map(str::to_string);
    match run.kind() {
        RunKind::Plain => LeafNode::raw(run.text()),
        RunKind::Bold => LeafNode::new(Some("b"), run.text()),
        RunKind::Italic => LeafNode::new(Some("i"), run.text()),
        RunKind::Code => LeafNode::new(Some("code"), run.text()),
        RunKind::Link => {
            let mut props = Props::new();
            props.insert("href".to_string(), url);
            LeafNode::new(Some("a"), run.text()).with_props(props)
        }
        RunKind::Image => {
            let mut props = Props::new();
            props.insert("src".to_string(), url);
            props.insert("alt".to_string(), Some(run.text().to_string()));
            LeafNode::new(Some("img"), "").with_props(props)
        }
    }
}

/// Convert a sequence of runs, keeping their order.
pub fn text_runs_to_leaves(runs: &[TextRun]) -> Vec<LeafNode> {
    runs.iter().map(text_run_to_leaf).collect()
}
