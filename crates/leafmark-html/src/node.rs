//! HTML element tree.
//!
//! A tree is built from two concrete shapes:
//! - [`LeafNode`] - a tag and a scalar value, no children
//! - [`ParentNode`] - a tag and ordered children, no value
//!
//! [`Node`] is the closed union of the two. [`HtmlNode`] is the untyped base
//! record that carries every field at once; it is never rendered directly and
//! must be classified into a [`Node`] first.
//!
//! Props are kept on every node but are not written into rendered tags.

use leafmark_core::{LeafmarkError, Result};

use crate::props::{props_to_html, Props};

/// Element with a scalar value and no children.
///
/// A leaf without a tag renders its value as raw text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub props: Option<Props>,
}

impl LeafNode {
    /// Create a leaf with an optional tag and a value.
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            props: None,
        }
    }

    /// Create an untagged leaf that renders as raw text.
    pub fn raw(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    /// Attach props to this leaf.
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    pub fn props_to_html(&self) -> String {
        props_to_html(self.props.as_ref())
    }

    /// Render this leaf.
    ///
    /// Fails with [`LeafmarkError::MissingValue`] when the value is absent.
    pub fn to_html(&self) -> Result<String> {
        let value = self.value.as_deref().ok_or(LeafmarkError::MissingValue)?;
        match self.tag.as_deref() {
            None => Ok(value.to_string()),
            Some(tag) => Ok(format!("<{tag}>{value}</{tag}>")),
        }
    }
}

/// Element with ordered children and no value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<Node>>,
    pub props: Option<Props>,
}

impl ParentNode {
    /// Create a parent node. The children are owned by the node from here on.
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            props: None,
        }
    }

    /// Attach props to this parent.
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }

    pub fn props_to_html(&self) -> String {
        props_to_html(self.props.as_ref())
    }

    /// Render this parent and all of its descendants.
    ///
    /// The tag is checked before the children. The first child that fails to
    /// render aborts the whole render.
    pub fn to_html(&self) -> Result<String> {
        let tag = self.tag.as_deref().ok_or(LeafmarkError::MissingTag)?;
        let children = self
            .children
            .as_deref()
            .ok_or(LeafmarkError::MissingChildren)?;

        let mut html = format!("<{tag}>");
        for child in children {
            html.push_str(&child.to_html()?);
        }
        html.push_str("</");
        html.push_str(tag);
        html.push('>');
        Ok(html)
    }
}

/// A renderable element: either a leaf or a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl Node {
    pub fn to_html(&self) -> Result<String> {
        match self {
            Node::Leaf(leaf) => leaf.to_html(),
            Node::Parent(parent) => parent.to_html(),
        }
    }

    pub fn props_to_html(&self) -> String {
        props_to_html(self.props())
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_deref(),
            Node::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn props(&self) -> Option<&Props> {
        match self {
            Node::Leaf(leaf) => leaf.props.as_ref(),
            Node::Parent(parent) => parent.props.as_ref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}

/// Untyped base node with every field optional.
///
/// This is the shape boundary data arrives in before it is known to be a
/// leaf or a parent. It can serialize its props but cannot render itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub children: Option<Vec<Node>>,
    pub props: Option<Props>,
}

impl HtmlNode {
    pub fn props_to_html(&self) -> String {
        props_to_html(self.props.as_ref())
    }

    /// Always fails with [`LeafmarkError::Unimplemented`]; convert into a
    /// [`Node`] to render.
    pub fn to_html(&self) -> Result<String> {
        Err(LeafmarkError::Unimplemented)
    }
}

impl TryFrom<HtmlNode> for Node {
    type Error = LeafmarkError;

    /// A value without children is a leaf, children without a value is a
    /// parent. Any other combination is neither.
    fn try_from(node: HtmlNode) -> Result<Self> {
        match (node.value, node.children) {
            (Some(value), None) => Ok(Node::Leaf(LeafNode {
                tag: node.tag,
                value: Some(value),
                props: node.props,
            })),
            (None, Some(children)) => Ok(Node::Parent(ParentNode {
                tag: node.tag,
                children: Some(children),
                props: node.props,
            })),
            _ => Err(LeafmarkError::Unimplemented),
        }
    }
}
