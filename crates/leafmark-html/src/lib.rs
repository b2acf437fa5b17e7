//! Leafmark HTML
//!
//! A minimal HTML element tree with strict rendering rules.
//!
//! # Example
//!
//! ```
//! use leafmark_html::{LeafNode, Node, ParentNode};
//!
//! let tree = ParentNode::new(
//!     "div",
//!     vec![
//!         LeafNode::new(Some("p"), "A").into(),
//!         Node::from(ParentNode::new("span", vec![LeafNode::new(Some("b"), "X").into()])),
//!     ],
//! );
//!
//! assert_eq!(tree.to_html().unwrap(), "<div><p>A</p><span><b>X</b></span></div>");
//! ```

pub mod node;
pub mod props;

pub use node::{HtmlNode, LeafNode, Node, ParentNode};
pub use props::{props, props_to_html, Props, NULL_VALUE};
