//! Element attributes.

use indexmap::IndexMap;

/// Ordered attribute map. Iteration follows insertion order.
///
/// A `None` value is an attribute that was declared without a value.
pub type Props = IndexMap<String, Option<String>>;

/// Build a [`Props`] map from key/value pairs, keeping their order.
pub fn props<K, V, I>(pairs: I) -> Props
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), Some(v.into())))
        .collect()
}

/// Text written for an attribute declared without a value.
pub const NULL_VALUE: &str = "None";

/// Serialize props as HTML attributes.
///
/// Each pair becomes ` key="value"` in insertion order and the whole fragment
/// gets one trailing space. Absent or empty maps render as an empty string. A
/// `None` value is written out as the literal [`NULL_VALUE`] (`key="None"`).
pub fn props_to_html(props: Option<&Props>) -> String {
    let Some(props) = props.filter(|p| !p.is_empty()) else {
        return String::new();
    };

    let mut html = String::new();
    for (key, value) in props {
        html.push(' ');
        html.push_str(key);
        html.push_str("=\"");
        html.push_str(value.as_deref().unwrap_or(NULL_VALUE));
        html.push('"');
    }
    html.push(' ');
    html
}
