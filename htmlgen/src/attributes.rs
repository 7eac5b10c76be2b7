use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use std::{borrow::Cow, fmt};
use v_htmlescape::escape;

use crate::error::Error;

/// Ordered attribute list of an element.
///
/// Serialization follows insertion order. Setting a name that is already
/// present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parses a `name=value` pair. Only the first `=` separates.
    pub fn parse_pair(pair: &str) -> Result<(String, String), Error> {
        pair.split_once('=')
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .ok_or_else(|| Error::MalformedAttribute(pair.to_string()))
    }

    pub(crate) fn serialize(&self, escaped: bool) -> String {
        let mut out = String::new();

        for (key, value) in self.iter() {
            let value: Cow<'_, str> =
                if escaped { Cow::Owned(escape(value).to_string()) } else { Cow::Borrowed(value) };

            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&value);
            out.push_str("\" ");
        }

        out
    }
}

/// Serializes attributes as `name="value" ` pairs, trailing space included.
///
/// Values are written verbatim: a value containing `"` breaks the markup.
/// Use a [`crate::Generator`] with escaping enabled when that matters.
pub fn attributes(attributes: &Attributes) -> String {
    attributes.serialize(false)
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        attributes.extend(iter);
        attributes
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Scalar accepted as an attribute value in documents.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl ScalarValue {
    fn into_string(self) -> String {
        match self {
            ScalarValue::String(s) => s,
            ScalarValue::Integer(i) => i.to_string(),
            ScalarValue::Float(f) => f.to_string(),
            // same coercion the original string templates applied
            ScalarValue::Boolean(true) => "1".to_string(),
            ScalarValue::Boolean(false) => String::new(),
        }
    }
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
    type Value = Attributes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a table of attribute names to scalar values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut attributes = Attributes::new();

        while let Some((key, value)) = map.next_entry::<String, ScalarValue>()? {
            attributes.insert(key, value.into_string());
        }

        Ok(attributes)
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_attributes_serialize_to_nothing() {
        assert_eq!(attributes(&Attributes::new()), "");
    }

    #[test]
    fn insertion_order_is_kept() {
        let attrs = Attributes::new().with("style", "color: red;").with("class", "a").with("id", 3);

        assert_eq!(attributes(&attrs), r#"style="color: red;" class="a" id="3" "#);
    }

    #[test]
    fn replacing_a_value_keeps_its_position() {
        let mut attrs = Attributes::from([("href", "old"), ("class", "link")]);
        attrs.insert("href", "new");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attributes(&attrs), r#"href="new" class="link" "#);
    }

    #[test]
    fn values_are_not_escaped() {
        let attrs = Attributes::from([("title", r#"say "hi" & <go>"#)]);

        assert_eq!(attributes(&attrs), r#"title="say "hi" & <go>" "#);
    }

    #[test]
    fn escaped_serialization_escapes_values_only() {
        let attrs = Attributes::from([("data-x", r#"a"b<c"#)]);

        assert_eq!(attrs.serialize(true), r#"data-x="a&quot;b&lt;c" "#);
    }

    #[test]
    fn parse_pair_splits_on_first_equals() {
        assert_eq!(
            Attributes::parse_pair("style=a=b").unwrap(),
            ("style".to_string(), "a=b".to_string())
        );
        assert_eq!(Attributes::parse_pair("flag=").unwrap(), ("flag".to_string(), String::new()));
        assert!(matches!(
            Attributes::parse_pair("class"),
            Err(Error::MalformedAttribute(pair)) if pair == "class"
        ));
    }

    #[test]
    fn deserializes_in_document_order_with_scalar_coercion() {
        #[derive(Deserialize)]
        struct Holder {
            attributes: Attributes,
        }

        let source = concat!(
            r#"attributes = { zeta = "z", alpha = 1, width = 1.5, "#,
            r#"checked = true, hidden = false }"#
        );
        let holder: Holder = toml::from_str(source).unwrap();

        assert_eq!(
            attributes(&holder.attributes),
            r#"zeta="z" alpha="1" width="1.5" checked="1" hidden="" "#
        );
    }
}
