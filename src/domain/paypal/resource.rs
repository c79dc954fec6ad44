//! Helpers shared by provider resources.
//!
//! Responses keep every field except `id` in their `extra` map exactly as
//! PayPal sent it, so the accessors here read from that map.

use serde_json::{Map, Value};

use super::order::{Link, Money};

/// Whether `id` is safe to use as one path segment of a provider URL.
///
/// PayPal order, capture and refund ids are upper-case alphanumerics;
/// `-` and `_` are allowed for sandbox fixtures.
pub fn is_resource_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

pub(crate) fn str_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}

pub(crate) fn money_field(fields: &Map<String, Value>, name: &str) -> Option<Money> {
    fields
        .get(name)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}

/// HATEOAS links that decode; malformed entries are skipped.
pub(crate) fn links(fields: &Map<String, Value>) -> Vec<Link> {
    fields
        .get("links")
        .and_then(Value::as_array)
        .map(|links| {
            links
                .iter()
                .filter_map(|link| serde_json::from_value(link.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// `href` of the first link whose `rel` is one of `rels`.
pub(crate) fn link_href<'a>(fields: &'a Map<String, Value>, rels: &[&str]) -> Option<&'a str> {
    fields
        .get("links")?
        .as_array()?
        .iter()
        .find(|link| {
            link.get("rel")
                .and_then(Value::as_str)
                .is_some_and(|rel| rels.contains(&rel))
        })
        .and_then(|link| link.get("href"))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn provider_ids_are_accepted() {
        assert!(is_resource_id("5O190127TN364715T"));
        assert!(is_resource_id("2GG279541U471931P"));
        assert!(is_resource_id("ORDER-1"));
        assert!(is_resource_id("cap_1"));
    }

    #[test]
    fn traversal_and_separators_are_rejected() {
        for id in [
            "",
            "..",
            ".",
            "../../../v1/reporting/transactions",
            "ORDER-1/capture",
            "ORDER 1",
            "ORDER-1?x=1",
            "ORDER-1%2F",
            "ORDÉR",
        ] {
            assert!(!is_resource_id(id), "{:?} should be rejected", id);
        }
    }

    #[test]
    fn link_lookup_skips_malformed_entries() {
        let fields = json!({
            "links": [
                { "rel": "self" },
                "not-a-link",
                { "href": "https://paypal.example/pay", "rel": "approve" }
            ]
        });
        let fields = fields.as_object().unwrap();

        assert_eq!(links(fields).len(), 1);
        assert_eq!(link_href(fields, &["approve"]), Some("https://paypal.example/pay"));
        assert_eq!(link_href(fields, &["payer-action"]), None);
    }

    proptest! {
        #[test]
        fn accepted_ids_never_contain_path_syntax(id in "\\PC{0,24}") {
            if is_resource_id(&id) {
                prop_assert!(!id.contains('/'));
                prop_assert!(!id.contains('.'));
                prop_assert!(!id.contains('%'));
            }
        }
    }
}
