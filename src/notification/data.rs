//! Structured notification data and its canonical form.

use serde_json::{Map, Value};

/// How a canonical field's value is normalized
#[derive(Debug, Clone, Copy)]
enum FieldKind {
    /// Rendered to a JSON string
    Text,
    /// Kept as-is
    Raw,
}

/// Canonical fields and the keys accepted for them, in priority order.
/// Matching is case-insensitive; an exact-case canonical key always wins.
const STANDARD_FIELDS: &[(&str, &[&str], FieldKind)] = &[
    ("title", &["subject"], FieldKind::Text),
    ("message", &["content", "body"], FieldKind::Text),
    ("description", &["desc"], FieldKind::Text),
    ("fromUser", &["formUser", "from_user", "sender"], FieldKind::Text),
    ("createTime", &["createdTime", "created_at", "timestamp"], FieldKind::Raw),
];

/// Key/value container for structured-data notifications
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationData {
    properties: Map<String, Value>,
}

impl NotificationData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from baseline properties that caller data must not overwrite
    pub fn with_baseline(properties: Map<String, Value>) -> Self {
        Self { properties }
    }

    /// Merge `extra`, adding only keys that are not already present
    pub fn add_if_absent(&mut self, extra: Map<String, Value>) {
        for (key, value) in extra {
            self.properties.entry(key).or_insert(value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn into_properties(self) -> Map<String, Value> {
        self.properties
    }

    /// Map the raw properties onto the canonical field set.
    ///
    /// For every canonical field the best-ranked matching key supplies the
    /// value and every matching key is removed; `null` values never win.
    /// Keys that match no canonical field are kept untouched. The transform
    /// is pure and idempotent.
    pub fn standardize(self) -> Self {
        let mut rest = self.properties;
        let mut standard = Map::new();

        for &(canonical, aliases, kind) in STANDARD_FIELDS {
            let mut matched: Vec<(usize, String)> = rest
                .keys()
                .filter_map(|key| match_rank(key, canonical, aliases).map(|r| (r, key.clone())))
                .collect();
            matched.sort();

            let mut chosen = None;
            for (_, key) in matched {
                let Some(value) = rest.remove(&key) else {
                    continue;
                };
                if chosen.is_none() {
                    chosen = normalize(value, kind);
                }
            }

            if let Some(value) = chosen {
                standard.insert(canonical.to_string(), value);
            }
        }

        standard.extend(rest);

        Self {
            properties: standard,
        }
    }
}

/// 0 = exact canonical, 1 = canonical in another case, 2.. = alias position
fn match_rank(key: &str, canonical: &str, aliases: &[&str]) -> Option<usize> {
    if key == canonical {
        return Some(0);
    }
    if key.eq_ignore_ascii_case(canonical) {
        return Some(1);
    }
    aliases
        .iter()
        .position(|alias| key.eq_ignore_ascii_case(alias))
        .map(|pos| pos + 2)
}

fn normalize(value: Value, kind: FieldKind) -> Option<Value> {
    match (value, kind) {
        (Value::Null, _) => None,
        (value, FieldKind::Raw) => Some(value),
        (Value::String(s), FieldKind::Text) => Some(Value::String(s)),
        (other, FieldKind::Text) => Some(Value::String(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> NotificationData {
        match value {
            Value::Object(map) => NotificationData::with_baseline(map),
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_add_if_absent_keeps_existing() {
        let mut d = data(json!({"title": "baseline"}));
        d.add_if_absent(
            json!({"title": "caller", "orderId": 42})
                .as_object()
                .cloned()
                .unwrap(),
        );

        assert_eq!(d.get("title"), Some(&json!("baseline")));
        assert_eq!(d.get("orderId"), Some(&json!(42)));
    }

    #[test]
    fn test_add_if_absent_into_empty_adds_everything() {
        let mut d = NotificationData::new();
        let extra = json!({"a": 1, "b": "two"}).as_object().cloned().unwrap();
        d.add_if_absent(extra.clone());

        assert_eq!(d.properties(), &extra);
    }

    #[test]
    fn test_standardize_maps_aliases() {
        let standard = data(json!({
            "Subject": "Order shipped",
            "body": "Your order is on its way",
            "sender": "shop",
            "created_at": "2026-01-01T00:00:00Z",
            "orderId": 42
        }))
        .standardize();

        assert_eq!(
            standard.properties(),
            json!({
                "title": "Order shipped",
                "message": "Your order is on its way",
                "fromUser": "shop",
                "createTime": "2026-01-01T00:00:00Z",
                "orderId": 42
            })
            .as_object()
            .unwrap()
        );
    }

    #[test]
    fn test_standardize_prefers_canonical_key() {
        let standard = data(json!({
            "TITLE": "upper",
            "title": "exact",
            "subject": "alias"
        }))
        .standardize();

        assert_eq!(standard.get("title"), Some(&json!("exact")));
        assert_eq!(standard.properties().len(), 1);
    }

    #[test]
    fn test_standardize_coerces_text_fields() {
        let standard = data(json!({
            "title": 7,
            "message": {"nested": true},
            "description": null,
            "desc": false
        }))
        .standardize();

        assert_eq!(standard.get("title"), Some(&json!("7")));
        assert_eq!(standard.get("message"), Some(&json!(r#"{"nested":true}"#)));
        assert_eq!(standard.get("description"), Some(&json!("false")));
    }

    #[test]
    fn test_standardize_drops_null_only_fields() {
        let standard = data(json!({"title": null, "createTime": null})).standardize();
        assert!(standard.properties().is_empty());
    }

    #[test]
    fn test_standardize_is_idempotent() {
        let fixtures = [
            json!({}),
            json!({"orderId": 42}),
            json!({"Title": 1, "content": "x", "body": "y", "timestamp": 1700000000}),
            json!({"title": null, "subject": ["a", "b"], "formUser": "admin", "extra": {"k": "v"}}),
            json!({"MESSAGE": "m", "Desc": 3.5, "createdTime": null, "created_at": "t"}),
        ];

        for fixture in fixtures {
            let once = data(fixture).standardize();
            let twice = once.clone().standardize();
            assert_eq!(once, twice);
        }
    }

    /// Every key the field table knows, in exact and upper case, plus
    /// unrelated keys
    fn sweep_keys() -> Vec<String> {
        let mut keys: Vec<String> = STANDARD_FIELDS
            .iter()
            .flat_map(|&(canonical, aliases, _)| {
                std::iter::once(canonical).chain(aliases.iter().copied())
            })
            .flat_map(|key| [key.to_string(), key.to_ascii_uppercase()])
            .collect();
        keys.extend(["orderId".to_string(), "extra".to_string()]);
        keys
    }

    #[test]
    fn test_standardize_is_idempotent_for_every_key_pair() {
        let keys = sweep_keys();
        let values = [
            Value::Null,
            json!("text"),
            json!(7),
            json!(true),
            json!([1, "two"]),
            json!({"k": 1}),
        ];

        for (i, first) in keys.iter().enumerate() {
            for second in &keys[i + 1..] {
                for a in &values {
                    for b in &values {
                        let mut map = Map::new();
                        map.insert(first.clone(), a.clone());
                        map.insert(second.clone(), b.clone());

                        let once = NotificationData::with_baseline(map).standardize();
                        let twice = once.clone().standardize();
                        assert_eq!(once, twice, "keys {first}={a}, {second}={b}");
                    }
                }
            }
        }
    }
}
