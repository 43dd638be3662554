use indexmap::IndexSet;
use serde_json::{Map, Value};

use crate::ir::{PropertyDescriptor, TypeDescriptor};
use crate::resolve::TypeResolver;

/// Resolve every entry of a schema's `properties`, in declaration order.
///
/// A property whose type cannot be resolved is kept with the `Any` sentinel
/// (and a warning) so the renderer always has a type to print.
pub fn extract_properties(
    resolver: &TypeResolver<'_>,
    properties: &Map<String, Value>,
    required: Option<&Value>,
) -> Vec<PropertyDescriptor> {
    let required_keys = required_keys(required);
    properties
        .iter()
        .map(|(key, node)| {
            let ty = resolver.resolve(node).unwrap_or_else(|error| {
                tracing::warn!("property `{key}` unresolved, typed as Any: {error}");
                TypeDescriptor::unknown()
            });
            let own_flag = node.get("required").and_then(Value::as_bool).unwrap_or(false);
            PropertyDescriptor {
                key: key.clone(),
                ty,
                required: own_flag || required_keys.contains(key.as_str()),
            }
        })
        .collect()
}

/// String entries of a `required` array; anything else counts as empty.
fn required_keys(required: Option<&Value>) -> IndexSet<&str> {
    required
        .and_then(Value::as_array)
        .map(|keys| keys.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenConfig;
    use serde_json::json;

    fn extract(schema: Value) -> Vec<PropertyDescriptor> {
        let config = GenConfig::default();
        let resolver = TypeResolver::new(&config);
        let properties = schema["properties"].as_object().unwrap();
        extract_properties(&resolver, properties, schema.get("required"))
    }

    #[test]
    fn keeps_declaration_order() {
        let props = extract(json!({
            "type": "object",
            "properties": {
                "zeta": { "type": "string" },
                "alpha": { "type": "integer" },
                "mid": { "type": "boolean" }
            }
        }));
        let keys: Vec<_> = props.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn required_from_list_or_own_flag() {
        let props = extract(json!({
            "type": "object",
            "properties": {
                "a": { "type": "string" },
                "b": { "type": "string", "required": true },
                "c": { "type": "string", "required": false },
                "d": { "type": "string" }
            },
            "required": ["a", "c"]
        }));
        let required: Vec<_> = props.iter().map(|p| p.required).collect();
        assert_eq!(required, [true, true, true, false]);
    }

    #[test]
    fn absent_or_malformed_required_list_is_empty() {
        for required in [None, Some(json!("a")), Some(json!({ "a": true }))] {
            let mut schema = json!({
                "type": "object",
                "properties": { "a": { "type": "string" }, "b": { "type": "string", "required": true } }
            });
            if let Some(required) = required {
                schema["required"] = required;
            }
            let props = extract(schema);
            assert!(!props[0].required);
            assert!(props[1].required);
        }
    }

    #[test]
    fn nested_required_array_is_not_an_own_flag() {
        let props = extract(json!({
            "type": "object",
            "properties": { "inner": { "type": "object", "required": ["x"] } }
        }));
        assert!(!props[0].required);
    }

    #[test]
    fn unresolved_property_gets_sentinel() {
        let props = extract(json!({
            "type": "object",
            "properties": {
                "nothing": { "type": "null" },
                "either": { "type": ["string", "integer"] }
            },
            "required": ["nothing"]
        }));
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].ty, TypeDescriptor::unknown());
        assert!(props[0].required);
        assert_eq!(props[1].ty.type_name, "Any");
    }
}
