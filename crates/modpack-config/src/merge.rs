//! Right-biased deep merging of configuration fragments.
//!
//! Every derived transpile configuration is built by layering fragments on
//! top of each other. Objects merge key by key, recursively; anything else
//! (scalars, arrays, `null`) is replaced outright by the later fragment.

use serde_json::{Map, Value};

/// Merge `update` into `target` in place.
pub fn merge_values(target: &mut Value, update: &Value) {
    if let (Value::Object(layer), Value::Object(overrides)) = (&mut *target, update) {
        for (key, value) in overrides {
            merge_values(layer.entry(key.as_str()).or_insert(Value::Null), value);
        }
        return;
    }
    *target = update.clone();
}

/// Compose fragments left to right into a fresh object.
///
/// A `null` fragment stands for "no fragment" and is skipped, so an absent
/// override section never wipes out the layers beneath it.
///
/// # Example
///
/// ```
/// use modpack_config::compose;
/// use serde_json::json;
///
/// let merged = compose([&json!({"a": {"x": 1, "y": 2}}), &json!({"a": {"y": 3, "z": 4}})]);
/// assert_eq!(merged, json!({"a": {"x": 1, "y": 3, "z": 4}}));
/// ```
pub fn compose<'a>(fragments: impl IntoIterator<Item = &'a Value>) -> Value {
    let mut composed = Value::Object(Map::new());
    for fragment in fragments {
        if fragment.is_null() {
            continue;
        }
        merge_values(&mut composed, fragment);
    }
    composed
}
