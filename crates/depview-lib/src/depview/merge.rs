//! JSON layering for theme payloads.
//!
//! Objects merge key by key, arrays and scalars from the later layer replace
//! the earlier value outright.

use serde_json::Value;

/// Lay `overlay` on top of `base`
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut merged), Value::Object(overlay)) => {
            for (key, value) in overlay {
                let value = match merged.remove(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value,
                };
                merged.insert(key, value);
            }
            Value::Object(merged)
        }
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    include!("merge.test.rs");
}
