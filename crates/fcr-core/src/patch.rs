//! Patch descriptors and JSON merge patch (RFC 7386).

use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::resource::Object;

/// Describes how a patch request modifies the stored object.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// An explicit JSON merge patch document.
    Merge(Value),
    /// Server-side apply: the sent object is the desired state. Creates the
    /// object when it does not exist. Requires a field owner.
    Apply,
    /// A merge patch built from the sent object itself.
    FromObject,
}

impl Patch {
    /// The media type a wire client would send for this patch.
    pub fn content_type(&self) -> &'static str {
        match self {
            Patch::Apply => "application/apply-patch+yaml",
            Patch::Merge(_) | Patch::FromObject => "application/merge-patch+json",
        }
    }

    /// Resolves the patch document to apply against the stored `obj`.
    pub fn data(&self, obj: &dyn Object) -> Result<Value, StoreError> {
        match self {
            Patch::Merge(doc) => Ok(doc.clone()),
            Patch::Apply | Patch::FromObject => obj.to_value(),
        }
    }
}

/// Applies `patch` onto `target` following JSON merge patch rules:
/// objects merge recursively, `null` removes a member, anything else replaces.
pub fn merge(target: &mut Value, patch: &Value) {
    let Value::Object(patch_map) = patch else {
        *target = patch.clone();
        return;
    };
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(target_map) = target {
        for (key, value) in patch_map {
            if value.is_null() {
                target_map.remove(key);
            } else {
                merge(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}
