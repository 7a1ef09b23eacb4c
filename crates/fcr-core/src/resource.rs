//! The store-object capability set.
//!
//! Two layers:
//! - [`Resource`] / [`ResourceList`] are the static, generic-friendly traits
//!   concrete schema types implement. Both require `Default`, so a generic
//!   operation can always instantiate a fresh, independently owned target.
//! - [`Object`] / [`ObjectList`] are their object-safe views, blanket
//!   implemented, so a store client can be used as `dyn Client` and fill any
//!   target in place through its JSON representation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;
use crate::meta::{GroupVersionKind, ObjectKey, ObjectMeta};

/// A concrete, addressable store-object type.
pub trait Resource: Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static {
    const GROUP: &'static str;
    const VERSION: &'static str;
    const KIND: &'static str;
    /// Whether objects of this kind live inside a namespace.
    const NAMESPACED: bool = true;
    /// Whether writes to `status` go through a separate sub-resource.
    const HAS_STATUS: bool = false;

    fn meta(&self) -> &ObjectMeta;
    fn meta_mut(&mut self) -> &mut ObjectMeta;

    fn group_version_kind() -> GroupVersionKind {
        GroupVersionKind::new(Self::GROUP, Self::VERSION, Self::KIND)
    }
}

/// A list envelope holding a homogeneous sequence of [`Resource`] items.
pub trait ResourceList: Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static {
    type Item: Resource;
    /// The list kind, conventionally the item kind suffixed with `List`.
    const KIND: &'static str;

    fn items(&self) -> &[Self::Item];
    fn into_items(self) -> Vec<Self::Item>;

    fn list_group_version_kind() -> GroupVersionKind {
        <Self::Item as Resource>::group_version_kind().with_kind(Self::KIND)
    }
}

/// Object-safe view of a [`Resource`], as seen by store clients.
pub trait Object: Send + Sync {
    fn object_gvk(&self) -> GroupVersionKind;
    fn namespaced(&self) -> bool;
    fn has_status(&self) -> bool;
    fn object_meta(&self) -> &ObjectMeta;
    fn object_meta_mut(&mut self) -> &mut ObjectMeta;

    fn object_key(&self) -> ObjectKey {
        self.object_meta().key()
    }

    /// Serializes the object, including its `apiVersion` and `kind`.
    fn to_value(&self) -> Result<Value, StoreError>;

    /// Replaces the object's contents with the decoded `value`.
    fn load_value(&mut self, value: Value) -> Result<(), StoreError>;
}

impl<T: Resource> Object for T {
    fn object_gvk(&self) -> GroupVersionKind {
        T::group_version_kind()
    }

    fn namespaced(&self) -> bool {
        T::NAMESPACED
    }

    fn has_status(&self) -> bool {
        T::HAS_STATUS
    }

    fn object_meta(&self) -> &ObjectMeta {
        self.meta()
    }

    fn object_meta_mut(&mut self) -> &mut ObjectMeta {
        self.meta_mut()
    }

    fn to_value(&self) -> Result<Value, StoreError> {
        let mut value = serde_json::to_value(self)?;
        stamp_type(&mut value, &T::group_version_kind());
        Ok(value)
    }

    fn load_value(&mut self, value: Value) -> Result<(), StoreError> {
        *self = serde_json::from_value(value)?;
        Ok(())
    }
}

/// Object-safe view of a [`ResourceList`].
pub trait ObjectList: Send + Sync {
    fn list_gvk(&self) -> GroupVersionKind;
    fn item_gvk(&self) -> GroupVersionKind;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn to_value(&self) -> Result<Value, StoreError>;
    fn load_value(&mut self, value: Value) -> Result<(), StoreError>;
}

impl<L: ResourceList> ObjectList for L {
    fn list_gvk(&self) -> GroupVersionKind {
        L::list_group_version_kind()
    }

    fn item_gvk(&self) -> GroupVersionKind {
        <L::Item as Resource>::group_version_kind()
    }

    fn len(&self) -> usize {
        self.items().len()
    }

    fn to_value(&self) -> Result<Value, StoreError> {
        let mut value = serde_json::to_value(self)?;
        stamp_type(&mut value, &L::list_group_version_kind());
        Ok(value)
    }

    fn load_value(&mut self, value: Value) -> Result<(), StoreError> {
        *self = serde_json::from_value(value)?;
        Ok(())
    }
}

/// Writes `apiVersion` and `kind` into a serialized object.
pub fn stamp_type(value: &mut Value, gvk: &GroupVersionKind) {
    if let Value::Object(map) = value {
        map.insert("apiVersion".into(), Value::String(gvk.api_version()));
        map.insert("kind".into(), Value::String(gvk.kind.clone()));
    }
}
