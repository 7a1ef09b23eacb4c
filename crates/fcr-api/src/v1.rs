//! The `test.appthrust.com/v1` API group.

use serde::{Deserialize, Serialize};

use fcr_core::{ListMeta, ObjectMeta, Resource, ResourceList, Scheme, StoreError, TypeMeta};

pub const GROUP: &str = "test.appthrust.com";
pub const VERSION: &str = "v1";

/// Registers the kinds of this group.
pub fn add_to_scheme(scheme: &mut Scheme) -> Result<(), StoreError> {
    scheme.register::<Cat, CatList>()
}

/// Cat is a cat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Desired state of the cat.
    #[serde(default)]
    pub spec: CatSpec,
    /// Observed state; absent until someone writes the status sub-resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CatStatus>,
}

impl Cat {
    pub fn new(namespace: &str, name: &str) -> Self {
        Cat {
            type_meta: TypeMeta {
                api_version: format!("{GROUP}/{VERSION}"),
                kind: "Cat".to_string(),
            },
            metadata: ObjectMeta::named(namespace, name),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: CatStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl Resource for Cat {
    const GROUP: &'static str = GROUP;
    const VERSION: &'static str = VERSION;
    const KIND: &'static str = "Cat";
    const HAS_STATUS: bool = true;

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

/// CatSpec defines the desired state of Cat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatSpec {}

/// CatStatus defines the observed state of Cat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatStatus {
    /// Whether the cat is sleepy.
    pub sleepy: bool,
}

/// CatList contains a list of Cat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default)]
    pub items: Vec<Cat>,
}

impl ResourceList for CatList {
    type Item = Cat;
    const KIND: &'static str = "CatList";

    fn items(&self) -> &[Cat] {
        &self.items
    }

    fn into_items(self) -> Vec<Cat> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_status_is_omitted() {
        let cat = Cat::new("default", "tom");
        let value = serde_json::to_value(&cat).unwrap();
        assert_eq!(
            value,
            json!({
                "apiVersion": "test.appthrust.com/v1",
                "kind": "Cat",
                "metadata": {"name": "tom", "namespace": "default"},
                "spec": {}
            })
        );
    }

    #[test]
    fn status_requires_sleepy() {
        let err = serde_json::from_value::<Cat>(json!({
            "metadata": {"name": "tom"},
            "status": {}
        }));
        assert!(err.is_err());

        let cat: Cat = serde_json::from_value(json!({
            "metadata": {"name": "tom"},
            "status": {"sleepy": true}
        }))
        .unwrap();
        assert_eq!(cat.status, Some(CatStatus { sleepy: true }));
    }

    #[test]
    fn cat_is_namespaced_with_status_subresource() {
        assert!(<Cat as Resource>::NAMESPACED);
        assert!(<Cat as Resource>::HAS_STATUS);
        assert_eq!(CatList::list_group_version_kind().kind, "CatList");
    }
}
