//! The core `v1` API group (empty group name).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fcr_core::{ListMeta, ObjectMeta, Resource, ResourceList, Scheme, StoreError, TypeMeta};

pub fn add_to_scheme(scheme: &mut Scheme) -> Result<(), StoreError> {
    scheme.register::<ConfigMap, ConfigMapList>()
}

/// Holds string configuration data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigMap {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
}

impl ConfigMap {
    pub fn new(namespace: &str, name: &str) -> Self {
        ConfigMap {
            type_meta: TypeMeta {
                api_version: "v1".to_string(),
                kind: "ConfigMap".to_string(),
            },
            metadata: ObjectMeta::named(namespace, name),
            data: BTreeMap::new(),
        }
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_label(mut self, key: &str, value: &str) -> Self {
        self.metadata
            .labels
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl Resource for ConfigMap {
    const GROUP: &'static str = "";
    const VERSION: &'static str = "v1";
    const KIND: &'static str = "ConfigMap";

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigMapList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default)]
    pub items: Vec<ConfigMap>,
}

impl ResourceList for ConfigMapList {
    type Item = ConfigMap;
    const KIND: &'static str = "ConfigMapList";

    fn items(&self) -> &[ConfigMap] {
        &self.items
    }

    fn into_items(self) -> Vec<ConfigMap> {
        self.items
    }
}
