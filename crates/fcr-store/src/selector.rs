//! Evaluation of list options against stored objects.

use std::collections::BTreeMap;

use serde_json::Value;

use fcr_core::{ListOption, ObjectKey, StoreError};

/// A parsed list selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub namespace: Option<String>,
    pub labels: BTreeMap<String, String>,
    pub has_labels: Vec<String>,
    pub fields: BTreeMap<String, String>,
    pub limit: Option<usize>,
}

impl Selection {
    /// Folds an option list into one selection. Later namespace and limit
    /// options override earlier ones; label and field options accumulate.
    pub fn from_options(opts: &[ListOption]) -> Result<Self, StoreError> {
        let mut selection = Selection::default();
        for opt in opts {
            match opt {
                ListOption::InNamespace(ns) => selection.namespace = Some(ns.clone()),
                ListOption::MatchingLabels(labels) => {
                    selection
                        .labels
                        .extend(labels.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                ListOption::HasLabels(keys) => selection.has_labels.extend(keys.iter().cloned()),
                ListOption::MatchingFields(fields) => {
                    for (field, value) in fields {
                        if field != "metadata.name" && field != "metadata.namespace" {
                            return Err(StoreError::BadRequest {
                                reason: format!("field label not supported: {field}"),
                            });
                        }
                        selection.fields.insert(field.clone(), value.clone());
                    }
                }
                ListOption::Limit(n) => selection.limit = Some(*n),
            }
        }
        Ok(selection)
    }

    /// Returns true if the object stored under `key` is selected.
    ///
    /// An empty namespace selects every namespace.
    pub fn matches(&self, key: &ObjectKey, object: &Value) -> bool {
        if let Some(ns) = &self.namespace {
            if !ns.is_empty() && *ns != key.namespace {
                return false;
            }
        }
        for (field, expected) in &self.fields {
            let actual = match field.as_str() {
                "metadata.name" => &key.name,
                _ => &key.namespace,
            };
            if actual != expected {
                return false;
            }
        }
        self.labels
            .iter()
            .all(|(k, v)| label(object, k) == Some(v.as_str()))
            && self.has_labels.iter().all(|k| label(object, k).is_some())
    }
}

fn label<'a>(object: &'a Value, name: &str) -> Option<&'a str> {
    object
        .pointer("/metadata/labels")
        .and_then(|labels| labels.get(name))
        .and_then(Value::as_str)
}
