//! Option lists accepted by each store operation.
//!
//! Options are plain data; the store client interprets them. The algebra
//! passes them through untouched.

use std::collections::BTreeMap;

/// Options for reading a single object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetOption {
    /// Only succeed if the stored object has exactly this resource version.
    ResourceVersion(String),
}

/// Options for listing objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOption {
    /// Restrict to one namespace.
    InNamespace(String),
    /// Every listed label must be present with the given value.
    MatchingLabels(BTreeMap<String, String>),
    /// Every listed label must be present, with any value.
    HasLabels(Vec<String>),
    /// Field selectors; `metadata.name` and `metadata.namespace` are supported.
    MatchingFields(BTreeMap<String, String>),
    /// Return at most this many items.
    Limit(usize),
}

impl ListOption {
    /// Shorthand for a single-label [`ListOption::MatchingLabels`].
    pub fn label(key: &str, value: &str) -> Self {
        let mut labels = BTreeMap::new();
        labels.insert(key.to_string(), value.to_string());
        ListOption::MatchingLabels(labels)
    }

    pub fn in_namespace(namespace: &str) -> Self {
        ListOption::InNamespace(namespace.to_string())
    }
}

/// Options for creating an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOption {
    DryRun,
    FieldOwner(String),
}

/// Options for replacing an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOption {
    DryRun,
    FieldOwner(String),
}

/// Options for patching an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOption {
    DryRun,
    FieldOwner(String),
    /// Take ownership of conflicting fields during an apply patch.
    ForceOwnership,
}

/// Options for deleting an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOption {
    DryRun,
    GracePeriodSeconds(i64),
    /// Only delete if the stored object still matches.
    Preconditions {
        uid: Option<String>,
        resource_version: Option<String>,
    },
}

/// Options for deleting every object matching a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteAllOfOption {
    List(ListOption),
    Delete(DeleteOption),
}

impl From<ListOption> for DeleteAllOfOption {
    fn from(opt: ListOption) -> Self {
        DeleteAllOfOption::List(opt)
    }
}

impl From<DeleteOption> for DeleteAllOfOption {
    fn from(opt: DeleteOption) -> Self {
        DeleteAllOfOption::Delete(opt)
    }
}

/// Options for replacing a sub-resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubResourceUpdateOption {
    DryRun,
    FieldOwner(String),
}

/// Options for patching a sub-resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubResourcePatchOption {
    DryRun,
    FieldOwner(String),
    ForceOwnership,
}

impl From<&SubResourcePatchOption> for PatchOption {
    fn from(opt: &SubResourcePatchOption) -> Self {
        match opt {
            SubResourcePatchOption::DryRun => PatchOption::DryRun,
            SubResourcePatchOption::FieldOwner(owner) => PatchOption::FieldOwner(owner.clone()),
            SubResourcePatchOption::ForceOwnership => PatchOption::ForceOwnership,
        }
    }
}

impl From<&SubResourceUpdateOption> for UpdateOption {
    fn from(opt: &SubResourceUpdateOption) -> Self {
        match opt {
            SubResourceUpdateOption::DryRun => UpdateOption::DryRun,
            SubResourceUpdateOption::FieldOwner(owner) => UpdateOption::FieldOwner(owner.clone()),
        }
    }
}

/// Splits delete-all-of options into their list and delete halves.
pub fn split_delete_all_of(opts: &[DeleteAllOfOption]) -> (Vec<ListOption>, Vec<DeleteOption>) {
    let mut list = Vec::new();
    let mut delete = Vec::new();
    for opt in opts {
        match opt {
            DeleteAllOfOption::List(o) => list.push(o.clone()),
            DeleteAllOfOption::Delete(o) => delete.push(o.clone()),
        }
    }
    (list, delete)
}
