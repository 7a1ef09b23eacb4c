//! Explicit registry of the kinds a store understands.
//!
//! A [`Scheme`] is built by the caller (usually at process start, from each
//! API crate's `add_to_scheme`) and handed to the store client. There is no
//! global registry.

use indexmap::IndexMap;

use crate::error::StoreError;
use crate::meta::GroupVersionKind;
use crate::resource::{Resource, ResourceList};

/// What the store needs to know about a registered kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindInfo {
    pub gvk: GroupVersionKind,
    /// The kind of the list envelope for this kind.
    pub list_kind: String,
    pub namespaced: bool,
    /// Whether `status` is a separate sub-resource.
    pub has_status: bool,
}

impl KindInfo {
    pub fn list_gvk(&self) -> GroupVersionKind {
        self.gvk.with_kind(&self.list_kind)
    }
}

/// Registry of kinds, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Scheme {
    kinds: IndexMap<GroupVersionKind, KindInfo>,
}

impl Scheme {
    pub fn new() -> Self {
        Scheme {
            kinds: IndexMap::new(),
        }
    }

    /// Registers a resource type together with its list type.
    ///
    /// Registering the same pair twice is a no-op; registering a different
    /// shape under an existing kind is a [`StoreError::BadRequest`].
    pub fn register<T, L>(&mut self) -> Result<(), StoreError>
    where
        T: Resource,
        L: ResourceList<Item = T>,
    {
        let info = KindInfo {
            gvk: T::group_version_kind(),
            list_kind: L::KIND.to_string(),
            namespaced: T::NAMESPACED,
            has_status: T::HAS_STATUS,
        };
        match self.kinds.get(&info.gvk) {
            Some(existing) if *existing == info => Ok(()),
            Some(_) => Err(StoreError::BadRequest {
                reason: format!("conflicting registration for {}", info.gvk),
            }),
            None => {
                self.kinds.insert(info.gvk.clone(), info);
                Ok(())
            }
        }
    }

    /// Looks up a kind by its exact group/version/kind.
    pub fn kind_for(&self, gvk: &GroupVersionKind) -> Option<&KindInfo> {
        self.kinds.get(gvk)
    }

    /// Looks up the item kind for a list group/version/kind.
    pub fn kind_for_list(&self, list_gvk: &GroupVersionKind) -> Option<&KindInfo> {
        self.kinds
            .values()
            .find(|info| info.list_gvk() == *list_gvk)
    }

    /// Finds a kind by name, ignoring case. The first registration wins
    /// when several groups define the same kind name.
    pub fn find_kind(&self, name: &str) -> Option<&KindInfo> {
        self.kinds
            .values()
            .find(|info| info.gvk.kind.eq_ignore_ascii_case(name))
    }

    /// Like [`kind_for`](Self::kind_for), but a missing kind is an error.
    pub fn require(&self, gvk: &GroupVersionKind) -> Result<&KindInfo, StoreError> {
        self.kind_for(gvk).ok_or_else(|| StoreError::NoKindMatch {
            kind: gvk.to_string(),
        })
    }

    /// All registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &KindInfo> {
        self.kinds.values()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
