//! Object model and store-client contract for fcr.
//!
//! Everything the effect algebra in `fcr-client` needs to talk about a
//! store lives here: the addressable object model, the option lists each
//! operation accepts, the request [`Context`], the explicit kind
//! [`Scheme`], and the [`Client`] trait that store backends implement.
//!
//! # Modules
//!
//! - [`error`]: StoreError enum and classification helpers
//! - [`meta`]: type/object/list metadata and object keys
//! - [`resource`]: Resource/ResourceList traits and their dyn-safe views
//! - [`options`]: per-operation option enums
//! - [`patch`]: patch descriptors and JSON merge patch
//! - [`context`]: cancellation/deadline-bearing request context
//! - [`scheme`]: explicit kind registry
//! - [`client`]: Client and StatusWriter traits

pub mod client;
pub mod context;
pub mod error;
pub mod meta;
pub mod options;
pub mod patch;
pub mod resource;
pub mod scheme;

// Re-export key types for ergonomic use.
pub use client::{Client, StatusWriter};
pub use context::{CancelHandle, Context};
pub use error::{
    ignore_already_exists, ignore_not_found, is_already_exists, is_conflict, is_not_found,
    StoreError,
};
pub use meta::{GroupVersionKind, ListMeta, ObjectKey, ObjectMeta, TypeMeta};
pub use options::{
    CreateOption, DeleteAllOfOption, DeleteOption, GetOption, ListOption, PatchOption,
    SubResourcePatchOption, SubResourceUpdateOption, UpdateOption,
};
pub use patch::Patch;
pub use resource::{Object, ObjectList, Resource, ResourceList};
pub use scheme::{KindInfo, Scheme};
