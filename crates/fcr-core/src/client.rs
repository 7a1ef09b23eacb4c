//! The store-client contract.
//!
//! [`Client`] is object safe so an environment can hold any backend as
//! `Arc<dyn Client>`. Reads populate the caller's target in place; writes
//! receive the object to send and may write server-populated fields back
//! into it. Every call receives the request [`Context`] and is expected to
//! fail with a context error when that context is already done.

use crate::context::Context;
use crate::error::StoreError;
use crate::meta::ObjectKey;
use crate::options::{
    CreateOption, DeleteAllOfOption, DeleteOption, GetOption, ListOption, PatchOption,
    SubResourcePatchOption, SubResourceUpdateOption, UpdateOption,
};
use crate::patch::Patch;
use crate::resource::{Object, ObjectList};
use crate::scheme::Scheme;

/// Keyed CRUD against an object store.
pub trait Client: Send + Sync {
    /// Populates `obj` with the object stored under `key`.
    fn get(
        &self,
        ctx: &Context,
        key: &ObjectKey,
        obj: &mut dyn Object,
        opts: &[GetOption],
    ) -> Result<(), StoreError>;

    /// Populates `list` with every object matching `opts`.
    fn list(
        &self,
        ctx: &Context,
        list: &mut dyn ObjectList,
        opts: &[ListOption],
    ) -> Result<(), StoreError>;

    fn create(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        opts: &[CreateOption],
    ) -> Result<(), StoreError>;

    fn update(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        opts: &[UpdateOption],
    ) -> Result<(), StoreError>;

    fn patch(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        patch: &Patch,
        opts: &[PatchOption],
    ) -> Result<(), StoreError>;

    fn delete(
        &self,
        ctx: &Context,
        obj: &dyn Object,
        opts: &[DeleteOption],
    ) -> Result<(), StoreError>;

    /// Deletes every object of `obj`'s kind matching `opts`. `obj` is only
    /// a type witness; its contents are ignored.
    fn delete_all_of(
        &self,
        ctx: &Context,
        obj: &dyn Object,
        opts: &[DeleteAllOfOption],
    ) -> Result<(), StoreError>;

    /// The status sub-resource write channel.
    fn status(&self) -> &dyn StatusWriter;

    /// The kinds this client understands.
    fn scheme(&self) -> &Scheme;
}

/// Writes that only touch an object's `status`.
pub trait StatusWriter: Send + Sync {
    fn update(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        opts: &[SubResourceUpdateOption],
    ) -> Result<(), StoreError>;

    fn patch(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        patch: &Patch,
        opts: &[SubResourcePatchOption],
    ) -> Result<(), StoreError>;
}
