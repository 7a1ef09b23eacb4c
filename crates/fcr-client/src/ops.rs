//! Lazy constructors for every store operation.
//!
//! Reads build a fresh `T::default()` (or `L::default()`) per evaluation
//! and let the store populate it. Writes send a copy of the bundled object
//! and yield [`Unit`]; whatever the store writes back into that copy is
//! dropped.

use fcr_core::{Resource, ResourceList};

use crate::params::{
    CreateParams, DeleteAllOfParams, DeleteParams, GetParams, ListParams, PatchParams,
    StatusPatchParams, StatusUpdateParams, UpdateParams,
};
use crate::reader::{readerize, ReaderIo, Unit};

pub fn get<T: Resource>(p: GetParams) -> ReaderIo<T> {
    readerize(move |env| {
        let mut obj = T::default();
        env.client.get(&env.ctx, &p.key, &mut obj, &p.opts)?;
        Ok(obj)
    })
}

pub fn list<L: ResourceList>(p: ListParams) -> ReaderIo<L> {
    readerize(move |env| {
        let mut list = L::default();
        env.client.list(&env.ctx, &mut list, &p.opts)?;
        Ok(list)
    })
}

pub fn create<T: Resource>(p: CreateParams<T>) -> ReaderIo<Unit> {
    readerize(move |env| {
        let mut obj = p.obj.clone();
        env.client.create(&env.ctx, &mut obj, &p.opts)
    })
}

pub fn update<T: Resource>(p: UpdateParams<T>) -> ReaderIo<Unit> {
    readerize(move |env| {
        let mut obj = p.obj.clone();
        env.client.update(&env.ctx, &mut obj, &p.opts)
    })
}

pub fn patch<T: Resource>(p: PatchParams<T>) -> ReaderIo<Unit> {
    readerize(move |env| {
        let mut obj = p.obj.clone();
        env.client.patch(&env.ctx, &mut obj, &p.patch, &p.opts)
    })
}

pub fn delete<T: Resource>(p: DeleteParams<T>) -> ReaderIo<Unit> {
    readerize(move |env| env.client.delete(&env.ctx, &p.obj, &p.opts))
}

/// Deletes every `T` matching the bundled options.
pub fn delete_all_of<T: Resource>(p: DeleteAllOfParams) -> ReaderIo<Unit> {
    readerize(move |env| env.client.delete_all_of(&env.ctx, &T::default(), &p.opts))
}

pub fn status_update<T: Resource>(p: StatusUpdateParams<T>) -> ReaderIo<Unit> {
    readerize(move |env| {
        let mut obj = p.obj.clone();
        env.client.status().update(&env.ctx, &mut obj, &p.opts)
    })
}

pub fn status_patch<T: Resource>(p: StatusPatchParams<T>) -> ReaderIo<Unit> {
    readerize(move |env| {
        let mut obj = p.obj.clone();
        env.client
            .status()
            .patch(&env.ctx, &mut obj, &p.patch, &p.opts)
    })
}
