//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fcr_core::{
    Client, Context, CreateOption, DeleteAllOfOption, DeleteOption, GetOption, ListOption, Object,
    ObjectKey, ObjectList, Patch, PatchOption, Scheme, StatusWriter, StoreError, UpdateOption,
};
use fcr_store::InMemoryClient;

use crate::env::Env;

pub fn store() -> InMemoryClient {
    InMemoryClient::new(fcr_api::scheme().unwrap())
}

pub fn empty_env() -> Env {
    Env::new(Context::background(), Arc::new(store()))
}

/// Delegates to an in-memory store and counts the calls that reach it.
pub struct CountingClient {
    pub inner: InMemoryClient,
    calls: AtomicUsize,
}

impl CountingClient {
    pub fn new(inner: InMemoryClient) -> Arc<Self> {
        Arc::new(CountingClient {
            inner,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl Client for CountingClient {
    fn get(
        &self,
        ctx: &Context,
        key: &ObjectKey,
        obj: &mut dyn Object,
        opts: &[GetOption],
    ) -> Result<(), StoreError> {
        self.hit();
        self.inner.get(ctx, key, obj, opts)
    }

    fn list(
        &self,
        ctx: &Context,
        list: &mut dyn ObjectList,
        opts: &[ListOption],
    ) -> Result<(), StoreError> {
        self.hit();
        self.inner.list(ctx, list, opts)
    }

    fn create(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        opts: &[CreateOption],
    ) -> Result<(), StoreError> {
        self.hit();
        self.inner.create(ctx, obj, opts)
    }

    fn update(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        opts: &[UpdateOption],
    ) -> Result<(), StoreError> {
        self.hit();
        self.inner.update(ctx, obj, opts)
    }

    fn patch(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        patch: &Patch,
        opts: &[PatchOption],
    ) -> Result<(), StoreError> {
        self.hit();
        self.inner.patch(ctx, obj, patch, opts)
    }

    fn delete(
        &self,
        ctx: &Context,
        obj: &dyn Object,
        opts: &[DeleteOption],
    ) -> Result<(), StoreError> {
        self.hit();
        self.inner.delete(ctx, obj, opts)
    }

    fn delete_all_of(
        &self,
        ctx: &Context,
        obj: &dyn Object,
        opts: &[DeleteAllOfOption],
    ) -> Result<(), StoreError> {
        self.hit();
        self.inner.delete_all_of(ctx, obj, opts)
    }

    fn status(&self) -> &dyn StatusWriter {
        self.hit();
        self.inner.status()
    }

    fn scheme(&self) -> &Scheme {
        self.inner.scheme()
    }
}

pub fn counting_env(inner: InMemoryClient) -> (Env, Arc<CountingClient>) {
    let client = CountingClient::new(inner);
    let env = Env::new(Context::background(), client.clone());
    (env, client)
}
