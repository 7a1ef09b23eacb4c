//! The evaluation environment.

use std::fmt;
use std::sync::Arc;

use fcr_core::{Client, Context};

/// What a pipeline is evaluated against: a request context and a store.
#[derive(Clone)]
pub struct Env {
    pub ctx: Context,
    pub client: Arc<dyn Client>,
}

impl Env {
    pub fn new(ctx: Context, client: Arc<dyn Client>) -> Self {
        Env { ctx, client }
    }

    /// The same store under a different request context.
    pub fn with_ctx(&self, ctx: Context) -> Self {
        Env {
            ctx,
            client: Arc::clone(&self.client),
        }
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("ctx", &self.ctx)
            .field("kinds", &self.client.scheme().len())
            .finish()
    }
}
