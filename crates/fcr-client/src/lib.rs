//! Lazy, composable store operations.
//!
//! Every operation in this crate builds a [`ReaderIo`]: a description of a
//! store call that does nothing until it is given an [`Env`] and the
//! resulting [`Io`] is run. Pipelines of dependent calls are assembled with
//! [`ReaderIo::map`], [`ReaderIo::chain`] and friends, then evaluated once.
//!
//! ```ignore
//! let reader = get_option::<ConfigMap>(to_get_params(key, []));
//! let found: Option<ConfigMap> = reader.run(&env)?;
//! ```
//!
//! # Modules
//!
//! - [`env`]: the evaluation environment
//! - [`io`]: the deferred result primitive
//! - [`reader`]: the environment reader and its combinators
//! - [`params`]: per-operation parameter bundles
//! - [`ops`]: the CRUD operation constructors
//! - [`combinators`]: absence handling and list projection

pub mod combinators;
pub mod env;
pub mod io;
pub mod ops;
pub mod params;
pub mod reader;

pub use combinators::{get_option, ignore_not_found, list_items, pick_list_items};
pub use env::Env;
pub use io::Io;
pub use ops::{create, delete, delete_all_of, get, list, patch, status_patch, status_update, update};
pub use params::{
    to_create_params, to_delete_all_of_params, to_delete_params, to_get_params, to_list_params,
    to_patch_params, to_status_patch_params, to_status_update_params, to_update_params,
    CreateParams, DeleteAllOfParams, DeleteParams, GetParams, ListParams, PatchParams,
    StatusPatchParams, StatusUpdateParams, UpdateParams,
};
pub use reader::{chain_with, flow2, map_with, provide, readerize, Outcome, ReaderIo, Unit};

#[cfg(test)]
pub(crate) mod testing;
