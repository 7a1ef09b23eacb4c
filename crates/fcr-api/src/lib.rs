//! Concrete resource schemas for fcr.
//!
//! - [`v1`]: the `test.appthrust.com/v1` group with the [`v1::Cat`] custom
//!   resource (status sub-resource enabled)
//! - [`core_v1`]: the core `v1` group with [`core_v1::ConfigMap`]
//!
//! Each module exposes an `add_to_scheme` function; [`scheme`] builds a
//! [`Scheme`] holding every kind defined here.

pub mod core_v1;
pub mod v1;

use fcr_core::{Scheme, StoreError};

/// Builds a scheme with every kind defined in this crate.
pub fn scheme() -> Result<Scheme, StoreError> {
    let mut scheme = Scheme::new();
    core_v1::add_to_scheme(&mut scheme)?;
    v1::add_to_scheme(&mut scheme)?;
    Ok(scheme)
}
