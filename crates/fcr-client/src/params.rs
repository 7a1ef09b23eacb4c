//! Parameter bundles for the operation constructors.
//!
//! Each bundle is an immutable value built by its `to_*_params` factory and
//! consumed by the matching constructor in [`crate::ops`].

use fcr_core::{
    CreateOption, DeleteAllOfOption, DeleteOption, GetOption, ListOption, ObjectKey, Patch,
    PatchOption, Resource, SubResourcePatchOption, SubResourceUpdateOption, UpdateOption,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GetParams {
    pub(crate) key: ObjectKey,
    pub(crate) opts: Vec<GetOption>,
}

impl GetParams {
    pub fn key(&self) -> &ObjectKey {
        &self.key
    }

    pub fn opts(&self) -> &[GetOption] {
        &self.opts
    }
}

pub fn to_get_params(key: ObjectKey, opts: impl IntoIterator<Item = GetOption>) -> GetParams {
    GetParams {
        key,
        opts: opts.into_iter().collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    pub(crate) opts: Vec<ListOption>,
}

impl ListParams {
    pub fn opts(&self) -> &[ListOption] {
        &self.opts
    }
}

pub fn to_list_params(opts: impl IntoIterator<Item = ListOption>) -> ListParams {
    ListParams {
        opts: opts.into_iter().collect(),
    }
}

/// The object to create. The constructor sends a copy, so the bundle can
/// be evaluated more than once.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateParams<T> {
    pub(crate) obj: T,
    pub(crate) opts: Vec<CreateOption>,
}

pub fn to_create_params<T: Resource>(
    obj: T,
    opts: impl IntoIterator<Item = CreateOption>,
) -> CreateParams<T> {
    CreateParams {
        obj,
        opts: opts.into_iter().collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParams<T> {
    pub(crate) obj: T,
    pub(crate) opts: Vec<UpdateOption>,
}

pub fn to_update_params<T: Resource>(
    obj: T,
    opts: impl IntoIterator<Item = UpdateOption>,
) -> UpdateParams<T> {
    UpdateParams {
        obj,
        opts: opts.into_iter().collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchParams<T> {
    pub(crate) obj: T,
    pub(crate) patch: Patch,
    pub(crate) opts: Vec<PatchOption>,
}

pub fn to_patch_params<T: Resource>(
    obj: T,
    patch: Patch,
    opts: impl IntoIterator<Item = PatchOption>,
) -> PatchParams<T> {
    PatchParams {
        obj,
        patch,
        opts: opts.into_iter().collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteParams<T> {
    pub(crate) obj: T,
    pub(crate) opts: Vec<DeleteOption>,
}

pub fn to_delete_params<T: Resource>(
    obj: T,
    opts: impl IntoIterator<Item = DeleteOption>,
) -> DeleteParams<T> {
    DeleteParams {
        obj,
        opts: opts.into_iter().collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteAllOfParams {
    pub(crate) opts: Vec<DeleteAllOfOption>,
}

impl DeleteAllOfParams {
    pub fn opts(&self) -> &[DeleteAllOfOption] {
        &self.opts
    }
}

pub fn to_delete_all_of_params(opts: impl IntoIterator<Item = DeleteAllOfOption>) -> DeleteAllOfParams {
    DeleteAllOfParams {
        opts: opts.into_iter().collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdateParams<T> {
    pub(crate) obj: T,
    pub(crate) opts: Vec<SubResourceUpdateOption>,
}

pub fn to_status_update_params<T: Resource>(
    obj: T,
    opts: impl IntoIterator<Item = SubResourceUpdateOption>,
) -> StatusUpdateParams<T> {
    StatusUpdateParams {
        obj,
        opts: opts.into_iter().collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusPatchParams<T> {
    pub(crate) obj: T,
    pub(crate) patch: Patch,
    pub(crate) opts: Vec<SubResourcePatchOption>,
}

pub fn to_status_patch_params<T: Resource>(
    obj: T,
    patch: Patch,
    opts: impl IntoIterator<Item = SubResourcePatchOption>,
) -> StatusPatchParams<T> {
    StatusPatchParams {
        obj,
        patch,
        opts: opts.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use fcr_api::core_v1::ConfigMap;

    use super::*;

    #[test]
    fn factories_keep_options_in_order() {
        let params = to_list_params([
            ListOption::in_namespace("default"),
            ListOption::label("type", "test"),
        ]);
        assert_eq!(params.opts().len(), 2);
        assert_eq!(params.opts()[0], ListOption::in_namespace("default"));
    }

    #[test]
    fn get_params_without_options() {
        let params = to_get_params(ObjectKey::namespaced("default", "x"), []);
        assert_eq!(params.key().to_string(), "default/x");
        assert!(params.opts().is_empty());
    }

    #[test]
    fn write_params_own_their_object() {
        let cm = ConfigMap::new("default", "x");
        let params = to_patch_params(cm.clone(), Patch::Apply, [PatchOption::FieldOwner("me".into())]);
        assert_eq!(params.obj, cm);
        assert_eq!(params.patch, Patch::Apply);
    }
}
