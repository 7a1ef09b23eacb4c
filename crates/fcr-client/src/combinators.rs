//! Absence handling and list projection.

use fcr_core::{Resource, ResourceList};

use crate::io::Io;
use crate::ops::{get, list};
use crate::params::{GetParams, ListParams};
use crate::reader::ReaderIo;

/// Turns a not-found failure into `None`.
///
/// Success becomes `Some`; every other error passes through untouched.
pub fn ignore_not_found<T: 'static>(reader: ReaderIo<T>) -> ReaderIo<Option<T>> {
    reader.map(Some).or_else(|err| {
        if err.is_not_found() {
            ReaderIo::new(|_| Io::right(None))
        } else {
            ReaderIo::left(err)
        }
    })
}

/// [`get`] for objects whose absence is an expected outcome.
pub fn get_option<T: Resource>(p: GetParams) -> ReaderIo<Option<T>> {
    ignore_not_found(get::<T>(p))
}

/// Projects a list onto its items, keeping their order.
pub fn pick_list_items<L: ResourceList>(reader: ReaderIo<L>) -> ReaderIo<Vec<L::Item>> {
    reader.map(L::into_items)
}

/// [`list`] followed by [`pick_list_items`].
pub fn list_items<L: ResourceList>(p: ListParams) -> ReaderIo<Vec<L::Item>> {
    pick_list_items(list::<L>(p))
}

#[cfg(test)]
mod tests {
    use fcr_api::core_v1::{ConfigMap, ConfigMapList};
    use fcr_core::{ListOption, ObjectKey, StoreError};
    use proptest::prelude::*;

    use super::*;
    use crate::params::{to_get_params, to_list_params};
    use crate::testing::{counting_env, empty_env, store};

    fn arb_error() -> impl Strategy<Value = StoreError> {
        let key = ("[a-z]{1,8}", "[a-z]{1,8}").prop_map(|(ns, name)| ObjectKey::namespaced(&ns, &name));
        prop_oneof![
            key.clone().prop_map(|key| StoreError::NotFound {
                kind: "ConfigMap".into(),
                key,
            }),
            key.clone().prop_map(|key| StoreError::AlreadyExists {
                kind: "ConfigMap".into(),
                key,
            }),
            key.prop_map(|key| StoreError::Conflict {
                kind: "Cat".into(),
                key,
                reason: "stale".into(),
            }),
            "[a-z ]{0,20}".prop_map(|reason| StoreError::BadRequest { reason }),
            Just(StoreError::Cancelled),
            Just(StoreError::DeadlineExceeded),
        ]
    }

    proptest! {
        #[test]
        fn only_not_found_becomes_none(err in arb_error()) {
            let result = ignore_not_found(ReaderIo::<i32>::left(err.clone())).run(&empty_env());
            if err.is_not_found() {
                prop_assert_eq!(result.unwrap(), None);
            } else {
                let passed = result.unwrap_err();
                prop_assert_eq!(passed.to_string(), err.to_string());
                prop_assert_eq!(
                    std::mem::discriminant(&passed),
                    std::mem::discriminant(&err)
                );
            }
        }

        #[test]
        fn success_becomes_some(n in any::<i64>()) {
            let result = ignore_not_found(ReaderIo::right(n)).run(&empty_env());
            prop_assert_eq!(result.unwrap(), Some(n));
        }

        #[test]
        fn picked_items_keep_order_and_count(
            names in proptest::collection::vec("[a-z]{1,10}", 0..20)
        ) {
            let list = ConfigMapList {
                items: names.iter().map(|n| ConfigMap::new("default", n)).collect(),
                ..Default::default()
            };
            let items = pick_list_items(ReaderIo::right(list)).run(&empty_env()).unwrap();
            let picked: Vec<String> = items.into_iter().map(|c| c.metadata.name).collect();
            prop_assert_eq!(picked, names);
        }
    }

    #[test]
    fn pick_list_items_keeps_failures() {
        let reader = pick_list_items(ReaderIo::<ConfigMapList>::left(StoreError::Cancelled));
        assert!(matches!(reader.run(&empty_env()), Err(StoreError::Cancelled)));
    }

    #[test]
    fn get_option_matches_ignore_not_found_of_get() {
        let store = store();
        let (env, _) = counting_env(store);
        crate::ops::create(crate::params::to_create_params(
            ConfigMap::new("default", "exists"),
            [],
        ))
        .run(&env)
        .unwrap();

        for name in ["exists", "missing"] {
            let params = to_get_params(ObjectKey::namespaced("default", name), []);
            let direct = get_option::<ConfigMap>(params.clone()).run(&env).unwrap();
            let composed = ignore_not_found(get::<ConfigMap>(params)).run(&env).unwrap();
            assert_eq!(direct, composed);
        }
    }

    #[test]
    fn get_option_keeps_other_errors() {
        let (env, _) = counting_env(fcr_store::InMemoryClient::new(fcr_core::Scheme::new()));
        let err = get_option::<ConfigMap>(to_get_params(ObjectKey::namespaced("default", "x"), []))
            .run(&env)
            .unwrap_err();
        assert!(matches!(err, StoreError::NoKindMatch { .. }));
    }

    #[test]
    fn empty_list_is_an_empty_success() {
        let (env, _) = counting_env(store());
        let items = list_items::<ConfigMapList>(to_list_params([ListOption::in_namespace("default")]))
            .run(&env)
            .unwrap();
        assert!(items.is_empty());
    }
}
