//! End-to-end pipelines against the in-memory store.

use std::sync::Arc;

use fcr_api::core_v1::{ConfigMap, ConfigMapList};
use fcr_api::v1::{Cat, CatList, CatStatus};
use fcr_client::{
    chain_with, create, delete, delete_all_of, flow2, get, get_option, list, list_items, map_with,
    patch, status_patch, to_create_params, to_delete_all_of_params, to_delete_params,
    to_get_params, to_list_params, to_patch_params, to_status_patch_params, Env, GetParams,
    ListParams, ReaderIo,
};
use fcr_core::{
    is_already_exists, Context, DeleteAllOfOption, ListOption, ObjectKey, Patch, PatchOption,
    StoreError, SubResourcePatchOption,
};
use fcr_store::InMemoryClient;

fn env_with(client: InMemoryClient) -> Env {
    Env::new(Context::background(), Arc::new(client))
}

fn empty_env() -> Env {
    env_with(InMemoryClient::new(fcr_api::scheme().unwrap()))
}

fn key(name: &str) -> ObjectKey {
    ObjectKey::namespaced("default", name)
}

fn apply<T: fcr_core::Resource>(env: &Env, obj: T) {
    patch(to_patch_params(
        obj,
        Patch::Apply,
        [PatchOption::FieldOwner("test-spec".into())],
    ))
    .run(env)
    .unwrap();
}

#[test]
fn create_then_get_then_missing() {
    let env = empty_env();
    let cm = ConfigMap::new("default", "create-test-config").with_data("create", "test");

    create(to_create_params(cm, [])).run(&env).unwrap();

    let fetched = get::<ConfigMap>(to_get_params(key("create-test-config"), []))
        .run(&env)
        .unwrap();
    assert_eq!(fetched.metadata.name, "create-test-config");
    assert_eq!(fetched.data["create"], "test");

    let err = get::<ConfigMap>(to_get_params(key("missing"), []))
        .run(&env)
        .unwrap_err();
    assert!(err.is_not_found());

    let absent = get_option::<ConfigMap>(to_get_params(key("missing"), []))
        .run(&env)
        .unwrap();
    assert!(absent.is_none());

    let present = get_option::<ConfigMap>(to_get_params(key("create-test-config"), []))
        .run(&env)
        .unwrap();
    assert_eq!(present.map(|cm| cm.metadata.name).as_deref(), Some("create-test-config"));
}

#[test]
fn list_items_then_delete_all_of() {
    let env = empty_env();
    for name in ["list-config-1", "list-config-2", "list-config-3"] {
        apply(&env, ConfigMap::new("default", name).with_label("type", "test"));
    }

    let items = list_items::<ConfigMapList>(to_list_params([ListOption::in_namespace("default")]))
        .run(&env)
        .unwrap();
    let names: Vec<_> = items.iter().map(|cm| cm.metadata.name.as_str()).collect();
    assert_eq!(names, ["list-config-1", "list-config-2", "list-config-3"]);

    delete_all_of::<ConfigMap>(to_delete_all_of_params([
        DeleteAllOfOption::from(ListOption::in_namespace("default")),
        DeleteAllOfOption::from(ListOption::label("type", "test")),
    ]))
    .run(&env)
    .unwrap();

    let items = list_items::<ConfigMapList>(to_list_params([
        ListOption::in_namespace("default"),
        ListOption::label("type", "test"),
    ]))
    .run(&env)
    .unwrap();
    assert!(items.is_empty());
}

#[test]
fn status_patch_on_cat_without_status() {
    let env = empty_env();
    apply(&env, Cat::new("default", "status-patch-cat"));

    let before = get::<Cat>(to_get_params(key("status-patch-cat"), []))
        .run(&env)
        .unwrap();
    assert!(before.status.is_none());

    let sent = Cat::new("default", "status-patch-cat").with_status(CatStatus { sleepy: false });
    status_patch(to_status_patch_params(
        sent,
        Patch::Apply,
        [SubResourcePatchOption::FieldOwner("test-status-patch".into())],
    ))
    .run(&env)
    .unwrap();

    let after = get::<Cat>(to_get_params(key("status-patch-cat"), []))
        .run(&env)
        .unwrap();
    assert_eq!(after.status, Some(CatStatus { sleepy: false }));
}

#[test]
fn flow_follows_a_reference() {
    let env = empty_env();
    apply(&env, ConfigMap::new("default", "my-config").with_data("foo", "bar"));
    apply(
        &env,
        ConfigMap::new("default", "my-config-referencing").with_data("ref", "my-config"),
    );

    let follow_ref = |referencing: ConfigMap| -> ReaderIo<ConfigMap> {
        match referencing.data.get("ref") {
            Some(target) => get::<ConfigMap>(to_get_params(
                ObjectKey::namespaced(&referencing.metadata.namespace, target),
                [],
            )),
            None => ReaderIo::left(StoreError::BadRequest {
                reason: format!("{} has no ref", referencing.metadata.name),
            }),
        }
    };
    let make_pipeline = flow2(chain_with(get::<ConfigMap>), chain_with(follow_ref));

    let params = to_get_params(key("my-config-referencing"), []);
    let pipeline = make_pipeline(ReaderIo::right(params));
    let my_config = pipeline.run(&env).unwrap();
    assert_eq!(my_config.metadata.name, "my-config");
    assert_eq!(my_config.data["foo"], "bar");

    let broken = make_pipeline(ReaderIo::right(to_get_params(key("my-config"), [])));
    assert!(matches!(broken.run(&env), Err(StoreError::BadRequest { .. })));
}

#[test]
fn flow_counts_list_items() {
    let env = empty_env();
    for name in ["list-config-1", "list-config-2", "list-config-3"] {
        apply(&env, ConfigMap::new("default", name).with_data("type", "test"));
    }
    apply(&env, ConfigMap::new("default", "other").with_data("type", "prod"));

    let count_by_type = |list: ConfigMapList| {
        list.items
            .iter()
            .filter(|cm| cm.data.get("type").map(String::as_str) == Some("test"))
            .count()
    };
    let make_count = flow2(chain_with(list::<ConfigMapList>), map_with(count_by_type));

    let params: ListParams = to_list_params([ListOption::in_namespace("default")]);
    assert_eq!(make_count(ReaderIo::right(params)).run(&env).unwrap(), 3);
}

#[test]
fn pipeline_is_built_once_and_bound_to_many_environments() {
    let reader = get_option::<Cat>(to_get_params(key("tom"), []));

    let with_cat = env_with(
        InMemoryClient::builder()
            .scheme(fcr_api::scheme().unwrap())
            .with_object(&Cat::new("default", "tom"))
            .build()
            .unwrap(),
    );
    let without_cat = empty_env();

    assert!(reader.run(&with_cat).unwrap().is_some());
    assert!(reader.run(&without_cat).unwrap().is_none());
}

#[test]
fn delete_then_ignore_already_exists_on_recreate() {
    let env = empty_env();
    let cat = Cat::new("default", "tom");
    let make = create(to_create_params(cat.clone(), []));

    make.run(&env).unwrap();
    assert!(fcr_core::ignore_already_exists(make.run(&env)).is_ok());
    assert!(is_already_exists(&make.run(&env).unwrap_err()));

    delete(to_delete_params(cat, [])).run(&env).unwrap();
    let cats = list::<CatList>(to_list_params([])).run(&env).unwrap();
    assert!(cats.items.is_empty());
}

#[test]
fn get_params_can_come_from_an_earlier_step() {
    let env = empty_env();
    apply(&env, ConfigMap::new("default", "pointer").with_data("name", "target"));
    apply(&env, ConfigMap::new("default", "target"));

    let to_target = |cm: ConfigMap| -> GetParams {
        to_get_params(ObjectKey::namespaced("default", &cm.data["name"]), [])
    };
    let target = get::<ConfigMap>(to_get_params(key("pointer"), []))
        .map(to_target)
        .chain(get::<ConfigMap>)
        .run(&env)
        .unwrap();
    assert_eq!(target.metadata.name, "target");
}
