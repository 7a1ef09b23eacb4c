//! Subcommands, each evaluated as a pipeline against the loaded store.

use std::collections::BTreeMap;

use clap::Subcommand;
use serde_json::Value;
use tracing::debug;

use fcr_api::core_v1::{ConfigMap, ConfigMapList};
use fcr_api::v1::{Cat, CatList};
use fcr_client::{
    chain_with, delete_all_of, flow2, get, get_option, list_items, to_delete_all_of_params,
    to_get_params, to_list_params, Env, ReaderIo,
};
use fcr_core::{DeleteAllOfOption, ListOption, Object, ObjectKey, Resource, ResourceList, Scheme, StoreError};

use crate::error::CliError;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one object.
    Get {
        /// Kind name, case-insensitive (e.g. ConfigMap, Cat).
        kind: String,
        name: String,
        #[arg(short, long, default_value = "default")]
        namespace: String,
    },

    /// Print one object, or null when it does not exist.
    GetOption {
        kind: String,
        name: String,
        #[arg(short, long, default_value = "default")]
        namespace: String,
    },

    /// Print every matching object as a JSON array.
    List {
        kind: String,
        /// Restrict to one namespace (default: all).
        #[arg(short, long)]
        namespace: Option<String>,
        /// Label equality selector, repeatable.
        #[arg(short = 'l', long = "label", value_parser = parse_label)]
        labels: Vec<(String, String)>,
    },

    /// Delete every matching object and print how many of the kind remain
    /// in the namespace.
    DeleteAllOf {
        kind: String,
        #[arg(short, long)]
        namespace: Option<String>,
        #[arg(short = 'l', long = "label", value_parser = parse_label)]
        labels: Vec<(String, String)>,
    },

    /// Get a config map, read the name stored under `--ref-key`, and print
    /// the config map it names.
    Follow {
        name: String,
        #[arg(short, long, default_value = "default")]
        namespace: String,
        #[arg(long)]
        ref_key: String,
    },
}

impl Command {
    /// Whether the command changes the store.
    pub fn writes(&self) -> bool {
        matches!(self, Command::DeleteAllOf { .. })
    }
}

/// The kinds the CLI can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    ConfigMap,
    Cat,
}

impl Kind {
    fn resolve(scheme: &Scheme, name: &str) -> Result<Kind, CliError> {
        let info = scheme
            .find_kind(name)
            .ok_or_else(|| CliError::UnknownKind(name.to_string()))?;
        match info.gvk.kind.as_str() {
            ConfigMap::KIND => Ok(Kind::ConfigMap),
            Cat::KIND => Ok(Kind::Cat),
            other => Err(CliError::UnknownKind(other.to_string())),
        }
    }
}

pub fn execute(env: &Env, command: &Command) -> Result<Value, CliError> {
    let scheme = env.client.scheme();
    debug!(?command, "executing");
    match command {
        Command::Get {
            kind,
            name,
            namespace,
        } => {
            let key = ObjectKey::namespaced(namespace, name);
            match Kind::resolve(scheme, kind)? {
                Kind::ConfigMap => get_object::<ConfigMap>(env, key),
                Kind::Cat => get_object::<Cat>(env, key),
            }
        }
        Command::GetOption {
            kind,
            name,
            namespace,
        } => {
            let key = ObjectKey::namespaced(namespace, name);
            match Kind::resolve(scheme, kind)? {
                Kind::ConfigMap => get_object_option::<ConfigMap>(env, key),
                Kind::Cat => get_object_option::<Cat>(env, key),
            }
        }
        Command::List {
            kind,
            namespace,
            labels,
        } => {
            let opts = list_options(namespace.as_deref(), labels);
            match Kind::resolve(scheme, kind)? {
                Kind::ConfigMap => list_objects::<ConfigMapList>(env, opts),
                Kind::Cat => list_objects::<CatList>(env, opts),
            }
        }
        Command::DeleteAllOf {
            kind,
            namespace,
            labels,
        } => {
            let opts = list_options(namespace.as_deref(), labels);
            let scope = list_options(namespace.as_deref(), &[]);
            let remaining = match Kind::resolve(scheme, kind)? {
                Kind::ConfigMap => delete_matching::<ConfigMapList>(env, opts, scope)?,
                Kind::Cat => delete_matching::<CatList>(env, opts, scope)?,
            };
            Ok(Value::from(remaining))
        }
        Command::Follow {
            name,
            namespace,
            ref_key,
        } => follow(env, ObjectKey::namespaced(namespace, name), ref_key.clone()),
    }
}

fn get_object<T: Resource>(env: &Env, key: ObjectKey) -> Result<Value, CliError> {
    let obj = get::<T>(to_get_params(key, [])).run(env)?;
    Ok(obj.to_value()?)
}

fn get_object_option<T: Resource>(env: &Env, key: ObjectKey) -> Result<Value, CliError> {
    match get_option::<T>(to_get_params(key, [])).run(env)? {
        Some(obj) => Ok(obj.to_value()?),
        None => Ok(Value::Null),
    }
}

fn list_objects<L: ResourceList>(env: &Env, opts: Vec<ListOption>) -> Result<Value, CliError> {
    let items = list_items::<L>(to_list_params(opts)).run(env)?;
    let values = items
        .iter()
        .map(|item| item.to_value())
        .collect::<Result<Vec<_>, StoreError>>()?;
    Ok(Value::Array(values))
}

fn delete_matching<L: ResourceList>(
    env: &Env,
    opts: Vec<ListOption>,
    scope: Vec<ListOption>,
) -> Result<usize, CliError> {
    let remaining = delete_all_of::<L::Item>(to_delete_all_of_params(
        opts.into_iter().map(DeleteAllOfOption::from),
    ))
    .chain(move |_| list_items::<L>(to_list_params(scope.clone())))
    .map(|items| items.len())
    .run(env)?;
    Ok(remaining)
}

fn follow(env: &Env, key: ObjectKey, ref_key: String) -> Result<Value, CliError> {
    let follow_ref = move |referencing: ConfigMap| -> ReaderIo<ConfigMap> {
        match referencing.data.get(&ref_key) {
            Some(target) => get::<ConfigMap>(to_get_params(
                ObjectKey::namespaced(&referencing.metadata.namespace, target),
                [],
            )),
            None => ReaderIo::left(StoreError::BadRequest {
                reason: format!(
                    "config map {} has no data key '{ref_key}'",
                    referencing.metadata.key()
                ),
            }),
        }
    };
    let pipeline = flow2(chain_with(get::<ConfigMap>), chain_with(follow_ref));
    let target = pipeline(ReaderIo::right(to_get_params(key, []))).run(env)?;
    Ok(target.to_value()?)
}

fn list_options(namespace: Option<&str>, labels: &[(String, String)]) -> Vec<ListOption> {
    let mut opts = Vec::new();
    if let Some(namespace) = namespace {
        opts.push(ListOption::in_namespace(namespace));
    }
    if !labels.is_empty() {
        let labels: BTreeMap<String, String> = labels.iter().cloned().collect();
        opts.push(ListOption::MatchingLabels(labels));
    }
    opts
}

fn parse_label(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid label selector '{s}', expected key=value")),
    }
}
