//! In-memory implementation of [`Client`].
//!
//! [`InMemoryClient`] keeps every object as its JSON representation in a
//! [`DashMap`] keyed by kind and object key. A single revision counter
//! stamps `resourceVersion` on every write; `uid` is a fresh UUIDv4 per
//! created object. Cloning the client shares the underlying state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde_json::{json, Map, Value};
use tracing::{debug, trace};
use uuid::Uuid;

use fcr_core::options::split_delete_all_of;
use fcr_core::patch::merge;
use fcr_core::resource::stamp_type;
use fcr_core::{
    Client, Context, CreateOption, DeleteAllOfOption, DeleteOption, GetOption, GroupVersionKind,
    KindInfo, ListOption, Object, ObjectKey, ObjectList, Patch, PatchOption, Resource, Scheme,
    StatusWriter, StoreError, SubResourcePatchOption, SubResourceUpdateOption, UpdateOption,
};

use crate::config::StoreConfig;
use crate::selector::Selection;

/// Where a stored object lives: its kind plus its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct StoredKey {
    gvk: GroupVersionKind,
    key: ObjectKey,
}

/// Which write channel a request came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Main,
    Status,
}

/// Flags common to every write, folded from the per-operation options.
#[derive(Debug, Default)]
struct WriteFlags {
    dry_run: bool,
    field_owner: Option<String>,
    force: bool,
}

impl WriteFlags {
    fn from_create(opts: &[CreateOption]) -> Self {
        let mut flags = WriteFlags::default();
        for opt in opts {
            match opt {
                CreateOption::DryRun => flags.dry_run = true,
                CreateOption::FieldOwner(owner) => flags.field_owner = Some(owner.clone()),
            }
        }
        flags
    }

    fn from_update(opts: &[UpdateOption]) -> Self {
        let mut flags = WriteFlags::default();
        for opt in opts {
            match opt {
                UpdateOption::DryRun => flags.dry_run = true,
                UpdateOption::FieldOwner(owner) => flags.field_owner = Some(owner.clone()),
            }
        }
        flags
    }

    fn from_patch(opts: &[PatchOption]) -> Self {
        let mut flags = WriteFlags::default();
        for opt in opts {
            match opt {
                PatchOption::DryRun => flags.dry_run = true,
                PatchOption::FieldOwner(owner) => flags.field_owner = Some(owner.clone()),
                PatchOption::ForceOwnership => flags.force = true,
            }
        }
        flags
    }
}

/// State shared by the client and its status channel.
#[derive(Debug)]
struct Shared {
    scheme: Scheme,
    config: StoreConfig,
    objects: DashMap<StoredKey, Value>,
    revision: AtomicU64,
}

/// In-memory implementation of [`Client`].
#[derive(Debug, Clone)]
pub struct InMemoryClient {
    shared: Arc<Shared>,
    status: StatusChannel,
}

/// The status sub-resource channel of an [`InMemoryClient`].
#[derive(Debug, Clone)]
struct StatusChannel {
    shared: Arc<Shared>,
}

impl InMemoryClient {
    /// Creates an empty store understanding the kinds in `scheme`.
    pub fn new(scheme: Scheme) -> Self {
        Self::with_config(scheme, StoreConfig::default())
    }

    pub fn with_config(scheme: Scheme, config: StoreConfig) -> Self {
        let shared = Arc::new(Shared {
            scheme,
            config,
            objects: DashMap::new(),
            revision: AtomicU64::new(0),
        });
        InMemoryClient {
            status: StatusChannel {
                shared: Arc::clone(&shared),
            },
            shared,
        }
    }

    pub fn builder() -> InMemoryClientBuilder {
        InMemoryClientBuilder::default()
    }

    /// Inserts (or overwrites) a raw object, as found in a snapshot.
    ///
    /// The value must carry `apiVersion` and `kind` of a registered kind.
    /// Missing `uid`, `resourceVersion` and `generation` are filled in;
    /// everything else, `status` included, is stored as given.
    pub fn seed(&self, value: Value) -> Result<(), StoreError> {
        self.shared.seed(value)
    }

    /// Every stored object, ordered by kind, namespace and name.
    pub fn snapshot(&self) -> Vec<Value> {
        let mut entries: Vec<(StoredKey, Value)> = self
            .shared
            .objects
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().map(|(_, v)| v).collect()
    }

    /// Number of stored objects across all kinds.
    pub fn len(&self) -> usize {
        self.shared.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.objects.is_empty()
    }
}

/// Builder for a pre-populated [`InMemoryClient`].
#[derive(Debug, Default)]
pub struct InMemoryClientBuilder {
    scheme: Scheme,
    config: StoreConfig,
    seed: Vec<Value>,
    error: Option<StoreError>,
}

impl InMemoryClientBuilder {
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Emulates `obj` already existing in the store.
    pub fn with_object<T: Resource>(mut self, obj: &T) -> Self {
        match obj.to_value() {
            Ok(value) => self.seed.push(value),
            Err(err) => {
                self.error.get_or_insert(err);
            }
        }
        self
    }

    /// Emulates a raw JSON object already existing in the store.
    pub fn with_value(mut self, value: Value) -> Self {
        self.seed.push(value);
        self
    }

    pub fn build(self) -> Result<InMemoryClient, StoreError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let client = InMemoryClient::with_config(self.scheme, self.config);
        for value in self.seed {
            client.seed(value)?;
        }
        Ok(client)
    }
}

impl Shared {
    /// Rejects requests on a finished context or an unregistered kind.
    fn admit(&self, ctx: &Context, gvk: &GroupVersionKind) -> Result<KindInfo, StoreError> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }
        self.scheme.require(gvk).cloned()
    }

    fn next_version(&self) -> String {
        (self.revision.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }

    fn current_version(&self) -> String {
        self.revision.load(Ordering::SeqCst).to_string()
    }

    fn dry_run(&self, requested: bool) -> bool {
        requested && self.config.honor_dry_run
    }

    fn seed(&self, mut value: Value) -> Result<(), StoreError> {
        let api_version = value.get("apiVersion").and_then(Value::as_str);
        let kind = value.get("kind").and_then(Value::as_str);
        let gvk = match (api_version, kind) {
            (Some(api_version), Some(kind)) => GroupVersionKind::from_api_version(api_version, kind),
            _ => {
                return Err(StoreError::BadRequest {
                    reason: "object has no apiVersion or kind".to_string(),
                })
            }
        };
        let info = self.scheme.require(&gvk)?.clone();
        let key = ObjectKey::new(meta_str(&value, "namespace"), meta_str(&value, "name"));
        validate(&info, &key)?;
        if meta_str(&value, "uid").is_empty() {
            set_meta(&mut value, "uid", Value::String(Uuid::new_v4().to_string()));
        }
        match meta_str(&value, "resourceVersion") {
            "" => set_meta(&mut value, "resourceVersion", Value::String(self.next_version())),
            rv => {
                // Later writes must never reuse a seeded version.
                if let Ok(rv) = rv.parse::<u64>() {
                    self.revision.fetch_max(rv, Ordering::SeqCst);
                }
            }
        }
        if value.pointer("/metadata/generation").is_none() {
            set_meta(&mut value, "generation", json!(1));
        }
        debug!(kind = %info.gvk.kind, key = %key, "seed");
        self.objects.insert(stored_key(&info, &key), value);
        Ok(())
    }

    /// Stamps server-owned fields on an object about to be created.
    fn admit_new(&self, info: &KindInfo, mut value: Value) -> Value {
        if let Value::Object(map) = &mut value {
            if info.has_status {
                map.remove("status");
            }
        }
        if !info.namespaced {
            set_meta(&mut value, "namespace", Value::Null);
        }
        set_meta(&mut value, "uid", Value::String(Uuid::new_v4().to_string()));
        set_meta(&mut value, "resourceVersion", Value::String(self.next_version()));
        set_meta(&mut value, "generation", json!(1));
        stamp_type(&mut value, &info.gvk);
        strip_nulls_in_meta(&mut value);
        value
    }

    /// Carries identity from `stored` into `next` and stamps a new version.
    fn finish_write(&self, info: &KindInfo, stored: &Value, next: &mut Value) {
        for field in ["name", "namespace", "uid"] {
            match stored.pointer(&format!("/metadata/{field}")) {
                Some(v) => set_meta(next, field, v.clone()),
                None => set_meta(next, field, Value::Null),
            }
        }
        let generation = stored
            .pointer("/metadata/generation")
            .and_then(Value::as_i64)
            .unwrap_or(1);
        let generation = if content(stored) != content(next) {
            generation + 1
        } else {
            generation
        };
        set_meta(next, "generation", json!(generation));
        set_meta(next, "resourceVersion", Value::String(self.next_version()));
        stamp_type(next, &info.gvk);
        strip_nulls_in_meta(next);
    }

    fn get(
        &self,
        ctx: &Context,
        key: &ObjectKey,
        obj: &mut dyn Object,
        opts: &[GetOption],
    ) -> Result<(), StoreError> {
        let info = self.admit(ctx, &obj.object_gvk())?;
        let value = self
            .objects
            .get(&stored_key(&info, key))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| not_found(&info, key))?;
        for opt in opts {
            match opt {
                GetOption::ResourceVersion(rv) => {
                    let stored_rv = meta_str(&value, "resourceVersion");
                    if stored_rv != rv {
                        return Err(StoreError::Conflict {
                            kind: info.gvk.kind.clone(),
                            key: key.clone(),
                            reason: format!(
                                "requested resource version {rv}, stored version is {stored_rv}"
                            ),
                        });
                    }
                }
            }
        }
        debug!(kind = %info.gvk.kind, key = %key, "get");
        obj.load_value(value)
    }

    fn list(
        &self,
        ctx: &Context,
        list: &mut dyn ObjectList,
        opts: &[ListOption],
    ) -> Result<(), StoreError> {
        let info = self.admit(ctx, &list.item_gvk())?;
        let selection = Selection::from_options(opts)?;
        trace!(?selection, kind = %info.gvk.kind, "list selection");

        let mut items: Vec<(ObjectKey, Value)> = self
            .objects
            .iter()
            .filter(|e| e.key().gvk == info.gvk && selection.matches(&e.key().key, e.value()))
            .map(|e| (e.key().key.clone(), e.value().clone()))
            .collect();
        items.sort_by(|a, b| a.0.cmp(&b.0));
        if let Some(limit) = selection.limit.filter(|n| *n > 0) {
            items.truncate(limit);
        }

        debug!(kind = %info.gvk.kind, count = items.len(), "list");
        let items: Vec<Value> = items.into_iter().map(|(_, v)| v).collect();
        list.load_value(json!({
            "apiVersion": info.gvk.api_version(),
            "kind": info.list_kind,
            "metadata": {"resourceVersion": self.current_version()},
            "items": items,
        }))
    }

    fn create(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        flags: WriteFlags,
    ) -> Result<(), StoreError> {
        let info = self.admit(ctx, &obj.object_gvk())?;
        let key = obj.object_key();
        validate(&info, &key)?;
        if !obj.object_meta().resource_version.is_empty() {
            return Err(StoreError::BadRequest {
                reason: "resourceVersion can not be set for create requests".to_string(),
            });
        }
        let dry_run = self.dry_run(flags.dry_run);
        let sent = obj.to_value()?;

        match self.objects.entry(stored_key(&info, &key)) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists {
                kind: info.gvk.kind.clone(),
                key,
            }),
            Entry::Vacant(slot) => {
                let value = self.admit_new(&info, sent);
                obj.load_value(value.clone())?;
                if !dry_run {
                    slot.insert(value);
                }
                debug!(
                    kind = %info.gvk.kind,
                    key = %key,
                    dry_run,
                    field_owner = flags.field_owner.as_deref().unwrap_or(""),
                    "create"
                );
                Ok(())
            }
        }
    }

    fn update(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        channel: Channel,
        flags: WriteFlags,
    ) -> Result<(), StoreError> {
        let info = self.admit(ctx, &obj.object_gvk())?;
        let key = obj.object_key();
        validate(&info, &key)?;
        if channel == Channel::Status && !info.has_status {
            return Err(not_found(&info, &key));
        }
        let dry_run = self.dry_run(flags.dry_run);
        let sent = obj.to_value()?;
        let sent_rv = obj.object_meta().resource_version.clone();

        let mut slot = self
            .objects
            .get_mut(&stored_key(&info, &key))
            .ok_or_else(|| not_found(&info, &key))?;
        let stored = slot.value().clone();
        check_version(&info, &key, &sent_rv, &stored)?;

        let mut next = match channel {
            Channel::Main => {
                let mut next = sent;
                if info.has_status {
                    copy_status(&stored, &mut next);
                }
                next
            }
            Channel::Status => {
                let mut next = stored.clone();
                copy_status(&sent, &mut next);
                next
            }
        };
        self.finish_write(&info, &stored, &mut next);
        obj.load_value(next.clone())?;
        if !dry_run {
            *slot = next;
        }
        debug!(kind = %info.gvk.kind, key = %key, ?channel, dry_run, "update");
        Ok(())
    }

    fn patch(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        patch: &Patch,
        channel: Channel,
        flags: WriteFlags,
    ) -> Result<(), StoreError> {
        let info = self.admit(ctx, &obj.object_gvk())?;
        let key = obj.object_key();
        validate(&info, &key)?;
        if channel == Channel::Status && !info.has_status {
            return Err(not_found(&info, &key));
        }
        let apply = matches!(patch, Patch::Apply);
        let field_owner = flags
            .field_owner
            .clone()
            .or_else(|| self.config.default_field_manager.clone());
        if apply && field_owner.is_none() {
            return Err(StoreError::BadRequest {
                reason: "fieldManager is required for apply patch".to_string(),
            });
        }
        let dry_run = self.dry_run(flags.dry_run);
        let data = patch.data(obj)?;

        match self.objects.entry(stored_key(&info, &key)) {
            Entry::Vacant(slot) => {
                if !(apply && channel == Channel::Main) {
                    return Err(not_found(&info, &key));
                }
                let mut data = data;
                set_meta(&mut data, "resourceVersion", Value::Null);
                let value = self.admit_new(&info, data);
                obj.load_value(value.clone())?;
                if !dry_run {
                    slot.insert(value);
                }
                debug!(kind = %info.gvk.kind, key = %key, dry_run, "apply created object");
                Ok(())
            }
            Entry::Occupied(mut slot) => {
                let stored = slot.get().clone();
                let sent_rv = data
                    .pointer("/metadata/resourceVersion")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string();
                check_version(&info, &key, &sent_rv, &stored)?;

                let mut next = stored.clone();
                match channel {
                    Channel::Main => {
                        let mut data = data;
                        if info.has_status {
                            if let Value::Object(map) = &mut data {
                                map.remove("status");
                            }
                        }
                        if let Some(Value::Object(meta)) = data.get_mut("metadata") {
                            for field in ["uid", "resourceVersion", "generation"] {
                                meta.remove(field);
                            }
                        }
                        merge(&mut next, &data);
                    }
                    Channel::Status => {
                        if let Some(status) = data.get("status") {
                            merge(&mut next, &json!({ "status": status }));
                        }
                    }
                }
                self.finish_write(&info, &stored, &mut next);
                obj.load_value(next.clone())?;
                if !dry_run {
                    slot.insert(next);
                }
                debug!(
                    kind = %info.gvk.kind,
                    key = %key,
                    ?channel,
                    patch_type = patch.content_type(),
                    field_owner = field_owner.as_deref().unwrap_or(""),
                    force = flags.force,
                    dry_run,
                    "patch"
                );
                Ok(())
            }
        }
    }

    fn delete(
        &self,
        ctx: &Context,
        obj: &dyn Object,
        opts: &[DeleteOption],
    ) -> Result<(), StoreError> {
        let info = self.admit(ctx, &obj.object_gvk())?;
        let key = obj.object_key();
        let mut dry_run = false;

        match self.objects.entry(stored_key(&info, &key)) {
            Entry::Vacant(_) => Err(not_found(&info, &key)),
            Entry::Occupied(slot) => {
                for opt in opts {
                    match opt {
                        DeleteOption::DryRun => dry_run = self.dry_run(true),
                        DeleteOption::GracePeriodSeconds(seconds) => {
                            trace!(seconds, "grace period has no effect in memory");
                        }
                        DeleteOption::Preconditions {
                            uid,
                            resource_version,
                        } => {
                            check_precondition(&info, &key, "UID", uid, slot.get(), "uid")?;
                            check_precondition(
                                &info,
                                &key,
                                "ResourceVersion",
                                resource_version,
                                slot.get(),
                                "resourceVersion",
                            )?;
                        }
                    }
                }
                if !dry_run {
                    slot.remove();
                }
                debug!(kind = %info.gvk.kind, key = %key, dry_run, "delete");
                Ok(())
            }
        }
    }

    fn delete_all_of(
        &self,
        ctx: &Context,
        obj: &dyn Object,
        opts: &[DeleteAllOfOption],
    ) -> Result<(), StoreError> {
        let info = self.admit(ctx, &obj.object_gvk())?;
        let (list_opts, delete_opts) = split_delete_all_of(opts);
        let selection = Selection::from_options(&list_opts)?;
        let dry_run = self.dry_run(delete_opts.contains(&DeleteOption::DryRun));

        let doomed: Vec<(StoredKey, Value)> = self
            .objects
            .iter()
            .filter(|e| e.key().gvk == info.gvk && selection.matches(&e.key().key, e.value()))
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();

        // Preconditions hold for every matched object or nothing is deleted.
        for opt in &delete_opts {
            match opt {
                DeleteOption::DryRun => {}
                DeleteOption::GracePeriodSeconds(seconds) => {
                    trace!(seconds, "grace period has no effect in memory");
                }
                DeleteOption::Preconditions {
                    uid,
                    resource_version,
                } => {
                    for (stored, value) in &doomed {
                        check_precondition(&info, &stored.key, "UID", uid, value, "uid")?;
                        check_precondition(
                            &info,
                            &stored.key,
                            "ResourceVersion",
                            resource_version,
                            value,
                            "resourceVersion",
                        )?;
                    }
                }
            }
        }
        if !dry_run {
            for (key, _) in &doomed {
                self.objects.remove(key);
            }
        }
        debug!(kind = %info.gvk.kind, count = doomed.len(), dry_run, "delete all of");
        Ok(())
    }
}

impl Client for InMemoryClient {
    fn get(
        &self,
        ctx: &Context,
        key: &ObjectKey,
        obj: &mut dyn Object,
        opts: &[GetOption],
    ) -> Result<(), StoreError> {
        self.shared.get(ctx, key, obj, opts)
    }

    fn list(
        &self,
        ctx: &Context,
        list: &mut dyn ObjectList,
        opts: &[ListOption],
    ) -> Result<(), StoreError> {
        self.shared.list(ctx, list, opts)
    }

    fn create(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        opts: &[CreateOption],
    ) -> Result<(), StoreError> {
        self.shared.create(ctx, obj, WriteFlags::from_create(opts))
    }

    fn update(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        opts: &[UpdateOption],
    ) -> Result<(), StoreError> {
        self.shared
            .update(ctx, obj, Channel::Main, WriteFlags::from_update(opts))
    }

    fn patch(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        patch: &Patch,
        opts: &[PatchOption],
    ) -> Result<(), StoreError> {
        self.shared
            .patch(ctx, obj, patch, Channel::Main, WriteFlags::from_patch(opts))
    }

    fn delete(
        &self,
        ctx: &Context,
        obj: &dyn Object,
        opts: &[DeleteOption],
    ) -> Result<(), StoreError> {
        self.shared.delete(ctx, obj, opts)
    }

    fn delete_all_of(
        &self,
        ctx: &Context,
        obj: &dyn Object,
        opts: &[DeleteAllOfOption],
    ) -> Result<(), StoreError> {
        self.shared.delete_all_of(ctx, obj, opts)
    }

    fn status(&self) -> &dyn StatusWriter {
        &self.status
    }

    fn scheme(&self) -> &Scheme {
        &self.shared.scheme
    }
}

impl StatusWriter for StatusChannel {
    fn update(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        opts: &[SubResourceUpdateOption],
    ) -> Result<(), StoreError> {
        let opts: Vec<UpdateOption> = opts.iter().map(UpdateOption::from).collect();
        self.shared
            .update(ctx, obj, Channel::Status, WriteFlags::from_update(&opts))
    }

    fn patch(
        &self,
        ctx: &Context,
        obj: &mut dyn Object,
        patch: &Patch,
        opts: &[SubResourcePatchOption],
    ) -> Result<(), StoreError> {
        let opts: Vec<PatchOption> = opts.iter().map(PatchOption::from).collect();
        self.shared
            .patch(ctx, obj, patch, Channel::Status, WriteFlags::from_patch(&opts))
    }
}

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

fn stored_key(info: &KindInfo, key: &ObjectKey) -> StoredKey {
    let namespace = if info.namespaced {
        key.namespace.clone()
    } else {
        String::new()
    };
    StoredKey {
        gvk: info.gvk.clone(),
        key: ObjectKey {
            namespace,
            name: key.name.clone(),
        },
    }
}

fn validate(info: &KindInfo, key: &ObjectKey) -> Result<(), StoreError> {
    let reason = if key.name.is_empty() {
        "metadata.name: Required value"
    } else if info.namespaced && key.namespace.is_empty() {
        "metadata.namespace: Required value"
    } else {
        return Ok(());
    };
    Err(StoreError::Invalid {
        kind: info.gvk.kind.clone(),
        key: key.clone(),
        reason: reason.to_string(),
    })
}

fn not_found(info: &KindInfo, key: &ObjectKey) -> StoreError {
    StoreError::NotFound {
        kind: info.gvk.kind.clone(),
        key: key.clone(),
    }
}

fn check_version(
    info: &KindInfo,
    key: &ObjectKey,
    sent: &str,
    stored: &Value,
) -> Result<(), StoreError> {
    if sent.is_empty() || sent == meta_str(stored, "resourceVersion") {
        return Ok(());
    }
    Err(StoreError::Conflict {
        kind: info.gvk.kind.clone(),
        key: key.clone(),
        reason: "the object has been modified; please apply your changes to the latest version and try again"
            .to_string(),
    })
}

fn check_precondition(
    info: &KindInfo,
    key: &ObjectKey,
    label: &str,
    expected: &Option<String>,
    stored: &Value,
    field: &str,
) -> Result<(), StoreError> {
    let Some(expected) = expected else {
        return Ok(());
    };
    let actual = meta_str(stored, field);
    if expected == actual {
        return Ok(());
    }
    Err(StoreError::Conflict {
        kind: info.gvk.kind.clone(),
        key: key.clone(),
        reason: format!(
            "Precondition failed: {label} in precondition: {expected}, {label} in object meta: {actual}"
        ),
    })
}

fn meta_str<'a>(value: &'a Value, field: &str) -> &'a str {
    value
        .get("metadata")
        .and_then(|meta| meta.get(field))
        .and_then(Value::as_str)
        .unwrap_or("")
}

fn set_meta(value: &mut Value, field: &str, field_value: Value) {
    if let Value::Object(map) = value {
        let meta = map
            .entry("metadata")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(meta) = meta {
            meta.insert(field.to_string(), field_value);
        }
    }
}

fn strip_nulls_in_meta(value: &mut Value) {
    if let Some(Value::Object(meta)) = value.get_mut("metadata") {
        meta.retain(|_, v| !v.is_null());
    }
}

/// Moves `status` from `from` into `to`, removing it when `from` has none.
fn copy_status(from: &Value, to: &mut Value) {
    if let Value::Object(map) = to {
        match from.get("status") {
            Some(status) if !status.is_null() => {
                map.insert("status".to_string(), status.clone());
            }
            _ => {
                map.remove("status");
            }
        }
    }
}

/// The part of an object that counts towards its generation.
fn content(value: &Value) -> Value {
    let mut value = value.clone();
    if let Value::Object(map) = &mut value {
        for field in ["apiVersion", "kind", "metadata", "status"] {
            map.remove(field);
        }
    }
    value
}
