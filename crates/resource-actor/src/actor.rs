//! # Generic Store Actor
//!
//! This module defines the `ResourceActor`, the server half of a store. It owns the entities
//! of one resource type and processes requests one at a time, so the map needs no lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::ResourceError;
use crate::message::ResourceRequest;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// Each `ResourceActor` runs in its own Tokio task and drains its channel sequentially.
/// A request is fully handled before the next one is read, which makes every request,
/// including the batch ones, atomic with respect to this store.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new(buffer)` returns the actor and its client.
/// 2.  **Run**: spawn `actor.run()` on the runtime.
/// 3.  **Use**: clone the client wherever the store is needed. Dropping every clone ends the loop.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = String;
///     type Action = ();
///     type ActionResult = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: p.text })
///     }
///     fn on_update(&mut self, text: String) -> Result<(), NoteError> { self.text = text; Ok(()) }
///     fn handle_action(&mut self, _: ()) -> Result<(), NoteError> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel and must be greater than zero.
    /// When the channel is full, client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "Product" instead of "order_recipe::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(entity_type, msg);
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn handle(&mut self, entity_type: &str, msg: ResourceRequest<T>) {
        match msg {
            ResourceRequest::Create { params, respond_to } => {
                debug!(entity_type, ?params, "Create");
                let id = self.generate_id();
                match T::from_create_params(id.clone(), params) {
                    Ok(item) => {
                        self.store.insert(id.clone(), item.clone());
                        info!(entity_type, %id, size = self.store.len(), "Created");
                        let _ = respond_to.send(Ok(item));
                    }
                    Err(e) => {
                        warn!(entity_type, error = %e, "Create failed");
                        let _ = respond_to.send(Err(ResourceError::EntityError(Box::new(e))));
                    }
                }
            }
            ResourceRequest::Insert { item, respond_to } => {
                let id = item.id().clone();
                let replaced = self.store.insert(id.clone(), item).is_some();
                info!(entity_type, %id, replaced, size = self.store.len(), "Inserted");
                let _ = respond_to.send(Ok(()));
            }
            ResourceRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                let found = item.is_some();
                debug!(entity_type, %id, found, "Get");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::GetMany { ids, respond_to } => {
                let items: Vec<T> = ids
                    .iter()
                    .filter_map(|id| self.store.get(id).cloned())
                    .collect();
                debug!(entity_type, requested = ids.len(), found = items.len(), "GetMany");
                let _ = respond_to.send(Ok(items));
            }
            ResourceRequest::List { respond_to } => {
                debug!(entity_type, size = self.store.len(), "List");
                let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(entity_type, %id, ?update, "Update");
                let Some(item) = self.store.get_mut(&id) else {
                    warn!(entity_type, %id, "Not found");
                    let _ = respond_to.send(Err(ResourceError::NotFound(id.to_string())));
                    return;
                };
                match item.on_update(update) {
                    Ok(()) => {
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    }
                    Err(e) => {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(ResourceError::EntityError(Box::new(e))));
                    }
                }
            }
            ResourceRequest::UpdateMany {
                updates,
                respond_to,
            } => {
                debug!(entity_type, ?updates, "UpdateMany");
                let result = self.update_many(updates);
                match &result {
                    Ok(items) => info!(entity_type, updated = items.len(), "Batch updated"),
                    Err(e) => warn!(entity_type, error = %e, "Batch update rejected"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            } => {
                debug!(entity_type, %id, ?action, "Action");
                let Some(item) = self.store.get_mut(&id) else {
                    warn!(entity_type, %id, "Not found");
                    let _ = respond_to.send(Err(ResourceError::NotFound(id.to_string())));
                    return;
                };
                let result = item
                    .handle_action(action)
                    .map_err(|e| ResourceError::EntityError(Box::new(e)));
                match &result {
                    Ok(_) => info!(entity_type, %id, "Action ok"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }

    /// Next counter value not already taken by an inserted entity.
    fn generate_id(&mut self) -> T::Id {
        loop {
            let id = T::Id::from(self.next_id);
            self.next_id += 1;
            if !self.store.contains_key(&id) {
                return id;
            }
        }
    }

    /// Applies a batch on staged copies and commits only if every update succeeded.
    ///
    /// Repeated ids are applied in batch order to the same staged copy. The returned entities
    /// follow the order in which each id first appears.
    fn update_many(&mut self, updates: Vec<(T::Id, T::Update)>) -> Result<Vec<T>, ResourceError> {
        let mut staged: HashMap<T::Id, T> = HashMap::new();
        let mut order = Vec::new();

        for (id, update) in updates {
            let item = match staged.entry(id.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let current = self
                        .store
                        .get(&id)
                        .cloned()
                        .ok_or_else(|| ResourceError::NotFound(id.to_string()))?;
                    order.push(id);
                    entry.insert(current)
                }
            };
            item.on_update(update)
                .map_err(|e| ResourceError::EntityError(Box::new(e)))?;
        }

        let mut committed = Vec::with_capacity(order.len());
        for id in order {
            if let Some(item) = staged.remove(&id) {
                self.store.insert(id, item.clone());
                committed.push(item);
            }
        }
        Ok(committed)
    }
}
