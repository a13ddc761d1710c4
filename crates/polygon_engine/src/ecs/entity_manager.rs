//! Entity manager
//!
//! Owns every entity record and component column. Structural changes are
//! two-phase: [`EntityManager::create_entity`] and [`EntityManager::destroy`]
//! take effect on the record at once, but the live list that passes iterate
//! only changes at [`EntityManager::commit`].

use slotmap::SlotMap;
use std::collections::HashMap;

use super::component::Component;
use super::entity::{EntityId, EntityKey, EntityRecord, Tag};
use super::storage::{ComponentMask, ComponentStore};

/// Counts of what a commit changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitSummary {
    /// Pending entities moved into the live list
    pub added: usize,
    /// Inactive entities removed from storage
    pub removed: usize,
}

/// Owner of all entities and their components
pub struct EntityManager {
    records: SlotMap<EntityKey, EntityRecord>,
    components: ComponentStore,
    live: Vec<EntityKey>,
    pending: Vec<EntityKey>,
    by_tag: HashMap<Tag, Vec<EntityKey>>,
    next_id: u64,
}

impl EntityManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            records: SlotMap::with_key(),
            components: ComponentStore::default(),
            live: Vec::new(),
            pending: Vec::new(),
            by_tag: HashMap::new(),
            next_id: 0,
        }
    }

    /// Create a new entity
    ///
    /// The entity is writable immediately but only shows up in
    /// [`live_entities`](Self::live_entities) after the next commit.
    pub fn create_entity(&mut self, tag: Tag) -> EntityKey {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        let key = self.records.insert(EntityRecord::new(id, tag));
        self.pending.push(key);
        key
    }

    /// Mark an entity as destroyed
    ///
    /// Destroying twice, or destroying an already removed entity, does nothing.
    pub fn destroy(&mut self, key: EntityKey) {
        if let Some(record) = self.records.get_mut(key) {
            if record.deactivate() {
                log::trace!("Destroyed {} ({})", record.id(), record.tag());
            }
        }
    }

    /// Destroy every entity, live and pending
    pub fn destroy_all(&mut self) {
        for record in self.records.values_mut() {
            record.deactivate();
        }
    }

    /// Apply staged structural changes
    ///
    /// Removes every inactive entity from storage, appends still-active
    /// pending entities to the live list in creation order, and rebuilds the
    /// tag index.
    pub fn commit(&mut self) -> CommitSummary {
        let mut removed = 0;
        let mut added = 0;

        let records = &mut self.records;
        let components = &mut self.components;
        let mut purge = |key: EntityKey| -> bool {
            let active = records.get(key).is_some_and(EntityRecord::is_active);
            if !active && records.remove(key).is_some() {
                components.remove_all(key);
                removed += 1;
            }
            active
        };

        self.live.retain(|&key| purge(key));
        for key in std::mem::take(&mut self.pending) {
            if purge(key) {
                self.live.push(key);
                added += 1;
            }
        }

        self.rebuild_tag_index();
        let summary = CommitSummary { added, removed };

        if summary != CommitSummary::default() {
            log::trace!(
                "Commit: +{} -{} ({} live)",
                summary.added,
                summary.removed,
                self.live.len()
            );
        }
        summary
    }

    fn rebuild_tag_index(&mut self) {
        for keys in self.by_tag.values_mut() {
            keys.clear();
        }
        for &key in &self.live {
            if let Some(record) = self.records.get(key) {
                self.by_tag.entry(record.tag()).or_default().push(key);
            }
        }
    }

    /// Live entities in creation order, as of the last commit
    pub fn live_entities(&self) -> &[EntityKey] {
        &self.live
    }

    /// Live entities with a tag, in creation order, as of the last commit
    pub fn entities_by_tag(&self, tag: Tag) -> &[EntityKey] {
        self.by_tag.get(&tag).map_or(&[], Vec::as_slice)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether there are no live entities
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of entities waiting for the next commit
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Identity record of an entity still in storage
    pub fn record(&self, key: EntityKey) -> Option<&EntityRecord> {
        self.records.get(key)
    }

    /// Whether the entity exists and has not been destroyed
    pub fn is_active(&self, key: EntityKey) -> bool {
        self.records.get(key).is_some_and(EntityRecord::is_active)
    }

    /// Entity ID, if the entity is still in storage
    pub fn id_of(&self, key: EntityKey) -> Option<EntityId> {
        self.records.get(key).map(EntityRecord::id)
    }

    /// Entity tag, if the entity is still in storage
    pub fn tag_of(&self, key: EntityKey) -> Option<Tag> {
        self.records.get(key).map(EntityRecord::tag)
    }

    /// Whether the entity is active and carries every component in `mask`
    pub fn matches(&self, key: EntityKey, mask: ComponentMask) -> bool {
        self.records
            .get(key)
            .is_some_and(|record| record.is_active() && record.mask().contains(mask))
    }

    /// Attach (or replace) a component
    ///
    /// Ignored for entities that are no longer in storage.
    pub fn insert<T: Component>(&mut self, key: EntityKey, component: T) {
        if let Some(record) = self.records.get_mut(key) {
            record.mask.insert(T::MASK);
            T::column_mut(&mut self.components).insert(key, component);
        }
    }

    /// Detach a component, returning it
    pub fn remove<T: Component>(&mut self, key: EntityKey) -> Option<T> {
        let record = self.records.get_mut(key)?;
        record.mask.remove(T::MASK);
        T::column_mut(&mut self.components).remove(key)
    }

    /// Get a component
    pub fn get<T: Component>(&self, key: EntityKey) -> Option<&T> {
        T::column(&self.components).get(key)
    }

    /// Get a mutable component
    pub fn get_mut<T: Component>(&mut self, key: EntityKey) -> Option<&mut T> {
        T::column_mut(&mut self.components).get_mut(key)
    }

    /// Whether the entity carries a component
    pub fn has<T: Component>(&self, key: EntityKey) -> bool {
        T::column(&self.components).contains_key(key)
    }

    /// Read access to all component columns
    pub fn components(&self) -> &ComponentStore {
        &self.components
    }

    /// Write access to all component columns, for passes that need two at once
    pub fn components_mut(&mut self) -> &mut ComponentStore {
        &mut self.components
    }

}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}
