//! Entity arena
//!
//! Every placed object lives here and is addressed by a stable [`EntityId`].
//! The world grid only stores ids, so the arena is the single owner of all
//! entities, the player included.

use crate::types::{CollisionEffect, EntityKind, Position};

/// Stable handle into [`Entities`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A placed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Position,
}

impl Entity {
    pub fn new(kind: EntityKind, position: Position) -> Self {
        Self { kind, position }
    }

    #[inline]
    pub fn symbol(&self) -> char {
        self.kind.symbol()
    }

    #[inline]
    pub fn collision_effect(&self) -> CollisionEffect {
        self.kind.collision_effect()
    }
}

/// Append-only entity storage.
///
/// Entities are never removed while the world is alive; an overwritten
/// obstacle simply stops being referenced by the grid.
#[derive(Debug, Clone, Default)]
pub struct Entities {
    items: Vec<Entity>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, kind: EntityKind, position: Position) -> EntityId {
        let id = EntityId(self.items.len() as u32);
        self.items.push(Entity::new(kind, position));
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.items.get(id.index())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.items.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
