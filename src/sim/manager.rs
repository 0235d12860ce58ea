//! Entity storage with a restartable cursor
//!
//! The manager is the single owner of the entity collection. Visitors walk it
//! with `reset` / `get_next` / `get_current` rather than holding an iterator,
//! so a traversal never borrows the collection across entity updates.

use super::entity::Entity;

/// Stable handle to an entity (entities are never removed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(usize);

impl EntityId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    BeforeFirst,
    At(usize),
    Exhausted,
}

/// Owns the live entities in insertion order
#[derive(Debug, Clone)]
pub struct EntityManager {
    entities: Vec<Entity>,
    cursor: Cursor,
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityManager {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            cursor: Cursor::BeforeFirst,
        }
    }

    /// Append an entity; iteration order is insertion order
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> &Entity {
        &self.entities[id.0]
    }

    pub fn get_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id.0]
    }

    /// Borrowing iterator that leaves the cursor untouched
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Rewind the cursor to before the first entity
    pub fn reset(&mut self) {
        self.cursor = Cursor::BeforeFirst;
    }

    /// Advance the cursor and return the entity at the new position.
    ///
    /// Once the end is reached this keeps returning `None` until `reset`.
    pub fn get_next(&mut self) -> Option<&Entity> {
        let next = match self.cursor {
            Cursor::BeforeFirst => 0,
            Cursor::At(index) => index + 1,
            Cursor::Exhausted => return None,
        };

        if next < self.entities.len() {
            self.cursor = Cursor::At(next);
            Some(&self.entities[next])
        } else {
            self.cursor = Cursor::Exhausted;
            None
        }
    }

    /// Handle of the entity under the cursor.
    ///
    /// # Panics
    /// If the last `get_next` did not return an entity.
    pub fn current_id(&self) -> EntityId {
        match self.cursor {
            Cursor::At(index) => EntityId(index),
            Cursor::BeforeFirst => panic!("entity cursor read before get_next"),
            Cursor::Exhausted => panic!("entity cursor read after exhaustion"),
        }
    }

    /// Entity under the cursor. Same precondition as `current_id`.
    pub fn get_current(&self) -> &Entity {
        self.get(self.current_id())
    }

    pub fn get_current_mut(&mut self) -> &mut Entity {
        let id = self.current_id();
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Side;
    use glam::Vec2;

    fn roster() -> EntityManager {
        let mut manager = EntityManager::new();
        manager.spawn(Entity::ball(Vec2::ZERO, Vec2::ONE, 10.0));
        manager.spawn(Entity::paddle(Side::Left, Vec2::ZERO, 5.0, 20.0));
        manager.spawn(Entity::paddle(Side::Right, Vec2::ZERO, 5.0, 20.0));
        manager
    }

    #[test]
    fn test_cursor_walks_in_insertion_order() {
        let mut manager = roster();
        manager.reset();

        let mut kinds = Vec::new();
        while let Some(entity) = manager.get_next() {
            kinds.push(entity.kind);
        }
        assert_eq!(kinds.len(), 3);
        assert!(manager.get_next().is_none());
        assert!(manager.get_next().is_none());
    }

    #[test]
    fn test_reset_restarts_traversal() {
        let mut manager = roster();
        while manager.get_next().is_some() {}
        manager.reset();
        assert!(manager.get_next().is_some());
        assert_eq!(manager.current_id().index(), 0);
    }

    #[test]
    fn test_get_current_follows_cursor() {
        let mut manager = roster();
        manager.get_next();
        manager.get_next();
        assert_eq!(manager.current_id().index(), 1);

        manager.get_current_mut().vel = Vec2::new(0.0, 3.0);
        assert_eq!(manager.get(manager.current_id()).vel.y, 3.0);
    }

    #[test]
    fn test_empty_manager_is_exhausted_immediately() {
        let mut manager = EntityManager::new();
        assert!(manager.is_empty());
        assert!(manager.get_next().is_none());
    }

    #[test]
    #[should_panic(expected = "before get_next")]
    fn test_get_current_before_get_next_panics() {
        let manager = roster();
        manager.get_current();
    }

    #[test]
    #[should_panic(expected = "after exhaustion")]
    fn test_get_current_after_exhaustion_panics() {
        let mut manager = roster();
        while manager.get_next().is_some() {}
        manager.get_current();
    }
}
