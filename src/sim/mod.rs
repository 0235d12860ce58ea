//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed entity roster (one ball, two paddles)
//! - Stable iteration order (insertion order)
//! - Seeded RNG only
//! - No rendering or platform dependencies beyond the input trait

pub mod collision;
pub mod entity;
pub mod manager;
pub mod rect;
pub mod score;
pub mod update;

pub use collision::{CollisionResult, exit_side, rect_rect_collision, reflect_velocity, wall_collision};
pub use entity::{Entity, EntityConstructor, EntityKind, Side};
pub use manager::{EntityId, EntityManager};
pub use rect::Rect;
pub use score::{GameEvent, Score};
pub use update::UpdateVisitor;
