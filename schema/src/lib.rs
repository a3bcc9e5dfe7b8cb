// Crucible Schema - Shared type definitions
// This crate contains the core enums and data structs shared between the
// battle engine and any outer tooling (team editors, replay viewers),
// enabling the use of postcard for efficient serialization.

// Re-export the main types
pub use battler_types::*;
pub use field_types::*;
pub use move_data::*;
pub use move_effects::*;
pub use move_types::*;
pub use moves::*;
pub use pokemon_types::*;

pub mod battler_types;
pub mod field_types;
pub mod move_data;
pub mod move_effects;
pub mod move_types;
pub mod moves;
pub mod pokemon_types;
