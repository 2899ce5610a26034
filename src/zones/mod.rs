//! Card containers.
//!
//! ## Key Types
//!
//! - `Pile`: ordered stack of cards, top = last
//! - `ColumnId` / `PileId`: addresses moves bind to instead of references
//! - `Tableau`: the stock, the columns and the foundation of one game
//! - `InvariantViolation`: conservation or duplication fault

pub mod pile;
pub mod tableau;

pub use pile::{ColumnId, Pile, PileId};
pub use tableau::{InvariantViolation, Tableau, MAX_COLUMNS};
