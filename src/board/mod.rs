//! Board layouts, per-cell candidate generation and static pre-filtering

/// Leg factorisation, offset scanning and orientation expansion
pub mod candidates;
/// Cells owning their candidate lists
pub mod cell;
/// Board size and the ordered cell list
pub mod layout;
/// Removal of candidates crossing other cells' squares
pub mod prefilter;

pub use cell::{Board, Cell};
pub use layout::{BoardLayout, CellSpec};
