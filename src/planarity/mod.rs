//! Heuristic planarity verification.
//!
//! [`PlanarityChecker`] returns a boolean verdict with a justification. It is
//! **not** an exact decision procedure: it combines necessary conditions
//! with a DFS low-point interlacing test that approximates Hopcroft–Tarjan.
//!
//! # Decision Sequence
//!
//! 1. `|V| <= 4` → planar
//! 2. `|E| > 3|V| - 6` → non-planar (Euler bound)
//! 3. bipartite and `|E| > 2|V| - 4` → non-planar
//! 4. cubic, `|V| >= 10`, girth >= 5, `|E| >= 15` → non-planar (Petersen-like)
//! 5. DFS interlacing test over every component
//!
//! # References
//!
//! - Hopcroft & Tarjan (1974), "Efficient Planarity Testing"
//! - Kuratowski (1930), "Sur le problème des courbes gauches en topologie"

mod checker;
mod dfs;
pub mod structure;
mod types;

pub use checker::PlanarityChecker;
pub use dfs::Interlacing;
pub use types::{EulerCharacteristic, PlanarityReason, PlanarityVerdict};
