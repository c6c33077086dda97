//! Greedy vertex coloring.
//!
//! [`WelshPowell`] produces a proper coloring whose color count is an upper
//! bound on the chromatic number (not necessarily the exact value).
//!
//! # Key Types
//!
//! - [`Coloring`]: vertex → color map with class, validation, and statistics queries
//! - [`ColoringStep`]: optional trace of the run, for step-by-step presentation
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a
//!   graph and its application to timetabling problems"

mod types;
mod welsh_powell;

pub use types::{Coloring, ColoringStats, ColoringStep, ColoringVerdict};
pub use welsh_powell::WelshPowell;
