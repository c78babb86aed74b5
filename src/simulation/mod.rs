//! Running the automaton against a text display

pub mod driver;
pub mod snapshot;

pub use driver::{Driver, RunSummary};
pub use snapshot::Snapshot;
