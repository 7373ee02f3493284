pub mod config;
pub mod constants;
pub mod error;
pub mod eviction;
pub mod fault;
pub mod io;
pub mod memory;
pub mod simulation;

// Re-export commonly used items for convenience
pub use config::{Geometry, ReportLayout};
pub use error::{Error, Result};
pub use fault::AccessOutcome;
pub use io::Trace;
pub use simulation::{Simulation, Stats};
