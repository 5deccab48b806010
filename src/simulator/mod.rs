pub mod output;
pub mod runner;

pub use output::{print_summary, write_csv};
pub use runner::{run_simulation, RoundRecord, SimulationConfig, SimulationResults};
