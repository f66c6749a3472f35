pub mod csr;
pub mod cycle_base;
pub mod metrics;
#[cfg(feature = "petgraph")]
pub mod petgraph_adapter;
pub mod solver;
pub mod traits;

pub use csr::{GraphCsr, Orientation};
pub use cycle_base::PatonCycleBase;
pub use solver::PatonSolver;
pub use traits::{CycleBaseFinder, Graph};
