// common helpers
pub mod methods;
pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod driver;

// iterative methods
pub mod secant;
pub mod bisection;
pub mod newton;
pub mod fixed_point;

pub use config::SolverCfg;
pub use methods::Method;
pub use report::{IterationRecord, SolveReport, TerminationReason, ToleranceSatisfied};
