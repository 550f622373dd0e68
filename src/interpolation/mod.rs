pub mod errors;
pub mod report;

pub mod lagrange;

pub use errors::InterpolationError;
pub use report::InterpolationReport;
