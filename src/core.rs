pub mod bill;
pub mod constants;
pub mod environment;
pub mod error;
pub mod estimation;
pub mod estimator;
pub mod package;
