pub mod deadline;
pub mod error;
