pub mod user_service;

#[cfg(test)]
pub mod in_memory;

pub use user_service::*;
