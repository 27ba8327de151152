//! Business logic services

pub mod batch_processor;
pub mod geo;
pub mod intake;
pub mod scheduler;
