//! Domain models for traffic report data.

pub mod observation;

pub use observation::Observation;
