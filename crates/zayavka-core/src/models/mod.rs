//! Data models for request extraction.

pub mod config;
pub mod record;
pub mod training;

pub use config::{ExtractionConfig, StoreConfig, ZayavkaConfig};
pub use record::{ExtractedRecord, Gender, InsuranceLine, Material, PropertyType};
pub use training::TrainingExample;
