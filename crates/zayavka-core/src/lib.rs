//! Core library for mortgage insurance request parsing.
//!
//! This crate provides:
//! - Lexical normalization and tokenization of Russian request text
//! - Rule-based field extraction (lender, loan amount, rate, birth date,
//!   gender, property type, material, construction year, insurance lines)
//! - A fuzzy lender fallback for typos and informal names
//! - An append-only training store consulted to learn lender names from
//!   past requests

pub mod error;
pub mod models;
pub mod normalize;
pub mod request;
pub mod store;

pub use error::{ExtractionError, Result, StoreError, ZayavkaError};
pub use models::{
    ExtractedRecord, ExtractionConfig, Gender, InsuranceLine, Material, PropertyType,
    TrainingExample, ZayavkaConfig,
};
pub use normalize::{normalize, tokenize};
pub use request::{HeuristicRequestParser, RequestParser};
pub use store::{JsonlStore, MemoryStore, TrainingStore};
