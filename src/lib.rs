//! HS Triage - Adaptive disambiguation engine for tariff classification.
//!
//! This crate narrows a set of HS-code candidates by selecting one
//! well-chosen disambiguating question at a time and translating raw
//! answers into re-scoring hints for the surrounding classification
//! pipeline.

pub mod domain;
