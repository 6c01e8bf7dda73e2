//! Deterministic internship ranking engine.
//!
//! `placement-core` normalizes a posting catalog, fits TF-IDF vector spaces
//! over descriptions and skills, filters postings by education tier, scores
//! them against a candidate with five weighted signals, and returns an
//! explained top-K list. All operations are deterministic: identical inputs
//! always produce identical outputs.

pub mod cache;
pub mod config;
pub mod eligibility;
pub mod feedback;
pub mod posting;
pub mod refine;
pub mod selection;
pub mod types;
pub mod vectorize;
