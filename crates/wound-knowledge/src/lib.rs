//! Curated post-surgical wound care knowledge base and keyword match engine.
//!
//! The corpus and the category index are compiled-in data, constructed once
//! at startup and read-only thereafter. Matching is substring-based keyword
//! scoring; there is no natural-language understanding and no failure path.

pub mod categories;
pub mod corpus;
pub mod matcher;
pub mod model;
