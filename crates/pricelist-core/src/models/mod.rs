//! Data models for extracted price lists and pipeline configuration.

pub mod config;
pub mod item;
