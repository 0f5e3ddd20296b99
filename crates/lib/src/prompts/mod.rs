//! # Prompt Template Modules
//!
//! This module organizes all prompt templates used by the pipeline.
//! `tasks` holds the default templates, `core` the helpers that render them.

pub mod core;
pub mod tasks;
