//! Core library for catalog categories.
//!
//! The crate exposes the category entity with its validation rules, the input
//! forms and read model built around it, and configuration/logging setup for
//! applications embedding it.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod settings;
