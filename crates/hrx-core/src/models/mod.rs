//! Data models for recognized input and extracted forms.

pub mod config;
pub mod form;
