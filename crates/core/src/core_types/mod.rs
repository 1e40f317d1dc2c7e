//! Core types and utilities

pub mod position;

pub use position::Position;
