//! Dynamic document model.
//!
//! This module defines [`Value`](node::Value), the tagged union every input is
//! converted into before it is queried, together with the adapters that
//! produce it: text decoding in [`parser`] and Rust record conversion in
//! [`record`].

pub mod node;
pub mod parser;
pub mod record;

pub use node::Value;
