//! Input and output adapters around the query engine.
//!
//! This module loads documents from files, stdin or inline text into a
//! [`Value`](crate::document::node::Value), and renders query results back to
//! text.

pub mod loader;
pub mod writer;

pub use loader::{load_object, InputFormat};
pub use writer::{render, OutputFormat};
