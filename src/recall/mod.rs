//! Vector recall
//!
//! Nearest-vector lookup by cosine similarity over a flat store.

mod store;

pub use store::{VectorStore, dot_product};
