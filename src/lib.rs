//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, integration
//! tests and benches can reach everything as `blockfall::{core,input,store,term,types}`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_store as store;
pub use blockfall_term as term;
pub use blockfall_types as types;
