//! Cross-crate event flows.

pub mod layer1_flow;
