//! Adapters between the wire protocol and the bridge's stores.

pub mod client;
pub mod convert;

pub use client::BridgeClient;
