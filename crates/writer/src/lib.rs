//! EVM contract writer: packs method-call descriptors into off-ramp
//! calldata and submits them through an alloy provider.

pub mod args;
pub mod bindings;
mod writer;

pub use writer::{encode_call, EvmContractWriter, CONTRACT_OFFRAMP};
