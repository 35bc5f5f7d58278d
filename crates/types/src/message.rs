//! The neutral representation of a cross-chain message.

use alloy_primitives::{Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// Identifies a chain in the cross-chain protocol.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChainSelector(pub u64);

/// Monotonically increasing message sequence number within a lane.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SeqNum(pub u64);

/// Header fields shared by every ramp message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampMessageHeader {
    /// Unique identifier of the message, computed by the on-ramp.
    pub message_id: B256,
    pub source_chain_selector: ChainSelector,
    pub dest_chain_selector: ChainSelector,
    pub sequence_number: SeqNum,
    pub nonce: u64,
    /// Address of the on-ramp that emitted the message, in the source
    /// chain's variable-length form.
    pub on_ramp: Bytes,
}

/// A cross-chain message in its neutral wire form.
///
/// Addresses (`sender`, `receiver`, `fee_token`) are variable-length byte
/// blobs; `extra_args` is the tagged micro-format carrying execution hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub header: RampMessageHeader,
    pub sender: Bytes,
    pub receiver: Bytes,
    pub data: Bytes,
    pub extra_args: Bytes,
    pub fee_token: Bytes,
    pub fee_token_amount: U256,
    pub fee_value_juels: U256,
    pub token_amounts: Vec<RampTokenAmount>,
}

/// One token transfer carried by a cross-chain message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampTokenAmount {
    /// Source pool address, variable length. Left-padded to 32 bytes when
    /// converted to an EVM target.
    pub source_pool_address: Bytes,
    /// Destination token address in the destination chain's form.
    pub dest_token_address: Bytes,
    /// Opaque execution data; for EVM targets this is an ABI-encoded uint32
    /// destination gas overhead.
    pub dest_exec_data: Bytes,
    /// Opaque pool data, copied verbatim across conversions.
    pub extra_data: Bytes,
    pub amount: U256,
}
