//! Consensus report payloads and their plugin-specific info blobs.
//!
//! The info blob rides next to the opaque report bytes and tells the
//! transmitter what the report contains without re-decoding the report
//! itself. Commit and execute plugins use different structures; both are
//! JSON-encoded.

use alloy_primitives::{Bytes, B256, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::{ChainSelector, SeqNum};

/// A consensus-finalized report together with its plugin-specific info blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportWithInfo {
    /// Opaque report bytes agreed upon by the oracle network.
    pub report: Bytes,
    /// Plugin-specific metadata; empty when the plugin attached none.
    pub info: Bytes,
}

/// A signature over a report, attributed to a signer by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributedSignature {
    /// Index of the signing oracle in the current configuration.
    pub signer: u8,
    /// 65-byte r || s || v signature blob.
    pub signature: Bytes,
}

/// Failure to decode a report info blob.
#[derive(Debug, Error)]
#[error("failed to decode {plugin} report info")]
pub struct InfoDecodeError {
    pub plugin: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Info blob attached to commit reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommitReportInfo {
    /// Fault tolerance of the remote chain's configuration.
    #[serde(default)]
    pub remote_f: u8,
    /// Merkle roots blessed by this report, one per source chain.
    #[serde(default)]
    pub merkle_roots: Vec<MerkleRootChain>,
    /// Token price updates carried by this report.
    #[serde(default)]
    pub token_price_updates: Vec<TokenPriceUpdate>,
}

impl CommitReportInfo {
    /// Decodes a commit info blob.
    pub fn decode(data: &[u8]) -> Result<Self, InfoDecodeError> {
        serde_json::from_slice(data).map_err(|source| InfoDecodeError { plugin: "commit", source })
    }

    /// Encodes this info into the wire blob.
    pub fn encode(&self) -> Result<Bytes, serde_json::Error> {
        serde_json::to_vec(self).map(Bytes::from)
    }
}

/// A blessed merkle root for a range of messages from one source chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MerkleRootChain {
    pub chain_selector: ChainSelector,
    pub on_ramp_address: Bytes,
    /// Inclusive range of sequence numbers covered by the root.
    pub seq_nums_range: (SeqNum, SeqNum),
    pub merkle_root: B256,
}

/// One token price observation carried by a commit report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenPriceUpdate {
    pub token_id: String,
    pub price: U256,
}

/// Info blob attached to execute reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteReportInfo {
    #[serde(default)]
    pub abstract_reports: Vec<ExecuteSingleChainReport>,
}

impl ExecuteReportInfo {
    /// Decodes an execute info blob.
    pub fn decode(data: &[u8]) -> Result<Self, InfoDecodeError> {
        serde_json::from_slice(data).map_err(|source| InfoDecodeError { plugin: "execute", source })
    }

    /// Encodes this info into the wire blob.
    pub fn encode(&self) -> Result<Bytes, serde_json::Error> {
        serde_json::to_vec(self).map(Bytes::from)
    }
}

/// Execution metadata for the messages of one source chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteSingleChainReport {
    pub source_chain_selector: ChainSelector,
    pub message_ids: Vec<B256>,
}
