//! Deserialization side of the method-call argument schema.
//!
//! The field names here are the wire contract with the transmitter's
//! argument encoder; a mismatch on either side misbinds on-chain arguments.
//! The `Info` field is off-chain metadata the on-chain entry points do not
//! take, so it is deliberately not bound.

use alloy_primitives::{Bytes, B256};
use serde::Deserialize;

/// Arguments of a commit method call.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitArgs {
    #[serde(rename = "ReportContext")]
    pub report_context: [B256; 2],
    #[serde(rename = "Report")]
    pub report: Bytes,
    #[serde(rename = "Rs")]
    pub rs: Vec<B256>,
    #[serde(rename = "Ss")]
    pub ss: Vec<B256>,
    #[serde(rename = "RawVs")]
    pub raw_vs: B256,
}

/// Arguments of an execute method call.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteArgs {
    #[serde(rename = "ReportContext")]
    pub report_context: [B256; 2],
    #[serde(rename = "Report")]
    pub report: Bytes,
}
