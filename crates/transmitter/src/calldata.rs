//! Report context layout and plugin-specific method-call descriptors.

use alloy_primitives::{Bytes, B256};
use ocr3_types::{CommitReportInfo, ExecuteReportInfo, ReportWithInfo};
use serde::Serialize;

use crate::{error::TransmitError, signatures::SignatureArrays};

/// Contract name of the off-ramp in the submission sink's registry.
pub const CONTRACT_OFFRAMP: &str = "OffRamp";
/// Default commit method.
pub const METHOD_COMMIT: &str = "commit";
/// Commit method for reports carrying only price updates.
pub const METHOD_COMMIT_PRICE_ONLY: &str = "commitPriceOnly";
/// Execute method.
pub const METHOD_EXECUTE: &str = "execute";

/// Builds the raw OCR3 report context: word 0 is the config digest, word 1
/// is 24 bytes of zero padding followed by the big-endian sequence number.
pub fn raw_report_context(config_digest: B256, seq_nr: u64) -> [B256; 2] {
    let mut seq_word = [0u8; 32];
    seq_word[24..].copy_from_slice(&seq_nr.to_be_bytes());
    [config_digest, B256::from(seq_word)]
}

/// A method-call descriptor: the (contract, method, args) triple handed to
/// the submission sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub contract: String,
    pub method: String,
    pub args: serde_json::Value,
}

/// Commit call arguments.
///
/// The serialized field names are a wire contract with the downstream
/// encoder; changing a name or type silently misbinds on-chain arguments.
#[derive(Debug, Clone, Serialize)]
pub struct CommitCallArgs {
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
    #[serde(rename = "Info")]
    pub info: CommitReportInfo,
}

/// Execute call arguments. Same wire-contract caveat as [`CommitCallArgs`].
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteCallArgs {
    #[serde(rename = "ReportContext")]
    pub report_context: [B256; 2],
    #[serde(rename = "Report")]
    pub report: Bytes,
    #[serde(rename = "Info")]
    pub info: ExecuteReportInfo,
}

/// Chooses the target method and builds call arguments per report format.
///
/// The set of report formats is closed and known at compile time, so this
/// is a plain enum rather than a function-valued configuration field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalldataBuilder {
    Commit { default_method: String, price_only_method: Option<String> },
    Execute { method: String },
}

impl CalldataBuilder {
    /// Builds the method-call descriptor for one report.
    ///
    /// Commit reports use the default method unless a price-only method is
    /// configured and the report carries token price updates but no merkle
    /// roots; a dedicated, cheaper on-chain method handles those. Execute
    /// reports always use the single configured method.
    pub fn to_calldata(
        &self,
        report_context: [B256; 2],
        report: &ReportWithInfo,
        signatures: &SignatureArrays,
    ) -> Result<MethodCall, TransmitError> {
        match self {
            Self::Commit { default_method, price_only_method } => {
                let info = if report.info.is_empty() {
                    CommitReportInfo::default()
                } else {
                    CommitReportInfo::decode(&report.info)?
                };

                let method = match price_only_method {
                    Some(price_only)
                        if info.merkle_roots.is_empty()
                            && !info.token_price_updates.is_empty() =>
                    {
                        price_only.clone()
                    }
                    _ => default_method.clone(),
                };

                let args = CommitCallArgs {
                    report_context,
                    report: report.report.clone(),
                    rs: signatures.rs.clone(),
                    ss: signatures.ss.clone(),
                    raw_vs: signatures.raw_vs,
                    info,
                };
                Ok(MethodCall {
                    contract: CONTRACT_OFFRAMP.to_owned(),
                    method,
                    args: serde_json::to_value(args)?,
                })
            }
            Self::Execute { method } => {
                let info = if report.info.is_empty() {
                    ExecuteReportInfo::default()
                } else {
                    ExecuteReportInfo::decode(&report.info)?
                };

                let args = ExecuteCallArgs {
                    report_context,
                    report: report.report.clone(),
                    info,
                };
                Ok(MethodCall {
                    contract: CONTRACT_OFFRAMP.to_owned(),
                    method: method.clone(),
                    args: serde_json::to_value(args)?,
                })
            }
        }
    }
}
