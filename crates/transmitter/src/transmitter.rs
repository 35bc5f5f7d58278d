//! The transmitter: signature assembly, method selection, and submission.

use std::{fmt, sync::Arc};

use alloy_primitives::{B256, U256};
use ocr3_traits::{ContractWriter, TxMeta};
use ocr3_types::{AttributedSignature, ReportWithInfo};
use tracing::debug;
use uuid::Uuid;

use crate::{
    calldata::{raw_report_context, CalldataBuilder, METHOD_EXECUTE},
    error::TransmitError,
    signatures::split_signatures,
};

/// OCR3 contract transmitter for a single plugin instance.
///
/// Constructed once at relayer start-up and immutable thereafter; it holds
/// no mutable state, so one instance is safe to share across concurrent
/// transmissions as long as the writer is itself concurrency-safe.
pub struct Transmitter<W> {
    writer: Arc<W>,
    from_account: String,
    offramp_address: String,
    calldata: CalldataBuilder,
}

impl<W> fmt::Debug for Transmitter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transmitter")
            .field("from_account", &self.from_account)
            .field("offramp_address", &self.offramp_address)
            .field("calldata", &self.calldata)
            .finish_non_exhaustive()
    }
}

impl<W: ContractWriter> Transmitter<W> {
    /// Creates a transmitter for commit reports.
    ///
    /// A configured `price_only_method` routes reports carrying only token
    /// price updates to a dedicated on-chain method.
    pub fn commit(
        writer: Arc<W>,
        from_account: impl Into<String>,
        offramp_address: impl Into<String>,
        default_method: impl Into<String>,
        price_only_method: Option<String>,
    ) -> Self {
        Self {
            writer,
            from_account: from_account.into(),
            offramp_address: offramp_address.into(),
            calldata: CalldataBuilder::Commit {
                default_method: default_method.into(),
                price_only_method,
            },
        }
    }

    /// Creates a transmitter for execute reports.
    pub fn execute(
        writer: Arc<W>,
        from_account: impl Into<String>,
        offramp_address: impl Into<String>,
    ) -> Self {
        Self {
            writer,
            from_account: from_account.into(),
            offramp_address: offramp_address.into(),
            calldata: CalldataBuilder::Execute { method: METHOD_EXECUTE.to_owned() },
        }
    }

    /// The transmitting account reported to the consensus engine.
    pub fn from_account(&self) -> &str {
        &self.from_account
    }

    /// Submits one finalized report through the contract writer.
    ///
    /// All failures are terminal for this attempt; the caller owns retry
    /// and backoff across rounds. Success returns nothing.
    pub async fn transmit(
        &self,
        config_digest: B256,
        seq_nr: u64,
        report: &ReportWithInfo,
        signatures: &[AttributedSignature],
    ) -> Result<(), TransmitError> {
        let sigs = split_signatures(signatures)?;
        let report_context = raw_report_context(config_digest, seq_nr);
        let call = self.calldata.to_calldata(report_context, report, &sigs)?;

        // The writer expects the caller to generate the transaction id
        // rather than returning one.
        let transaction_id =
            format!("{}-{}-{}", call.contract, self.offramp_address, Uuid::new_v4());

        debug!(
            contract = %call.contract,
            method = %call.method,
            seq_nr,
            transaction_id = %transaction_id,
            "submitting report"
        );

        let meta = TxMeta::default();
        self.writer
            .submit_transaction(
                &call.contract,
                &call.method,
                &call.args,
                &transaction_id,
                &self.offramp_address,
                &meta,
                U256::ZERO,
            )
            .await
            .map_err(|source| TransmitError::Submission { method: call.method, source })
    }
}
