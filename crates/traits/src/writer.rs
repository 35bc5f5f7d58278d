//! The contract writing capability the transmitter submits through.

use alloy_primitives::U256;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for contract writer operations.
#[derive(Debug, Error)]
#[error("contract writer: {0}")]
pub struct WriterError(pub String);

/// Transaction metadata forwarded to the submission sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxMeta {
    pub workflow_execution_id: Option<String>,
    pub gas_limit: Option<U256>,
}

/// A sink that submits a named method call on a named contract.
///
/// The caller generates `transaction_id` and the writer is expected to
/// deduplicate on it; the writer also owns nonce management and any
/// serialization of concurrent submissions from the same sender account.
/// Cancellation and timeout semantics are the implementation's.
#[async_trait]
pub trait ContractWriter: Send + Sync + 'static {
    #[allow(clippy::too_many_arguments)]
    async fn submit_transaction(
        &self,
        contract: &str,
        method: &str,
        args: &serde_json::Value,
        transaction_id: &str,
        to_address: &str,
        meta: &TxMeta,
        value: U256,
    ) -> Result<(), WriterError>;
}
