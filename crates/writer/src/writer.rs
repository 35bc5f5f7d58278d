//! The alloy-provider-backed contract writer.

use std::{fmt, sync::Arc};

use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::TransactionRequest;
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use ocr3_traits::{ContractWriter, TxMeta, WriterError};
use tracing::{debug, info};

use crate::{
    args::{CommitArgs, ExecuteArgs},
    bindings::{commitCall, executeCall},
};

/// Contract name this writer serves.
pub const CONTRACT_OFFRAMP: &str = "OffRamp";

/// Methods that encode as a commit call. The price-only variant shares the
/// commit entry point on EVM targets.
const COMMIT_METHODS: [&str; 2] = ["commit", "commitPriceOnly"];
const EXECUTE_METHOD: &str = "execute";

/// Submits off-ramp method calls as EVM transactions.
///
/// The provider is expected to carry the wallet, nonce, and gas fillers;
/// this writer only packs calldata and hands off the request. Receipt
/// confirmation is the caller's concern.
pub struct EvmContractWriter<P> {
    provider: Arc<P>,
    from: Address,
}

impl<P> EvmContractWriter<P> {
    pub const fn new(provider: Arc<P>, from: Address) -> Self {
        Self { provider, from }
    }
}

impl<P> fmt::Debug for EvmContractWriter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvmContractWriter").field("from", &self.from).finish_non_exhaustive()
    }
}

/// Packs a method-call descriptor into raw off-ramp calldata.
pub fn encode_call(method: &str, args: &serde_json::Value) -> Result<Bytes, WriterError> {
    if COMMIT_METHODS.contains(&method) {
        let args: CommitArgs = serde_json::from_value(args.clone())
            .map_err(|e| WriterError(format!("decode {method} args: {e}")))?;
        let call = commitCall {
            reportContext: args.report_context,
            report: args.report,
            rs: args.rs,
            ss: args.ss,
            rawVs: args.raw_vs,
        };
        Ok(Bytes::from(call.abi_encode()))
    } else if method == EXECUTE_METHOD {
        let args: ExecuteArgs = serde_json::from_value(args.clone())
            .map_err(|e| WriterError(format!("decode {method} args: {e}")))?;
        let call = executeCall { reportContext: args.report_context, report: args.report };
        Ok(Bytes::from(call.abi_encode()))
    } else {
        Err(WriterError(format!("unknown method: {method}")))
    }
}

#[async_trait]
impl<P: Provider + Send + Sync + 'static> ContractWriter for EvmContractWriter<P> {
    async fn submit_transaction(
        &self,
        contract: &str,
        method: &str,
        args: &serde_json::Value,
        transaction_id: &str,
        to_address: &str,
        meta: &TxMeta,
        value: U256,
    ) -> Result<(), WriterError> {
        if contract != CONTRACT_OFFRAMP {
            return Err(WriterError(format!("unknown contract: {contract}")));
        }
        let to: Address = to_address
            .parse()
            .map_err(|e| WriterError(format!("invalid to address {to_address}: {e}")))?;
        let calldata = encode_call(method, args)?;

        let mut tx = TransactionRequest::default()
            .with_from(self.from)
            .with_to(to)
            .with_input(calldata)
            .with_value(value);
        if let Some(gas_limit) = meta.gas_limit {
            tx = tx.with_gas_limit(gas_limit.try_into().unwrap_or(u64::MAX));
        }

        debug!(method, transaction_id, to = %to, "sending transaction");
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| WriterError(format!("send {method} transaction {transaction_id}: {e}")))?;
        info!(method, transaction_id, tx_hash = %pending.tx_hash(), "transaction submitted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::B256;
    use serde_json::json;

    use super::*;

    fn hex32(byte: u8) -> String {
        format!("0x{}", "00".repeat(31)) + &format!("{byte:02x}")
    }

    fn commit_args_json() -> serde_json::Value {
        json!({
            "ReportContext": [hex32(0x01), hex32(0x02)],
            "Report": "0xdeadbeef",
            "Rs": [hex32(0x0a)],
            "Ss": [hex32(0x0b)],
            "RawVs": hex32(0x1b),
            "Info": { "RemoteF": 0, "MerkleRoots": [], "TokenPriceUpdates": [] },
        })
    }

    #[test]
    fn commit_calldata_matches_direct_encoding() {
        let encoded = encode_call("commit", &commit_args_json()).unwrap();

        let expected = commitCall {
            reportContext: [
                B256::with_last_byte(0x01),
                B256::with_last_byte(0x02),
            ],
            report: Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]),
            rs: vec![B256::with_last_byte(0x0a)],
            ss: vec![B256::with_last_byte(0x0b)],
            rawVs: B256::with_last_byte(0x1b),
        }
        .abi_encode();

        assert_eq!(encoded.as_ref(), expected.as_slice());
        assert_eq!(&encoded[..4], commitCall::SELECTOR);
    }

    #[test]
    fn price_only_method_shares_the_commit_selector() {
        let encoded = encode_call("commitPriceOnly", &commit_args_json()).unwrap();
        assert_eq!(&encoded[..4], commitCall::SELECTOR);
    }

    #[test]
    fn execute_calldata_matches_direct_encoding() {
        let args = json!({
            "ReportContext": [hex32(0x03), hex32(0x04)],
            "Report": "0x0102",
            "Info": { "AbstractReports": [] },
        });
        let encoded = encode_call("execute", &args).unwrap();

        let expected = executeCall {
            reportContext: [B256::with_last_byte(0x03), B256::with_last_byte(0x04)],
            report: Bytes::from(vec![0x01, 0x02]),
        }
        .abi_encode();

        assert_eq!(encoded.as_ref(), expected.as_slice());
        assert_eq!(&encoded[..4], executeCall::SELECTOR);
    }

    #[test]
    fn unknown_methods_are_rejected() {
        let err = encode_call("mint", &commit_args_json()).unwrap_err();
        assert!(err.to_string().contains("unknown method"));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = encode_call("commit", &json!({ "Report": "0x00" })).unwrap_err();
        assert!(err.to_string().contains("decode commit args"));
    }
}
