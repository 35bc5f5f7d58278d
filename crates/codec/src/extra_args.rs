//! Extra-args codec for the tagged binary micro-format attached to a
//! cross-chain message.
//!
//! The format is a 4-byte tag followed by an ABI-encoded payload. Every
//! supported tag places the gas limit as the first decoded field.

use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::Function;
use alloy_primitives::{Bytes, FixedBytes, U256};
use alloy_sol_types::SolValue;
use thiserror::Error;

/// Extra-args V1 tag, `bytes4(keccak256("CCIP EVMExtraArgsV1"))`.
pub const EVM_EXTRA_ARGS_V1_TAG: [u8; 4] = [0x97, 0xa6, 0x57, 0xc9];
/// Extra-args V2 tag, `bytes4(keccak256("CCIP EVMExtraArgsV2"))`.
pub const GENERIC_EXTRA_ARGS_V2_TAG: [u8; 4] = [0x18, 0x1d, 0xcf, 0x10];

/// Errors produced by the extra-args codec.
#[derive(Debug, Error)]
pub enum ExtraArgsError {
    #[error("extra args too short: {0} bytes, should be at least 4 (the extraArgs tag)")]
    TooShort(usize),
    #[error("unknown extra args tag: {0}")]
    UnknownTag(FixedBytes<4>),
    #[error("decoded value does not fit {0}")]
    TypeMismatch(&'static str),
    #[error("abi decode {context}")]
    Abi {
        context: &'static str,
        #[source]
        source: alloy_sol_types::Error,
    },
    #[error("parse method signature: {0}")]
    MethodSignature(String),
    #[error("abi encode method inputs")]
    Encode(#[from] alloy_dyn_abi::Error),
}

/// Decodes extra args and extracts the gas limit that was specified.
///
/// The V1 payload is `(uint256 gasLimit)`; V2 is
/// `(uint256 gasLimit, bool allowOutOfOrderExecution)`. The gas limit is
/// always the first field and the out-of-order flag is not read here.
pub fn decode_extra_args(extra_args: &[u8]) -> Result<U256, ExtraArgsError> {
    if extra_args.len() < 4 {
        return Err(ExtraArgsError::TooShort(extra_args.len()));
    }

    let (tag, payload) = extra_args.split_at(4);
    if tag == EVM_EXTRA_ARGS_V1_TAG {
        let (gas_limit,) = <(U256,)>::abi_decode_params(payload)
            .map_err(|source| ExtraArgsError::Abi { context: "extra args v1", source })?;
        Ok(gas_limit)
    } else if tag == GENERIC_EXTRA_ARGS_V2_TAG {
        let (gas_limit, _allow_out_of_order) = <(U256, bool)>::abi_decode_params(payload)
            .map_err(|source| ExtraArgsError::Abi { context: "extra args v2", source })?;
        Ok(gas_limit)
    } else {
        Err(ExtraArgsError::UnknownTag(FixedBytes::from_slice(tag)))
    }
}

/// Decodes a destination gas overhead: a single ABI-encoded uint32 scalar.
pub fn decode_dest_gas_overhead(dest_exec_data: &[u8]) -> Result<u32, ExtraArgsError> {
    let value = U256::abi_decode(dest_exec_data)
        .map_err(|source| ExtraArgsError::Abi { context: "dest gas overhead", source })?;
    u32::try_from(value).map_err(|_| ExtraArgsError::TypeMismatch("uint32"))
}

/// ABI-encodes inputs for a synthetic method descriptor and strips the
/// 4-byte selector, returning only the argument payload.
///
/// `signature` is a human-readable method signature, e.g.
/// `"method(uint256 a, bytes b)"`.
pub fn encode_method_inputs(
    signature: &str,
    values: &[DynSolValue],
) -> Result<Bytes, ExtraArgsError> {
    let function =
        Function::parse(signature).map_err(|e| ExtraArgsError::MethodSignature(e.to_string()))?;
    let packed = function.abi_encode_input(values)?;
    Ok(Bytes::from(packed[4..].to_vec()))
}
