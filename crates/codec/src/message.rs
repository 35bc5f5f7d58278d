//! Message shape converter between the neutral wire message and the EVM
//! ramp representation.
//!
//! The forward direction decodes the embedded gas fields and normalizes
//! addresses to fixed widths; the reverse direction only repackages raw
//! fields and has no failure path, since on-chain data is already
//! well-formed by construction.

use alloy_primitives::{Address, Bytes, U256};
use ocr3_types::{Message, RampMessageHeader, RampTokenAmount};
use thiserror::Error;

use crate::extra_args::{decode_dest_gas_overhead, decode_extra_args, ExtraArgsError};

/// A cross-chain message in EVM ramp form: fixed-width addresses, decoded
/// gas fields, raw blobs retained for the reverse conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvmRampMessage {
    pub header: RampMessageHeader,
    /// Sender address, left-padded to 32 bytes.
    pub sender: Bytes,
    pub receiver: Address,
    pub data: Bytes,
    /// Gas limit decoded from `extra_args`.
    pub gas_limit: U256,
    /// The original extra-args blob, verbatim.
    pub extra_args: Bytes,
    pub fee_token: Address,
    pub fee_token_amount: U256,
    pub fee_value_juels: U256,
    pub token_amounts: Vec<EvmTokenTransfer>,
}

/// One token transfer in EVM ramp form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvmTokenTransfer {
    /// Source pool address, left-padded to 32 bytes.
    pub source_pool_address: Bytes,
    pub dest_token_address: Address,
    /// Destination gas overhead decoded from `dest_exec_data`.
    pub dest_gas_amount: u32,
    /// The original execution data blob, verbatim.
    pub dest_exec_data: Bytes,
    pub extra_data: Bytes,
    pub amount: U256,
}

/// Errors produced by the forward conversion.
#[derive(Debug, Error)]
pub enum MessageConvertError {
    #[error("failed to decode dest gas amount for token {index}")]
    DestGasDecode {
        index: usize,
        #[source]
        source: ExtraArgsError,
    },
    #[error("failed to decode extra args")]
    ExtraArgsDecode {
        #[source]
        source: ExtraArgsError,
    },
}

/// Converts a neutral wire message to the EVM ramp representation.
///
/// Data and extra-data blobs are copied verbatim; only addresses are
/// normalized and the embedded gas fields decoded.
pub fn to_evm_message(msg: &Message) -> Result<EvmRampMessage, MessageConvertError> {
    let mut token_amounts = Vec::with_capacity(msg.token_amounts.len());
    for (index, rta) in msg.token_amounts.iter().enumerate() {
        let dest_gas_amount = decode_dest_gas_overhead(&rta.dest_exec_data)
            .map_err(|source| MessageConvertError::DestGasDecode { index, source })?;

        token_amounts.push(EvmTokenTransfer {
            source_pool_address: left_pad_bytes(&rta.source_pool_address, 32),
            dest_token_address: bytes_to_address(&rta.dest_token_address),
            dest_gas_amount,
            dest_exec_data: rta.dest_exec_data.clone(),
            extra_data: rta.extra_data.clone(),
            amount: rta.amount,
        });
    }

    let gas_limit = decode_extra_args(&msg.extra_args)
        .map_err(|source| MessageConvertError::ExtraArgsDecode { source })?;

    Ok(EvmRampMessage {
        header: msg.header.clone(),
        sender: left_pad_bytes(&msg.sender, 32),
        receiver: bytes_to_address(&msg.receiver),
        data: msg.data.clone(),
        gas_limit,
        extra_args: msg.extra_args.clone(),
        fee_token: bytes_to_address(&msg.fee_token),
        fee_token_amount: msg.fee_token_amount,
        fee_value_juels: msg.fee_value_juels,
        token_amounts,
    })
}

/// Converts an EVM ramp message back to the neutral wire form, stamping the
/// given on-ramp address into the header.
pub fn from_evm_message(onramp_address: Address, msg: &EvmRampMessage) -> Message {
    let token_amounts = msg
        .token_amounts
        .iter()
        .map(|ta| RampTokenAmount {
            source_pool_address: ta.source_pool_address.clone(),
            dest_token_address: Bytes::copy_from_slice(ta.dest_token_address.as_slice()),
            dest_exec_data: ta.dest_exec_data.clone(),
            extra_data: ta.extra_data.clone(),
            amount: ta.amount,
        })
        .collect();

    Message {
        header: RampMessageHeader {
            on_ramp: Bytes::copy_from_slice(onramp_address.as_slice()),
            ..msg.header.clone()
        },
        sender: msg.sender.clone(),
        receiver: Bytes::copy_from_slice(msg.receiver.as_slice()),
        data: msg.data.clone(),
        extra_args: msg.extra_args.clone(),
        fee_token: Bytes::copy_from_slice(msg.fee_token.as_slice()),
        fee_token_amount: msg.fee_token_amount,
        fee_value_juels: msg.fee_value_juels,
        token_amounts,
    }
}

/// Left-pads `value` with zeros to `size` bytes. Values already at least
/// `size` bytes long are returned unchanged.
pub fn left_pad_bytes(value: &[u8], size: usize) -> Bytes {
    if value.len() >= size {
        return Bytes::copy_from_slice(value);
    }
    let mut padded = vec![0u8; size];
    padded[size - value.len()..].copy_from_slice(value);
    Bytes::from(padded)
}

/// Converts arbitrary bytes to a fixed-width address, keeping the rightmost
/// 20 bytes and zero-filling on the left when shorter.
pub fn bytes_to_address(value: &[u8]) -> Address {
    if value.len() >= 20 {
        return Address::from_slice(&value[value.len() - 20..]);
    }
    let mut padded = [0u8; 20];
    padded[20 - value.len()..].copy_from_slice(value);
    Address::from(padded)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, B256};
    use alloy_sol_types::SolValue;
    use ocr3_types::{ChainSelector, SeqNum};

    use super::*;
    use crate::extra_args::EVM_EXTRA_ARGS_V1_TAG;

    fn valid_extra_args(gas_limit: u64) -> Bytes {
        let mut out = EVM_EXTRA_ARGS_V1_TAG.to_vec();
        out.extend_from_slice(&(U256::from(gas_limit),).abi_encode_params());
        Bytes::from(out)
    }

    fn sample_message() -> Message {
        Message {
            header: RampMessageHeader {
                message_id: B256::repeat_byte(0x11),
                source_chain_selector: ChainSelector(1),
                dest_chain_selector: ChainSelector(2),
                sequence_number: SeqNum(99),
                nonce: 7,
                on_ramp: Bytes::from(vec![0xbb; 20]),
            },
            sender: left_pad_bytes(&[0xcc; 20], 32),
            receiver: Bytes::copy_from_slice(
                address!("00000000000000000000000000000000000000aa").as_slice(),
            ),
            data: Bytes::from(vec![0x01, 0x02, 0x03]),
            extra_args: valid_extra_args(500_000),
            fee_token: Bytes::copy_from_slice(
                address!("00000000000000000000000000000000000000fe").as_slice(),
            ),
            fee_token_amount: U256::from(1_000u64),
            fee_value_juels: U256::from(2_000u64),
            token_amounts: vec![RampTokenAmount {
                source_pool_address: left_pad_bytes(&[0xdd; 20], 32),
                dest_token_address: Bytes::copy_from_slice(
                    address!("00000000000000000000000000000000000000dd").as_slice(),
                ),
                dest_exec_data: Bytes::from(U256::from(30_000u32).abi_encode()),
                extra_data: Bytes::from(vec![0xee, 0xff]),
                amount: U256::from(123_456u64),
            }],
        }
    }

    #[test]
    fn forward_decodes_gas_fields() {
        let msg = sample_message();
        let evm = to_evm_message(&msg).unwrap();

        assert_eq!(evm.gas_limit, U256::from(500_000u64));
        assert_eq!(evm.token_amounts.len(), 1);
        assert_eq!(evm.token_amounts[0].dest_gas_amount, 30_000);
        assert_eq!(evm.sender.len(), 32);
        assert_eq!(evm.token_amounts[0].source_pool_address.len(), 32);
        assert_eq!(evm.data, msg.data);
    }

    #[test]
    fn round_trip_preserves_message_fields() {
        let msg = sample_message();
        let evm = to_evm_message(&msg).unwrap();
        let onramp = bytes_to_address(&msg.header.on_ramp);
        let back = from_evm_message(onramp, &evm);

        assert_eq!(back, msg);
    }

    #[test]
    fn bad_dest_exec_data_fails_with_token_index() {
        let mut msg = sample_message();
        msg.token_amounts[0].dest_exec_data = Bytes::from(vec![0x01]);

        let err = to_evm_message(&msg).unwrap_err();
        assert!(matches!(err, MessageConvertError::DestGasDecode { index: 0, .. }));
    }

    #[test]
    fn bad_extra_args_fail() {
        let mut msg = sample_message();
        msg.extra_args = Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]);

        let err = to_evm_message(&msg).unwrap_err();
        assert!(matches!(err, MessageConvertError::ExtraArgsDecode { .. }));
    }

    #[test]
    fn left_pad_keeps_long_values() {
        let long = vec![0x01; 40];
        assert_eq!(left_pad_bytes(&long, 32).as_ref(), long.as_slice());

        let short = [0x02; 4];
        let padded = left_pad_bytes(&short, 32);
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[28..], &short);
        assert!(padded[..28].iter().all(|b| *b == 0));
    }

    #[test]
    fn bytes_to_address_keeps_rightmost_bytes() {
        let long = left_pad_bytes(&[0x0a; 20], 32);
        assert_eq!(bytes_to_address(&long), Address::from([0x0a; 20]));

        let short = [0x0b; 2];
        let addr = bytes_to_address(&short);
        assert_eq!(&addr.as_slice()[18..], &short);
        assert!(addr.as_slice()[..18].iter().all(|b| *b == 0));
    }
}
