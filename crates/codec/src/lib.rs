//! Byte-exact codecs for the EVM-family profile of the cross-chain protocol:
//! the tagged extra-args micro-format, the message shape converter between
//! the neutral wire form and the EVM ramp form, and the bit-flag encoder
//! used by the report/config pipeline.

mod bitflags;
mod extra_args;
mod message;

pub use bitflags::bools_to_bits;
pub use extra_args::{
    decode_dest_gas_overhead, decode_extra_args, encode_method_inputs, ExtraArgsError,
    EVM_EXTRA_ARGS_V1_TAG, GENERIC_EXTRA_ARGS_V2_TAG,
};
pub use message::{
    bytes_to_address, from_evm_message, left_pad_bytes, to_evm_message, EvmRampMessage,
    EvmTokenTransfer, MessageConvertError,
};
