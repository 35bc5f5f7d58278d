//! OCR3 report-to-calldata transmitter.
//!
//! Takes a consensus-finalized report plus a quorum of attributed
//! signatures, packs the signatures into the chain's verification layout,
//! selects the target contract method from the report content, and submits
//! the resulting method-call descriptor through a [`ocr3_traits::ContractWriter`]
//! exactly once per transmission attempt.

mod calldata;
mod error;
mod signatures;
mod transmitter;

pub use calldata::{
    raw_report_context, CalldataBuilder, CommitCallArgs, ExecuteCallArgs, MethodCall,
    CONTRACT_OFFRAMP, METHOD_COMMIT, METHOD_COMMIT_PRICE_ONLY, METHOD_EXECUTE,
};
pub use error::TransmitError;
pub use signatures::{split_signatures, SignatureArrays, MAX_SIGNERS};
pub use transmitter::Transmitter;
