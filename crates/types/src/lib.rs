//! Neutral wire types for the OCR3 report transmission pipeline.
//!
//! These types are chain-agnostic: addresses are variable-length byte blobs
//! and amounts are 256-bit words. Chain-specific representations live in the
//! codec crate.

mod message;
mod report;

pub use message::{ChainSelector, Message, RampMessageHeader, RampTokenAmount, SeqNum};
pub use report::{
    AttributedSignature, CommitReportInfo, ExecuteReportInfo, ExecuteSingleChainReport,
    InfoDecodeError, MerkleRootChain, ReportWithInfo, TokenPriceUpdate,
};
