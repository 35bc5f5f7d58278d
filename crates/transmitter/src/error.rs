//! Transmission error taxonomy.
//!
//! Every error here is terminal for a single transmission attempt; retry and
//! backoff policy belong to the consensus engine driving the transmitter.

use ocr3_traits::WriterError;
use ocr3_types::InfoDecodeError;
use thiserror::Error;

/// Errors produced while turning a report into a submitted transaction.
#[derive(Debug, Error)]
pub enum TransmitError {
    #[error("too many signatures: {count}, maximum is 32")]
    TooManySignatures { count: usize },
    #[error("failed to split signature at index {index}: expected 65 bytes, got {len}")]
    SplitSignature { index: usize, len: usize },
    #[error("failed to decode report info")]
    InfoDecode(#[from] InfoDecodeError),
    #[error("failed to encode call args")]
    Args(#[from] serde_json::Error),
    #[error("failed to submit {method} transaction through contract writer")]
    Submission {
        method: String,
        #[source]
        source: WriterError,
    },
}
