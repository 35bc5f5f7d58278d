//! Capability traits consumed by the OCR3 transmission pipeline.

mod writer;

pub use writer::{ContractWriter, TxMeta, WriterError};
