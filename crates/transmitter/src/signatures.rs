//! Signature assembler: splits attributed signatures into the parallel
//! (r, s, v) arrays expected by the on-chain verifier.

use alloy_primitives::B256;
use ocr3_types::AttributedSignature;

use crate::error::TransmitError;

/// Maximum number of signers, bounded by the width of the packed v word.
pub const MAX_SIGNERS: usize = 32;

/// Length of an r || s || v signature blob.
const SIGNATURE_LEN: usize = 65;

/// The three parallel signature arrays in the chain's verification layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureArrays {
    pub rs: Vec<B256>,
    pub ss: Vec<B256>,
    /// v bytes packed into a single word, one byte per input position.
    pub raw_vs: B256,
}

/// Splits signatures into (r, s, v) arrays, preserving input order.
///
/// The position in `raw_vs` is the iteration index over the input list, not
/// the signer's own index field; the on-chain verifier expects positional
/// correspondence with `rs` and `ss`.
pub fn split_signatures(
    signatures: &[AttributedSignature],
) -> Result<SignatureArrays, TransmitError> {
    if signatures.len() > MAX_SIGNERS {
        return Err(TransmitError::TooManySignatures { count: signatures.len() });
    }

    let mut arrays = SignatureArrays {
        rs: Vec::with_capacity(signatures.len()),
        ss: Vec::with_capacity(signatures.len()),
        raw_vs: B256::ZERO,
    };
    for (index, sig) in signatures.iter().enumerate() {
        if sig.signature.len() != SIGNATURE_LEN {
            return Err(TransmitError::SplitSignature { index, len: sig.signature.len() });
        }
        arrays.rs.push(B256::from_slice(&sig.signature[..32]));
        arrays.ss.push(B256::from_slice(&sig.signature[32..64]));
        arrays.raw_vs[index] = sig.signature[64];
    }

    Ok(arrays)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::Bytes;

    use super::*;

    fn sig(fill: u8, v: u8) -> AttributedSignature {
        let mut blob = vec![fill; 64];
        blob.push(v);
        AttributedSignature { signer: fill, signature: Bytes::from(blob) }
    }

    #[test]
    fn splits_in_input_order() {
        let sigs = vec![sig(0x01, 27), sig(0x02, 28), sig(0x03, 27)];
        let arrays = split_signatures(&sigs).unwrap();

        assert_eq!(arrays.rs.len(), 3);
        assert_eq!(arrays.ss.len(), 3);
        for (i, s) in sigs.iter().enumerate() {
            assert_eq!(arrays.rs[i].as_slice(), &s.signature[..32]);
            assert_eq!(arrays.ss[i].as_slice(), &s.signature[32..64]);
            assert_eq!(arrays.raw_vs[i], s.signature[64]);
        }
        assert!(arrays.raw_vs[3..].iter().all(|b| *b == 0));
    }

    #[test]
    fn empty_input_is_fine() {
        let arrays = split_signatures(&[]).unwrap();
        assert!(arrays.rs.is_empty());
        assert!(arrays.ss.is_empty());
        assert_eq!(arrays.raw_vs, B256::ZERO);
    }

    #[test]
    fn max_signers_is_accepted() {
        let sigs: Vec<_> = (0..32).map(|i| sig(i as u8, 27)).collect();
        let arrays = split_signatures(&sigs).unwrap();
        assert_eq!(arrays.rs.len(), 32);
    }

    #[test]
    fn thirty_three_signatures_are_rejected() {
        let sigs: Vec<_> = (0..33).map(|i| sig(i as u8, 27)).collect();
        let err = split_signatures(&sigs).unwrap_err();
        assert!(matches!(err, TransmitError::TooManySignatures { count: 33 }));
    }

    #[test]
    fn malformed_signature_is_rejected_with_index() {
        let mut sigs = vec![sig(0x01, 27), sig(0x02, 28)];
        sigs[1].signature = Bytes::from(vec![0u8; 64]);

        let err = split_signatures(&sigs).unwrap_err();
        assert!(matches!(err, TransmitError::SplitSignature { index: 1, len: 64 }));
    }
}
