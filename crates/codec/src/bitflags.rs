//! Boolean-vector-to-integer encoding used by the report/config pipeline.

use alloy_primitives::U256;

/// Encodes an ordered sequence of flags into a single word, setting bit `i`
/// for every `i` where `flags[i]` is true. Bit 0 is least significant; an
/// empty input yields zero. Supports up to 256 flags, the word width of
/// this profile.
pub fn bools_to_bits(flags: &[bool]) -> U256 {
    let mut encoded = U256::ZERO;
    for (i, flag) in flags.iter().enumerate() {
        if *flag {
            encoded.set_bit(i, true);
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(bools_to_bits(&[]), U256::ZERO);
    }

    #[test]
    fn all_false_is_zero() {
        assert_eq!(bools_to_bits(&[false; 16]), U256::ZERO);
    }

    #[test]
    fn bit_positions_match_flag_indices() {
        let flags = [true, false, true, true, false, false, false, true];
        let encoded = bools_to_bits(&flags);
        assert_eq!(encoded, U256::from(0b1000_1101u64));
        for (i, flag) in flags.iter().enumerate() {
            assert_eq!(encoded.bit(i), *flag);
        }
    }

    #[test]
    fn high_bits_are_reachable() {
        let mut flags = vec![false; 256];
        flags[255] = true;
        assert_eq!(bools_to_bits(&flags), U256::from(1u64) << 255);
    }
}
