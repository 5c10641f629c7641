//! GF(2^8) arithmetic modulo x^8 + x^4 + x^3 + x + 1.
//!
//! Only the multiplications AES needs are provided: doubling (`xtime`) and the
//! four fixed InvMixColumns coefficients, each written as a chain of doublings
//! and XORs.

/// Multiplies `byte` by `x` (i.e. by 2).
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Multiplies by `0x09 = x^3 + 1`.
#[inline]
pub fn mul_09(b: u8) -> u8 {
    xtime(xtime(xtime(b))) ^ b
}

/// Multiplies by `0x0b = x^3 + x + 1`.
#[inline]
pub fn mul_0b(b: u8) -> u8 {
    xtime(xtime(xtime(b)) ^ b) ^ b
}

/// Multiplies by `0x0d = x^3 + x^2 + 1`.
#[inline]
pub fn mul_0d(b: u8) -> u8 {
    xtime(xtime(xtime(b) ^ b)) ^ b
}

/// Multiplies by `0x0e = x^3 + x^2 + x`.
#[inline]
pub fn mul_0e(b: u8) -> u8 {
    xtime(xtime(xtime(b) ^ b) ^ b)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Schoolbook multiply used as an oracle for the fixed-constant chains.
    fn gmul(mut a: u8, mut b: u8) -> u8 {
        let mut product = 0u8;
        for _ in 0..8 {
            if b & 1 != 0 {
                product ^= a;
            }
            let hi_bit_set = a & 0x80;
            a <<= 1;
            if hi_bit_set != 0 {
                a ^= 0x1b;
            }
            b >>= 1;
        }
        product
    }

    #[test]
    fn xtime_fips_example() {
        // FIPS-197 §4.2.1: {57} · {02} = {ae}, then {47}, {8e}, {07}.
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
    }

    #[test]
    fn xtime_matches_multiply_by_two() {
        for b in 0..=255u8 {
            assert_eq!(xtime(b), gmul(b, 2));
        }
    }

    #[test]
    fn fixed_constants_match_general_multiply() {
        for b in 0..=255u8 {
            assert_eq!(mul_09(b), gmul(b, 0x09), "x09 at {b:#04x}");
            assert_eq!(mul_0b(b), gmul(b, 0x0b), "x0b at {b:#04x}");
            assert_eq!(mul_0d(b), gmul(b, 0x0d), "x0d at {b:#04x}");
            assert_eq!(mul_0e(b), gmul(b, 0x0e), "x0e at {b:#04x}");
        }
    }
}
