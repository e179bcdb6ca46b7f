//! Word-level kernels: carry-less multiplication, squaring and reduction
//!
//! All buffers are little-endian word vectors (word 0 holds t^0..t^31).

/// Bits per limb
pub const WORD_BITS: usize = 32;

/// Low 30 bits of the left operand go through the 3-bit window table
const LOW30: u32 = 0x3FFF_FFFF;

/// Bit-interleave table: nibble `b3b2b1b0` maps to `0b3 0b2 0b1 0b0`
const SQR_NIBBLE: [u32; 16] = [0, 1, 4, 5, 16, 17, 20, 21, 64, 65, 68, 69, 80, 81, 84, 85];

/// Carry-less product of two words, returned as `(high, low)`
#[inline]
pub(crate) fn mul_1x1(a: u32, b: u32) -> (u32, u32) {
    let top2b = a >> 30;
    let a1 = a & LOW30;
    let a2 = a1 << 1;
    let a4 = a2 << 1;
    let tab = [0, a1, a2, a1 ^ a2, a4, a1 ^ a4, a2 ^ a4, a1 ^ a2 ^ a4];

    let mut l = tab[(b & 7) as usize];
    let mut h = 0u32;
    let mut i = 3;
    while i < WORD_BITS {
        let s = tab[((b >> i) & 7) as usize];
        l ^= s << i;
        h ^= s >> (WORD_BITS - i);
        i += 3;
    }

    // compensate for the two bits masked out of `a`
    if top2b & 1 != 0 {
        l ^= b << 30;
        h ^= b >> 2;
    }
    if top2b & 2 != 0 {
        l ^= b << 31;
        h ^= b >> 1;
    }
    (h, l)
}

/// Karatsuba combination of three 1x1 products: `(a1:a0) * (b1:b0)`
#[inline]
pub(crate) fn mul_2x2(a1: u32, a0: u32, b1: u32, b0: u32) -> [u32; 4] {
    let (h1, l1) = mul_1x1(a1, b1);
    let (h0, l0) = mul_1x1(a0, b0);
    let (m1, m0) = mul_1x1(a0 ^ a1, b0 ^ b1);

    let r2 = l1 ^ m1 ^ h0 ^ h1;
    let r1 = h1 ^ r2 ^ l0 ^ m1 ^ m0;
    [l0, r1, r2, h1]
}

/// Unreduced carry-less product of two polynomials
pub(crate) fn poly_mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut s = vec![0u32; a.len() + b.len() + 2];
    for j in (0..b.len()).step_by(2) {
        let y0 = b[j];
        let y1 = b.get(j + 1).copied().unwrap_or(0);
        for i in (0..a.len()).step_by(2) {
            let x0 = a[i];
            let x1 = a.get(i + 1).copied().unwrap_or(0);
            let z = mul_2x2(x1, x0, y1, y0);
            for (k, w) in z.iter().enumerate() {
                s[i + j + k] ^= w;
            }
        }
    }
    s
}

#[inline]
fn spread16(x: u32) -> u32 {
    (SQR_NIBBLE[((x >> 12) & 0xF) as usize] << 24)
        | (SQR_NIBBLE[((x >> 8) & 0xF) as usize] << 16)
        | (SQR_NIBBLE[((x >> 4) & 0xF) as usize] << 8)
        | SQR_NIBBLE[(x & 0xF) as usize]
}

/// Unreduced square: spreads every bit `i` to position `2i`
pub(crate) fn poly_square(a: &[u32]) -> Vec<u32> {
    let mut s = vec![0u32; 2 * a.len()];
    for (i, &w) in a.iter().enumerate() {
        s[2 * i] = spread16(w & 0xFFFF);
        s[2 * i + 1] = spread16(w >> 16);
    }
    s
}

/// Reduce `z` in place modulo the sparse polynomial with exponents
/// `p = [m, k1, .., 0]` (descending, ending in 0).
///
/// Words above the one holding bit `m` are folded down first; the
/// straddling word is then folded until no bit at or above `m` remains.
/// `z` is left with exactly `words` limbs.
pub(crate) fn reduce(z: &mut Vec<u32>, p: &[usize], words: usize) {
    let m = p[0];
    let dn = m / WORD_BITS;

    if z.len() > dn {
        let mut j = z.len() - 1;
        while j > dn {
            let zz = z[j];
            if zz == 0 {
                j -= 1;
                continue;
            }
            z[j] = 0;

            for &pk in &p[1..] {
                let n = m - pk;
                let nw = n / WORD_BITS;
                let d0 = n % WORD_BITS;
                z[j - nw] ^= zz >> d0;
                if d0 != 0 {
                    z[j - nw - 1] ^= zz << (WORD_BITS - d0);
                }
            }
        }

        let d0 = m % WORD_BITS;
        loop {
            let zz = z[dn] >> d0;
            if zz == 0 {
                break;
            }
            if d0 != 0 {
                let d1 = WORD_BITS - d0;
                z[dn] = (z[dn] << d1) >> d1;
            } else {
                z[dn] = 0;
            }
            z[0] ^= zz;

            for &pk in &p[1..] {
                if pk == 0 {
                    continue;
                }
                let nw = pk / WORD_BITS;
                let dk = pk % WORD_BITS;
                z[nw] ^= zz << dk;
                if dk != 0 {
                    let tmp = zz >> (WORD_BITS - dk);
                    if tmp != 0 {
                        z[nw + 1] ^= tmp;
                    }
                }
            }
        }
    }

    z.truncate(words);
    z.resize(words, 0);
}
