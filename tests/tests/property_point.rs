//! Property-based tests for curve points and signatures

use dstu4145_algorithms::ec::{resolve_curve, Scalar};
use dstu4145_api::Signature as SignatureTrait;
use dstu4145_sign::{Dstu4145, Signature};
use dstu4145_tests::seeded_rng;
use proptest::prelude::*;

const CURVE: &str = "DSTU_PB_163";

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn compress_expand_roundtrip(k in 1u64..u64::MAX) {
        let curve = resolve_curve(CURVE).unwrap();
        let p = curve.base().mul(&Scalar::from_u64(k));
        prop_assert!(p.is_on_curve());
        prop_assert_eq!(curve.expand(&p.compress()).unwrap(), p);
    }

    #[test]
    fn wnaf_agrees_with_double_and_add(k in 0u64..u64::MAX) {
        let curve = resolve_curve(CURVE).unwrap();
        let g = curve.base();

        let mut acc = curve.identity();
        for i in (0..64).rev() {
            acc = acc.twice();
            if (k >> i) & 1 == 1 {
                acc = acc.add(&g);
            }
        }
        prop_assert_eq!(g.mul(&Scalar::from_u64(k)), acc);
    }

    #[test]
    fn scalar_multiplication_composes(a in 1u32.., b in 1u32..) {
        let curve = resolve_curve(CURVE).unwrap();
        let g = curve.base();
        let (a, b) = (Scalar::from_u64(a as u64), Scalar::from_u64(b as u64));
        prop_assert_eq!(g.mul(&a).mul(&b), g.mul(&a.mul(&b)));
        prop_assert_eq!(g.mul(&a).add(&g.mul(&b)), g.mul(&a.add(&b)));
    }

    #[test]
    fn signatures_verify_and_reject_bit_flips(
        seed in any::<u64>(),
        hash in prop::collection::vec(any::<u8>(), 1..64),
        bit in 0usize..160,
    ) {
        let scheme = Dstu4145::new(CURVE).unwrap();
        let mut rng = seeded_rng(seed);
        let (pk, sk) = scheme.keypair(&mut rng).unwrap();
        let sig = scheme.sign(&hash, &sk, &mut rng).unwrap();
        prop_assert!(scheme.verify(&hash, &sig, &pk).is_ok());

        let flip = Scalar::from_u64(1).shl(bit);
        let tampered_r = Signature::new(sig.r().xor(&flip), sig.s().clone());
        prop_assert!(scheme.verify(&hash, &tampered_r, &pk).is_err());
        let tampered_s = Signature::new(sig.r().clone(), sig.s().xor(&flip));
        prop_assert!(scheme.verify(&hash, &tampered_s, &pk).is_err());
    }
}
