use super::*;
use crate::error::Error;
use crate::gf2m::FieldElement;
use std::sync::Arc;

const GX: &str = "2a29ef207d0e9b6c55cd260b306c7e007ac491ca1b10c62334a9e8dcd8d20fb7";
const GY: &str = "10686d41ff744d4449fccf6d8eea03102e6812c93a9d60b978b702cf156d814ef";
const QX: &str = "00AFF3EE09CB429284985849E20DE5742E194AA631490F62BA88702505629A6589";
const QY: &str = "01B345BC134F27DA251EDFAE97B3F306B4E8B8CB9CF86D8651E4FB301EF8E1239C";
const PRIV: &str = "2A45EAFE4CD469F811737780C57253360FBCC58E134C9A1FDCD10B0E4529A143";

fn curve_257() -> Arc<Curve> {
    resolve_curve("DSTU_PB_257").unwrap()
}

fn fe(hex: &str) -> FieldElement {
    FieldElement::from_hex(hex).unwrap()
}

fn q_point(curve: &Arc<Curve>) -> Point {
    curve.point(fe(QX), fe(QY))
}

fn naive_mul(p: &Point, k: u64) -> Point {
    let mut acc = p.curve().identity();
    for _ in 0..k {
        acc = acc.add(p);
    }
    acc
}

#[test]
fn test_base_point_expansion() {
    let curve = curve_257();
    let g = curve.base();
    assert_eq!(g.x(), &fe(GX));
    assert_eq!(g.y(), &fe(GY));
    assert!(g.is_on_curve());
    assert_eq!(g.compress().to_hex(), "2a29ef207d0e9b6c55cd260b306c7e007ac491ca1b10c62334a9e8dcd8d20fb6");
}

#[test]
fn test_all_named_curves_construct() {
    for name in named_curves() {
        let curve = resolve_curve(name).unwrap();
        let g = curve.base();
        assert!(g.is_on_curve(), "{}", name);
        assert!(g.mul(curve.order()).is_identity(), "{}", name);
        assert!(curve.cofactor() == 2 || curve.cofactor() == 4);
    }
}

#[test]
fn test_registry_memoizes_and_accepts_oid() {
    let by_name = curve_257();
    let by_oid = resolve_curve("1.2.804.2.1.1.1.1.3.1.1.2.6").unwrap();
    assert!(Arc::ptr_eq(&by_name, &by_oid));
    assert!(matches!(
        resolve_curve("DSTU_PB_999"),
        Err(Error::UnsupportedCurve { .. })
    ));
}

#[test]
fn test_public_point_from_private_scalar() {
    let curve = curve_257();
    let d = Scalar::from_hex(PRIV).unwrap();
    let q = curve.base().mul(&d).negate();
    assert_eq!(q, q_point(&curve));
    assert!(q.is_on_curve());
}

#[test]
fn test_doubling_known_answer() {
    let curve = curve_257();
    let doubled = q_point(&curve).twice();
    assert_eq!(
        doubled.x().to_hex(),
        "176dbde19773dfd335665597e8d6a0ab678721a5bb7030f25dc4c48b809ef3520"
    );
    assert_eq!(
        doubled.y().to_hex(),
        "6e75301556ea5d571403086691030f024c026907c8e818b2eedd9184d12040ee"
    );
}

#[test]
fn test_compress_expand_roundtrip() {
    let curve = curve_257();
    let q = q_point(&curve);
    let c = q.compress();
    assert_eq!(
        c.to_hex(),
        "aff3ee09cb429284985849e20de5742e194aa631490f62ba88702505629a6588"
    );
    assert_eq!(curve.expand(&c).unwrap(), q);
    // served from the cache the second time
    assert_eq!(curve.expand(&c).unwrap(), q);

    let g3 = curve.base().mul_i64(3);
    assert_eq!(curve.expand(&g3.compress()).unwrap(), g3);
}

#[test]
fn test_identity_conventions() {
    let curve = curve_257();
    let o = curve.identity();
    let g = curve.base();
    assert!(o.is_identity());
    assert!(!o.is_on_curve());
    assert_eq!(o.add(&g), g);
    assert_eq!(g.add(&o), g);
    assert!(g.add(&g.negate()).is_identity());
    assert!(o.compress().is_zero());
    assert!(curve.expand(&curve.field().zero()).unwrap().is_identity());
    assert!(g.mul(&Scalar::zero()).is_identity());
}

#[test]
fn test_group_law() {
    let curve = curve_257();
    let g = curve.base();
    let q = q_point(&curve);
    assert_eq!(g.add(&g), g.twice());
    assert_eq!(g.add(&q), q.add(&g));
    assert_eq!(g.add(&q).add(&q.negate()), g);
    assert_eq!(g.twice_plus(&q), g.twice().add(&q));
    assert_eq!(g.times_pow2(3), g.mul_i64(8));
    assert_eq!(g.mul_i64(-5), g.mul_i64(5).negate());
    assert_eq!(
        g.mul_i64(3).x().to_hex(),
        "1e18f95137669d9a577714b57bf7533faa3759c1c2438a1d4636abaa59bc4b6b2"
    );
}

#[test]
fn test_wnaf_matches_repeated_addition() {
    let curve = resolve_curve("DSTU_PB_163").unwrap();
    let g = curve.base();
    for k in 0..64u64 {
        assert_eq!(g.mul(&Scalar::from_u64(k)), naive_mul(&g, k), "k = {}", k);
    }
}

#[test]
fn test_wnaf_width_change_reuses_table() {
    let curve = curve_257();
    let q = q_point(&curve);
    // small scalar first (width 2), then a wide one, then small again
    let small = q.mul(&Scalar::from_u64(11));
    let wide = q.mul(&Scalar::from_hex("1234567890abcdef1234567890abcdef").unwrap());
    assert_eq!(q.mul(&Scalar::from_u64(11)), small);
    assert_eq!(small, naive_mul(&q, 11));

    let split = q
        .mul(&Scalar::from_hex("1234567890abcdef").unwrap())
        .times_pow2(64)
        .add(&q.mul(&Scalar::from_hex("1234567890abcdef").unwrap()));
    assert_eq!(wide, split);
}

#[test]
fn test_scalar_multiplication_is_linear() {
    let curve = curve_257();
    let g = curve.base();
    let a = Scalar::from_hex("d1e2f3a4b5c6d7e8f9").unwrap();
    let b = Scalar::from_hex("123456789").unwrap();
    assert_eq!(g.mul(&a).add(&g.mul(&b)), g.mul(&a.add(&b)));
    assert_eq!(g.mul(&a).mul(&b), g.mul(&a.mul(&b)));
}

#[test]
fn test_contains_rejects_off_curve_and_unreduced() {
    let curve = curve_257();
    let g = curve.base();
    let off = curve.point(g.x().clone(), g.x().clone());
    assert!(!off.is_on_curve());

    let mut wide = g.x().clone();
    wide.set_bit(300);
    assert!(!curve.point(wide, g.y().clone()).is_on_curve());
}

#[test]
fn test_truncate() {
    let curve = curve_257();
    let mut v = FieldElement::zero();
    v.set_bit(256);
    v.set_bit(255);
    v.set_bit(254);
    v.set_bit(3);
    // keep bits below bitlen(n) - 1 = 255
    assert_eq!(curve.truncate(&v), Scalar::from_u64(1 << 3).add(&Scalar::from_u64(1).shl(254)));
}

#[test]
fn test_custom_spec_and_rejections() {
    let named = dstu4145_params::dstu4145::DSTU_PB_163;
    let mut spec = CurveSpec::from(&named);
    spec.name = None;
    let curve = resolve_curve(&spec).unwrap();
    assert_eq!(curve.degree(), 163);

    let mut bad_order = spec.clone();
    bad_order.order = "400000000000000000002BEC12BE2262D39BCF14F".into();
    assert!(matches!(Curve::new(&bad_order), Err(Error::Parameter { name: "order", .. })));

    let mut zero_b = spec.clone();
    zero_b.b = "0".into();
    assert!(Curve::new(&zero_b).is_err());

    let mut even = spec.clone();
    even.m = 164;
    assert!(matches!(Curve::new(&even), Err(Error::UnsupportedCurve { .. })));
}

#[test]
fn test_affine_base_spec() {
    let named = dstu4145_params::dstu4145::DSTU_PB_257;
    let mut spec = CurveSpec::from(&named);
    spec.name = Some("affine-257".into());
    spec.base = BasePoint::Affine {
        x: GX.into(),
        y: GY.into(),
    };
    let curve = Curve::new(&spec).unwrap();
    assert_eq!(curve.base(), curve_257().base());
}

#[cfg(feature = "serde")]
#[test]
fn test_spec_from_json() {
    let json = r#"{
        "name": "DSTU_PB_163",
        "m": 163,
        "ks": [7, 6, 3],
        "a": "1",
        "b": "5FF6108462A2DC8210AB403925E638A19C1455D21",
        "order": "400000000000000000002BEC12BE2262D39BCF14D",
        "cofactor": 2,
        "base": { "compressed": "2E2F85F5DD74CE983A5C4237229DAF8A3F35823BE" }
    }"#;
    let spec: CurveSpec = serde_json::from_str(json).unwrap();
    assert_eq!(spec, CurveSpec::from(&dstu4145_params::dstu4145::DSTU_PB_163));
}
