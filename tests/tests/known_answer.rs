//! Known-answer tests through the facade crate

use dstu4145::prelude::*;
use dstu4145_tests::vectors::{self, SIGNATURE};
use dstu4145_tests::{seeded_rng, unhex};

fn scheme() -> Dstu4145 {
    Dstu4145::new(vectors::CURVE).unwrap()
}

fn signer() -> PrivateKey {
    scheme()
        .curve()
        .private_key(&FieldInput::from(SIGNATURE.private))
        .unwrap()
}

#[test]
fn test_base_point() {
    let curve = resolve_curve(vectors::CURVE).unwrap();
    let g = curve.base();
    assert_eq!(g.x().to_hex(), vectors::BASE_X);
    assert_eq!(g.y().to_hex(), vectors::BASE_Y);
    assert_eq!(g.compress().to_hex(), vectors::BASE_COMPRESSED);
}

#[test]
fn test_public_key_and_doubling() {
    let pk = signer().public_key();
    assert_eq!(pk.point().x(), &FieldElement::from_hex(SIGNATURE.public_x).unwrap());
    assert_eq!(pk.point().y(), &FieldElement::from_hex(SIGNATURE.public_y).unwrap());
    assert_eq!(pk.compressed().to_hex(), SIGNATURE.public_compressed);

    let doubled = pk.point().twice();
    assert_eq!(doubled.x().to_hex(), vectors::DOUBLE_X);
    assert_eq!(doubled.y().to_hex(), vectors::DOUBLE_Y);
}

#[test]
fn test_signature_vector() {
    let sk = signer();
    let hash = unhex(SIGNATURE.hash);
    let nonce = Scalar::from_hex(SIGNATURE.nonce).unwrap();
    let sig = sk.sign_with_nonce(&hash, &nonce).unwrap();

    let (r, s) = sig.to_split(sk.curve());
    assert_eq!(r, unhex(SIGNATURE.r));
    assert_eq!(s, unhex(SIGNATURE.s));

    let pk = sk.public_key();
    assert!(pk.verify(&hash, &sig));
    assert!(scheme().verify(&hash, &sig, &pk).is_ok());
}

#[test]
fn test_signature_from_wire_formats() {
    let curve = scheme().curve().clone();
    let hash = unhex(SIGNATURE.hash);
    let pk = curve
        .public_key(PublicKeyInput::Compressed(FieldInput::from(
            SIGNATURE.public_compressed,
        )))
        .unwrap();
    assert!(pk.validate());

    let split = Signature::from_split(&curve, &unhex(SIGNATURE.r), &unhex(SIGNATURE.s)).unwrap();
    assert!(pk.verify(&hash, &split));

    let short = Signature::from_short(&curve, &split.to_short(&curve)).unwrap();
    assert_eq!(short, split);

    let serialized = PublicKey::from_serialized(curve, pk.serialize()).unwrap();
    assert!(serialized.verify(&hash, &short));
}

#[test]
fn test_key_agreement_vector() {
    let curve = scheme().curve().clone();
    let ours = signer();
    let theirs = curve
        .private_key(&FieldInput::from(vectors::PEER_PRIVATE))
        .unwrap();
    assert_eq!(theirs.public_key().point().x().to_hex(), vectors::PEER_PUBLIC_X);

    let z = ours.derive(&theirs.public_key()).unwrap();
    let mut expected = vec![0u8];
    expected.extend_from_slice(&unhex(vectors::SHARED_X));
    assert_eq!(z.as_slice(), &expected[..]);
    assert_eq!(z, theirs.derive(&ours.public_key()).unwrap());
}

#[test]
fn test_random_signatures_on_every_curve() {
    let mut rng = seeded_rng(0x4145);
    for name in dstu4145::algorithms::ec::named_curves() {
        let scheme = Dstu4145::new(name).unwrap();
        let (pk, sk) = scheme.keypair(&mut rng).unwrap();
        assert!(pk.validate(), "{}", name);

        let hash = [0x5au8; 32];
        let sig = scheme.sign(&hash, &sk, &mut rng).unwrap();
        assert!(scheme.verify(&hash, &sig, &pk).is_ok(), "{}", name);

        let curve = scheme.curve();
        let decoded = Signature::from_short(curve, &sig.to_short(curve)).unwrap();
        assert_eq!(decoded, sig, "{}", name);
    }
}

#[test]
fn test_curve_spec_from_json() {
    let spec: CurveSpec = serde_json::from_str(
        r#"{
            "name": null,
            "m": 257,
            "ks": [12],
            "a": "0",
            "b": "1CEF494720115657E18F938D7A7942394FF9425C1458C57861F9EEA6ADBE3BE10",
            "order": "800000000000000000000000000000006759213AF182E987D3E17714907D470D",
            "cofactor": 4,
            "base": { "compressed": "2A29EF207D0E9B6C55CD260B306C7E007AC491CA1B10C62334A9E8DCD8D20FB6" }
        }"#,
    )
    .unwrap();
    let curve = resolve_curve(&spec).unwrap();
    assert_eq!(curve.base().x().to_hex(), vectors::BASE_X);

    let named = resolve_curve(vectors::CURVE).unwrap();
    assert_eq!(curve.order(), named.order());
}

#[test]
fn test_facade_reexports_rng_and_zeroize() {
    use dstu4145::rand::rngs::OsRng;
    use dstu4145::zeroize::Zeroize;

    let scheme = Dstu4145::new("DSTU_PB_163").unwrap();
    let (pk, sk) = scheme.keypair(&mut OsRng).unwrap();
    let sig = scheme.sign(&[0x11; 20], &sk, &mut OsRng).unwrap();
    assert!(scheme.verify(&[0x11; 20], &sig, &pk).is_ok());

    let mut exported = sk.to_be_bytes().to_vec();
    exported.zeroize();
    assert!(exported.is_empty());
}
