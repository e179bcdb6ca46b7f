//! Property-based tests for GF(2^m) arithmetic

use dstu4145_algorithms::{BinaryField, FieldElement, FieldInput};
use proptest::prelude::*;

/// DSTU_PB_163 field, a pentanomial
fn field_163() -> BinaryField {
    BinaryField::new(163, &[7, 6, 3]).unwrap()
}

/// DSTU_PB_257 field, a trinomial
fn field_257() -> BinaryField {
    BinaryField::new(257, &[12]).unwrap()
}

fn element(field: &BinaryField, bytes: &[u8]) -> FieldElement {
    field.reduce(&field.element(&FieldInput::BigEndianBytes(bytes.to_vec())).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn inverse_times_value_is_one(bytes in prop::collection::vec(any::<u8>(), 1..=33)) {
        for field in [field_163(), field_257()] {
            let a = element(&field, &bytes);
            prop_assume!(!a.is_zero());
            let inv = field.invert(&a);
            prop_assert!(field.mul(&a, &inv).is_one());
        }
    }

    #[test]
    fn multiplication_distributes(
        a in prop::collection::vec(any::<u8>(), 21),
        b in prop::collection::vec(any::<u8>(), 21),
        c in prop::collection::vec(any::<u8>(), 21),
    ) {
        let field = field_163();
        let (a, b, c) = (element(&field, &a), element(&field, &b), element(&field, &c));
        let lhs = field.mul(&a, &field.add(&b, &c));
        let rhs = field.add(&field.mul(&a, &b), &field.mul(&a, &c));
        prop_assert_eq!(lhs, rhs);
        prop_assert_eq!(field.square(&a), field.mul(&a, &a));
    }

    #[test]
    fn addition_is_an_involution(
        a in prop::collection::vec(any::<u8>(), 33),
        b in prop::collection::vec(any::<u8>(), 33),
    ) {
        let field = field_257();
        let (a, b) = (element(&field, &a), element(&field, &b));
        prop_assert_eq!(field.add(&field.add(&a, &b), &b), a.clone());
        prop_assert!(field.add(&a, &a).is_zero());
    }

    #[test]
    fn quadratic_roots_satisfy_equation(bytes in prop::collection::vec(any::<u8>(), 33)) {
        let field = field_257();
        let v = element(&field, &bytes);
        // z^2 + z = v is solvable exactly when Tr(v) = 0
        match field.solve_quadratic(&v) {
            Ok(z) => {
                prop_assert_eq!(field.trace(&v), 0);
                prop_assert_eq!(field.add(&field.square(&z), &z), v);
            }
            Err(_) => prop_assert_eq!(field.trace(&v), 1),
        }
    }

    #[test]
    fn byte_encodings_roundtrip(bytes in prop::collection::vec(any::<u8>(), 33)) {
        let field = field_257();
        let v = element(&field, &bytes);
        let be = v.to_be_bytes(field.byte_len());
        prop_assert_eq!(field.checked_from_be_bytes(&be).unwrap(), v.clone());
        let le = v.to_le_bytes(field.byte_len());
        prop_assert_eq!(
            field.element(&FieldInput::LittleEndianBytes(le)).unwrap(),
            v
        );
    }
}
