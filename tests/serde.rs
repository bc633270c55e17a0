#![cfg(feature = "serde")]

extern crate easy_ad;

#[cfg(test)]
mod serde_tests {
    use easy_ad::differentiation::{
        DifferentiationError, Dual, MultiDual, VariableSet, VectorDual,
    };

    #[test]
    fn test_deserialize_dual() {
        let dual: Dual<f64> = toml::from_str(
            r#"
            value = 2.5
            derivative = -1.0
            "#,
        )
        .unwrap();
        assert_eq!(dual, Dual::new(2.5, -1.0));
    }

    #[test]
    fn test_serialize_dual() {
        let dual = Dual::new(0.75_f64, 3.0);
        let text = toml::to_string(&dual).unwrap();
        assert!(text.contains("value = 0.75"));
        assert!(text.contains("derivative = 3.0"));
        let parsed: Dual<f64> = toml::from_str(&text).unwrap();
        assert_eq!(parsed, dual);
    }

    #[test]
    fn test_serialize_jacobian() {
        let [x, y] = VariableSet::declare([2.0_f64, 5.0]);
        let f = VectorDual::vconvert(&[&x * &y, &x - &y]).unwrap();
        let text = toml::to_string(&f.derivative).unwrap();
        let parsed: easy_ad::differentiation::Jacobian<f64> = toml::from_str(&text).unwrap();
        assert_eq!(parsed.size(), (2, 2));
        assert_eq!(parsed.row(0), &[5.0, 2.0]);
        assert_eq!(parsed.row(1), &[1.0, -1.0]);
    }

    #[test]
    fn test_stored_variable_belongs_to_no_declaration() {
        let [x, _] = VariableSet::declare([1.0_f64, 2.0]);
        let text = toml::to_string(&x).unwrap();
        let stored: MultiDual<f64> = toml::from_str(&text).unwrap();
        assert_eq!(stored, x);
        assert_ne!(stored.derivative.set(), x.derivative.set());
        let [z, _] = VariableSet::declare([1.0_f64, 2.0]);
        assert_ne!(stored.derivative.set(), z.derivative.set());
        assert_eq!(
            stored.partial(&z),
            Err(DifferentiationError::MixedVariableSets)
        );
        assert_eq!(
            z.partial(&stored),
            Err(DifferentiationError::MixedVariableSets)
        );
        // reading the same text twice does not make the copies share a declaration
        let again: MultiDual<f64> = toml::from_str(&text).unwrap();
        assert_ne!(stored.derivative.set(), again.derivative.set());
    }

    #[test]
    #[should_panic(expected = "same VariableSet")]
    fn test_stored_variable_cannot_join_a_new_declaration() {
        let stored: MultiDual<f64> = toml::from_str(
            r#"
            value = 1.0

            [derivative]
            set = 0
            values = [1.0, 0.0, 0.0]
            "#,
        )
        .unwrap();
        let [x, _] = VariableSet::declare([1.0_f64, 2.0]);
        let _ = &x + &stored;
    }

    #[test]
    fn test_stored_constant_combines_with_any_declaration() {
        let stored: MultiDual<f64> = toml::from_str(
            r#"
            value = 4.0

            [derivative]
            values = []
            "#,
        )
        .unwrap();
        assert_eq!(stored.derivative.set(), None);
        let [x, y] = VariableSet::declare([1.0_f64, 2.0]);
        let f = &x * &stored + &y;
        assert_eq!(f.value, 6.0);
        assert_eq!(f.derivative.values(), &[4.0, 1.0]);
    }
}
