extern crate easy_ad;

#[cfg(test)]
mod multi_variable_tests {
    use easy_ad::differentiation::{DifferentiationError, DualNumber, MultiDual, VariableSet};

    #[test]
    fn test_linearity() {
        let [x, y]: [MultiDual<f64>; 2] = VariableSet::declare([1.5, -2.0]);
        // f(x, y) = 3x - 4y + 7
        let f = 3.0 * &x - 4.0 * &y + 7.0;
        assert_eq!(f.value, 19.5);
        assert_eq!(f.partial(&x), Ok(3.0));
        assert_eq!(f.partial(&y), Ok(-4.0));
    }

    #[test]
    fn test_product_rule() {
        let [x, y, z] = VariableSet::declare([2.0, 3.0, 5.0]);
        let f = &x * &y * &z;
        assert_eq!(f.value, 30.0);
        assert_eq!(f.derivative.values(), &[15.0, 10.0, 6.0]);
        let g = &f / &x;
        assert_eq!(g.partial(&x), Ok(0.0));
        assert_eq!(g.partial(&y), Ok(5.0));
    }

    #[test]
    fn test_partial_requires_a_variable() {
        let [x, y] = VariableSet::declare([1.0, 2.0]);
        let f = &x + &y;
        assert_eq!(
            f.partial(&f),
            Err(DifferentiationError::InvalidVariable { nonzero: 2 })
        );
        // a multiple of a variable still selects that variable
        let two_x = 2.0 * &x;
        assert_eq!(f.partial(&two_x), Ok(1.0));
        let g = &x * &y;
        assert_eq!(g.partial(&two_x), Ok(2.0));
        assert_eq!(g.partial(&(&y / 4.0)), Ok(1.0));
        let constant: MultiDual<f64> = DualNumber::constant(1.0);
        assert_eq!(
            f.partial(&constant),
            Err(DifferentiationError::InvalidVariable { nonzero: 0 })
        );
    }

    #[test]
    fn test_mixed_variable_sets() {
        let [x] = VariableSet::declare([1.0]);
        let [y] = VariableSet::declare([1.0]);
        let f = &x * 2.0;
        assert_eq!(f.partial(&y), Err(DifferentiationError::MixedVariableSets));
    }

    #[test]
    #[should_panic(expected = "same VariableSet")]
    fn test_mixing_variable_sets_panics() {
        let [x] = VariableSet::declare([1.0]);
        let [y] = VariableSet::declare([1.0]);
        let _ = x + y;
    }

    #[test]
    fn test_equality_ignores_declarations() {
        let [a, b] = VariableSet::declare([1.0, 2.0]);
        let [c, d] = VariableSet::declare([1.0, 2.0]);
        assert_eq!(&a * &b, &c * &d);
        assert_ne!(&a * &b, &c + &d);
    }

    #[test]
    fn test_many_variables() {
        use easy_ad::differentiation::functions::product;
        let mut values = vec![1.0; 1000];
        values[0] = 2.0;
        let variables = VariableSet::declare_all(values);
        let f = product(&variables).unwrap();
        assert_eq!(f.value, 2.0);
        assert_eq!(f.derivative.len(), 1000);
        assert_eq!(f.partial(&variables[0]), Ok(1.0));
        assert!(
            variables[1..]
                .iter()
                .all(|variable| f.partial(variable) == Ok(2.0))
        );
    }
}

#[cfg(test)]
mod jacobian_tests {
    use approx::assert_relative_eq;
    use easy_ad::differentiation::{
        DifferentiationError, VariableSet, VectorDual, directional_derivative, jacobian,
    };
    use easy_ad::numeric::extra::{Cos, Pow, Sin};
    use std::f64::consts::PI;

    #[test]
    fn test_jacobian_construction() {
        let [x, y, z, t] = VariableSet::declare([3.0, PI, 5.0, 3.4]);
        let f = VectorDual::vconvert(&[
            (&x + (&y).pow(&z)) / &t,
            (&x + (100.0_f64 * (&y).pow(3.0_f64)).cos() - (&z).pow(&t)).sin(),
        ])
        .unwrap();
        assert_eq!(f.derivative.size(), (2, 4));

        let (x, y, z, t) = (3.0_f64, PI, 5.0_f64, 3.4_f64);
        assert_relative_eq!(f.value[0], (x + y.powf(z)) / t, max_relative = 1e-12);
        let inner = x + (100.0 * y.powf(3.0)).cos() - z.powf(t);
        assert_relative_eq!(f.value[1], inner.sin(), epsilon = 1e-9);

        let [dx, dy, dz, dt] = [0, 1, 2, 3].map(|column| f.derivative.column(column));
        assert_relative_eq!(dx[0], 1.0 / t, max_relative = 1e-12);
        assert_relative_eq!(dx[1], inner.cos(), epsilon = 1e-9);
        assert_relative_eq!(dy[0], z * y.powf(z - 1.0) / t, max_relative = 1e-12);
        assert_relative_eq!(
            dy[1],
            inner.cos() * -(100.0 * y.powf(3.0)).sin() * 300.0 * y * y,
            epsilon = 1e-6
        );
        assert_relative_eq!(dz[0], y.powf(z) * y.ln() / t, max_relative = 1e-12);
        assert_relative_eq!(
            dz[1],
            inner.cos() * -(t * z.powf(t - 1.0)),
            epsilon = 1e-9
        );
        assert_relative_eq!(dt[0], -(x + y.powf(z)) / (t * t), max_relative = 1e-12);
        assert_relative_eq!(
            dt[1],
            inner.cos() * -(z.powf(t) * z.ln()),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_partial_is_a_column() {
        let [x, y, z, t] = VariableSet::declare([3.0, PI, 5.0, 3.4]);
        let f = VectorDual::vconvert(&[(&x + (&y).pow(&z)) / &t, &x * &t]).unwrap();
        assert_eq!(f.partial(&t), Ok(f.derivative.column(3)));
        let dx = f.partial(&x).unwrap();
        assert_relative_eq!(dx[0], 1.0 / 3.4, max_relative = 1e-12);
        assert_eq!(dx[1], 3.4);
        assert_eq!(f.partial(&z).map(|column| column[1]), Ok(0.0));
        let [other] = VariableSet::declare([1.0]);
        assert_eq!(f.partial(&other), Err(DifferentiationError::MixedVariableSets));
    }

    #[test]
    fn test_jacobian_of_polar_coordinates() {
        let (r, a) = (2.0_f64, 0.5_f64);
        let f = jacobian(
            |v| vec![&v[0] * (&v[1]).cos(), &v[0] * (&v[1]).sin()],
            &[r, a],
        )
        .unwrap();
        assert_relative_eq!(f.value[0], r * a.cos());
        assert_relative_eq!(f.value[1], r * a.sin());
        let expected = [[a.cos(), -r * a.sin()], [a.sin(), r * a.cos()]];
        for (row, expected) in expected.iter().enumerate() {
            for (column, expected) in expected.iter().enumerate() {
                assert_relative_eq!(*f.derivative.get(row, column), *expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_directional_derivative_matches_gradient() {
        // f(x, y, z) = x y^2 + sin(z)
        let point = [1.0_f64, 2.0, 0.5];
        let direction = [1.0_f64, -2.0, 2.0];
        let f = directional_derivative(
            |v| v[0] * v[1] * v[1] + v[2].sin(),
            &point,
            &direction,
        )
        .unwrap();
        let gradient = [4.0, 4.0, 0.5_f64.cos()];
        let expected: f64 = gradient
            .iter()
            .zip(direction.iter())
            .map(|(g, d)| g * d / 3.0)
            .sum();
        assert_relative_eq!(f.value, 4.0 + 0.5_f64.sin());
        assert_relative_eq!(f.derivative, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_directional_derivative_along_an_axis() {
        // moving along an axis is the partial derivative for that input
        let point = [0.3_f64, 1.7];
        let f = |v: &[easy_ad::differentiation::Dual<f64>]| (v[0] * v[1]).sin();
        let along_y = directional_derivative(f, &point, &[0.0, 5.0]).unwrap();
        let [x, y] = VariableSet::declare(point);
        let g = (&x * &y).sin();
        assert_relative_eq!(along_y.derivative, g.partial(&y).unwrap(), epsilon = 1e-12);
        assert_eq!(
            directional_derivative(f, &point, &[1.0, 0.0, 0.0]),
            Err(DifferentiationError::InvalidDirection)
        );
    }
}
