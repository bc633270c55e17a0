extern crate easy_ad;

#[cfg(test)]
mod forward_tests {
    use approx::assert_relative_eq;
    use easy_ad::differentiation::{Dual, DualNumber};

    #[test]
    fn test_adding() {
        let a = Dual::new(2.0, 1.0);
        let b = Dual::new(-1.0, 1.0);
        let _c = &a + &b;
        let _d = &a + b;
        let _e = a + &b;
        let _f = a + b;
        assert_eq!(_c, _d);
        assert_eq!(_e, _f);
        assert_eq!(_c, Dual::new(1.0, 2.0));
    }

    fn three_x_squared(x: Dual<f64>) -> Dual<f64> {
        3.0 * x * x
    }

    #[test]
    fn test_three_x_squared() {
        // d 3(x^2) / dx == 6x
        let dx = three_x_squared(Dual::variable(3.2));
        assert_eq!(dx.value, 3.0 * 3.2 * 3.2);
        assert_eq!(dx.derivative, 3.2 * 6.0);
    }

    #[test]
    fn test_four_x_cubed() {
        let x: f64 = 0.75;
        let dx = Dual::derivative(|x| DualNumber::constant(4.0) * x * x * x, x);
        assert_relative_eq!(dx, 12.0 * x * x, epsilon = 1e-12);
    }

    use easy_ad::numeric::Numeric;
    // f(x) = (x^5 + x^3 - 1/x) - x
    // df(x)/dx = 5x^4 + 3x^2 + (1/x^2) - 1
    fn f<T: Numeric + Copy>(x: T) -> T {
        ((x * x * x * x * x) + (x * x * x) - (T::one() / x)) - x
    }

    #[test]
    fn test_numeric_substitution() {
        // The same function written generically over Numeric can be evaluated on floats
        // or differentiated by passing it a dual number.
        let x: f64 = -0.75;
        let result = f(Dual::variable(x));
        assert_relative_eq!(result.value, f(x), epsilon = 1e-12);
        let also_dx = (5.0 * x * x * x * x) + (3.0 * x * x) + (1.0 / (x * x)) - 1.0;
        assert_relative_eq!(result.derivative, also_dx, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_lifting() {
        let x: f64 = 0.23;
        let y = (Dual::variable(x) + 0.3) * 1.2;
        let also_y = (Dual::variable(x) + Dual::constant(0.3)) * Dual::constant(1.2);
        assert_eq!(y.value, also_y.value);
        assert_eq!(y.derivative, also_y.derivative);
    }

    #[test]
    fn test_constants_on_the_left() {
        let x = Dual::variable(2.0_f32);
        assert_eq!(1.0 + x, Dual::new(3.0, 1.0));
        assert_eq!(1.0 - x, Dual::new(-1.0, -1.0));
        assert_eq!(3.0 * &x, Dual::new(6.0, 3.0));
        // d(C/x)/dx = -C/x^2
        assert_eq!(3.0 / x, Dual::new(1.5, -0.75));
        assert_eq!(x / 4.0, Dual::new(0.5, 0.25));
    }

    #[test]
    fn test_negation() {
        let x = Dual::variable(2.5_f64);
        let y = -(x * x);
        assert_eq!(y, Dual::new(-6.25, -5.0));
        assert_eq!(-&y, Dual::new(6.25, 5.0));
    }

    #[test]
    fn test_self_division() {
        // (u'v - uv') / v^2 is exactly 0 for u == v
        for x in [0.3_f64, 3.0, -7.25, 1e6] {
            let x = Dual::variable(x);
            let y = x / x;
            assert_eq!(y.value, 1.0);
            assert_eq!(y.derivative, 0.0);
        }
    }

    #[test]
    fn test_product_and_quotient_rules() {
        use easy_ad::numeric::extra::{Exp, Sin};
        let x = Dual::variable(0.7_f64);
        let (u, v) = (x.sin(), x.exp());
        let product = u * v;
        let quotient = u / v;
        let (s, c, e) = (0.7_f64.sin(), 0.7_f64.cos(), 0.7_f64.exp());
        assert_relative_eq!(product.derivative, c * e + s * e, epsilon = 1e-12);
        assert_relative_eq!(quotient.derivative, (c * e - s * e) / (e * e), epsilon = 1e-12);
    }

    use easy_ad::numeric::extra::Pow;

    #[test]
    fn test_pow_equivalents_dx() {
        let mut x_derivatives = Vec::with_capacity(2);
        let x: f64 = 1.35;
        let y: f64 = 2.5;
        {
            let x = Dual::variable(x);
            let y = Dual::constant(y);
            let z = x.pow(y);
            x_derivatives.push(z.derivative);
        }
        {
            let x = Dual::variable(x);
            let z = x.pow(y);
            x_derivatives.push(z.derivative);
        }
        // d(x^y)/dx = y*x^(y-1)
        let also_dx = y * x.pow(y - 1.0);
        assert!(x_derivatives.iter().all(|&dx| dx == also_dx));
    }

    #[test]
    fn test_pow_equivalents_dy() {
        let mut y_derivatives = Vec::with_capacity(2);
        let x: f64 = 1.35;
        let y: f64 = 2.5;
        {
            let x = Dual::constant(x);
            let y = Dual::variable(y);
            let z = x.pow(y);
            y_derivatives.push(z.derivative);
        }
        {
            let y = Dual::variable(y);
            let z = x.pow(y);
            y_derivatives.push(z.derivative);
        }
        // d(x^y)/dy = x^y * ln(x)
        let also_dy = x.pow(y) * x.ln();
        assert!(y_derivatives.iter().all(|&dy| dy == also_dy));
    }

    #[test]
    fn test_x_to_the_x() {
        // d(x^x)/dx = x^x (ln(x) + 1)
        let x = Dual::variable(2.0_f64);
        let y = x.pow(x);
        assert_eq!(y.value, 4.0);
        assert_relative_eq!(y.derivative, 4.0 * (2.0_f64.ln() + 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_equality_tolerance() {
        let a = Dual::new(1.0, 2.0);
        assert_eq!(a, Dual::new(1.0 + 1e-7, 2.0 - 1e-7));
        assert_ne!(a, Dual::new(1.0 + 2e-6, 2.0));
        assert_ne!(a, Dual::new(1.0, 2.0 + 2e-6));
    }

    #[test]
    fn test_sum_and_ordering() {
        let x = Dual::variable(1.5_f64);
        let terms = vec![x, x * x, DualNumber::constant(2.0)];
        let total: Dual<f64> = terms.into_iter().sum();
        assert_eq!(total, Dual::new(1.5 + 2.25 + 2.0, 1.0 + 3.0));
        assert!(Dual::variable(1.0) < Dual::constant(2.0));
        assert_eq!(format!("{}", x), "1.5");
    }
}

#[cfg(test)]
mod elementary_function_tests {
    use approx::assert_relative_eq;
    use easy_ad::differentiation::{Dual, DualNumber, functions};
    use easy_ad::numeric::extra::{
        Acos, Asin, Atan, Cos, Cosh, Exp, Ln, LogBase, Logistic, Real, Sin, Sinh, Sqrt, Tan,
        Tanh,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /**
     * Central finite difference approximation of the derivative.
     */
    fn finite_difference(f: impl Fn(f64) -> f64, x: f64) -> f64 {
        let h = 1e-6;
        (f(x + h) - f(x - h)) / (2.0 * h)
    }

    fn random_inputs(seed: u64) -> Vec<f64> {
        let mut random_generator = ChaCha8Rng::seed_from_u64(seed);
        (0..20).map(|_| random_generator.random_range(0.1..0.9)).collect()
    }

    #[test]
    fn test_trigonometry() {
        for x in random_inputs(16) {
            let dual = Dual::variable(x);
            assert_eq!(dual.sin(), Dual::new(x.sin(), x.cos()));
            assert_eq!(dual.cos(), Dual::new(x.cos(), -x.sin()));
            assert_eq!(dual.tan(), Dual::new(x.tan(), 1.0 / (x.cos() * x.cos())));
        }
    }

    #[test]
    fn test_inverse_trigonometry() {
        for x in random_inputs(17) {
            let dual = Dual::variable(x);
            assert_relative_eq!(
                dual.asin().derivative,
                finite_difference(f64::asin, x),
                epsilon = 1e-5
            );
            assert_relative_eq!(
                dual.acos().derivative,
                finite_difference(f64::acos, x),
                epsilon = 1e-5
            );
            assert_relative_eq!(
                dual.atan().derivative,
                finite_difference(f64::atan, x),
                epsilon = 1e-5
            );
            assert_eq!(dual.atan().derivative, 1.0 / (1.0 + x * x));
        }
    }

    #[test]
    fn test_exponentials_and_logarithms() {
        for x in random_inputs(18) {
            let dual = Dual::variable(x);
            assert_eq!(dual.exp(), Dual::new(x.exp(), x.exp()));
            assert_eq!(dual.ln(), Dual::new(x.ln(), 1.0 / x));
            let log_2 = dual.log_base(2.0);
            assert_relative_eq!(log_2.value, x.log2(), epsilon = 1e-12);
            assert_relative_eq!(log_2.derivative, 1.0 / (x * 2.0_f64.ln()), epsilon = 1e-12);
            let two_to_the_x = functions::exp_base(2.0, dual);
            assert_relative_eq!(
                two_to_the_x.derivative,
                2.0_f64.powf(x) * 2.0_f64.ln(),
                epsilon = 1e-12
            );
            assert_relative_eq!(dual.sqrt().derivative, 0.5 / x.sqrt(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hyperbolic() {
        for x in random_inputs(19) {
            let dual = Dual::variable(x);
            assert_eq!(dual.sinh(), Dual::new(x.sinh(), x.cosh()));
            assert_eq!(dual.cosh(), Dual::new(x.cosh(), x.sinh()));
            assert_relative_eq!(
                dual.tanh().derivative,
                finite_difference(f64::tanh, x),
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn test_logistic() {
        let logistic = |x: f64| 1.0 / (1.0 + (-x).exp());
        for x in random_inputs(20) {
            let dual = Dual::variable(x);
            assert_relative_eq!(dual.logistic().value, logistic(x), epsilon = 1e-12);
            // the logistic function's derivative is σ(x)(1 - σ(x))
            assert_relative_eq!(
                dual.logistic().derivative,
                logistic(x) * (1.0 - logistic(x)),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_chain_rule() {
        // d(sin(x^2))/dx = 2x cos(x^2)
        let mut random_generator = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..20 {
            let x: f64 = random_generator.random_range(-3.0..3.0);
            let y = functions::sin(Dual::variable(x) * Dual::variable(x));
            assert_relative_eq!(y.derivative, 2.0 * x * (x * x).cos(), epsilon = 1e-12);
        }
    }

    fn pythagorean_identity<T: Real>(x: T) -> T {
        x.clone().sin() * x.clone().sin() + x.clone().cos() * x.cos()
    }

    #[test]
    fn test_real_substitution() {
        let y = pythagorean_identity(Dual::variable(1.1_f64));
        assert_eq!(y, DualNumber::constant(1.0));
    }
}
