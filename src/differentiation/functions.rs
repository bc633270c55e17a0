/*!
 * Elementary functions as free functions.
 *
 * Every function here is generic over the matching trait in
 * [numeric::extra](crate::numeric::extra), so the same call works on plain floats, on
 * [DualNumber](super::DualNumber)s and on [Node](super::Node)s, by value or by reference.
 *
 * ```
 * use easy_ad::differentiation::{Dual, Graph};
 * use easy_ad::differentiation::functions::{exp, sin};
 * let x = Dual::variable(0.0_f64);
 * assert_eq!(sin(x).derivative, 1.0);
 * let graph = Graph::new();
 * let y = graph.variable(0.0_f64);
 * assert_eq!(exp(y).partial(&y), Ok(1.0));
 * assert_eq!(sin(0.0_f64), 0.0);
 * ```
 */

use crate::numeric::extra::{
    Acos, Asin, Atan, Cos, Cosh, Exp, Ln, LogBase, Logistic, Pow, Sin, Sinh, Sqrt, Tan, Tanh,
};

use std::ops::Mul;

pub fn sin<X: Sin>(x: X) -> X::Output {
    x.sin()
}

pub fn cos<X: Cos>(x: X) -> X::Output {
    x.cos()
}

pub fn tan<X: Tan>(x: X) -> X::Output {
    x.tan()
}

/**
 * Inverse sine, defined on [-1, 1].
 */
pub fn arcsin<X: Asin>(x: X) -> X::Output {
    x.asin()
}

/**
 * Inverse cosine, defined on [-1, 1].
 */
pub fn arccos<X: Acos>(x: X) -> X::Output {
    x.acos()
}

pub fn arctan<X: Atan>(x: X) -> X::Output {
    x.atan()
}

pub fn exp<X: Exp>(x: X) -> X::Output {
    x.exp()
}

/**
 * Natural logarithm.
 */
pub fn log<X: Ln>(x: X) -> X::Output {
    x.ln()
}

/**
 * Logarithm of `x` in a constant base.
 */
pub fn log_base<A, X: LogBase<A>>(base: A, x: X) -> X::Output {
    x.log_base(base)
}

/**
 * `base` to the power of `x`.
 *
 * ```
 * use easy_ad::differentiation::Dual;
 * use easy_ad::differentiation::functions::exp_base;
 * // d(2^x)/dx = 2^x ln(2)
 * let y = exp_base(2.0_f64, Dual::variable(3.0));
 * assert_eq!(y.value, 8.0);
 * assert!((y.derivative - 8.0 * 2.0_f64.ln()).abs() < 1e-12);
 * ```
 */
pub fn exp_base<A: Pow<X>, X>(base: A, x: X) -> A::Output {
    base.pow(x)
}

pub fn sinh<X: Sinh>(x: X) -> X::Output {
    x.sinh()
}

pub fn cosh<X: Cosh>(x: X) -> X::Output {
    x.cosh()
}

pub fn tanh<X: Tanh>(x: X) -> X::Output {
    x.tanh()
}

/**
 * The logistic function 1 / (1 + e<sup>-x</sup>).
 */
pub fn logistic<X: Logistic>(x: X) -> X::Output {
    x.logistic()
}

pub fn sqrt<X: Sqrt>(x: X) -> X::Output {
    x.sqrt()
}

/**
 * Multiplies every factor together, from right to left, so the last two factors are
 * multiplied first.
 *
 * A single factor is returned as is and there is no product of no factors.
 *
 * ```
 * use easy_ad::differentiation::VariableSet;
 * use easy_ad::differentiation::functions::product;
 * let [x, y, z] = VariableSet::declare([2.0, 3.0, 4.0]);
 * let f = product(&[x, y, z]).unwrap();
 * assert_eq!(f.value, 24.0);
 * assert_eq!(f.derivative.values(), &[12.0, 8.0, 6.0]);
 * assert!(product::<f64>(&[]).is_none());
 * ```
 */
pub fn product<X: Clone + Mul<Output = X>>(factors: &[X]) -> Option<X> {
    let (last, rest) = factors.split_last()?;
    Some(
        rest.iter()
            .rev()
            .fold(last.clone(), |total, factor| factor.clone() * total),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_of_one_factor_is_itself() {
        assert_eq!(product(&[7.0]), Some(7.0));
        assert_eq!(product(&[2.0, 3.0, 4.0]), Some(24.0));
    }

    #[test]
    fn free_functions_match_methods() {
        let x = 0.3_f64;
        assert_eq!(sin(x), x.sin());
        assert_eq!(arctan(&x), x.atan());
        assert!((log_base(2.0, 8.0_f64) - 3.0).abs() < 1e-12);
        assert_eq!(exp_base(2.0_f64, 3.0_f64), 8.0);
    }
}
