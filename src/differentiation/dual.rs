use crate::differentiation::{DifferentiationError, Gradient, Primitive, Result};
use crate::numeric::{Numeric, tolerance, within};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/**
 * A dual number which traces a real number and keeps track of its derivative.
 * This is used to perform Forward Automatic Differentiation.
 *
 * The derivative is generic so the same type and operators cover both modes of forward
 * differentiation:
 *
 * - [Dual], where the derivative is a single number of type `T` and we differentiate with
 *   respect to one input at a time. Pass a function `DualNumber::variable(x)` for the input
 *   you want the derivative with respect to and constants for everything else.
 * - [MultiDual], where the derivative is a [Gradient] holding one partial derivative per
 *   independent variable, declared together by a [VariableSet](crate::differentiation::VariableSet).
 *
 * DualNumber implements only first order differentiation. For example, given a function
 * 3x<sup>2</sup>, you can use calculus to work out that its derivative with respect
 * to x is 6x. By instead writing the function 3x<sup>2</sup> in code using dual numbers you
 * can compute the first order derivative for a given value of x by passing your function
 * `DualNumber::variable(x)`.
 *
 * ```
 * use easy_ad::differentiation::Dual;
 * let x: Dual<f64> = Dual::variable(3.2);
 * let dx = Dual::constant(3.0) * x * x;
 * assert_eq!(dx.derivative, 3.2 * 6.0);
 * ```
 *
 * Every operation builds a new dual number from its inputs, operands are never modified.
 */
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DualNumber<T, D = T> {
    /**
     * The real number
     */
    pub value: T,
    /**
     * The first order derivative of this number with respect to the input(s).
     */
    pub derivative: D,
}

/**
 * A dual number with a single derivative, for differentiating with respect to one input.
 */
pub type Dual<T> = DualNumber<T, T>;

/**
 * A dual number with a [Gradient] of derivatives, one per jointly declared variable.
 */
pub type MultiDual<T> = DualNumber<T, Gradient<T>>;

/**
 * The derivative part of a [DualNumber].
 *
 * Forward differentiation never needs to know whether it is propagating one derivative or
 * many, it only ever scales derivatives by the local derivative of an operation and sums
 * the contributions of each operand. This trait captures exactly that, and is implemented
 * by every [Primitive] for single variable mode and by [Gradient] for multi variable mode.
 */
pub trait Derivative<T>: Clone {
    /**
     * The derivative of a constant.
     */
    fn zero() -> Self;

    /**
     * This derivative multiplied by a (local) derivative, ie one application of the chain
     * rule.
     */
    fn scale(&self, factor: &T) -> Self;

    fn plus(&self, rhs: &Self) -> Self;

    fn minus(&self, rhs: &Self) -> Self;

    fn negated(&self) -> Self;

    /**
     * Checks if every entry of the two derivatives is strictly closer than the tolerance.
     */
    fn within(&self, other: &Self, tolerance: &T) -> bool;
}

impl<T: Numeric + Primitive> Derivative<T> for T {
    #[inline]
    fn zero() -> T {
        T::zero()
    }

    #[inline]
    fn scale(&self, factor: &T) -> T {
        self.clone() * factor.clone()
    }

    #[inline]
    fn plus(&self, rhs: &T) -> T {
        self.clone() + rhs.clone()
    }

    #[inline]
    fn minus(&self, rhs: &T) -> T {
        self.clone() - rhs.clone()
    }

    #[inline]
    fn negated(&self) -> T {
        -self.clone()
    }

    #[inline]
    fn within(&self, other: &T, tolerance: &T) -> bool {
        within(self, other, tolerance)
    }
}

impl<T: Numeric + Primitive, D: Derivative<T>> DualNumber<T, D> {
    /**
     * Creates a dual number from a value and its derivative.
     */
    pub fn new(value: T, derivative: D) -> DualNumber<T, D> {
        DualNumber { value, derivative }
    }

    /**
     * Constants are lifted to dual numbers with a derivative of 0
     */
    pub fn constant(c: T) -> DualNumber<T, D> {
        DualNumber {
            value: c,
            derivative: D::zero(),
        }
    }

    /**
     * Builds the result of a unary function given its value and its derivative with respect
     * to this dual number's value.
     */
    #[inline]
    pub(crate) fn chain(&self, value: T, local_derivative: T) -> DualNumber<T, D> {
        DualNumber {
            value,
            derivative: self.derivative.scale(&local_derivative),
        }
    }
}

impl<T: Numeric + Primitive> DualNumber<T, T> {
    /**
     * To lift a variable that you want to find the derivative of
     * a function to, the dual number starts with a derivative of 1
     */
    pub fn variable(x: T) -> Dual<T> {
        DualNumber {
            value: x,
            derivative: T::one(),
        }
    }

    /**
     * Computes the derivative of a function with respect to x.
     *
     * This is a shorthand for `(function(Dual::variable(x))).derivative`
     *
     * ```
     * use easy_ad::differentiation::Dual;
     * // d(x^3)/dx = 3x^2
     * let dx = Dual::derivative(|x| x * x * x, 2.0);
     * assert_eq!(dx, 12.0);
     * ```
     */
    pub fn derivative(function: impl Fn(Dual<T>) -> Dual<T>, x: T) -> T {
        (function(Dual::variable(x))).derivative
    }
}

impl<T: Numeric + Primitive> DualNumber<T, Gradient<T>> {
    /**
     * Returns the partial derivative of this dual number with respect to one of the
     * independent variables declared by a [VariableSet](crate::differentiation::VariableSet).
     *
     * The variable is located by the position of the only nonzero entry in its gradient, so
     * a declared variable or a multiple of one such as `2x` selects that variable. A gradient
     * with no nonzero entries or more than one, such as a function of several variables, is
     * an [InvalidVariable](DifferentiationError::InvalidVariable) error, and passing a
     * variable from a different declaration than the one this number was computed from is a
     * [MixedVariableSets](DifferentiationError::MixedVariableSets) error.
     *
     * ```
     * use easy_ad::differentiation::{DifferentiationError, VariableSet};
     * let [x, y] = VariableSet::declare([2.0, 3.0]);
     * let f = &x * &y;
     * assert_eq!(f.partial(&x), Ok(3.0));
     * assert_eq!(f.partial(&y), Ok(2.0));
     * assert_eq!(f.partial(&(2.0 * &x)), Ok(3.0));
     * assert!(matches!(
     *     f.partial(&f),
     *     Err(DifferentiationError::InvalidVariable { nonzero: 2 })
     * ));
     * ```
     */
    pub fn partial(&self, variable: &MultiDual<T>) -> Result<T> {
        let index = variable.derivative.seed_index()?;
        match (self.derivative.set(), variable.derivative.set()) {
            (Some(ours), Some(theirs)) if ours != theirs => {
                Err(DifferentiationError::MixedVariableSets)
            }
            // A constant does not depend on any variable
            (None, _) => Ok(T::zero()),
            _ => Ok(self
                .derivative
                .values()
                .get(index)
                .cloned()
                .unwrap_or_else(T::zero)),
        }
    }
}

/**
 * Any dual number of Cloneable types implements clone
 */
impl<T: Clone + Primitive, D: Clone> Clone for DualNumber<T, D> {
    #[inline]
    fn clone(&self) -> Self {
        DualNumber {
            value: self.value.clone(),
            derivative: self.derivative.clone(),
        }
    }
}

/**
 * Any dual number of Copy types implements Copy
 */
impl<T: Copy + Primitive, D: Copy> Copy for DualNumber<T, D> {}

/**
 * Dual numbers are equal if both their values and their derivatives are strictly closer
 * than 10^-6 to each other, element-wise for gradients.
 *
 * This means two dual numbers computed by different expressions for the same function
 * compare equal despite floating point rounding.
 *
 * ```
 * use easy_ad::differentiation::Dual;
 * use easy_ad::numeric::extra::{Cosh, Sinh, Tanh};
 * let x = Dual::variable(0.5_f64);
 * assert_eq!(x.sinh() / x.cosh(), x.tanh());
 * assert_ne!(x.sinh(), x.cosh());
 * ```
 */
impl<T: Numeric + Primitive, D: Derivative<T>> PartialEq for DualNumber<T, D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        let tolerance = tolerance::<T>();
        within(&self.value, &other.value, &tolerance)
            && self.derivative.within(&other.derivative, &tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differentiation::VariableSet;

    #[test]
    fn constants_have_no_derivative() {
        let c: Dual<f64> = DualNumber::constant(4.0);
        assert_eq!(c.derivative, 0.0);
        let c: MultiDual<f64> = DualNumber::constant(4.0);
        assert!(c.derivative.values().is_empty());
        assert_eq!(c.derivative.set(), None);
    }

    #[test]
    fn chain_scales_every_entry() {
        let [x, _y, _z] = VariableSet::declare([1.0, 2.0, 3.0]);
        let scaled = x.chain(5.0, 2.0);
        assert_eq!(scaled.value, 5.0);
        assert_eq!(scaled.derivative.values(), &[2.0, 0.0, 0.0]);
    }

    #[test]
    fn constant_partial_is_zero() {
        let [x] = VariableSet::declare([1.0]);
        let c: MultiDual<f64> = DualNumber::constant(4.0);
        assert_eq!(c.partial(&x), Ok(0.0));
    }

    #[test]
    fn equality_tolerance() {
        let a = Dual::new(1.0, 2.0);
        assert_eq!(a, Dual::new(1.0 + 1e-7, 2.0 - 1e-7));
        assert_ne!(a, Dual::new(1.0 + 1e-5, 2.0));
        assert_ne!(a, Dual::new(1.0, 2.0 + 1e-5));
    }
}
