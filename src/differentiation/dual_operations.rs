#![allow(clippy::double_parens)]
/*!
 * Operator implementations for DualNumbers
 *
 * These implementations are written here but Rust docs will display them on the
 * [DualNumber] struct page.
 *
 * Dual numbers implement all the standard library traits for addition, subtraction,
 * multiplication, division and negation, so you can use the normal `+ - * /` operators as you
 * can with normal number types. Every operator accepts either side by value or by
 * reference, and a constant of the type the dual number is generic over can be used on
 * either side, so you can do
 *
 * ```
 * use easy_ad::differentiation::Dual;
 * let x: Dual<f64> = Dual::variable(2.0);
 * let y: f64 = 2.0;
 * let z: Dual<f64> = y * x + 1.0;
 * assert_eq!(z.value, 5.0);
 * assert_eq!(z.derivative, 2.0);
 * ```
 *
 * A dual number operand is differentiated with the two argument form of each rule (product
 * rule, quotient rule, generalised power rule) and a constant operand with the single
 * argument form, without ever lifting the constant to a dual number.
 *
 * Dual numbers of a [Real] type also implement all of the elementary function traits in
 * [numeric::extra](crate::numeric::extra). Note that to use a method defined in a trait
 * you have to import the trait as well as have a type that implements it!
 */

use crate::differentiation::{Derivative, DualNumber, Primitive};
use crate::numeric::extra::{
    Acos, Asin, Atan, Cos, Cosh, Exp, Ln, LogBase, Logistic, Pi, Pow, Real, Sin, Sinh, Sqrt,
    Tan, Tanh,
};
use crate::numeric::{FromUsize, Numeric, ZeroOne};
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/**
 * A dual number is displayed by showing its value component.
 */
impl<T: std::fmt::Display + Primitive, D> std::fmt::Display for DualNumber<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T: Numeric + Primitive, D: Derivative<T>> ZeroOne for DualNumber<T, D> {
    #[inline]
    fn zero() -> DualNumber<T, D> {
        DualNumber::constant(T::zero())
    }
    #[inline]
    fn one() -> DualNumber<T, D> {
        DualNumber::constant(T::one())
    }
}

impl<T: Numeric + Primitive, D: Derivative<T>> FromUsize for DualNumber<T, D> {
    #[inline]
    fn from_usize(n: usize) -> Option<DualNumber<T, D>> {
        Some(DualNumber::constant(T::from_usize(n)?))
    }
}

/**
 * Any dual number of a PartialOrd type implements PartialOrd
 *
 * Note that as a dual number is intended to be substitutable with its
 * type T only the value parts of the dual numbers are compared.
 */
impl<T: Numeric + Primitive, D: Derivative<T>> PartialOrd for DualNumber<T, D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

/**
 * Any dual number of a Numeric type implements Sum, which is
 * the same as adding a bunch of dual numbers together.
 */
impl<T: Numeric + Primitive, D: Derivative<T>> Sum for DualNumber<T, D> {
    #[track_caller]
    fn sum<I>(iter: I) -> DualNumber<T, D>
    where
        I: Iterator<Item = DualNumber<T, D>>,
    {
        iter.fold(DualNumber::zero(), |total, next| DualNumber {
            value: total.value + next.value,
            derivative: total.derivative.plus(&next.derivative),
        })
    }
}

/**
 * Addition for two dual numbers of the same type with both referenced.
 */
impl<'l, 'r, T: Numeric + Primitive, D: Derivative<T>> Add<&'r DualNumber<T, D>>
    for &'l DualNumber<T, D>
{
    type Output = DualNumber<T, D>;
    #[track_caller]
    #[inline]
    fn add(self, rhs: &DualNumber<T, D>) -> Self::Output {
        DualNumber {
            value: self.value.clone() + rhs.value.clone(),
            derivative: self.derivative.plus(&rhs.derivative),
        }
    }
}

macro_rules! operator_impl_value_value {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for two dual numbers of the same type.
         */
        impl<T: Numeric + Primitive, D: Derivative<T>> $op for DualNumber<T, D> {
            type Output = DualNumber<T, D>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: DualNumber<T, D>) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! operator_impl_value_reference {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for two dual numbers of the same type with the right referenced.
         */
        impl<T: Numeric + Primitive, D: Derivative<T>> $op<&DualNumber<T, D>>
            for DualNumber<T, D>
        {
            type Output = DualNumber<T, D>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: &DualNumber<T, D>) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

macro_rules! operator_impl_reference_value {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for two dual numbers of the same type with the left referenced.
         */
        impl<T: Numeric + Primitive, D: Derivative<T>> $op<DualNumber<T, D>>
            for &DualNumber<T, D>
        {
            type Output = DualNumber<T, D>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: DualNumber<T, D>) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

operator_impl_value_value!(impl Add for DualNumber { fn add });
operator_impl_reference_value!(impl Add for DualNumber { fn add });
operator_impl_value_reference!(impl Add for DualNumber { fn add });

/**
 * Addition for a dual number and a constant of the same type with both referenced.
 */
impl<T: Numeric + Primitive, D: Derivative<T>> Add<&T> for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn add(self, rhs: &T) -> Self::Output {
        DualNumber {
            value: self.value.clone() + rhs.clone(),
            derivative: self.derivative.clone(),
        }
    }
}

macro_rules! dual_number_operator_impl_value_value {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for a dual number and a constant of the same type.
         */
        impl<T: Numeric + Primitive, D: Derivative<T>> $op<T> for DualNumber<T, D> {
            type Output = DualNumber<T, D>;
            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! dual_number_operator_impl_value_reference {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for a dual number and a constant of the same type with the right
         * referenced.
         */
        impl<T: Numeric + Primitive, D: Derivative<T>> $op<&T> for DualNumber<T, D> {
            type Output = DualNumber<T, D>;
            #[inline]
            fn $method(self, rhs: &T) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

macro_rules! dual_number_operator_impl_reference_value {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for a dual number and a constant of the same type with the left
         * referenced.
         */
        impl<T: Numeric + Primitive, D: Derivative<T>> $op<T> for &DualNumber<T, D> {
            type Output = DualNumber<T, D>;
            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

dual_number_operator_impl_value_value!(impl Add for DualNumber { fn add });
dual_number_operator_impl_reference_value!(impl Add for DualNumber { fn add });
dual_number_operator_impl_value_reference!(impl Add for DualNumber { fn add });

/**
 * Multiplication for two referenced dual numbers of the same type.
 */
impl<'l, 'r, T: Numeric + Primitive, D: Derivative<T>> Mul<&'r DualNumber<T, D>>
    for &'l DualNumber<T, D>
{
    type Output = DualNumber<T, D>;
    #[track_caller]
    #[inline]
    fn mul(self, rhs: &DualNumber<T, D>) -> Self::Output {
        DualNumber {
            value: self.value.clone() * rhs.value.clone(),
            // u'v + uv'
            derivative: self
                .derivative
                .scale(&rhs.value)
                .plus(&rhs.derivative.scale(&self.value)),
        }
    }
}

operator_impl_value_value!(impl Mul for DualNumber { fn mul });
operator_impl_reference_value!(impl Mul for DualNumber { fn mul });
operator_impl_value_reference!(impl Mul for DualNumber { fn mul });

/**
 * Multiplication for a dual number and a constant of the same type with both referenced.
 */
impl<T: Numeric + Primitive, D: Derivative<T>> Mul<&T> for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn mul(self, rhs: &T) -> Self::Output {
        DualNumber {
            value: self.value.clone() * rhs.clone(),
            derivative: self.derivative.scale(rhs),
        }
    }
}

dual_number_operator_impl_value_value!(impl Mul for DualNumber { fn mul });
dual_number_operator_impl_reference_value!(impl Mul for DualNumber { fn mul });
dual_number_operator_impl_value_reference!(impl Mul for DualNumber { fn mul });

/**
 * Subtraction for two referenced dual numbers of the same type.
 */
impl<'l, 'r, T: Numeric + Primitive, D: Derivative<T>> Sub<&'r DualNumber<T, D>>
    for &'l DualNumber<T, D>
{
    type Output = DualNumber<T, D>;
    #[track_caller]
    #[inline]
    fn sub(self, rhs: &DualNumber<T, D>) -> Self::Output {
        DualNumber {
            value: self.value.clone() - rhs.value.clone(),
            derivative: self.derivative.minus(&rhs.derivative),
        }
    }
}

operator_impl_value_value!(impl Sub for DualNumber { fn sub });
operator_impl_reference_value!(impl Sub for DualNumber { fn sub });
operator_impl_value_reference!(impl Sub for DualNumber { fn sub });

/**
 * Subtraction for a dual number and a constant of the same type with both referenced.
 */
impl<T: Numeric + Primitive, D: Derivative<T>> Sub<&T> for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn sub(self, rhs: &T) -> Self::Output {
        DualNumber {
            value: self.value.clone() - rhs.clone(),
            derivative: self.derivative.clone(),
        }
    }
}

dual_number_operator_impl_value_value!(impl Sub for DualNumber { fn sub });
dual_number_operator_impl_reference_value!(impl Sub for DualNumber { fn sub });
dual_number_operator_impl_value_reference!(impl Sub for DualNumber { fn sub });

/**
 * Division for two referenced dual numbers of the same type.
 */
impl<'l, 'r, T: Numeric + Primitive, D: Derivative<T>> Div<&'r DualNumber<T, D>>
    for &'l DualNumber<T, D>
{
    type Output = DualNumber<T, D>;
    #[track_caller]
    #[inline]
    fn div(self, rhs: &DualNumber<T, D>) -> Self::Output {
        let denominator = rhs.value.clone() * rhs.value.clone();
        DualNumber {
            value: self.value.clone() / rhs.value.clone(),
            // (u'v - uv') / v^2
            #[rustfmt::skip]
            derivative: (
                self.derivative.scale(&rhs.value)
                    .minus(&rhs.derivative.scale(&self.value))
                    .scale(&(T::one() / denominator))
            ),
        }
    }
}

operator_impl_value_value!(impl Div for DualNumber { fn div });
operator_impl_reference_value!(impl Div for DualNumber { fn div });
operator_impl_value_reference!(impl Div for DualNumber { fn div });

/**
 * Division for a dual number and a constant of the same type with both referenced.
 */
impl<T: Numeric + Primitive, D: Derivative<T>> Div<&T> for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn div(self, rhs: &T) -> Self::Output {
        DualNumber {
            value: self.value.clone() / rhs.clone(),
            // u' / C
            derivative: self.derivative.scale(&(T::one() / rhs.clone())),
        }
    }
}

dual_number_operator_impl_value_value!(impl Div for DualNumber { fn div });
dual_number_operator_impl_reference_value!(impl Div for DualNumber { fn div });
dual_number_operator_impl_value_reference!(impl Div for DualNumber { fn div });

/**
 * Negation for a referenced dual number of some type.
 */
impl<T: Numeric + Primitive, D: Derivative<T>> Neg for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn neg(self) -> Self::Output {
        DualNumber {
            value: -self.value.clone(),
            derivative: self.derivative.negated(),
        }
    }
}

/**
 * Negation for a dual number by value of some type.
 */
impl<T: Numeric + Primitive, D: Derivative<T>> Neg for DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

/**
 * A trait which defines subtraction and division with the arguments
 * swapped around, ie 5.sub_swapped(7) would equal 2. This is how a
 * constant on the left hand side of an operator is differentiated, as
 * the standard library operator traits can only be implemented for concrete
 * left hand side types.
 *
 * Addition and Multiplication are not included because argument order
 * doesn't matter for those operations, so you can just swap the left and
 * right and get the same result.
 */
pub trait SwappedOperations<Lhs = Self> {
    type Output;
    fn sub_swapped(self, lhs: Lhs) -> Self::Output;
    fn div_swapped(self, lhs: Lhs) -> Self::Output;
}

impl<T: Numeric + Primitive, D: Derivative<T>> SwappedOperations<&T> for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    /**
     * Subtraction for a dual number and a constant, where the constant
     * is the left hand side, ie C - dual.
     */
    #[inline]
    fn sub_swapped(self, lhs: &T) -> Self::Output {
        DualNumber {
            value: lhs.clone() - self.value.clone(),
            derivative: self.derivative.negated(),
        }
    }

    /**
     * Division for a dual number and a constant, where the constant
     * is the left hand side, ie C / dual.
     */
    #[inline]
    fn div_swapped(self, lhs: &T) -> Self::Output {
        DualNumber {
            value: lhs.clone() / self.value.clone(),
            // -(C / u^2) u'
            derivative: self
                .derivative
                .scale(&(-lhs.clone() / (self.value.clone() * self.value.clone()))),
        }
    }
}

impl<T: Numeric + Primitive, D: Derivative<T>> SwappedOperations<T> for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn sub_swapped(self, lhs: T) -> Self::Output {
        self.sub_swapped(&lhs)
    }

    #[inline]
    fn div_swapped(self, lhs: T) -> Self::Output {
        self.div_swapped(&lhs)
    }
}

impl<T: Numeric + Primitive, D: Derivative<T>> SwappedOperations<T> for DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn sub_swapped(self, lhs: T) -> Self::Output {
        (&self).sub_swapped(&lhs)
    }

    #[inline]
    fn div_swapped(self, lhs: T) -> Self::Output {
        (&self).div_swapped(&lhs)
    }
}

impl<T: Numeric + Primitive, D: Derivative<T>> SwappedOperations<&T> for DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn sub_swapped(self, lhs: &T) -> Self::Output {
        (&self).sub_swapped(lhs)
    }

    #[inline]
    fn div_swapped(self, lhs: &T) -> Self::Output {
        (&self).div_swapped(lhs)
    }
}

macro_rules! number_dual_operator_impl {
    ($T:tt) => {
        /**
         * Addition for a constant and a dual number, ie C + dual.
         */
        impl<D: Derivative<$T>> Add<DualNumber<$T, D>> for $T {
            type Output = DualNumber<$T, D>;
            #[inline]
            fn add(self, rhs: DualNumber<$T, D>) -> Self::Output {
                &rhs + &self
            }
        }

        impl<D: Derivative<$T>> Add<&DualNumber<$T, D>> for $T {
            type Output = DualNumber<$T, D>;
            #[inline]
            fn add(self, rhs: &DualNumber<$T, D>) -> Self::Output {
                rhs + &self
            }
        }

        /**
         * Multiplication for a constant and a dual number, ie C * dual.
         */
        impl<D: Derivative<$T>> Mul<DualNumber<$T, D>> for $T {
            type Output = DualNumber<$T, D>;
            #[inline]
            fn mul(self, rhs: DualNumber<$T, D>) -> Self::Output {
                &rhs * &self
            }
        }

        impl<D: Derivative<$T>> Mul<&DualNumber<$T, D>> for $T {
            type Output = DualNumber<$T, D>;
            #[inline]
            fn mul(self, rhs: &DualNumber<$T, D>) -> Self::Output {
                rhs * &self
            }
        }

        /**
         * Subtraction for a constant and a dual number, ie C - dual.
         */
        impl<D: Derivative<$T>> Sub<DualNumber<$T, D>> for $T {
            type Output = DualNumber<$T, D>;
            #[inline]
            fn sub(self, rhs: DualNumber<$T, D>) -> Self::Output {
                rhs.sub_swapped(self)
            }
        }

        impl<D: Derivative<$T>> Sub<&DualNumber<$T, D>> for $T {
            type Output = DualNumber<$T, D>;
            #[inline]
            fn sub(self, rhs: &DualNumber<$T, D>) -> Self::Output {
                rhs.sub_swapped(self)
            }
        }

        /**
         * Division for a constant and a dual number, ie C / dual.
         */
        impl<D: Derivative<$T>> Div<DualNumber<$T, D>> for $T {
            type Output = DualNumber<$T, D>;
            #[inline]
            fn div(self, rhs: DualNumber<$T, D>) -> Self::Output {
                rhs.div_swapped(self)
            }
        }

        impl<D: Derivative<$T>> Div<&DualNumber<$T, D>> for $T {
            type Output = DualNumber<$T, D>;
            #[inline]
            fn div(self, rhs: &DualNumber<$T, D>) -> Self::Output {
                rhs.div_swapped(self)
            }
        }
    };
}

number_dual_operator_impl!(f32);
number_dual_operator_impl!(f64);

macro_rules! dual_real_operator_impl_value {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for a dual number by value.
         */
        impl<T: Real + Primitive, D: Derivative<T>> $op for DualNumber<T, D> {
            type Output = DualNumber<T, D>;
            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

/**
 * Sine of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Sin for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn sin(self) -> Self::Output {
        // u' cos(u)
        self.chain(self.value.clone().sin(), self.value.clone().cos())
    }
}

dual_real_operator_impl_value!(impl Sin for DualNumber { fn sin });

/**
 * Cosine of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Cos for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn cos(self) -> Self::Output {
        // -u' sin(u)
        self.chain(self.value.clone().cos(), -self.value.clone().sin())
    }
}

dual_real_operator_impl_value!(impl Cos for DualNumber { fn cos });

/**
 * Tangent of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Tan for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn tan(self) -> Self::Output {
        let secant = T::one() / self.value.clone().cos();
        // u' (1 / cos(u))^2
        self.chain(self.value.clone().tan(), secant.clone() * secant)
    }
}

dual_real_operator_impl_value!(impl Tan for DualNumber { fn tan });

/**
 * Inverse sine of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Asin for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn asin(self) -> Self::Output {
        let x = self.value.clone();
        // u' / sqrt(1 - u^2)
        self.chain(
            x.clone().asin(),
            T::one() / (T::one() - (x.clone() * x)).sqrt(),
        )
    }
}

dual_real_operator_impl_value!(impl Asin for DualNumber { fn asin });

/**
 * Inverse cosine of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Acos for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn acos(self) -> Self::Output {
        let x = self.value.clone();
        // -u' / sqrt(1 - u^2)
        self.chain(
            x.clone().acos(),
            -(T::one() / (T::one() - (x.clone() * x)).sqrt()),
        )
    }
}

dual_real_operator_impl_value!(impl Acos for DualNumber { fn acos });

/**
 * Inverse tangent of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Atan for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn atan(self) -> Self::Output {
        let x = self.value.clone();
        // u' / (1 + u^2)
        self.chain(x.clone().atan(), T::one() / (T::one() + (x.clone() * x)))
    }
}

dual_real_operator_impl_value!(impl Atan for DualNumber { fn atan });

/**
 * Exponential, ie e<sup>x</sup> of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Exp for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn exp(self) -> Self::Output {
        // u' exp(u)
        self.chain(self.value.clone().exp(), self.value.clone().exp())
    }
}

dual_real_operator_impl_value!(impl Exp for DualNumber { fn exp });

/**
 * Natural logarithm, ie ln(x) of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Ln for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn ln(self) -> Self::Output {
        // u' / u
        self.chain(self.value.clone().ln(), T::one() / self.value.clone())
    }
}

dual_real_operator_impl_value!(impl Ln for DualNumber { fn ln });

/**
 * Logarithm in a constant base of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> LogBase<T> for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn log_base(self, base: T) -> Self::Output {
        let ln_base = base.ln();
        // u' / (u ln(a))
        self.chain(
            self.value.clone().ln() / ln_base.clone(),
            T::one() / (self.value.clone() * ln_base),
        )
    }
}

/**
 * Logarithm in a constant base of a dual number by value.
 */
impl<T: Real + Primitive, D: Derivative<T>> LogBase<T> for DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn log_base(self, base: T) -> Self::Output {
        (&self).log_base(base)
    }
}

/**
 * Hyperbolic sine of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Sinh for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn sinh(self) -> Self::Output {
        // u' cosh(u)
        self.chain(self.value.clone().sinh(), self.value.clone().cosh())
    }
}

dual_real_operator_impl_value!(impl Sinh for DualNumber { fn sinh });

/**
 * Hyperbolic cosine of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Cosh for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn cosh(self) -> Self::Output {
        // u' sinh(u)
        self.chain(self.value.clone().cosh(), self.value.clone().sinh())
    }
}

dual_real_operator_impl_value!(impl Cosh for DualNumber { fn cosh });

/**
 * Hyperbolic tangent of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Tanh for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn tanh(self) -> Self::Output {
        let tanh = self.value.clone().tanh();
        // u' (1 - tanh(u)^2)
        self.chain(tanh.clone(), T::one() - (tanh.clone() * tanh))
    }
}

dual_real_operator_impl_value!(impl Tanh for DualNumber { fn tanh });

/**
 * Logistic function, ie 1 / (1 + e<sup>-x</sup>) of a dual number by reference.
 */
impl<T: Real + Primitive, D: Derivative<T>> Logistic for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn logistic(self) -> Self::Output {
        let exp = self.value.clone().exp();
        let denominator = T::one() + exp.clone();
        // u' e^u / (1 + e^u)^2
        self.chain(
            T::one() / (T::one() + (-self.value.clone()).exp()),
            exp / (denominator.clone() * denominator),
        )
    }
}

dual_real_operator_impl_value!(impl Logistic for DualNumber { fn logistic });

/**
 * Square root of a dual number by reference, computed as u<sup>0.5</sup> with the power
 * rule.
 */
impl<T: Real + Primitive, D: Derivative<T>> Sqrt for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn sqrt(self) -> Self::Output {
        let half = T::one() / (T::one() + T::one());
        self.pow(half)
    }
}

dual_real_operator_impl_value!(impl Sqrt for DualNumber { fn sqrt });

/**
 * Power of one dual number to another, ie self^rhs for two dual numbers of
 * the same type with both referenced.
 */
impl<'l, 'r, T: Real + Primitive, D: Derivative<T>> Pow<&'r DualNumber<T, D>>
    for &'l DualNumber<T, D>
{
    type Output = DualNumber<T, D>;
    #[track_caller]
    #[inline]
    fn pow(self, rhs: &DualNumber<T, D>) -> Self::Output {
        let value = self.value.clone().pow(rhs.value.clone());
        DualNumber {
            // (u' * d(u^v)/du) + (v' * d(u^v)/dv) ==
            // (u' * v * u^(v-1)) + (v' * u^v * ln(u))
            #[rustfmt::skip]
            derivative: self.derivative
                .scale(&(rhs.value.clone() * self.value.clone().pow(rhs.value.clone() - T::one())))
                .plus(&rhs.derivative.scale(&(value.clone() * self.value.clone().ln()))),
            value,
        }
    }
}

macro_rules! dual_real_operator_impl_value_value {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for two dual numbers of the same type.
         */
        impl<T: Real + Primitive, D: Derivative<T>> $op for DualNumber<T, D> {
            type Output = DualNumber<T, D>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: DualNumber<T, D>) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! dual_real_operator_impl_value_reference {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for two dual numbers of the same type with the right referenced.
         */
        impl<T: Real + Primitive, D: Derivative<T>> $op<&DualNumber<T, D>>
            for DualNumber<T, D>
        {
            type Output = DualNumber<T, D>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: &DualNumber<T, D>) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

macro_rules! dual_real_operator_impl_reference_value {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for two dual numbers of the same type with the left referenced.
         */
        impl<T: Real + Primitive, D: Derivative<T>> $op<DualNumber<T, D>>
            for &DualNumber<T, D>
        {
            type Output = DualNumber<T, D>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: DualNumber<T, D>) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

dual_real_operator_impl_value_value!(impl Pow for DualNumber { fn pow });
dual_real_operator_impl_reference_value!(impl Pow for DualNumber { fn pow });
dual_real_operator_impl_value_reference!(impl Pow for DualNumber { fn pow });

/**
 * Power of a dual number to a constant of the same type with both referenced.
 */
impl<T: Real + Primitive, D: Derivative<T>> Pow<&T> for &DualNumber<T, D> {
    type Output = DualNumber<T, D>;
    #[inline]
    fn pow(self, rhs: &T) -> Self::Output {
        // (u' * d(u^c)/du) == (u' * c * u^(c-1))
        self.chain(
            self.value.clone().pow(rhs.clone()),
            rhs.clone() * self.value.clone().pow(rhs.clone() - T::one()),
        )
    }
}

macro_rules! dual_real_number_operator_impl_value_value {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for a dual number and a constant of the same type.
         */
        impl<T: Real + Primitive, D: Derivative<T>> $op<T> for DualNumber<T, D> {
            type Output = DualNumber<T, D>;
            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! dual_real_number_operator_impl_value_reference {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for a dual number and a constant of the same type with the right
         * referenced.
         */
        impl<T: Real + Primitive, D: Derivative<T>> $op<&T> for DualNumber<T, D> {
            type Output = DualNumber<T, D>;
            #[inline]
            fn $method(self, rhs: &T) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

macro_rules! dual_real_number_operator_impl_reference_value {
    (impl $op:tt for DualNumber { fn $method:ident }) => {
        /**
         * Operation for a dual number and a constant of the same type with the left
         * referenced.
         */
        impl<T: Real + Primitive, D: Derivative<T>> $op<T> for &DualNumber<T, D> {
            type Output = DualNumber<T, D>;
            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

dual_real_number_operator_impl_value_value!(impl Pow for DualNumber { fn pow });
dual_real_number_operator_impl_reference_value!(impl Pow for DualNumber { fn pow });
dual_real_number_operator_impl_value_reference!(impl Pow for DualNumber { fn pow });

/**
 * Power of a constant to a dual number of the same type with both referenced, ie
 * C<sup>dual</sup>.
 */
impl<T: Real + Primitive, D: Derivative<T>> Pow<&DualNumber<T, D>> for &T {
    type Output = DualNumber<T, D>;
    #[inline]
    fn pow(self, rhs: &DualNumber<T, D>) -> Self::Output {
        let value = self.clone().pow(rhs.value.clone());
        // v' * C^v * ln(C)
        rhs.chain(value.clone(), value * self.clone().ln())
    }
}

/**
 * Power of a constant to a dual number of the same type, ie C<sup>dual</sup>.
 */
impl<T: Real + Primitive, D: Derivative<T>> Pow<DualNumber<T, D>> for T {
    type Output = DualNumber<T, D>;
    #[inline]
    fn pow(self, rhs: DualNumber<T, D>) -> Self::Output {
        (&self).pow(&rhs)
    }
}

/**
 * Power of a constant to a dual number of the same type with the right referenced.
 */
impl<T: Real + Primitive, D: Derivative<T>> Pow<&DualNumber<T, D>> for T {
    type Output = DualNumber<T, D>;
    #[inline]
    fn pow(self, rhs: &DualNumber<T, D>) -> Self::Output {
        (&self).pow(rhs)
    }
}

impl<T: Real + Primitive, D: Derivative<T>> Pi for DualNumber<T, D> {
    #[inline]
    fn pi() -> DualNumber<T, D> {
        DualNumber::constant(T::pi())
    }
}
