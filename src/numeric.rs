/*!
 * Numerical type definitions.
 *
 * [Numeric] covers the arithmetic every differentiable number needs, and
 * [extra::Real] adds the elementary functions. Both are implemented for `f32` and `f64`, and
 * also for [DualNumber](crate::differentiation::DualNumber)s of them, so a function written
 * once against these traits can be evaluated on plain floats or differentiated by
 * substitution.
 */

use std::cmp::PartialOrd;
use std::iter::Sum;
use std::marker::Sized;
use std::ops::{Add, Div, Mul, Neg, Sub};

/**
 * A general purpose numeric trait that defines all the behaviour the automatic
 * differentiation types need their underlying number type to support.
 */
pub trait Numeric
where
    Self: Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Div<Output = Self>
        + Neg<Output = Self>
        + Sum
        + PartialOrd
        + Sized
        + Clone
        + ZeroOne
        + FromUsize,
{
}

/**
 * Anything which implements all the super traits will automatically implement this trait too.
 * This covers `f32` and `f64` and dual numbers of them.
 */
impl<T> Numeric for T where
    T: Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + Sum
        + PartialOrd
        + Sized
        + Clone
        + ZeroOne
        + FromUsize
{
}

/**
 * A trait defining how to obtain 0 and 1 for every implementing type.
 */
pub trait ZeroOne: Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

/**
 * Converts a usize into the implementing type, if it can be represented.
 */
pub trait FromUsize: Sized {
    fn from_usize(n: usize) -> Option<Self>;
}

macro_rules! zero_one_float {
    ($T:ty) => {
        impl ZeroOne for $T {
            #[inline]
            fn zero() -> $T {
                0.0
            }
            #[inline]
            fn one() -> $T {
                1.0
            }
        }

        impl FromUsize for $T {
            #[inline]
            fn from_usize(n: usize) -> Option<$T> {
                Some(n as $T)
            }
        }
    };
}

zero_one_float!(f32);
zero_one_float!(f64);

/**
 * The absolute tolerance used when comparing differentiated quantities for equality, 10^-6.
 */
pub(crate) fn tolerance<T: Numeric>() -> T {
    match T::from_usize(1_000_000) {
        Some(million) => T::one() / million,
        None => T::zero(),
    }
}

/**
 * Checks if `a` and `b` are strictly closer together than `tolerance`.
 */
pub(crate) fn within<T: Numeric>(a: &T, b: &T, tolerance: &T) -> bool {
    let difference = a.clone() - b.clone();
    let distance = if difference < T::zero() {
        -difference
    } else {
        difference
    };
    distance < *tolerance
}

/**
 * Additional traits for the elementary functions.
 */
pub mod extra {
    use crate::numeric::Numeric;

    /**
     * A type which can be square rooted.
     *
     * This is implemented by `f32` and `f64` by value and by reference.
     */
    pub trait Sqrt {
        type Output;
        fn sqrt(self) -> Self::Output;
    }

    /**
     * A type which can compute e^self.
     */
    pub trait Exp {
        type Output;
        fn exp(self) -> Self::Output;
    }

    /**
     * A type which can compute the natural logarithm of self.
     */
    pub trait Ln {
        type Output;
        fn ln(self) -> Self::Output;
    }

    /**
     * A type which can compute the logarithm of self in an arbitrary base.
     */
    pub trait LogBase<Base = Self> {
        type Output;
        fn log_base(self, base: Base) -> Self::Output;
    }

    /**
     * A type which can compute the logistic function 1 / (1 + e^-self).
     */
    pub trait Logistic {
        type Output;
        fn logistic(self) -> Self::Output;
    }

    /**
     * A type which can compute self^rhs.
     *
     * This is implemented by `f32` and `f64` for all combinations of
     * by value and by reference.
     */
    pub trait Pow<Rhs = Self> {
        type Output;
        fn pow(self, rhs: Rhs) -> Self::Output;
    }

    /**
     * A type which can represent Pi.
     */
    pub trait Pi {
        fn pi() -> Self;
    }

    pub trait Sin {
        type Output;
        fn sin(self) -> Self::Output;
    }

    pub trait Cos {
        type Output;
        fn cos(self) -> Self::Output;
    }

    pub trait Tan {
        type Output;
        fn tan(self) -> Self::Output;
    }

    /**
     * Inverse sine, defined on [-1, 1].
     */
    pub trait Asin {
        type Output;
        fn asin(self) -> Self::Output;
    }

    /**
     * Inverse cosine, defined on [-1, 1].
     */
    pub trait Acos {
        type Output;
        fn acos(self) -> Self::Output;
    }

    pub trait Atan {
        type Output;
        fn atan(self) -> Self::Output;
    }

    pub trait Sinh {
        type Output;
        fn sinh(self) -> Self::Output;
    }

    pub trait Cosh {
        type Output;
        fn cosh(self) -> Self::Output;
    }

    pub trait Tanh {
        type Output;
        fn tanh(self) -> Self::Output;
    }

    /**
     * A general purpose extension to [Numeric] that covers every elementary function the
     * automatic differentiation engines differentiate.
     */
    pub trait Real
    where
        Self: Numeric
            + Pi
            + Sqrt<Output = Self>
            + Exp<Output = Self>
            + Ln<Output = Self>
            + Pow<Output = Self>
            + Sin<Output = Self>
            + Cos<Output = Self>
            + Tan<Output = Self>
            + Asin<Output = Self>
            + Acos<Output = Self>
            + Atan<Output = Self>
            + Sinh<Output = Self>
            + Cosh<Output = Self>
            + Tanh<Output = Self>,
    {
    }

    impl<T> Real for T where
        T: Numeric
            + Pi
            + Sqrt<Output = T>
            + Exp<Output = T>
            + Ln<Output = T>
            + Pow<Output = T>
            + Sin<Output = T>
            + Cos<Output = T>
            + Tan<Output = T>
            + Asin<Output = T>
            + Acos<Output = T>
            + Atan<Output = T>
            + Sinh<Output = T>
            + Cosh<Output = T>
            + Tanh<Output = T>
    {
    }

    macro_rules! unary_float {
        (impl $op:tt for $T:ty { fn $method:ident => $inherent:ident }) => {
            impl $op for $T {
                type Output = $T;
                #[inline]
                fn $method(self) -> Self::Output {
                    self.$inherent()
                }
            }

            impl $op for &$T {
                type Output = $T;
                #[inline]
                fn $method(self) -> Self::Output {
                    (*self).$inherent()
                }
            }
        };
    }

    macro_rules! real_float {
        ($T:tt) => {
            unary_float!(impl Sqrt for $T { fn sqrt => sqrt });
            unary_float!(impl Exp for $T { fn exp => exp });
            unary_float!(impl Ln for $T { fn ln => ln });
            unary_float!(impl Sin for $T { fn sin => sin });
            unary_float!(impl Cos for $T { fn cos => cos });
            unary_float!(impl Tan for $T { fn tan => tan });
            unary_float!(impl Asin for $T { fn asin => asin });
            unary_float!(impl Acos for $T { fn acos => acos });
            unary_float!(impl Atan for $T { fn atan => atan });
            unary_float!(impl Sinh for $T { fn sinh => sinh });
            unary_float!(impl Cosh for $T { fn cosh => cosh });
            unary_float!(impl Tanh for $T { fn tanh => tanh });

            // T ^ T
            impl Pow<$T> for $T {
                type Output = $T;
                #[inline]
                fn pow(self, rhs: $T) -> Self::Output {
                    self.powf(rhs)
                }
            }

            // T ^ &T
            impl<'a> Pow<&'a $T> for $T {
                type Output = $T;
                #[inline]
                fn pow(self, rhs: &$T) -> Self::Output {
                    self.powf(*rhs)
                }
            }

            // &T ^ T
            impl<'a> Pow<$T> for &'a $T {
                type Output = $T;
                #[inline]
                fn pow(self, rhs: $T) -> Self::Output {
                    self.powf(rhs)
                }
            }

            // &T ^ &T
            impl<'a, 'b> Pow<&'b $T> for &'a $T {
                type Output = $T;
                #[inline]
                fn pow(self, rhs: &$T) -> Self::Output {
                    self.powf(*rhs)
                }
            }

            impl LogBase<$T> for $T {
                type Output = $T;
                /** `ln(self) / ln(base)` */
                #[inline]
                fn log_base(self, base: $T) -> Self::Output {
                    self.ln() / base.ln()
                }
            }

            impl Logistic for $T {
                type Output = $T;
                #[inline]
                fn logistic(self) -> Self::Output {
                    1.0 / (1.0 + (-self).exp())
                }
            }

            impl Pi for $T {
                #[inline]
                fn pi() -> $T {
                    std::$T::consts::PI
                }
            }
        };
    }

    real_float!(f32);
    real_float!(f64);
}

#[cfg(test)]
mod tests {
    use super::extra::{LogBase, Logistic, Pow, Real};
    use super::*;

    fn takes_real<T: Real>(x: T) -> T {
        x.clone().sin() * x.clone().sin() + x.clone().cos() * x.cos()
    }

    #[test]
    fn floats_are_real() {
        assert!((takes_real(0.3_f64) - 1.0).abs() < 1e-12);
        assert!((takes_real(0.3_f32) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tolerance_is_one_millionth() {
        assert_eq!(tolerance::<f64>(), 1e-6);
        assert!(within(&1.0, &(1.0 + 1e-7), &tolerance()));
        assert!(!within(&1.0, &(1.0 + 1e-5), &tolerance()));
    }

    #[test]
    fn logarithm_and_logistic_of_floats() {
        assert!((8.0_f64.log_base(2.0) - 3.0).abs() < 1e-12);
        assert_eq!(0.0_f64.logistic(), 0.5);
        assert_eq!(2.0_f64.pow(3.0), 8.0);
    }
}
