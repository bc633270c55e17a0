/*!
 * Operator implementations for Nodes.
 *
 * These implementations are written here but Rust docs will display them on the
 * [Node](super::Node) struct page.
 *
 * Nodes implement all the standard library traits for addition, subtraction,
 * multiplication, division and negation, so you can use the normal `+ - * /` operators as
 * you can with normal number types. Each operation records a new node on the graph its
 * operands belong to. As a convenience, these operations can also be used with a constant of
 * the type the Node is generic over on either side, so you can do
 *
 * ```
 * use easy_ad::differentiation::Graph;
 * let graph = Graph::new();
 * let x = graph.variable(2.0_f32);
 * let y: f32 = 2.0;
 * let z = y / x - 1.0;
 * assert_eq!(z.value, 0.0);
 * assert_eq!(z.partial(&x), Ok(-0.5));
 * ```
 *
 * A constant is never recorded as a node of its own, an operation with a constant operand
 * records a single edge to its Node operand.
 *
 * Both operands of an operation on two Nodes must belong to the same [Graph](super::Graph),
 * mixing graphs will panic.
 *
 * Nodes of a [Real] type also implement all of the elementary function traits in
 * [numeric::extra](crate::numeric::extra). Note that to use a method defined in a trait
 * you have to import the trait as well as have a type that implements it!
 */

use crate::differentiation::{Node, Primitive, SwappedOperations};
use crate::numeric::extra::{
    Acos, Asin, Atan, Cos, Cosh, Exp, Ln, LogBase, Logistic, Pow, Real, Sin, Sinh, Sqrt, Tan,
    Tanh,
};
use crate::numeric::Numeric;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

/**
 * A node is displayed by showing its value.
 */
impl<'g, T: std::fmt::Display + Primitive> std::fmt::Display for Node<'g, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/**
 * Any node of a PartialOrd type implements PartialOrd
 *
 * Note that only the values of the nodes are compared.
 */
impl<'g, T: Numeric + Primitive> PartialOrd for Node<'g, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

/**
 * Addition for two nodes of the same type with both referenced and
 * both recorded by the same Graph.
 */
impl<'g, 'l, 'r, T: Numeric + Primitive> Add<&'r Node<'g, T>> for &'l Node<'g, T> {
    type Output = Node<'g, T>;
    #[track_caller]
    #[inline]
    fn add(self, rhs: &Node<'g, T>) -> Self::Output {
        self.binary(
            rhs,
            self.value.clone() + rhs.value.clone(),
            // δ(self + rhs) / δself = 1
            T::one(),
            // δ(self + rhs) / δrhs = 1
            T::one(),
        )
    }
}

macro_rules! node_operator_impl_value_value {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for two nodes of the same type.
         */
        impl<'g, T: Numeric + Primitive> $op for Node<'g, T> {
            type Output = Node<'g, T>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: Node<'g, T>) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! node_operator_impl_value_reference {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for two nodes of the same type with the right referenced.
         */
        impl<'g, T: Numeric + Primitive> $op<&Node<'g, T>> for Node<'g, T> {
            type Output = Node<'g, T>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: &Node<'g, T>) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

macro_rules! node_operator_impl_reference_value {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for two nodes of the same type with the left referenced.
         */
        impl<'g, T: Numeric + Primitive> $op<Node<'g, T>> for &Node<'g, T> {
            type Output = Node<'g, T>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: Node<'g, T>) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

node_operator_impl_value_value!(impl Add for Node { fn add });
node_operator_impl_reference_value!(impl Add for Node { fn add });
node_operator_impl_value_reference!(impl Add for Node { fn add });

/**
 * Addition for a node and a constant of the same type with both referenced.
 */
impl<'g, T: Numeric + Primitive> Add<&T> for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn add(self, rhs: &T) -> Self::Output {
        self.unary(
            self.value.clone() + rhs.clone(),
            // δ(self + C) / δself = 1
            T::one(),
        )
    }
}

macro_rules! node_number_operator_impl_value_value {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for a node and a constant of the same type.
         */
        impl<'g, T: Numeric + Primitive> $op<T> for Node<'g, T> {
            type Output = Node<'g, T>;
            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! node_number_operator_impl_value_reference {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for a node and a constant of the same type with the right referenced.
         */
        impl<'g, T: Numeric + Primitive> $op<&T> for Node<'g, T> {
            type Output = Node<'g, T>;
            #[inline]
            fn $method(self, rhs: &T) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

macro_rules! node_number_operator_impl_reference_value {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for a node and a constant of the same type with the left referenced.
         */
        impl<'g, T: Numeric + Primitive> $op<T> for &Node<'g, T> {
            type Output = Node<'g, T>;
            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

node_number_operator_impl_value_value!(impl Add for Node { fn add });
node_number_operator_impl_reference_value!(impl Add for Node { fn add });
node_number_operator_impl_value_reference!(impl Add for Node { fn add });

/**
 * Multiplication for two referenced nodes of the same type.
 */
impl<'g, 'l, 'r, T: Numeric + Primitive> Mul<&'r Node<'g, T>> for &'l Node<'g, T> {
    type Output = Node<'g, T>;
    #[track_caller]
    #[inline]
    fn mul(self, rhs: &Node<'g, T>) -> Self::Output {
        self.binary(
            rhs,
            self.value.clone() * rhs.value.clone(),
            // δ(self * rhs) / δself = rhs
            rhs.value.clone(),
            // δ(self * rhs) / δrhs = self
            self.value.clone(),
        )
    }
}

node_operator_impl_value_value!(impl Mul for Node { fn mul });
node_operator_impl_reference_value!(impl Mul for Node { fn mul });
node_operator_impl_value_reference!(impl Mul for Node { fn mul });

/**
 * Multiplication for a node and a constant of the same type with both referenced.
 */
impl<'g, T: Numeric + Primitive> Mul<&T> for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn mul(self, rhs: &T) -> Self::Output {
        self.unary(
            self.value.clone() * rhs.clone(),
            // δ(self * C) / δself = C
            rhs.clone(),
        )
    }
}

node_number_operator_impl_value_value!(impl Mul for Node { fn mul });
node_number_operator_impl_reference_value!(impl Mul for Node { fn mul });
node_number_operator_impl_value_reference!(impl Mul for Node { fn mul });

/**
 * Subtraction for two referenced nodes of the same type.
 */
impl<'g, 'l, 'r, T: Numeric + Primitive> Sub<&'r Node<'g, T>> for &'l Node<'g, T> {
    type Output = Node<'g, T>;
    #[track_caller]
    #[inline]
    fn sub(self, rhs: &Node<'g, T>) -> Self::Output {
        self.binary(
            rhs,
            self.value.clone() - rhs.value.clone(),
            // δ(self - rhs) / δself = 1
            T::one(),
            // δ(self - rhs) / δrhs = -1
            -T::one(),
        )
    }
}

node_operator_impl_value_value!(impl Sub for Node { fn sub });
node_operator_impl_reference_value!(impl Sub for Node { fn sub });
node_operator_impl_value_reference!(impl Sub for Node { fn sub });

/**
 * Subtraction for a node and a constant of the same type with both referenced.
 */
impl<'g, T: Numeric + Primitive> Sub<&T> for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn sub(self, rhs: &T) -> Self::Output {
        self.unary(
            self.value.clone() - rhs.clone(),
            // δ(self - C) / δself = 1
            T::one(),
        )
    }
}

node_number_operator_impl_value_value!(impl Sub for Node { fn sub });
node_number_operator_impl_reference_value!(impl Sub for Node { fn sub });
node_number_operator_impl_value_reference!(impl Sub for Node { fn sub });

/**
 * Division for two referenced nodes of the same type, recorded as multiplication by the
 * [reciprocal](Node::recip) of the right hand side.
 */
impl<'g, 'l, 'r, T: Numeric + Primitive> Div<&'r Node<'g, T>> for &'l Node<'g, T> {
    type Output = Node<'g, T>;
    #[track_caller]
    #[inline]
    fn div(self, rhs: &Node<'g, T>) -> Self::Output {
        self * rhs.recip()
    }
}

node_operator_impl_value_value!(impl Div for Node { fn div });
node_operator_impl_reference_value!(impl Div for Node { fn div });
node_operator_impl_value_reference!(impl Div for Node { fn div });

/**
 * Division for a node and a constant of the same type with both referenced.
 */
impl<'g, T: Numeric + Primitive> Div<&T> for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn div(self, rhs: &T) -> Self::Output {
        self * (T::one() / rhs.clone())
    }
}

node_number_operator_impl_value_value!(impl Div for Node { fn div });
node_number_operator_impl_reference_value!(impl Div for Node { fn div });
node_number_operator_impl_value_reference!(impl Div for Node { fn div });

/**
 * Negation for a referenced node of some type.
 */
impl<'g, T: Numeric + Primitive> Neg for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn neg(self) -> Self::Output {
        // δ(-self) / δself = -1
        self.unary(-self.value.clone(), -T::one())
    }
}

/**
 * Negation for a node by value of some type.
 */
impl<'g, T: Numeric + Primitive> Neg for Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'g, T: Numeric + Primitive> SwappedOperations<&T> for &Node<'g, T> {
    type Output = Node<'g, T>;
    /**
     * Subtraction for a node and a constant, where the constant
     * is the left hand side, ie C - node.
     */
    #[inline]
    fn sub_swapped(self, lhs: &T) -> Self::Output {
        self.unary(
            lhs.clone() - self.value.clone(),
            // δ(C - self) / δself = -1
            -T::one(),
        )
    }

    /**
     * Division for a node and a constant, where the constant
     * is the left hand side, ie C / node, recorded as C times the reciprocal of the node.
     */
    #[inline]
    fn div_swapped(self, lhs: &T) -> Self::Output {
        self.recip() * lhs
    }
}

impl<'g, T: Numeric + Primitive> SwappedOperations<T> for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn sub_swapped(self, lhs: T) -> Self::Output {
        self.sub_swapped(&lhs)
    }

    #[inline]
    fn div_swapped(self, lhs: T) -> Self::Output {
        self.div_swapped(&lhs)
    }
}

impl<'g, T: Numeric + Primitive> SwappedOperations<T> for Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn sub_swapped(self, lhs: T) -> Self::Output {
        (&self).sub_swapped(&lhs)
    }

    #[inline]
    fn div_swapped(self, lhs: T) -> Self::Output {
        (&self).div_swapped(&lhs)
    }
}

impl<'g, T: Numeric + Primitive> SwappedOperations<&T> for Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn sub_swapped(self, lhs: &T) -> Self::Output {
        (&self).sub_swapped(lhs)
    }

    #[inline]
    fn div_swapped(self, lhs: &T) -> Self::Output {
        (&self).div_swapped(lhs)
    }
}

macro_rules! number_node_operator_impl {
    ($T:tt) => {
        /**
         * Addition for a constant and a node, ie C + node.
         */
        impl<'g> Add<Node<'g, $T>> for $T {
            type Output = Node<'g, $T>;
            #[inline]
            fn add(self, rhs: Node<'g, $T>) -> Self::Output {
                &rhs + &self
            }
        }

        impl<'g> Add<&Node<'g, $T>> for $T {
            type Output = Node<'g, $T>;
            #[inline]
            fn add(self, rhs: &Node<'g, $T>) -> Self::Output {
                rhs + &self
            }
        }

        /**
         * Multiplication for a constant and a node, ie C * node.
         */
        impl<'g> Mul<Node<'g, $T>> for $T {
            type Output = Node<'g, $T>;
            #[inline]
            fn mul(self, rhs: Node<'g, $T>) -> Self::Output {
                &rhs * &self
            }
        }

        impl<'g> Mul<&Node<'g, $T>> for $T {
            type Output = Node<'g, $T>;
            #[inline]
            fn mul(self, rhs: &Node<'g, $T>) -> Self::Output {
                rhs * &self
            }
        }

        /**
         * Subtraction for a constant and a node, ie C - node.
         */
        impl<'g> Sub<Node<'g, $T>> for $T {
            type Output = Node<'g, $T>;
            #[inline]
            fn sub(self, rhs: Node<'g, $T>) -> Self::Output {
                rhs.sub_swapped(self)
            }
        }

        impl<'g> Sub<&Node<'g, $T>> for $T {
            type Output = Node<'g, $T>;
            #[inline]
            fn sub(self, rhs: &Node<'g, $T>) -> Self::Output {
                rhs.sub_swapped(self)
            }
        }

        /**
         * Division for a constant and a node, ie C / node.
         */
        impl<'g> Div<Node<'g, $T>> for $T {
            type Output = Node<'g, $T>;
            #[inline]
            fn div(self, rhs: Node<'g, $T>) -> Self::Output {
                rhs.div_swapped(self)
            }
        }

        impl<'g> Div<&Node<'g, $T>> for $T {
            type Output = Node<'g, $T>;
            #[inline]
            fn div(self, rhs: &Node<'g, $T>) -> Self::Output {
                rhs.div_swapped(self)
            }
        }
    };
}

number_node_operator_impl!(f32);
number_node_operator_impl!(f64);

macro_rules! node_real_operator_impl_value {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for a node by value.
         */
        impl<'g, T: Real + Primitive> $op for Node<'g, T> {
            type Output = Node<'g, T>;
            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

/**
 * Sine of a node by reference.
 */
impl<'g, T: Real + Primitive> Sin for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn sin(self) -> Self::Output {
        self.unary(
            self.value.clone().sin(),
            // δ(sin(self)) / δself = cos(self)
            self.value.clone().cos(),
        )
    }
}

node_real_operator_impl_value!(impl Sin for Node { fn sin });

/**
 * Cosine of a node by reference.
 */
impl<'g, T: Real + Primitive> Cos for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn cos(self) -> Self::Output {
        self.unary(
            self.value.clone().cos(),
            // δ(cos(self)) / δself = -sin(self)
            -self.value.clone().sin(),
        )
    }
}

node_real_operator_impl_value!(impl Cos for Node { fn cos });

/**
 * Tangent of a node by reference, recorded as sin(self) / cos(self).
 */
impl<'g, T: Real + Primitive> Tan for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn tan(self) -> Self::Output {
        self.sin() / self.cos()
    }
}

node_real_operator_impl_value!(impl Tan for Node { fn tan });

/**
 * Inverse sine of a node by reference.
 */
impl<'g, T: Real + Primitive> Asin for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn asin(self) -> Self::Output {
        let x = self.value.clone();
        self.unary(
            x.clone().asin(),
            // δ(asin(self)) / δself = 1 / sqrt(1 - self^2)
            T::one() / (T::one() - (x.clone() * x)).sqrt(),
        )
    }
}

node_real_operator_impl_value!(impl Asin for Node { fn asin });

/**
 * Inverse cosine of a node by reference.
 */
impl<'g, T: Real + Primitive> Acos for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn acos(self) -> Self::Output {
        let x = self.value.clone();
        self.unary(
            x.clone().acos(),
            // δ(acos(self)) / δself = -1 / sqrt(1 - self^2)
            -(T::one() / (T::one() - (x.clone() * x)).sqrt()),
        )
    }
}

node_real_operator_impl_value!(impl Acos for Node { fn acos });

/**
 * Inverse tangent of a node by reference.
 */
impl<'g, T: Real + Primitive> Atan for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn atan(self) -> Self::Output {
        let x = self.value.clone();
        self.unary(
            x.clone().atan(),
            // δ(atan(self)) / δself = 1 / (1 + self^2)
            T::one() / (T::one() + (x.clone() * x)),
        )
    }
}

node_real_operator_impl_value!(impl Atan for Node { fn atan });

/**
 * Exponential, ie e<sup>x</sup> of a node by reference.
 */
impl<'g, T: Real + Primitive> Exp for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn exp(self) -> Self::Output {
        let exp = self.value.clone().exp();
        // δ(e^self) / δself = e^self
        self.unary(exp.clone(), exp)
    }
}

node_real_operator_impl_value!(impl Exp for Node { fn exp });

/**
 * Natural logarithm, ie ln(x) of a node by reference.
 */
impl<'g, T: Real + Primitive> Ln for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn ln(self) -> Self::Output {
        self.unary(
            self.value.clone().ln(),
            // δ(ln(self)) / δself = 1 / self
            T::one() / self.value.clone(),
        )
    }
}

node_real_operator_impl_value!(impl Ln for Node { fn ln });

/**
 * Logarithm in a constant base of a node by reference.
 */
impl<'g, T: Real + Primitive> LogBase<T> for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn log_base(self, base: T) -> Self::Output {
        let ln_base = base.ln();
        self.unary(
            self.value.clone().ln() / ln_base.clone(),
            // δ(log_a(self)) / δself = 1 / (self ln(a))
            T::one() / (self.value.clone() * ln_base),
        )
    }
}

/**
 * Logarithm in a constant base of a node by value.
 */
impl<'g, T: Real + Primitive> LogBase<T> for Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn log_base(self, base: T) -> Self::Output {
        (&self).log_base(base)
    }
}

/**
 * Hyperbolic sine of a node by reference.
 */
impl<'g, T: Real + Primitive> Sinh for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn sinh(self) -> Self::Output {
        self.unary(
            self.value.clone().sinh(),
            // δ(sinh(self)) / δself = cosh(self)
            self.value.clone().cosh(),
        )
    }
}

node_real_operator_impl_value!(impl Sinh for Node { fn sinh });

/**
 * Hyperbolic cosine of a node by reference.
 */
impl<'g, T: Real + Primitive> Cosh for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn cosh(self) -> Self::Output {
        self.unary(
            self.value.clone().cosh(),
            // δ(cosh(self)) / δself = sinh(self)
            self.value.clone().sinh(),
        )
    }
}

node_real_operator_impl_value!(impl Cosh for Node { fn cosh });

/**
 * Hyperbolic tangent of a node by reference.
 */
impl<'g, T: Real + Primitive> Tanh for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn tanh(self) -> Self::Output {
        let tanh = self.value.clone().tanh();
        // δ(tanh(self)) / δself = 1 - tanh(self)^2
        self.unary(tanh.clone(), T::one() - (tanh.clone() * tanh))
    }
}

node_real_operator_impl_value!(impl Tanh for Node { fn tanh });

/**
 * Logistic function of a node by reference, recorded as 1 / (1 + e<sup>-x</sup>).
 */
impl<'g, T: Real + Primitive> Logistic for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn logistic(self) -> Self::Output {
        ((-self).exp() + T::one()).div_swapped(T::one())
    }
}

node_real_operator_impl_value!(impl Logistic for Node { fn logistic });

/**
 * Square root of a node by reference, recorded as x<sup>0.5</sup>.
 */
impl<'g, T: Real + Primitive> Sqrt for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn sqrt(self) -> Self::Output {
        let half = T::one() / (T::one() + T::one());
        self.pow(half)
    }
}

node_real_operator_impl_value!(impl Sqrt for Node { fn sqrt });

/**
 * Power of one node to another, ie self^rhs for two nodes of the same type with both
 * referenced and both recorded by the same Graph.
 */
impl<'g, 'l, 'r, T: Real + Primitive> Pow<&'r Node<'g, T>> for &'l Node<'g, T> {
    type Output = Node<'g, T>;
    #[track_caller]
    #[inline]
    fn pow(self, rhs: &Node<'g, T>) -> Self::Output {
        let value = self.value.clone().pow(rhs.value.clone());
        self.binary(
            rhs,
            value.clone(),
            // δ(self^rhs) / δself = rhs * self^(rhs - 1)
            rhs.value.clone() * self.value.clone().pow(rhs.value.clone() - T::one()),
            // δ(self^rhs) / δrhs = self^rhs * ln(self)
            value * self.value.clone().ln(),
        )
    }
}

macro_rules! node_real_operator_impl_value_value {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for two nodes of the same type.
         */
        impl<'g, T: Real + Primitive> $op for Node<'g, T> {
            type Output = Node<'g, T>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: Node<'g, T>) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! node_real_operator_impl_value_reference {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for two nodes of the same type with the right referenced.
         */
        impl<'g, T: Real + Primitive> $op<&Node<'g, T>> for Node<'g, T> {
            type Output = Node<'g, T>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: &Node<'g, T>) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

macro_rules! node_real_operator_impl_reference_value {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for two nodes of the same type with the left referenced.
         */
        impl<'g, T: Real + Primitive> $op<Node<'g, T>> for &Node<'g, T> {
            type Output = Node<'g, T>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: Node<'g, T>) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

node_real_operator_impl_value_value!(impl Pow for Node { fn pow });
node_real_operator_impl_reference_value!(impl Pow for Node { fn pow });
node_real_operator_impl_value_reference!(impl Pow for Node { fn pow });

/**
 * Power of a node to a constant of the same type with both referenced.
 */
impl<'g, T: Real + Primitive> Pow<&T> for &Node<'g, T> {
    type Output = Node<'g, T>;
    #[inline]
    fn pow(self, rhs: &T) -> Self::Output {
        self.unary(
            self.value.clone().pow(rhs.clone()),
            // δ(self^C) / δself = C * self^(C - 1)
            rhs.clone() * self.value.clone().pow(rhs.clone() - T::one()),
        )
    }
}

macro_rules! node_real_number_operator_impl_value_value {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for a node and a constant of the same type.
         */
        impl<'g, T: Real + Primitive> $op<T> for Node<'g, T> {
            type Output = Node<'g, T>;
            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! node_real_number_operator_impl_value_reference {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for a node and a constant of the same type with the right referenced.
         */
        impl<'g, T: Real + Primitive> $op<&T> for Node<'g, T> {
            type Output = Node<'g, T>;
            #[inline]
            fn $method(self, rhs: &T) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

macro_rules! node_real_number_operator_impl_reference_value {
    (impl $op:tt for Node { fn $method:ident }) => {
        /**
         * Operation for a node and a constant of the same type with the left referenced.
         */
        impl<'g, T: Real + Primitive> $op<T> for &Node<'g, T> {
            type Output = Node<'g, T>;
            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

node_real_number_operator_impl_value_value!(impl Pow for Node { fn pow });
node_real_number_operator_impl_reference_value!(impl Pow for Node { fn pow });
node_real_number_operator_impl_value_reference!(impl Pow for Node { fn pow });

/**
 * Power of a constant to a node of the same type with both referenced, ie
 * C<sup>node</sup>.
 */
impl<'g, T: Real + Primitive> Pow<&Node<'g, T>> for &T {
    type Output = Node<'g, T>;
    #[inline]
    fn pow(self, rhs: &Node<'g, T>) -> Self::Output {
        let value = self.clone().pow(rhs.value.clone());
        // δ(C^rhs) / δrhs = C^rhs * ln(C)
        rhs.unary(value.clone(), value * self.clone().ln())
    }
}

/**
 * Power of a constant to a node of the same type, ie C<sup>node</sup>.
 */
impl<'g, T: Real + Primitive> Pow<Node<'g, T>> for T {
    type Output = Node<'g, T>;
    #[inline]
    fn pow(self, rhs: Node<'g, T>) -> Self::Output {
        (&self).pow(&rhs)
    }
}

/**
 * Power of a constant to a node of the same type with the right referenced.
 */
impl<'g, T: Real + Primitive> Pow<&Node<'g, T>> for T {
    type Output = Node<'g, T>;
    #[inline]
    fn pow(self, rhs: &Node<'g, T>) -> Self::Output {
        (&self).pow(rhs)
    }
}
