/*!
 * (Automatic) Differentiation helpers
 *
 * # Automatic Differentiation
 *
 * This module provides structs for performing Forward and Reverse Automatic Differentiation
 *
 * ## Automatic Differentiation is not [Numerical Differentiation](https://en.wikipedia.org/wiki/Numerical_differentiation)
 *
 * You were probably introduced to differentiation as numeric differentiation,
 * ie if you have a function 3x<sup>2</sup> then you can estimate its gradient
 * at some value x by computing 3x<sup>2</sup> and 3(x+ε)<sup>2</sup> for some small ε,
 * finding the change in value and dividing by ε. This is prone to rounding errors for small
 * ε and inaccurate for large ε.
 *
 * Automatic Differentiation instead computes the exact derivative (up to floating point
 * rounding) of every elementary operation and combines them with the chain rule.
 *
 * ## Forward mode
 *
 * A [DualNumber] carries a value and its derivative. Every operator computes the new value
 * and applies the chain rule immediately, so the derivative is available as soon as the
 * function has been evaluated. In single variable mode ([Dual]) the derivative is a number;
 * in multi variable mode ([MultiDual]) the derivative is a [Gradient] seeded one-hot per
 * independent variable by a [VariableSet], and several outputs can be stacked into a
 * [VectorDual] holding the [Jacobian].
 *
 * ```
 * use easy_ad::differentiation::Dual;
 * let x: Dual<f64> = Dual::variable(3.2);
 * let y = 3.0 * x * x;
 * assert_eq!(y.derivative, 3.2 * 6.0);
 * ```
 *
 * ## Reverse mode
 *
 * A [Node] is a handle into a [Graph]. Every operator appends a new node recording its
 * operands and the local derivative with respect to each of them. Asking a node for a
 * [partial](Node::partial) derivative backpropagates through the recorded graph once, summing
 * the products of local derivatives along every path back to each input.
 *
 * ```
 * use easy_ad::differentiation::Graph;
 * let graph = Graph::new();
 * let x = graph.named(3.0, "x");
 * let y = x * x * x;
 * assert_eq!(y.partial(&x), Ok(27.0));
 * ```
 *
 * The two engines are independent of each other, see the [usage] module for a side by side
 * comparison.
 */

mod dual;
mod dual_operations;
pub mod errors;
pub mod functions;
mod gradient;
mod graph;
mod graph_operations;
mod jacobian;
mod operations;
pub mod usage;

pub use dual::{Derivative, Dual, DualNumber, MultiDual};
pub use dual_operations::SwappedOperations;
pub use errors::{DifferentiationError, Result};
pub use gradient::{Gradient, VariableSet, VariableSetId};
pub use graph::{Graph, Index, Node};
pub use jacobian::{Jacobian, VectorDual, directional_derivative, jacobian};

/**
 * A trait with no methods which is implemented for all primitive real types.
 *
 * Importantly this trait is not implemented for [DualNumber]s or [Node]s, which stops the
 * compiler from trying to evaluate nested dual numbers and graph nodes as the constant
 * operand of an operation. Differentiation is only defined for real numbers, so only `f32`
 * and `f64` are primitives.
 */
pub trait Primitive {}
