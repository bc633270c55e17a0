/*!
 * # Usage of DualNumber and Graph
 *
 * [DualNumber](super::DualNumber)s perform forward automatic differentiation and
 * [Node](super::Node)s of a [Graph](super::Graph) perform reverse automatic differentiation.
 *
 * A dual number is more or less a one to one substitution for the number type it wraps.
 * Single variable dual numbers ([Dual](super::Dual)) and multi variable dual numbers
 * ([MultiDual](super::MultiDual)) both implement `Numeric` and `Real`, so a function written
 * generically over [Real](crate::numeric::extra::Real) can be evaluated on `f32`s and
 * differentiated by passing it dual numbers instead.
 *
 * Nodes require building a computation graph of the values and dependencies of each
 * operation performed on them. This means operations on nodes have side effects, they append
 * entries onto a `Graph`. The side effects are abstracted away, just create a `Graph` before
 * you start creating Nodes and keep it alive while you use them.
 *
 * Given some function from N inputs to M outputs you can pass it dual numbers or nodes
 * and retrieve the first derivatives from the outputs for all combinations of N and M.
 * A `Dual` needs one pass per input, a `MultiDual` computes every input at once but carries
 * N derivatives through each operation, and a backpropagation needs one pass per output.
 * If N >> M then you should use a `Graph`. If N << M then dual numbers will be cheaper.
 *
 * For this example we use a function which takes two inputs, r and a, and returns two
 * outputs, x and y.
 *
 * ```
 * use easy_ad::numeric::extra::Real;
 * fn cartesian<T: Real>(r: T, angle: T) -> (T, T) {
 *     let x = r.clone() * angle.clone().cos();
 *     let y = r * angle.sin();
 *     (x, y)
 * }
 * let (x, y) = cartesian(1.0_f32, 2.0);
 * assert!((x - 2.0_f32.cos()).abs() < 1e-6);
 * assert!((y - 2.0_f32.sin()).abs() < 1e-6);
 * ```
 *
 * ## Using Dual
 *
 * ```
 * use easy_ad::differentiation::Dual;
 * # use easy_ad::numeric::extra::Real;
 * # fn cartesian<T: Real>(r: T, angle: T) -> (T, T) {
 * #     let x = r.clone() * angle.clone().cos();
 * #     let y = r * angle.sin();
 * #     (x, y)
 * # }
 * // first find dx/dr and dy/dr
 * let (x, y) = cartesian(Dual::variable(1.0_f32), Dual::constant(2.0));
 * let dx_dr = x.derivative;
 * let dy_dr = y.derivative;
 * // now find dx/da and dy/da
 * let (x, y) = cartesian(Dual::constant(1.0_f32), Dual::variable(2.0));
 * let dx_da = x.derivative;
 * let dy_da = y.derivative;
 * assert!((dx_dr - 2.0_f32.cos()).abs() < 1e-6);
 * assert!((dy_dr - 2.0_f32.sin()).abs() < 1e-6);
 * assert!((dx_da + 2.0_f32.sin()).abs() < 1e-6);
 * assert!((dy_da - 2.0_f32.cos()).abs() < 1e-6);
 * ```
 *
 * ## Using MultiDual
 *
 * ```
 * use easy_ad::differentiation::{VariableSet, VectorDual};
 * # use easy_ad::numeric::extra::Real;
 * # fn cartesian<T: Real>(r: T, angle: T) -> (T, T) {
 * #     let x = r.clone() * angle.clone().cos();
 * #     let y = r * angle.sin();
 * #     (x, y)
 * # }
 * // declare both inputs together to differentiate with respect to each in one pass
 * let [r, a] = VariableSet::declare([1.0_f32, 2.0]);
 * let (x, y) = cartesian(r.clone(), a.clone());
 * let dx_dr = x.partial(&r).unwrap();
 * let dx_da = x.partial(&a).unwrap();
 * // or stack the outputs into a Jacobian
 * let jacobian = VectorDual::vconvert(&[x, y]).unwrap();
 * assert_eq!(jacobian.derivative.row(0), &[dx_dr, dx_da]);
 * let dy_dr = *jacobian.derivative.get(1, 0);
 * let dy_da = *jacobian.derivative.get(1, 1);
 * assert!((dy_dr - 2.0_f32.sin()).abs() < 1e-6);
 * assert!((dy_da - 2.0_f32.cos()).abs() < 1e-6);
 * ```
 *
 * ## Using Graph
 *
 * ```
 * use easy_ad::differentiation::{Graph, Node};
 * use easy_ad::numeric::extra::{Cos, Sin};
 * // the lifetimes tell the rust compiler that our inputs and outputs
 * // can all live as long as the Graph
 * fn cartesian<'g>(
 *     r: Node<'g, f32>,
 *     angle: Node<'g, f32>
 * ) -> (Node<'g, f32>, Node<'g, f32>) {
 *     let x = r * angle.cos();
 *     let y = r * angle.sin();
 *     (x, y)
 * }
 * // first we must construct a Graph to create nodes on
 * let graph = Graph::new();
 * let r = graph.named(1.0, "r");
 * let a = graph.named(2.0, "a");
 * let (x, y) = cartesian(r, a);
 * // first find dx/dr and dx/da
 * let x_derivatives = x.gradient(&[r, a]).unwrap();
 * let dx_dr = x_derivatives[0];
 * let dx_da = x_derivatives[1];
 * // now find dy/dr and dy/da
 * let dy_dr = y.partial(&r).unwrap();
 * let dy_da = y.partial(&a).unwrap();
 * assert!((dx_dr - 2.0_f32.cos()).abs() < 1e-6);
 * assert!((dx_da + 2.0_f32.sin()).abs() < 1e-6);
 * assert!((dy_dr - 2.0_f32.sin()).abs() < 1e-6);
 * assert!((dy_da - 2.0_f32.cos()).abs() < 1e-6);
 * ```
 *
 * Nodes are not `Numeric` because every node needs a graph to be recorded on, so
 * constants cannot be conjured from nothing. Functions for nodes are instead written against
 * the operator and [numeric::extra](crate::numeric::extra) traits directly, or against the
 * generic [functions](super::functions).
 *
 * ## Derivatives along a direction
 *
 * If only the rate of change along one direction is needed, a single pass with dual
 * numbers seeded by that direction is enough.
 *
 * ```
 * use easy_ad::differentiation::directional_derivative;
 * # use easy_ad::numeric::extra::Real;
 * # fn cartesian<T: Real>(r: T, angle: T) -> (T, T) {
 * #     let x = r.clone() * angle.clone().cos();
 * #     let y = r * angle.sin();
 * #     (x, y)
 * # }
 * // moving along r only gives back dx/dr
 * let x = directional_derivative(|v| cartesian(v[0], v[1]).0, &[1.0_f32, 2.0], &[3.0, 0.0])
 *     .unwrap();
 * assert!((x.derivative - 2.0_f32.cos()).abs() < 1e-6);
 * ```
 */
