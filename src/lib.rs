/*!
 * If this is your first time using Easy AD you should check out the
 * [differentiation](./differentiation/index.html) module for an overview of forward and
 * reverse automatic differentiation, then the [usage](./differentiation/usage/index.html)
 * page for a side by side comparison of the two.
 *
 * # Modules
 * - [Forward and Reverse Automatic Differentiation](./differentiation/index.html)
 * - [Numeric traits for the number types that can be differentiated](./numeric/index.html)
 *
 * # Features
 * - `serde`: derives `Serialize` and `Deserialize` for dual numbers, gradients and
 *   Jacobians.
 */

pub mod differentiation;
pub mod numeric;
