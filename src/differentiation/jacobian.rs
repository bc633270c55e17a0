use crate::differentiation::{
    DifferentiationError, Dual, DualNumber, MultiDual, Primitive, Result, VariableSet,
    VariableSetId,
};
use crate::numeric::extra::Real;
use crate::numeric::{Numeric, tolerance, within};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/**
 * A dense matrix of partial derivatives, with one row per output of a function and one
 * column per independent variable, stored in row major order.
 */
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Jacobian<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T> Jacobian<T> {
    /**
     * Gets the number of rows in this Jacobian, which is the number of outputs.
     */
    pub fn rows(&self) -> usize {
        self.rows
    }

    /**
     * Gets the number of columns in this Jacobian, which is the number of variables.
     */
    pub fn columns(&self) -> usize {
        self.columns
    }

    /**
     * Returns the dimensionality of this Jacobian in Row, Column format
     */
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /**
     * Gets a reference to the partial derivative of the output at `row` with respect to
     * the variable at `column`, or None if either index is out of bounds.
     */
    pub fn try_get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.rows && column < self.columns {
            self.data.get(row * self.columns + column)
        } else {
            None
        }
    }

    /**
     * Gets a reference to the partial derivative of the output at `row` with respect to
     * the variable at `column`.
     *
     * # Panics
     *
     * If the index is out of bounds.
     */
    #[track_caller]
    pub fn get(&self, row: usize, column: usize) -> &T {
        match self.try_get(row, column) {
            Some(derivative) => derivative,
            None => panic!(
                "Index ({}, {}) out of bounds for Jacobian of size ({}, {})",
                row, column, self.rows, self.columns
            ),
        }
    }

    /**
     * The partial derivatives of one output with respect to every variable.
     *
     * # Panics
     *
     * If the row is out of bounds.
     */
    #[track_caller]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.rows,
            "Row {} out of bounds for Jacobian with {} rows",
            row,
            self.rows
        );
        &self.data[row * self.columns..(row + 1) * self.columns]
    }

    /**
     * Returns an iterator over the partial derivatives of every output with respect to
     * one variable.
     *
     * # Panics
     *
     * If the column is out of bounds.
     */
    #[track_caller]
    pub fn column_iter(&self, column: usize) -> impl Iterator<Item = &T> {
        assert!(
            column < self.columns,
            "Column {} out of bounds for Jacobian with {} columns",
            column,
            self.columns
        );
        self.data.iter().skip(column).step_by(self.columns)
    }
}

impl<T: Clone> Jacobian<T> {
    /**
     * The partial derivatives of every output with respect to one variable.
     *
     * # Panics
     *
     * If the column is out of bounds.
     */
    #[track_caller]
    pub fn column(&self, column: usize) -> Vec<T> {
        self.column_iter(column).cloned().collect()
    }
}

/**
 * A vector valued quantity and its [Jacobian], built by stacking [MultiDual]s computed from
 * the same [VariableSet].
 *
 * ```
 * use easy_ad::differentiation::{VariableSet, VectorDual};
 * let [x, y] = VariableSet::declare([2.0, 5.0]);
 * let f = VectorDual::vconvert(&[&x * &y, &x + &y]).unwrap();
 * assert_eq!(f.value, vec![10.0, 7.0]);
 * assert_eq!(f.derivative.row(0), &[5.0, 2.0]);
 * assert_eq!(f.partial(&y), Ok(vec![2.0, 1.0]));
 * ```
 */
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorDual<T> {
    /**
     * The value of each output
     */
    pub value: Vec<T>,
    /**
     * The partial derivatives of each output (rows) with respect to each variable (columns)
     */
    pub derivative: Jacobian<T>,
    set: Option<VariableSetId>,
}

impl<T: Numeric + Primitive> VectorDual<T> {
    /**
     * Stacks the values and gradients of some dual numbers into a column vector and its
     * Jacobian.
     *
     * Outputs that are constants contribute a row of zeros. If every output is a constant
     * the Jacobian has no columns.
     *
     * Returns [MixedVariableSets](DifferentiationError::MixedVariableSets) if the outputs
     * were computed from more than one declaration.
     */
    pub fn vconvert(outputs: &[MultiDual<T>]) -> Result<VectorDual<T>> {
        let mut set = None;
        let mut columns = 0;
        for output in outputs {
            match (set, output.derivative.set()) {
                (_, None) => (),
                (None, Some(theirs)) => {
                    set = Some(theirs);
                    columns = output.derivative.len();
                }
                (Some(ours), Some(theirs)) => {
                    if ours != theirs {
                        return Err(DifferentiationError::MixedVariableSets);
                    }
                }
            }
        }
        let mut data = Vec::with_capacity(outputs.len() * columns);
        for output in outputs {
            if output.derivative.is_empty() {
                data.extend(std::iter::repeat_n(T::zero(), columns));
            } else {
                data.extend(output.derivative.values().iter().cloned());
            }
        }
        Ok(VectorDual {
            value: outputs.iter().map(|output| output.value.clone()).collect(),
            derivative: Jacobian {
                rows: outputs.len(),
                columns,
                data,
            },
            set,
        })
    }

    /**
     * The declaration the outputs were computed from, or None if every output is a constant.
     */
    pub fn set(&self) -> Option<VariableSetId> {
        self.set
    }

    /**
     * Returns the partial derivatives of every output with respect to one of the declared
     * variables, ie that variable's column of the Jacobian.
     *
     * This fails in the same ways as [DualNumber::partial](DualNumber::partial).
     */
    pub fn partial(&self, variable: &MultiDual<T>) -> Result<Vec<T>> {
        let index = variable.derivative.seed_index()?;
        match (self.set, variable.derivative.set()) {
            (Some(ours), Some(theirs)) if ours != theirs => {
                Err(DifferentiationError::MixedVariableSets)
            }
            _ => Ok((0..self.derivative.rows())
                .map(|row| {
                    self.derivative
                        .try_get(row, index)
                        .cloned()
                        .unwrap_or_else(T::zero)
                })
                .collect()),
        }
    }
}

/**
 * Vector duals are equal if they have the same number of outputs and every value and
 * partial derivative is strictly closer than 10^-6 to its counterpart. A Jacobian with no
 * columns is equal to one of only zeros.
 */
impl<T: Numeric + Primitive> PartialEq for VectorDual<T> {
    fn eq(&self, other: &Self) -> bool {
        let tolerance = tolerance::<T>();
        if self.value.len() != other.value.len()
            || !self
                .value
                .iter()
                .zip(other.value.iter())
                .all(|(x, y)| within(x, y, &tolerance))
        {
            return false;
        }
        let (ours, theirs) = (&self.derivative, &other.derivative);
        if ours.columns > 0 && theirs.columns > 0 {
            return ours.columns == theirs.columns
                && ours
                    .data
                    .iter()
                    .zip(theirs.data.iter())
                    .all(|(x, y)| within(x, y, &tolerance));
        }
        let zero = T::zero();
        ours.data
            .iter()
            .chain(theirs.data.iter())
            .all(|derivative| within(derivative, &zero, &tolerance))
    }
}

/**
 * Evaluates a vector valued function at a point and returns its values and Jacobian.
 *
 * The function is passed one independent variable per entry in the point, declared together
 * by a single [VariableSet].
 *
 * ```
 * use easy_ad::differentiation::jacobian;
 * use easy_ad::numeric::extra::Sin;
 * // f(x, y) = [x y, sin(x)]
 * let f = jacobian(|v| vec![&v[0] * &v[1], (&v[0]).sin()], &[0.0, 3.0]).unwrap();
 * assert_eq!(f.value, vec![0.0, 0.0]);
 * assert_eq!(f.derivative.row(0), &[3.0, 0.0]);
 * assert_eq!(f.derivative.row(1), &[1.0, 0.0]);
 * ```
 */
pub fn jacobian<T, F>(function: F, point: &[T]) -> Result<VectorDual<T>>
where
    T: Numeric + Primitive,
    F: FnOnce(&[MultiDual<T>]) -> Vec<MultiDual<T>>,
{
    let variables = VariableSet::declare_all(point.iter().cloned());
    VectorDual::vconvert(&function(&variables))
}

/**
 * Evaluates a scalar function of several inputs at a point and returns its value and its
 * derivative along a direction.
 *
 * The direction is normalized to unit length first, and each input is seeded with the
 * matching entry of the normalized direction. A single forward pass then yields the rate of
 * change of the function when moving away from the point along that direction.
 *
 * Returns [InvalidDirection](DifferentiationError::InvalidDirection) if the direction has
 * a different number of entries than the point or has length 0.
 *
 * ```
 * use easy_ad::differentiation::directional_derivative;
 * // f(x, y) = x y, moving along (3, 4) / 5 from (1, 2)
 * let f = directional_derivative(|v| v[0] * v[1], &[1.0_f64, 2.0], &[3.0, 4.0]).unwrap();
 * assert_eq!(f.value, 2.0);
 * assert!((f.derivative - 2.0).abs() < 1e-12);
 * ```
 */
pub fn directional_derivative<T, F>(function: F, point: &[T], direction: &[T]) -> Result<Dual<T>>
where
    T: Real + Primitive,
    F: FnOnce(&[Dual<T>]) -> Dual<T>,
{
    if point.len() != direction.len() {
        return Err(DifferentiationError::InvalidDirection);
    }
    let length = direction
        .iter()
        .map(|d| d.clone() * d.clone())
        .sum::<T>()
        .sqrt();
    if length == T::zero() {
        return Err(DifferentiationError::InvalidDirection);
    }
    let inputs: Vec<Dual<T>> = point
        .iter()
        .zip(direction.iter())
        .map(|(x, d)| DualNumber::new(x.clone(), d.clone() / length.clone()))
        .collect();
    Ok(function(&inputs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jacobian_indexing() {
        let jacobian = Jacobian {
            rows: 2,
            columns: 3,
            data: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        };
        assert_eq!(jacobian.size(), (2, 3));
        assert_eq!(*jacobian.get(1, 0), 4.0);
        assert_eq!(jacobian.try_get(2, 0), None);
        assert_eq!(jacobian.try_get(0, 3), None);
        assert_eq!(jacobian.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(jacobian.column(2), vec![3.0, 6.0]);
    }

    #[test]
    #[should_panic]
    fn jacobian_out_of_bounds() {
        let jacobian = Jacobian {
            rows: 1,
            columns: 1,
            data: vec![1.0],
        };
        jacobian.get(0, 1);
    }

    #[test]
    fn constants_make_zero_rows() {
        let [x, y] = VariableSet::declare([1.0, 2.0]);
        let f = VectorDual::vconvert(&[&x + &y, DualNumber::constant(4.0)]).unwrap();
        assert_eq!(f.derivative.row(1), &[0.0, 0.0]);
        let only_constants = VectorDual::vconvert(&[MultiDual::constant(4.0)]).unwrap();
        assert_eq!(only_constants.derivative.size(), (1, 0));
        assert_eq!(only_constants.set(), None);
        assert_eq!(only_constants.partial(&x), Ok(vec![0.0]));
    }

    #[test]
    fn multiple_of_a_variable_selects_its_column() {
        let [x, y] = VariableSet::declare([2.0, 3.0]);
        let f = VectorDual::vconvert(&[&x * &y, &x + &y]).unwrap();
        assert_eq!(f.partial(&(3.0 * &y)), Ok(vec![2.0, 1.0]));
        assert_eq!(
            f.partial(&(&x + &y)),
            Err(DifferentiationError::InvalidVariable { nonzero: 2 })
        );
    }

    #[test]
    fn mixed_declarations_are_rejected() {
        let [x] = VariableSet::declare([1.0]);
        let [y] = VariableSet::declare([1.0]);
        assert_eq!(
            VectorDual::vconvert(&[x.clone(), y.clone()]),
            Err(DifferentiationError::MixedVariableSets)
        );
        let f = VectorDual::vconvert(&[x]).unwrap();
        assert_eq!(f.partial(&y), Err(DifferentiationError::MixedVariableSets));
    }

    #[test]
    fn zero_direction_is_rejected() {
        let f = |v: &[Dual<f64>]| v[0] * v[1];
        assert_eq!(
            directional_derivative(f, &[1.0, 2.0], &[0.0, 0.0]),
            Err(DifferentiationError::InvalidDirection)
        );
        assert_eq!(
            directional_derivative(f, &[1.0, 2.0], &[1.0]),
            Err(DifferentiationError::InvalidDirection)
        );
    }
}
