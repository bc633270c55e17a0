use crate::differentiation::{Derivative, DifferentiationError, DualNumber, MultiDual, Primitive, Result};
use crate::numeric::{Numeric, within};

use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

static NEXT_VARIABLE_SET: AtomicU64 = AtomicU64::new(0);

/**
 * Identifies one declaration of a [VariableSet]. Every declaration gets a new id, so dual
 * numbers computed from different declarations can be told apart even if they happen to
 * have the same number of variables.
 *
 * Ids are only unique within one process. A deserialized id is therefore never trusted:
 * each one read back is replaced by a new id, so a stored dual number cannot be combined
 * with variables declared later, nor with other stored dual numbers.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VariableSetId(u64);

impl VariableSetId {
    fn next() -> VariableSetId {
        VariableSetId(NEXT_VARIABLE_SET.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for VariableSetId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<VariableSetId, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer)?;
        Ok(VariableSetId::next())
    }
}

/**
 * The derivative vector of a [MultiDual], one partial derivative per independent variable
 * in the order the variables were declared.
 *
 * A gradient remembers which [VariableSet] seeded it. The derivative of a constant has no
 * set and no entries, and acts as a zero vector of whatever length it is combined with.
 */
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gradient<T> {
    set: Option<VariableSetId>,
    values: Vec<T>,
}

/**
 * Compares two gradients' seeding sets.
 *
 * If either gradient is the derivative of a constant then this is trivially 'true', in so
 * far as the constant adopts the set of the other one.
 */
pub(crate) fn same_set(a: Option<VariableSetId>, b: Option<VariableSetId>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(_), None) => true,
        (None, Some(_)) => true,
        (Some(set_a), Some(set_b)) => set_a == set_b,
    }
}

impl<T> Gradient<T> {
    /**
     * The declaration that seeded this gradient, or None for the derivative of a constant.
     */
    pub fn set(&self) -> Option<VariableSetId> {
        self.set
    }

    /**
     * The partial derivatives, indexed by declared variable position.
     */
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }
}

impl<T: Numeric + Primitive> Gradient<T> {
    /**
     * Finds the position of the single nonzero entry of an independent variable's seed.
     */
    pub(crate) fn seed_index(&self) -> Result<usize> {
        let mut nonzero = self
            .values
            .iter()
            .enumerate()
            .filter(|(_, derivative)| **derivative != T::zero());
        match (nonzero.next(), nonzero.next()) {
            (Some((index, _)), None) => Ok(index),
            (None, _) => Err(DifferentiationError::InvalidVariable { nonzero: 0 }),
            (Some(_), Some(_)) => Err(DifferentiationError::InvalidVariable {
                nonzero: 2 + nonzero.count(),
            }),
        }
    }

    fn map(&self, f: impl Fn(&T) -> T) -> Gradient<T> {
        Gradient {
            set: self.set,
            values: self.values.iter().map(f).collect(),
        }
    }

    #[track_caller]
    fn zip_with(&self, rhs: &Gradient<T>, f: impl Fn(&T, &T) -> T) -> Gradient<T> {
        assert_eq!(
            self.values.len(),
            rhs.values.len(),
            "Gradients of the same VariableSet must have the same length"
        );
        Gradient {
            set: self.set,
            values: self
                .values
                .iter()
                .zip(rhs.values.iter())
                .map(|(x, y)| f(x, y))
                .collect(),
        }
    }
}

impl<T: Clone> Clone for Gradient<T> {
    #[inline]
    fn clone(&self) -> Self {
        Gradient {
            set: self.set,
            values: self.values.clone(),
        }
    }
}

impl<T: Numeric + Primitive> Derivative<T> for Gradient<T> {
    #[inline]
    fn zero() -> Gradient<T> {
        Gradient {
            set: None,
            values: Vec::new(),
        }
    }

    fn scale(&self, factor: &T) -> Gradient<T> {
        self.map(|derivative| derivative.clone() * factor.clone())
    }

    #[track_caller]
    fn plus(&self, rhs: &Gradient<T>) -> Gradient<T> {
        assert!(
            same_set(self.set, rhs.set),
            "Dual numbers must be declared by the same VariableSet"
        );
        match (self.set, rhs.set) {
            (None, None) => Gradient::zero(),
            // If only one input has a set treat the other as a constant
            (Some(_), None) => self.clone(),
            (None, Some(_)) => rhs.clone(),
            (Some(_), Some(_)) => self.zip_with(rhs, |x, y| x.clone() + y.clone()),
        }
    }

    #[track_caller]
    fn minus(&self, rhs: &Gradient<T>) -> Gradient<T> {
        assert!(
            same_set(self.set, rhs.set),
            "Dual numbers must be declared by the same VariableSet"
        );
        match (self.set, rhs.set) {
            (None, None) => Gradient::zero(),
            (Some(_), None) => self.clone(),
            (None, Some(_)) => rhs.negated(),
            (Some(_), Some(_)) => self.zip_with(rhs, |x, y| x.clone() - y.clone()),
        }
    }

    fn negated(&self) -> Gradient<T> {
        self.map(|derivative| -derivative.clone())
    }

    /**
     * Gradients are compared positionally, a missing entry counts as 0. The seeding sets
     * are not compared, so the same function computed from two separate declarations of
     * the same variables is within tolerance of itself.
     */
    fn within(&self, other: &Gradient<T>, tolerance: &T) -> bool {
        if !self.values.is_empty() && !other.values.is_empty() {
            return self.values.len() == other.values.len()
                && self
                    .values
                    .iter()
                    .zip(other.values.iter())
                    .all(|(x, y)| within(x, y, tolerance));
        }
        let zero = T::zero();
        self.values
            .iter()
            .chain(other.values.iter())
            .all(|derivative| within(derivative, &zero, tolerance))
    }
}

/**
 * An ordered list of independent variables declared together.
 *
 * Each variable receives a one-hot [Gradient] seed with a 1 at its own position and 0
 * everywhere else, so every dual number computed from them carries its partial derivative
 * with respect to each variable at the matching position.
 *
 * ```
 * use easy_ad::differentiation::VariableSet;
 * use easy_ad::numeric::extra::Pow;
 * let [x, y] = VariableSet::declare([3.0, 2.0]);
 * // f(x, y) = x^2 y
 * let f = (&x).pow(2.0) * &y;
 * assert_eq!(f.value, 18.0);
 * assert_eq!(f.derivative.values(), &[12.0, 9.0]);
 * ```
 *
 * Dual numbers declared by different VariableSets cannot be combined, even if the
 * declarations are the same length, as the positions of their seeds refer to different
 * variables.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VariableSet {
    id: VariableSetId,
    length: usize,
}

impl VariableSet {
    fn new(length: usize) -> VariableSet {
        VariableSet {
            id: VariableSetId::next(),
            length,
        }
    }

    /**
     * Declares a fixed number of variables at the given values.
     */
    pub fn declare<T: Numeric + Primitive, const N: usize>(values: [T; N]) -> [MultiDual<T>; N] {
        let set = VariableSet::new(N);
        let mut position = 0;
        values.map(|value| {
            let variable = set.seed(value, position);
            position += 1;
            variable
        })
    }

    /**
     * Declares as many variables as the iterator yields, at the values it yields.
     */
    pub fn declare_all<T, I>(values: I) -> Vec<MultiDual<T>>
    where
        T: Numeric + Primitive,
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let set = VariableSet::new(values.len());
        values
            .into_iter()
            .enumerate()
            .map(|(position, value)| set.seed(value, position))
            .collect()
    }

    fn seed<T: Numeric + Primitive>(&self, value: T, position: usize) -> MultiDual<T> {
        DualNumber {
            value,
            derivative: Gradient {
                set: Some(self.id),
                values: (0..self.length)
                    .map(|i| if i == position { T::one() } else { T::zero() })
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_one_hot() {
        let variables = VariableSet::declare_all(vec![1.0, 2.0, 3.0]);
        for (i, variable) in variables.iter().enumerate() {
            assert_eq!(variable.derivative.seed_index(), Ok(i));
            assert_eq!(variable.derivative.len(), 3);
        }
    }

    #[test]
    fn declarations_get_distinct_ids() {
        let [a] = VariableSet::declare([1.0]);
        let [b] = VariableSet::declare([1.0]);
        assert_ne!(a.derivative.set(), b.derivative.set());
    }

    #[test]
    fn constants_adopt_the_other_set() {
        let [x, _] = VariableSet::declare([1.0, 2.0]);
        let constant = Gradient::zero();
        assert_eq!(x.derivative.plus(&constant).values(), &[1.0, 0.0]);
        assert_eq!(constant.minus(&x.derivative).values(), &[-1.0, 0.0]);
        assert!(constant.within(&Gradient::zero(), &1e-6));
    }

    #[test]
    fn scaled_seed_keeps_its_position() {
        let [_, y] = VariableSet::declare([1.0, 2.0]);
        assert_eq!(y.derivative.scale(&2.0).seed_index(), Ok(1));
        assert_eq!(y.derivative.scale(&-0.5).seed_index(), Ok(1));
        assert_eq!(
            Gradient::<f64>::zero().seed_index(),
            Err(DifferentiationError::InvalidVariable { nonzero: 0 })
        );
    }

    #[test]
    #[should_panic(expected = "same VariableSet")]
    fn mixing_sets_panics() {
        let [x] = VariableSet::declare([1.0]);
        let [y] = VariableSet::declare([1.0]);
        let _ = x.derivative.plus(&y.derivative);
    }
}
