/*!
 * Error types for looking up derivatives.
 *
 * Evaluating a function never fails, the errors here only arise when asking for a
 * derivative with respect to something that cannot be differentiated against.
 */

use thiserror::Error;

/**
 * Result type alias for derivative lookups.
 */
pub type Result<T> = std::result::Result<T, DifferentiationError>;

/**
 * An error indicating a partial derivative could not be looked up.
 */
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
pub enum DifferentiationError {
    /**
     * The dual number a partial derivative was requested against is not an independent
     * variable, ie its derivative does not have exactly one nonzero entry.
     */
    #[error(
        "Partial derivatives can only be taken with respect to an independent variable, but the derivative had {nonzero} nonzero entries"
    )]
    InvalidVariable {
        /**
         * How many entries of the derivative were not 0.
         */
        nonzero: usize,
    },

    /**
     * The reverse mode node does not depend on the requested node, either because the
     * requested node is not an ancestor of it or because it was recorded on a different
     * graph.
     */
    #[error("The node does not depend on the requested node")]
    NotDependent,

    /**
     * Two dual numbers declared by different variable sets were combined or compared, so
     * the positions of their derivatives refer to different variables.
     */
    #[error("Dual numbers declared by different variable sets cannot be differentiated against each other")]
    MixedVariableSets,

    /**
     * A directional derivative was requested along a direction that is the zero vector or
     * does not have one entry per input.
     */
    #[error("The direction must be a non zero vector with one entry per input")]
    InvalidDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_themselves() {
        assert_eq!(
            DifferentiationError::InvalidVariable { nonzero: 3 }.to_string(),
            "Partial derivatives can only be taken with respect to an independent variable, but the derivative had 3 nonzero entries"
        );
        assert_eq!(
            DifferentiationError::NotDependent.to_string(),
            "The node does not depend on the requested node"
        );
    }
}
