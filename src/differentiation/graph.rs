use crate::differentiation::{DifferentiationError, Primitive, Result};
use crate::numeric::{Numeric, tolerance, within};

use std::cell::RefCell;

/**
 * The position of a node in the [Graph] that recorded it.
 */
pub type Index = usize;

/**
 * A link from a node to one of its operands, with the local derivative of the node with
 * respect to that operand evaluated when the node was recorded.
 */
#[derive(Clone, Debug)]
struct Edge<T> {
    node: Index,
    derivative: T,
}

#[derive(Debug)]
struct Vertex<T> {
    name: Option<String>,
    children: Vec<Edge<T>>,
    /**
     * The accumulated derivative of this vertex with respect to every vertex recorded
     * before it, None until this vertex has been backpropagated.
     */
    partials: Option<Vec<Option<T>>>,
}

/**
 * A computation graph which records every operation performed on its [Node]s.
 * This is used to perform Reverse Automatic Differentiation.
 *
 * The graph owns all of the nodes it records. Nodes are lightweight handles that borrow the
 * graph, so the graph must be created first and must outlive every node of it.
 *
 * ```
 * use easy_ad::differentiation::Graph;
 * let graph = Graph::new();
 * let x = graph.variable(2.0);
 * let y = graph.variable(5.0);
 * let z = x * y + x;
 * assert_eq!(z.value, 12.0);
 * assert_eq!(graph.len(), 4);
 * assert_eq!(z.gradient(&[x, y]), Ok(vec![6.0, 2.0]));
 * ```
 *
 * Each operation is recorded as a new node holding the local derivative of the operation
 * with respect to each of its operands. Operands are always recorded before the operations
 * on them, so a node's children have smaller indexes than it and the graph cannot contain
 * cycles.
 *
 * A Graph uses interior mutability to append nodes and cache backpropagation results, so it
 * can only be used from one thread at a time.
 */
#[derive(Debug)]
pub struct Graph<T> {
    vertices: RefCell<Vec<Vertex<T>>>,
}

/**
 * A node of a [Graph], either an input variable or the result of an operation on other
 * nodes of the same graph.
 *
 * Nodes implement all the standard library operators and the elementary function traits in
 * [numeric::extra](crate::numeric::extra), recording every operation as a new node. A node
 * can then be asked for its [partial](Node::partial) derivative with respect to any node of
 * the same graph.
 *
 * ```
 * use easy_ad::differentiation::Graph;
 * let graph = Graph::new();
 * let x = graph.named(3.0, "x");
 * let y = x * x * x;
 * assert_eq!(y.partial(&x), Ok(27.0));
 * assert_eq!(x.name(), Some("x".to_string()));
 * ```
 */
pub struct Node<'g, T> {
    /**
     * The real number
     */
    pub value: T,
    graph: &'g Graph<T>,
    index: Index,
}

impl<T> Graph<T> {
    /**
     * Creates a new empty computation graph.
     */
    pub fn new() -> Graph<T> {
        Graph {
            vertices: RefCell::new(Vec::new()),
        }
    }

    /**
     * The number of nodes recorded so far, including variables.
     */
    pub fn len(&self) -> usize {
        self.vertices.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.borrow().is_empty()
    }

    fn append(&self, name: Option<String>, children: Vec<Edge<T>>) -> Index {
        let mut vertices = self.vertices.borrow_mut();
        let index = vertices.len();
        vertices.push(Vertex {
            name,
            children,
            partials: None,
        });
        index
    }

    /**
     * Records a node with no operands.
     */
    pub(crate) fn append_nullary(&self, name: Option<String>) -> Index {
        self.append(name, Vec::new())
    }

    /**
     * Records a node with one operand.
     */
    pub(crate) fn append_unary(&self, child: Index, derivative: T) -> Index {
        self.append(
            None,
            vec![Edge {
                node: child,
                derivative,
            }],
        )
    }

    /**
     * Records a node with two operands.
     */
    pub(crate) fn append_binary(
        &self,
        left: Index,
        left_derivative: T,
        right: Index,
        right_derivative: T,
    ) -> Index {
        self.append(
            None,
            vec![
                Edge {
                    node: left,
                    derivative: left_derivative,
                },
                Edge {
                    node: right,
                    derivative: right_derivative,
                },
            ],
        )
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Graph::new()
    }
}

impl<T: Numeric + Primitive> Graph<T> {
    /**
     * Records an input variable at some value.
     */
    pub fn variable(&self, value: T) -> Node<'_, T> {
        Node::new(value, self)
    }

    /**
     * Records a named input variable at some value.
     */
    pub fn named(&self, value: T, name: impl Into<String>) -> Node<'_, T> {
        Node::named(value, self, name)
    }
}

/**
 * Checks two nodes were recorded by the same graph.
 */
pub(crate) fn same_graph<T>(a: &Node<'_, T>, b: &Node<'_, T>) -> bool {
    std::ptr::eq(a.graph, b.graph)
}

impl<'g, T: Numeric + Primitive> Node<'g, T> {
    /**
     * Creates an input variable on a graph.
     */
    pub fn new(value: T, graph: &'g Graph<T>) -> Node<'g, T> {
        Node {
            value,
            graph,
            index: graph.append_nullary(None),
        }
    }

    /**
     * Creates a named input variable on a graph.
     */
    pub fn named(value: T, graph: &'g Graph<T>, name: impl Into<String>) -> Node<'g, T> {
        Node {
            value,
            graph,
            index: graph.append_nullary(Some(name.into())),
        }
    }

    /**
     * Creates the node for an operation which has already been appended to this node's
     * graph at `index`.
     */
    #[inline]
    pub(crate) fn recorded(&self, value: T, index: Index) -> Node<'g, T> {
        Node {
            value,
            graph: self.graph,
            index,
        }
    }

    /**
     * Records a unary operation on this node given its value and its derivative with
     * respect to this node's value.
     */
    #[inline]
    pub(crate) fn unary(&self, value: T, derivative: T) -> Node<'g, T> {
        self.recorded(value, self.graph.append_unary(self.index, derivative))
    }

    /**
     * Records a binary operation on this node and another node of the same graph given
     * its value and its derivatives with respect to each operand.
     */
    #[track_caller]
    #[inline]
    pub(crate) fn binary(
        &self,
        rhs: &Node<'_, T>,
        value: T,
        left_derivative: T,
        right_derivative: T,
    ) -> Node<'g, T> {
        assert!(
            same_graph(self, rhs),
            "Nodes must be recorded by the same Graph"
        );
        self.recorded(
            value,
            self.graph
                .append_binary(self.index, left_derivative, rhs.index, right_derivative),
        )
    }

    /**
     * The position of this node in its graph.
     */
    pub fn index(&self) -> Index {
        self.index
    }

    /**
     * The name this node was given when it was created as a variable, if any.
     */
    pub fn name(&self) -> Option<String> {
        self.graph
            .vertices
            .borrow()
            .get(self.index)
            .and_then(|vertex| vertex.name.clone())
    }

    /**
     * Checks if this node and another are the same node of the same graph, as opposed to
     * `==` which compares values.
     */
    pub fn is(&self, other: &Node<'_, T>) -> bool {
        same_graph(self, other) && self.index == other.index
    }

    /**
     * Records the multiplicative inverse 1 / self.
     */
    pub fn recip(&self) -> Node<'g, T> {
        let value = self.value.clone();
        // δ(1 / self) / δself = -1 / self^2
        self.unary(
            T::one() / value.clone(),
            -(T::one() / (value.clone() * value)),
        )
    }

    /**
     * Checks if this node has already been backpropagated.
     */
    pub fn has_backpropped(&self) -> bool {
        self.graph
            .vertices
            .borrow()
            .get(self.index)
            .is_some_and(|vertex| vertex.partials.is_some())
    }

    /**
     * Computes the derivative of this node with respect to every node it depends on.
     *
     * Starting from this node, every path back through the graph is followed in turn, and
     * the product of the local derivatives along the path is added to the partial
     * derivative of each node it reaches. A node reached by more than one path therefore
     * ends up with the sum over all of its paths.
     *
     * The results are cached on the graph, so backpropagating the same node again does
     * nothing. [partial](Node::partial) calls this for you.
     *
     * The number of paths can grow exponentially with the depth of a graph that reuses
     * nodes heavily, as paths are not merged where they meet.
     */
    pub fn backprop(&self) {
        let mut vertices = self.graph.vertices.borrow_mut();
        let children = match vertices.get(self.index) {
            Some(vertex) if vertex.partials.is_none() => vertex.children.clone(),
            _ => return,
        };
        let mut partials: Vec<Option<T>> = (0..self.index).map(|_| None).collect();
        let mut stack: Vec<(Index, T)> = children
            .into_iter()
            .map(|edge| (edge.node, edge.derivative))
            .collect();
        while let Some((node, path)) = stack.pop() {
            partials[node] = Some(match partials[node].take() {
                Some(total) => total + path.clone(),
                None => path.clone(),
            });
            for edge in &vertices[node].children {
                stack.push((edge.node, path.clone() * edge.derivative.clone()));
            }
        }
        vertices[self.index].partials = Some(partials);
    }

    /**
     * Returns the derivative of this node with respect to another node of the same graph,
     * backpropagating first if needed.
     *
     * The derivative of a node with respect to itself is always 1. Any node this node
     * depends on can be looked up, including intermediate results as well as the input
     * variables.
     *
     * Returns [NotDependent](DifferentiationError::NotDependent) if this node does not
     * depend on `variable`, which includes every node of a different graph.
     *
     * ```
     * use easy_ad::differentiation::{DifferentiationError, Graph};
     * let graph = Graph::new();
     * let x = graph.variable(2.0);
     * let y = graph.variable(3.0);
     * let xx = x * x;
     * let z = xx * 4.0;
     * assert_eq!(z.partial(&x), Ok(16.0));
     * assert_eq!(z.partial(&xx), Ok(4.0));
     * assert_eq!(z.partial(&y), Err(DifferentiationError::NotDependent));
     * ```
     */
    pub fn partial(&self, variable: &Node<'_, T>) -> Result<T> {
        if !same_graph(self, variable) {
            return Err(DifferentiationError::NotDependent);
        }
        if self.index == variable.index {
            return Ok(T::one());
        }
        self.backprop();
        let vertices = self.graph.vertices.borrow();
        vertices
            .get(self.index)
            .and_then(|vertex| vertex.partials.as_ref())
            .and_then(|partials| partials.get(variable.index))
            .and_then(|derivative| derivative.clone())
            .ok_or(DifferentiationError::NotDependent)
    }

    /**
     * Returns the derivatives of this node with respect to each of the nodes in turn.
     *
     * Fails on the first node that this node does not depend on.
     */
    pub fn gradient(&self, variables: &[Node<'_, T>]) -> Result<Vec<T>> {
        variables
            .iter()
            .map(|variable| self.partial(variable))
            .collect()
    }
}

/**
 * Any node of a Cloneable type implements clone
 */
impl<'g, T: Clone + Primitive> Clone for Node<'g, T> {
    #[inline]
    fn clone(&self) -> Self {
        Node {
            value: self.value.clone(),
            graph: self.graph,
            index: self.index,
        }
    }
}

/**
 * Any node of a Copy type implements Copy
 */
impl<'g, T: Copy + Primitive> Copy for Node<'g, T> {}

impl<'g, T: std::fmt::Debug> std::fmt::Debug for Node<'g, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("index", &self.index)
            .finish()
    }
}

/**
 * Nodes are equal if their values are strictly closer than 10^-6 to each other. Use
 * [is](Node::is) to check if two handles refer to the same node.
 */
impl<'g, T: Numeric + Primitive> PartialEq for Node<'g, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        within(&self.value, &other.value, &tolerance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_are_recorded_before_parents() {
        let graph = Graph::new();
        let x = graph.variable(1.0);
        let y = graph.variable(2.0);
        let z = x.binary(&y, 3.0, 1.0, 1.0);
        let vertices = graph.vertices.borrow();
        for (index, vertex) in vertices.iter().enumerate() {
            assert!(vertex.children.iter().all(|edge| edge.node < index));
        }
        assert_eq!(z.index(), 2);
        assert_eq!(vertices[2].children.len(), 2);
    }

    #[test]
    fn backprop_runs_once() {
        let graph = Graph::new();
        let x = graph.variable(1.5);
        let y = x.unary(3.0, 2.0);
        assert!(!y.has_backpropped());
        assert_eq!(y.partial(&x), Ok(2.0));
        assert!(y.has_backpropped());
        assert!(!x.has_backpropped());
        // identity never needs a backprop
        assert_eq!(x.partial(&x), Ok(1.0));
        assert!(!x.has_backpropped());
    }

    #[test]
    fn paths_accumulate() {
        let graph = Graph::new();
        let x = graph.variable(1.0);
        let a = x.unary(0.0, 2.0);
        let b = x.unary(0.0, 3.0);
        let c = a.binary(&b, 0.0, 5.0, 7.0);
        // 5 * 2 + 7 * 3
        assert_eq!(c.partial(&x), Ok(31.0));
        assert_eq!(c.partial(&a), Ok(5.0));
    }

    #[test]
    fn other_graphs_are_not_dependencies() {
        let first = Graph::new();
        let second = Graph::new();
        let x = first.variable(1.0);
        let y = second.variable(1.0);
        assert_eq!(x.partial(&y), Err(DifferentiationError::NotDependent));
        assert!(!x.is(&y));
        assert!(x.is(&x.clone()));
        assert_eq!(x, y);
    }

    #[test]
    #[should_panic(expected = "same Graph")]
    fn binary_across_graphs_panics() {
        let first = Graph::new();
        let second = Graph::new();
        let x = first.variable(1.0);
        let y = second.variable(1.0);
        x.binary(&y, 2.0, 1.0, 1.0);
    }
}
