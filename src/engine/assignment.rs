//! Solver output: successor per routing index plus objective.

/// A complete successor mapping returned by a solve call.
///
/// `next(i)` is defined for every start and visit index. End indices have
/// no successor and map to themselves.
///
/// # Examples
///
/// ```
/// use grid_routing::engine::Assignment;
///
/// // one visit (index 0), one vehicle: start=1, end=2
/// let a = Assignment::new(vec![2, 0, 2], 1368);
/// assert_eq!(a.next(1), 0);
/// assert_eq!(a.next(0), 2);
/// assert_eq!(a.objective_value(), 1368);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    next: Vec<usize>,
    objective: i64,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(next: Vec<usize>, objective: i64) -> Self {
        Self { next, objective }
    }

    /// Successor of routing index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn next(&self, index: usize) -> usize {
        self.next[index]
    }

    /// Objective value reported by the engine.
    pub fn objective_value(&self) -> i64 {
        self.objective
    }

    /// Number of routing indices covered.
    pub fn len(&self) -> usize {
        self.next.len()
    }

    /// Returns `true` if the assignment covers no index.
    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }
}
