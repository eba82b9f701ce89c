//! Route cost, dimension feasibility and objective for the local engine.
//!
//! Routes are ordered lists of non-depot location nodes; the depot is
//! implied at both ends.

use crate::distance::TransitCost;
use crate::engine::Dimension;

/// Evaluates candidate route sets against an arc cost and dimensions.
pub(crate) struct Evaluator<'a> {
    arc_cost: &'a dyn TransitCost,
    dimensions: &'a [Dimension],
    depot: usize,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(
        arc_cost: &'a dyn TransitCost,
        dimensions: &'a [Dimension],
        depot: usize,
    ) -> Self {
        Self {
            arc_cost,
            dimensions,
            depot,
        }
    }

    pub(crate) fn depot(&self) -> usize {
        self.depot
    }

    pub(crate) fn dimensions(&self) -> &[Dimension] {
        self.dimensions
    }

    /// Arc cost between two nodes.
    pub(crate) fn arc(&self, from: usize, to: usize) -> i64 {
        self.arc_cost.transit(from, to)
    }

    /// Total arc cost of `depot → route[0] → ... → depot`.
    pub(crate) fn route_cost(&self, route: &[usize]) -> i64 {
        legs(route, self.depot).map(|(a, b)| self.arc(a, b)).sum()
    }

    /// End cumul of `dimension` along the route.
    pub(crate) fn end_cumul(&self, dimension: &Dimension, route: &[usize]) -> i64 {
        legs(route, self.depot)
            .map(|(a, b)| dimension.transit(a, b))
            .sum()
    }

    /// Returns `true` if every dimension's cumul stays within `[0, capacity]`.
    pub(crate) fn fits(&self, route: &[usize]) -> bool {
        self.dimensions.iter().all(|dim| {
            let mut cumul = 0;
            legs(route, self.depot).all(|(a, b)| {
                cumul += dim.transit(a, b);
                (0..=dim.capacity()).contains(&cumul)
            })
        })
    }

    /// Returns `true` if a route ending at `last` with the given cumuls can
    /// be extended by `next` and still return to the depot.
    pub(crate) fn can_extend(&self, cumuls: &[i64], last: usize, next: usize) -> bool {
        self.dimensions.iter().zip(cumuls).all(|(dim, &cumul)| {
            let arrive = cumul + dim.transit(last, next);
            let back = arrive + dim.transit(next, self.depot);
            (0..=dim.capacity()).contains(&arrive) && (0..=dim.capacity()).contains(&back)
        })
    }

    /// Arc cost plus every dimension's global span cost.
    pub(crate) fn objective(&self, routes: &[Vec<usize>]) -> i64 {
        let arc_total: i64 = routes.iter().map(|r| self.route_cost(r)).sum();
        let span_total: i64 = self
            .dimensions
            .iter()
            .filter(|dim| dim.global_span_cost_coefficient() != 0)
            .map(|dim| {
                let ends: Vec<i64> = routes.iter().map(|r| self.end_cumul(dim, r)).collect();
                dim.span_cost(&ends)
            })
            .sum();
        arc_total + span_total
    }
}

/// Consecutive node pairs of a depot-to-depot route.
pub(crate) fn legs(route: &[usize], depot: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    let from = std::iter::once(depot).chain(route.iter().copied());
    let to = route.iter().copied().chain(std::iter::once(depot));
    from.zip(to)
}
