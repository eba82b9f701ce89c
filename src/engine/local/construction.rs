//! First-solution construction heuristics.
//!
//! - [`path_cheapest_arc`]: extend one route at a time along its cheapest
//!   feasible arc, O(n²)
//! - [`parallel_cheapest_insertion`]: cheapest (node, vehicle, position)
//!   insertion across all routes, O(n³·v)
//! - [`savings`]: Clarke-Wright merges (Clarke & Wright, 1964), O(n² log n)
//!
//! Every heuristic honours each dimension's capacity, including the return
//! leg to the depot. `None` means at least one node could not be routed.

use super::evaluation::Evaluator;

/// Builds routes one vehicle at a time, always following the cheapest
/// feasible arc from the current route end.
pub(crate) fn path_cheapest_arc(
    eval: &Evaluator<'_>,
    visits: &[usize],
    vehicles: usize,
) -> Option<Vec<Vec<usize>>> {
    let depot = eval.depot();
    let mut routed = vec![false; visits.len()];
    let mut routes = Vec::with_capacity(vehicles);

    for _ in 0..vehicles {
        let mut route = Vec::new();
        let mut current = depot;
        let mut cumuls = vec![0i64; eval.dimensions().len()];

        loop {
            let mut best: Option<(usize, i64)> = None;
            for (pos, &node) in visits.iter().enumerate() {
                if routed[pos] || !eval.can_extend(&cumuls, current, node) {
                    continue;
                }
                let cost = eval.arc(current, node);
                if best.is_none_or(|(_, c)| cost < c) {
                    best = Some((pos, cost));
                }
            }

            let Some((pos, _)) = best else { break };
            let next = visits[pos];
            for (cumul, dim) in cumuls.iter_mut().zip(eval.dimensions()) {
                *cumul += dim.transit(current, next);
            }
            routed[pos] = true;
            route.push(next);
            current = next;
        }

        routes.push(route);
    }

    routed.iter().all(|&r| r).then_some(routes)
}

/// A candidate insertion of a node into a route.
#[derive(Debug, Clone, Copy)]
struct Insertion {
    visit: usize,
    vehicle: usize,
    position: usize,
    delta: i64,
}

/// Repeatedly applies the cheapest feasible insertion over all routes.
pub(crate) fn parallel_cheapest_insertion(
    eval: &Evaluator<'_>,
    visits: &[usize],
    vehicles: usize,
) -> Option<Vec<Vec<usize>>> {
    let depot = eval.depot();
    let mut routes: Vec<Vec<usize>> = vec![Vec::new(); vehicles];
    let mut pending: Vec<usize> = visits.to_vec();

    while !pending.is_empty() {
        let mut best: Option<Insertion> = None;

        for (visit, &node) in pending.iter().enumerate() {
            for (vehicle, route) in routes.iter().enumerate() {
                for position in 0..=route.len() {
                    let prev = if position == 0 { depot } else { route[position - 1] };
                    let next = route.get(position).copied().unwrap_or(depot);
                    let delta = eval.arc(prev, node) + eval.arc(node, next) - eval.arc(prev, next);
                    if best.is_some_and(|b| delta >= b.delta) {
                        continue;
                    }

                    let mut candidate = route.clone();
                    candidate.insert(position, node);
                    if eval.fits(&candidate) {
                        best = Some(Insertion {
                            visit,
                            vehicle,
                            position,
                            delta,
                        });
                    }
                }
            }
        }

        let ins = best?;
        let node = pending.remove(ins.visit);
        routes[ins.vehicle].insert(ins.position, node);
    }

    Some(routes)
}

/// A savings value for joining two nodes in one route.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: i64,
}

/// Clarke-Wright savings construction bounded by the fleet size.
///
/// Starts with one route per node and merges route ends in decreasing order
/// of `s(i, j) = c(0, i) + c(0, j) - c(i, j)` while the merged route fits.
pub(crate) fn savings(
    eval: &Evaluator<'_>,
    visits: &[usize],
    vehicles: usize,
) -> Option<Vec<Vec<usize>>> {
    let depot = eval.depot();
    let n = visits.len();

    if visits.iter().any(|&node| !eval.fits(&[node])) {
        return None;
    }

    let mut savings = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for a in 0..n {
        for b in (a + 1)..n {
            let (i, j) = (visits[a], visits[b]);
            let value = eval.arc(depot, i) + eval.arc(depot, j) - eval.arc(i, j);
            // zero savings still cut the route count
            if value >= 0 {
                savings.push(Saving { i: a, j: b, value });
            }
        }
    }
    // Stable sort keeps index order among equal savings.
    savings.sort_by(|a, b| b.value.cmp(&a.value));

    // route_of[visit] = owning route, route_members[r] = visits in order
    let mut route_of: Vec<usize> = (0..n).collect();
    let mut route_members: Vec<Vec<usize>> = (0..n).map(|a| vec![a]).collect();

    for saving in &savings {
        let ri = route_of[saving.i];
        let rj = route_of[saving.j];
        if ri == rj {
            continue;
        }

        let i_at_end = route_members[ri].last() == Some(&saving.i);
        let j_at_start = route_members[rj].first() == Some(&saving.j);
        let i_at_start = route_members[ri].first() == Some(&saving.i);
        let j_at_end = route_members[rj].last() == Some(&saving.j);

        let (merge_from, merge_into, reverse_from, reverse_into) = if i_at_end && j_at_start {
            (rj, ri, false, false)
        } else if j_at_end && i_at_start {
            (ri, rj, false, false)
        } else if i_at_end && j_at_end {
            (rj, ri, true, false)
        } else if i_at_start && j_at_start {
            (rj, ri, false, true)
        } else {
            continue;
        };

        let mut into = route_members[merge_into].clone();
        let mut from = route_members[merge_from].clone();
        if reverse_into {
            into.reverse();
        }
        if reverse_from {
            from.reverse();
        }
        into.append(&mut from);

        let merged: Vec<usize> = into.iter().map(|&a| visits[a]).collect();
        if !eval.fits(&merged) {
            continue;
        }

        route_members[merge_from].clear();
        for &a in &into {
            route_of[a] = merge_into;
        }
        route_members[merge_into] = into;
    }

    let mut routes: Vec<Vec<usize>> = route_members
        .into_iter()
        .filter(|members| !members.is_empty())
        .map(|members| members.into_iter().map(|a| visits[a]).collect())
        .collect();

    if routes.len() > vehicles {
        return None;
    }
    routes.resize(vehicles, Vec::new());
    Some(routes)
}
