//! Objective-driven improvement of a feasible route set.
//!
//! # Algorithm
//!
//! Alternates two neighbourhoods until neither yields a strictly better
//! objective (first-improvement strategy):
//!
//! - **2-opt**: reverse a segment `[i..=j]` inside one route.
//! - **Relocate**: move one node to any position of another route.
//!
//! Moves are scored on the full objective, so with a global span
//! coefficient a relocate that shortens the longest route can be accepted
//! even when it lengthens the total distance.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use std::time::Instant;

use tracing::{debug, warn};

use super::evaluation::Evaluator;

/// Improves `routes` in place. Returns the number of accepted moves.
pub(crate) fn improve(
    eval: &Evaluator<'_>,
    routes: &mut [Vec<usize>],
    deadline: Option<Instant>,
) -> usize {
    let mut objective = eval.objective(routes);
    let mut accepted = 0;

    loop {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            warn!(accepted, objective, "improvement stopped at time limit");
            break;
        }

        let improved = two_opt_pass(eval, routes, &mut objective)
            || relocate_pass(eval, routes, &mut objective);
        if !improved {
            break;
        }
        accepted += 1;
    }

    debug!(accepted, objective, "improvement converged");
    accepted
}

/// Applies the first improving intra-route segment reversal.
fn two_opt_pass(eval: &Evaluator<'_>, routes: &mut [Vec<usize>], objective: &mut i64) -> bool {
    for r in 0..routes.len() {
        let n = routes[r].len();
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                routes[r][i..=j].reverse();
                if eval.fits(&routes[r]) {
                    let candidate = eval.objective(routes);
                    if candidate < *objective {
                        *objective = candidate;
                        return true;
                    }
                }
                routes[r][i..=j].reverse();
            }
        }
    }
    false
}

/// Applies the first improving inter-route node relocation.
fn relocate_pass(eval: &Evaluator<'_>, routes: &mut [Vec<usize>], objective: &mut i64) -> bool {
    for from in 0..routes.len() {
        for from_pos in 0..routes[from].len() {
            for to in 0..routes.len() {
                if to == from {
                    continue;
                }
                for to_pos in 0..=routes[to].len() {
                    let node = routes[from].remove(from_pos);
                    routes[to].insert(to_pos, node);

                    if eval.fits(&routes[from]) && eval.fits(&routes[to]) {
                        let candidate = eval.objective(routes);
                        if candidate < *objective {
                            *objective = candidate;
                            return true;
                        }
                    }

                    routes[to].remove(to_pos);
                    routes[from].insert(from_pos, node);
                }
            }
        }
    }
    false
}
