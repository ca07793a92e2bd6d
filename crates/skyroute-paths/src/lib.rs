//! Informed search over skyroute terrain.
//!
//! This crate provides two interchangeable strategies for finding a flight
//! path between the start and goal of a [`TerrainMap`](skyroute_core::TerrainMap):
//!
//! - **A\*** ([`a_star`], [`astar_search`]) orders the frontier by
//!   accumulated cost plus the Manhattan estimate.
//! - **Greedy best-first** ([`greedy_best_first`], [`greedy_search`]) orders
//!   the frontier by the estimate alone and never revises a parent.
//!
//! Both return a [`SearchReport`] carrying the path, the number of frontier
//! pops, the elapsed time and the set of expanded positions. All search state
//! lives inside the call, so searches on the same map never interfere.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | reachability |
//! | [`HeuristicPather`] : [`Pather`] | greedy best-first |
//! | [`AstarPather`] : [`WeightedPather`] + [`HeuristicPather`] | A* |

mod astar;
mod distance;
mod greedy;
mod reach;
mod report;
mod space;
mod terrain;
mod traits;

pub use astar::astar_search;
pub use distance::manhattan;
pub use greedy::greedy_search;
pub use reach::reachable_from;
pub use report::SearchReport;
pub use terrain::{Strategy, a_star, greedy_best_first};
pub use traits::{AstarPather, HeuristicPather, Pather, WeightedPather};
