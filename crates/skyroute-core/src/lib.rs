//! **skyroute-core** — terrain model for elevation-aware flight planning.
//!
//! This crate provides the foundational types used across the *skyroute*
//! workspace: geometry primitives, the [`TerrainMap`] elevation grid with
//! no-fly zones, the asymmetric climb/descend [`cost`] model, and a textual
//! [`TerrainView`] renderer.

pub mod cost;
pub mod geom;
pub mod render;
pub mod terrain;

pub use cost::edge_cost;
pub use geom::{Point, Range};
pub use render::TerrainView;
pub use terrain::{Cell, TerrainMap};
