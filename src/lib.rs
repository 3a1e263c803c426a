//! # edpoints
//!
//! Generates (almost) equally distributed points on the globe and expresses them in three
//! coordinate systems:
//!
//! 1. **cartesian** – unit-sphere coordinates from a golden-angle (Fibonacci) lattice
//!    ([`lattice`]),
//! 2. **ECEF** – earth-centered unit directions of the lattice points projected on a
//!    reference ellipsoid with a closed-form solution ([`ellipsoid`]),
//! 3. **geodetic** – longitude/latitude in degrees ([`geodetic`]).
//!
//! [`point_set::PointSet`] runs the three stages and keeps their index-aligned outputs;
//! [`writers`] turns them into CSV or GeoJSON and [`cli`] exposes everything as the
//! `edpoints` binary.
//!
//! Enable the `parallel` feature to spread the per-point work over rayon's thread pool
//! (`cargo test --features parallel` exercises that path).

pub mod cli;
pub mod constants;
pub mod edpoints_errors;
pub mod ellipsoid;
pub mod geodetic;
pub mod lattice;
mod parallel;
pub mod point_set;
pub mod ref_system;
pub mod writers;
