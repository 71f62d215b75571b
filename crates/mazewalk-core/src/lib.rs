//! **mazewalk-core**: shared types for online maze exploration.
//!
//! This crate provides the foundational types used across the *mazewalk*
//! workspace: grid geometry, absolute directions, and the [`Environment`]
//! trait through which an explorer perceives and moves in a maze.

pub mod direction;
pub mod env;
pub mod geom;

pub use direction::Direction;
pub use env::{Environment, Observation};
pub use geom::{Point, Range};
