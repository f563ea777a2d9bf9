//! Disease spread among particles bouncing around a bounded plane.

pub mod cell;
pub mod error;
pub mod model;
pub mod output;

pub use cell::{Cell, HealthState};
pub use error::{Error, Result};
pub use model::{enforce_bounds, Census, Model};
