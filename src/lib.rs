#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod clock;
mod error;
mod frame;
mod geo;
mod propagator;
mod registry;
mod scene;
mod tle;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::Config;
    pub use crate::clock::{SimulationClock, SteppedClock, SystemClock};
    pub use crate::error::{ElementError, FormatError, PropagationError};
    pub use crate::frame::{FrameSample, FrameUpdater, TableRow};
    pub use crate::geo::{geodetic_from_teme, Geodetic};
    pub use crate::propagator::{GravityModel, OrbitalState, PositionSample};
    pub use crate::registry::{LoadReport, Registry, SatelliteEntry, SelectorEntry};
    pub use crate::scene::{NullScene, Scene, KM_TO_M};
    pub use crate::tle::{parse_element_file, ElementSet};
    // re-export
    pub use hifitime::{Duration, Epoch, Unit};
    pub use nalgebra::Vector3;
}
