use crate::propagator::GravityModel;

#[cfg(feature = "serde")]
use serde::Deserialize;

fn default_gravity_model() -> GravityModel {
    GravityModel::default()
}

/// Billboards are pushed for every satellite, but the position table
/// stays readable by truncating after this many rows.
fn default_display_cap() -> usize {
    10
}

/// Runtime configuration of the tracking core.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Gravity constant set used by the propagation model.
    /// [GravityModel::Wgs84] unless told otherwise.
    #[cfg_attr(feature = "serde", serde(default = "default_gravity_model"))]
    pub gravity_model: GravityModel,
    /// Maximum number of rows rendered in the position table. 10 by default.
    /// The 3D scene itself is never capped.
    #[cfg_attr(feature = "serde", serde(default = "default_display_cap"))]
    pub display_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity_model: default_gravity_model(),
            display_cap: default_display_cap(),
        }
    }
}

impl Config {
    /// Returns [Config] with updated [GravityModel] preference.
    pub fn with_gravity_model(&self, gravity_model: GravityModel) -> Self {
        let mut s = *self;
        s.gravity_model = gravity_model;
        s
    }

    /// Returns [Config] with updated position table row cap.
    pub fn with_display_cap(&self, display_cap: usize) -> Self {
        let mut s = *self;
        s.display_cap = display_cap;
        s
    }
}
