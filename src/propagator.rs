use std::f64::consts::PI;

use chrono::{Datelike, Timelike};
use hifitime::{Epoch, Unit};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::error::{ElementError, PropagationError};
use crate::tle::ElementSet;

/// Gravity constant set forwarded to the propagation model.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub enum GravityModel {
    /// WGS-72, the constant set most published element sets were fitted against.
    Wgs72,
    /// WGS-84 (default).
    #[default]
    Wgs84,
}

impl GravityModel {
    pub(crate) fn geopotential(&self) -> sgp4::Geopotential {
        match self {
            Self::Wgs72 => sgp4::WGS72,
            Self::Wgs84 => sgp4::WGS84,
        }
    }
}

/// One propagation output: position and velocity in the TEME frame
/// of the element epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Cartesian position (km).
    pub position_km: Vector3<f64>,
    /// Cartesian velocity (km/s).
    pub velocity_km_s: Vector3<f64>,
}

impl PositionSample {
    /// Scalar speed (km/s).
    pub fn speed_km_s(&self) -> f64 {
        self.velocity_km_s.norm()
    }
}

/// Initialized propagation state of one satellite. Creation interprets
/// and verifies the element fields once; [OrbitalState::propagate] is
/// then pure over this state.
#[derive(Debug)]
pub struct OrbitalState {
    constants: sgp4::Constants,
    epoch: Epoch,
}

impl OrbitalState {
    /// Interprets one raw element record against the given [GravityModel].
    pub fn new(record: &ElementSet, gravity: GravityModel) -> Result<Self, ElementError> {
        let (cat1, cat2) = (record.catalog_number_line1(), record.catalog_number());
        if cat1 != cat2 {
            return Err(ElementError::CatalogMismatch {
                line1: cat1.to_string(),
                line2: cat2.to_string(),
            });
        }
        let elements = sgp4::Elements::from_tle(
            Some(record.name.clone()),
            record.line1.as_bytes(),
            record.line2.as_bytes(),
        )
        .map_err(|e| ElementError::InvalidFields(e.to_string()))?;
        Self::from_elements(&elements, gravity)
    }

    /// Builds the propagation constants from already parsed elements.
    pub fn from_elements(
        elements: &sgp4::Elements,
        gravity: GravityModel,
    ) -> Result<Self, ElementError> {
        let geopotential = gravity.geopotential();
        let orbit_0 = sgp4::Orbit::from_kozai_elements(
            &geopotential,
            elements.inclination * (PI / 180.0),
            elements.right_ascension * (PI / 180.0),
            elements.eccentricity,
            elements.argument_of_perigee * (PI / 180.0),
            elements.mean_anomaly * (PI / 180.0),
            elements.mean_motion * (PI / 720.0),
        )
        .map_err(|e| ElementError::DegenerateOrbit(e.to_string()))?;

        let constants = sgp4::Constants::new(
            geopotential,
            sgp4::iau_epoch_to_sidereal_time,
            sgp4::julian_years_since_j2000(&elements.datetime),
            elements.drag_term,
            orbit_0,
        )
        .map_err(|e| ElementError::DegenerateOrbit(e.to_string()))?;

        let epoch = epoch_from_datetime(&elements.datetime)?;
        Ok(Self { constants, epoch })
    }

    /// Element epoch the propagation offsets are counted from.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Signed offset of `t` from the element epoch, in minutes.
    pub fn minutes_since_epoch(&self, t: Epoch) -> f64 {
        (t - self.epoch).to_unit(Unit::Minute)
    }

    /// Runs the model at the given offset from epoch.
    /// Pure: identical inputs produce bit-identical outputs.
    pub fn propagate(&self, minutes_since_epoch: f64) -> Result<PositionSample, PropagationError> {
        let prediction = self
            .constants
            .propagate(sgp4::MinutesSinceEpoch(minutes_since_epoch))
            .map_err(|e| PropagationError::Diverged {
                minutes: minutes_since_epoch,
                reason: e.to_string(),
            })?;
        Ok(PositionSample {
            position_km: Vector3::new(
                prediction.position[0],
                prediction.position[1],
                prediction.position[2],
            ),
            velocity_km_s: Vector3::new(
                prediction.velocity[0],
                prediction.velocity[1],
                prediction.velocity[2],
            ),
        })
    }
}

fn epoch_from_datetime(dt: &chrono::NaiveDateTime) -> Result<Epoch, ElementError> {
    Epoch::maybe_from_gregorian_utc(
        dt.year(),
        dt.month() as u8,
        dt.day() as u8,
        dt.hour() as u8,
        dt.minute() as u8,
        dt.second() as u8,
        dt.nanosecond(),
    )
    .map_err(|_| ElementError::InvalidEpoch)
}
