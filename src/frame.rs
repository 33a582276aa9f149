use hifitime::Epoch;
use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cfg::Config;
use crate::geo::geodetic_from_teme;
use crate::propagator::PositionSample;
use crate::registry::Registry;
use crate::scene::{Scene, KM_TO_M};

/// One satellite successfully propagated this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSample {
    /// Catalog number.
    pub id: String,
    pub name: String,
    pub sample: PositionSample,
}

/// One row of the position table, formatted for UI display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableRow {
    pub name: String,
    pub id: String,
    /// Cartesian position (km), rounded to whole km.
    pub x_km: f64,
    pub y_km: f64,
    pub z_km: f64,
    /// Scalar speed (km/s), rounded.
    pub speed_km_s: f64,
    /// Geodetic latitude (degrees, 3 decimals).
    pub latitude_deg: f64,
    /// Geodetic longitude (degrees, 3 decimals).
    pub longitude_deg: f64,
    /// Height above the ellipsoid (km), rounded.
    pub height_km: f64,
}

/// Per-frame driver: propagates the whole catalog at one consistent
/// simulated time, feeds the scene and formats the position table.
pub struct FrameUpdater {
    cfg: Config,
    skipped: u64,
}

impl FrameUpdater {
    pub fn new(cfg: Config) -> Self {
        Self { cfg, skipped: 0 }
    }

    /// Propagates every registry entry at `now`. A satellite whose
    /// propagation diverges is skipped for this frame only (logged and
    /// counted); the others are unaffected. Output follows catalog order.
    pub fn tick(&mut self, registry: &Registry, now: Epoch) -> Vec<FrameSample> {
        let mut samples = Vec::with_capacity(registry.len());
        for entry in registry.iter() {
            let minutes = entry.state.minutes_since_epoch(now);
            match entry.state.propagate(minutes) {
                Ok(sample) => {
                    samples.push(FrameSample {
                        id: entry.id.clone(),
                        name: entry.name.clone(),
                        sample,
                    });
                },
                Err(e) => {
                    self.skipped += 1;
                    warn!("{}({}): skipped this frame: {}", entry.name, entry.id, e);
                },
            }
        }
        samples
    }

    /// Replaces the scene's primitives with one billboard per sample.
    /// Every sample is pushed (the display cap only applies to the
    /// table); positions cross this boundary in meters.
    pub fn push_to_scene<S: Scene>(&self, scene: &mut S, samples: &[FrameSample]) {
        scene.remove_primitives();
        scene.create_billboard_collection();
        for sample in samples {
            scene.add_billboard(sample.sample.position_km * KM_TO_M, 0);
        }
    }

    /// Formats the first `display_cap` samples as table rows. Geodetic
    /// columns are derived at `now`, the same instant the samples were
    /// propagated at.
    pub fn table_rows(&self, samples: &[FrameSample], now: Epoch) -> Vec<TableRow> {
        samples
            .iter()
            .take(self.cfg.display_cap)
            .map(|s| {
                let geo = geodetic_from_teme(&s.sample.position_km, now);
                TableRow {
                    name: s.name.clone(),
                    id: s.id.clone(),
                    x_km: s.sample.position_km.x.round(),
                    y_km: s.sample.position_km.y.round(),
                    z_km: s.sample.position_km.z.round(),
                    speed_km_s: s.sample.speed_km_s().round(),
                    latitude_deg: round3(geo.latitude_deg),
                    longitude_deg: round3(geo.longitude_deg),
                    height_km: geo.height_km.round(),
                }
            })
            .collect()
    }

    /// Total number of per-frame skips since construction.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
