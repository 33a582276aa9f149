use nalgebra::Vector3;

/// Scene positions are metric; propagation runs in km.
pub const KM_TO_M: f64 = 1.0e3;

/// Rendering collaborator. The tracking core pushes billboard
/// primitives through this boundary once per frame; everything about
/// the actual drawing (GPU, picking, tiles) lives on the other side.
///
/// Positions handed over are in meters.
pub trait Scene {
    /// Called once per frame before billboards are pushed.
    fn create_billboard_collection(&mut self);
    /// Adds one satellite billboard at the given metric position.
    /// `image_index` selects the sprite in the scene's atlas.
    fn add_billboard(&mut self, position_m: Vector3<f64>, image_index: usize);
    /// Drops every primitive pushed so far. Called at the start of each
    /// frame so stale billboards never outlive their satellite.
    fn remove_primitives(&mut self);
}

/// A [Scene] that draws nothing, for headless runs.
pub struct NullScene;

impl Scene for NullScene {
    fn create_billboard_collection(&mut self) {}
    fn add_billboard(&mut self, _position_m: Vector3<f64>, _image_index: usize) {}
    fn remove_primitives(&mut self) {}
}
