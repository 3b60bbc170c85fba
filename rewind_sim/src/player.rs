use nalgebra::Vector2;

/// Minimal piece of simulation state driven by the demo events.
///
/// Cloning a player snapshots its state, which is how a host keeps hold of a
/// branch's state at the moment a timeline forks.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Position in world space.
    pub position: Vector2<f32>,
    /// Velocity in world space.
    pub velocity: Vector2<f32>,
}

impl Player {
    /// A player at the origin, at rest.
    pub fn new() -> Self {
        Self {
            position: Vector2::zeros(),
            velocity: Vector2::zeros(),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
