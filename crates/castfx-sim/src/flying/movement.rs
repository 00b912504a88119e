//! Movement strategies for flying objects.

use castfx_core::descriptors::MovementSpec;
use castfx_core::types::Vec3;

/// Trajectory hook: mutates the position once per tick.
pub trait Movement {
    fn on_update(&mut self, position: &mut Vec3, dt: f32);

    /// Called once when the owning instance ends.
    fn on_end(&mut self, _position: Vec3) {}
}

/// Constant direction and speed, fixed at creation. No steering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightMovement {
    direction: Vec3,
    speed: f32,
}

impl StraightMovement {
    /// `direction` is normalized; a zero vector yields a stationary object.
    pub fn new(direction: Vec3, speed: f32) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            speed,
        }
    }
}

impl Movement for StraightMovement {
    fn on_update(&mut self, position: &mut Vec3, dt: f32) {
        *position += self.direction * self.speed * dt;
    }
}

/// Initial velocity under constant acceleration (semi-implicit Euler).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallisticMovement {
    velocity: Vec3,
    gravity: Vec3,
}

impl BallisticMovement {
    pub fn new(velocity: Vec3, gravity: Vec3) -> Self {
        Self { velocity, gravity }
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }
}

impl Movement for BallisticMovement {
    fn on_update(&mut self, position: &mut Vec3, dt: f32) {
        self.velocity += self.gravity * dt;
        *position += self.velocity * dt;
    }
}

/// Build the movement strategy a descriptor asks for.
pub fn from_spec(spec: MovementSpec) -> Box<dyn Movement> {
    match spec {
        MovementSpec::Straight { direction, speed } => {
            Box::new(StraightMovement::new(direction, speed))
        }
        MovementSpec::Ballistic { velocity, gravity } => {
            Box::new(BallisticMovement::new(velocity, gravity))
        }
    }
}
