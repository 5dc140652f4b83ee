pub mod physics;
pub mod simulated_hardware;

pub use physics::VehiclePhysics;
pub use simulated_hardware::*;
