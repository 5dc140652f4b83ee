pub mod arbiter;
pub mod lowpass;
pub mod pid;
pub mod twist_control;
pub mod yaw;

pub use arbiter::ThrottleBrakeArbiter;
pub use lowpass::LowPassFilter;
pub use pid::PIDController;
pub use twist_control::{TwistController, VehicleController};
pub use yaw::YawController;
