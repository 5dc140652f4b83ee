use crate::core::ActuationCommand;

pub trait SpeedSensor {
    fn get_speed(&self) -> f64;
    fn set_speed(&mut self, speed: f64);
}

pub trait Actuators {
    fn set_throttle(&mut self, throttle: f64);
    fn set_brake(&mut self, brake_torque: f64);
    fn set_steer(&mut self, steering_wheel_angle: f64);

    fn publish(&mut self, command: &ActuationCommand) {
        self.set_throttle(command.throttle());
        self.set_brake(command.brake());
        self.set_steer(command.steer());
    }
}
