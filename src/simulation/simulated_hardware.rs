use crate::core::{Actuators, SpeedSensor};

pub struct SimulatedSpeedometer {
    speed: f64,
    noise_amplitude: f64,
    samples: u64,
}

impl SimulatedSpeedometer {
    pub fn new(noise_amplitude: f64) -> Self {
        Self {
            speed: 0.0,
            noise_amplitude,
            samples: 0,
        }
    }
}

impl SpeedSensor for SimulatedSpeedometer {
    fn get_speed(&self) -> f64 {
        // two incommensurate tones stand in for sensor noise
        let n = self.samples as f64;
        let noise = 0.6 * (n * 2.3).sin() + 0.4 * (n * 5.7).cos();
        (self.speed + self.noise_amplitude * noise).max(0.0)
    }

    fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
        self.samples += 1;
    }
}

#[derive(Debug, Default)]
pub struct SimulatedActuators {
    throttle: f64,
    brake: f64,
    steer: f64,
    published: u64,
}

impl SimulatedActuators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_throttle(&self) -> f64 {
        self.throttle
    }

    pub fn get_brake(&self) -> f64 {
        self.brake
    }

    pub fn get_steer(&self) -> f64 {
        self.steer
    }

    pub fn get_published(&self) -> u64 {
        self.published
    }
}

impl Actuators for SimulatedActuators {
    fn set_throttle(&mut self, throttle: f64) {
        self.throttle = throttle;
    }

    fn set_brake(&mut self, brake_torque: f64) {
        self.brake = brake_torque;
    }

    fn set_steer(&mut self, steering_wheel_angle: f64) {
        self.steer = steering_wheel_angle;
        self.published += 1;
    }
}
