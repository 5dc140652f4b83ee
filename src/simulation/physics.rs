use crate::core::{GRAVITY, VehicleParameters};

pub struct VehiclePhysics {
    // Physical parameters
    mass: f64,                // kg
    wheel_radius: f64,        // m
    full_throttle_accel: f64, // m/s² at full pedal
    rolling_coefficient: f64,
    drag_coefficient: f64, // N/(m/s)²

    // State variables
    velocity: f64,     // m/s
    acceleration: f64, // m/s²
    distance: f64,     // m

    // Input
    throttle: f64,     // [0, 1]
    brake_torque: f64, // N·m
}

impl VehiclePhysics {
    pub fn new(vehicle: &VehicleParameters, velocity: f64) -> Self {
        Self {
            mass: vehicle.effective_mass(),
            wheel_radius: vehicle.wheel_radius,
            full_throttle_accel: vehicle.accel_limit,
            rolling_coefficient: 0.01,
            drag_coefficient: 0.4,
            velocity,
            acceleration: 0.0,
            distance: 0.0,
            throttle: 0.0,
            brake_torque: 0.0,
        }
    }

    pub fn frictionless(vehicle: &VehicleParameters, velocity: f64) -> Self {
        Self {
            rolling_coefficient: 0.0,
            drag_coefficient: 0.0,
            ..Self::new(vehicle, velocity)
        }
    }

    pub fn update(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }

        let drive_force = self.throttle * self.full_throttle_accel * self.mass;
        let brake_force = self.brake_torque / self.wheel_radius;
        let resist_force = self.rolling_coefficient * self.mass * GRAVITY
            + self.drag_coefficient * self.velocity * self.velocity;

        // brakes and resistance oppose motion but never reverse it
        let stopping_force = brake_force + resist_force;
        let net_force = if self.velocity > 0.0 {
            drive_force - stopping_force
        } else {
            (drive_force - stopping_force).max(0.0)
        };

        self.acceleration = net_force / self.mass;
        self.velocity = (self.velocity + self.acceleration * dt).max(0.0);
        self.distance += self.velocity * dt;
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = throttle.clamp(0.0, 1.0);
    }

    pub fn set_brake_torque(&mut self, brake_torque: f64) {
        self.brake_torque = brake_torque.max(0.0);
    }

    pub fn get_velocity(&self) -> f64 {
        self.velocity
    }

    pub fn get_acceleration(&self) -> f64 {
        self.acceleration
    }

    pub fn get_distance(&self) -> f64 {
        self.distance
    }
}
