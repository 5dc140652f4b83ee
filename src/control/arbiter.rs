use crate::core::{GRAVITY, VehicleParameters};

#[derive(Debug, Clone)]
pub struct ThrottleBrakeArbiter {
    mass: f64,
    wheel_radius: f64,
    accel_limit: f64,
    decel_limit: f64,
    brake_deadband: f64,
    standstill_speed: f64,
    max_brake_torque: f64,
    min_throttle: f64,
    max_throttle: f64,
    hold_torque: f64,
}

impl ThrottleBrakeArbiter {
    pub fn new(vehicle: &VehicleParameters) -> Self {
        let mass = vehicle.effective_mass();
        let hold_torque = (mass * GRAVITY * vehicle.hold_grade * vehicle.wheel_radius)
            .clamp(0.0, vehicle.max_brake_torque);

        Self {
            mass,
            wheel_radius: vehicle.wheel_radius,
            accel_limit: vehicle.accel_limit,
            decel_limit: vehicle.decel_limit,
            brake_deadband: vehicle.brake_deadband,
            standstill_speed: vehicle.standstill_speed,
            max_brake_torque: vehicle.max_brake_torque,
            min_throttle: vehicle.min_throttle,
            max_throttle: vehicle.max_throttle,
            hold_torque,
        }
    }

    pub fn hold_torque(&self) -> f64 {
        self.hold_torque
    }

    pub fn is_stopped(&self, current_speed: f64) -> bool {
        current_speed.abs() < self.standstill_speed
    }

    // (pedal fraction, brake torque N·m), never both non-zero
    pub fn apportion(&self, desired_accel: f64, current_speed: f64) -> (f64, f64) {
        if desired_accel >= 0.0 {
            let throttle = (desired_accel / self.accel_limit).clamp(0.0, 1.0);
            if throttle > 0.0 {
                return (throttle.clamp(self.min_throttle, self.max_throttle), 0.0);
            }
            return (0.0, 0.0);
        }

        let decel = desired_accel.abs();
        if decel < self.brake_deadband {
            return if self.is_stopped(current_speed) {
                (0.0, self.hold_torque)
            } else {
                (0.0, 0.0)
            };
        }

        let torque = decel.min(self.decel_limit) * self.mass * self.wheel_radius;
        (0.0, torque.min(self.max_brake_torque))
    }
}

#[cfg(test)]
mod arbiter_tests {
    use super::*;
    use crate::core::ACTUATION_EPSILON;

    fn mkz() -> (VehicleParameters, ThrottleBrakeArbiter) {
        let vehicle = VehicleParameters::default();
        let arbiter = ThrottleBrakeArbiter::new(&vehicle);
        (vehicle, arbiter)
    }

    #[test]
    fn positive_request_is_throttle() {
        let (_, arbiter) = mkz();
        assert_eq!(arbiter.apportion(0.5, 3.0), (0.5, 0.0));
        assert_eq!(arbiter.apportion(4.0, 3.0), (1.0, 0.0), "saturates at full pedal");
        assert_eq!(arbiter.apportion(0.0, 3.0), (0.0, 0.0));
    }

    #[test]
    fn throttle_respects_bounds() {
        let vehicle = VehicleParameters {
            min_throttle: 0.1,
            max_throttle: 0.6,
            ..VehicleParameters::default()
        };
        let arbiter = ThrottleBrakeArbiter::new(&vehicle);
        assert_eq!(arbiter.apportion(0.01, 1.0).0, 0.1);
        assert_eq!(arbiter.apportion(0.9, 1.0).0, 0.6);
        assert_eq!(arbiter.apportion(0.0, 1.0).0, 0.0, "no minimum without a request");
    }

    #[test]
    fn braking_torque_from_mass_and_radius() {
        let (vehicle, arbiter) = mkz();
        let expected = 2.0 * vehicle.effective_mass() * vehicle.wheel_radius;
        let (throttle, brake) = arbiter.apportion(-2.0, 10.0);
        assert_eq!(throttle, 0.0);
        assert!((brake - expected).abs() < 1e-9);
    }

    #[test]
    fn braking_is_limited() {
        let (vehicle, arbiter) = mkz();
        let at_limit = vehicle.decel_limit * vehicle.effective_mass() * vehicle.wheel_radius;
        let (_, brake) = arbiter.apportion(-50.0, 10.0);
        assert!((brake - at_limit.min(vehicle.max_brake_torque)).abs() < 1e-9);

        let weak = VehicleParameters {
            max_brake_torque: 500.0,
            ..VehicleParameters::default()
        };
        let (_, brake) = ThrottleBrakeArbiter::new(&weak).apportion(-3.0, 10.0);
        assert_eq!(brake, 500.0, "torque capped");
    }

    #[test]
    fn small_request_holds_when_stopped() {
        let (vehicle, arbiter) = mkz();
        let hold = vehicle.effective_mass() * GRAVITY * vehicle.hold_grade * vehicle.wheel_radius;
        assert!((arbiter.hold_torque() - hold).abs() < 1e-9);
        assert!(arbiter.hold_torque() > 650.0 && arbiter.hold_torque() < 750.0);

        assert_eq!(arbiter.apportion(-0.05, 0.05), (0.0, arbiter.hold_torque()));
        assert_eq!(arbiter.apportion(-0.05, 5.0), (0.0, 0.0), "coasts while moving");
    }

    #[test]
    fn throttle_and_brake_exclusive() {
        let (_, arbiter) = mkz();
        for i in -2000..=2000 {
            let accel = i as f64 * 0.005;
            for speed in [0.0, 0.05, 0.5, 5.0, 30.0] {
                let (throttle, brake) = arbiter.apportion(accel, speed);
                assert!(
                    throttle <= ACTUATION_EPSILON || brake <= ACTUATION_EPSILON,
                    "accel {accel} speed {speed} gave ({throttle}, {brake})"
                );
                assert!((0.0..=1.0).contains(&throttle));
                assert!(brake >= 0.0);
            }
        }
    }
}
