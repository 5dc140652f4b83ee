use log::trace;

use crate::core::VehicleParameters;

// m/s
pub const MIN_STEER_SPEED: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct YawController {
    wheel_base: f64,
    steer_ratio: f64,
    max_lat_accel: f64,
    max_steer_angle: f64,
}

impl YawController {
    pub fn new(vehicle: &VehicleParameters) -> Self {
        Self {
            wheel_base: vehicle.wheel_base,
            steer_ratio: vehicle.steer_ratio,
            max_lat_accel: vehicle.max_lat_accel,
            max_steer_angle: vehicle.max_steer_angle,
        }
    }

    pub fn max_curvature(&self, speed: f64) -> f64 {
        let speed_sq = speed * speed;
        if speed_sq <= f64::EPSILON {
            f64::INFINITY
        } else {
            self.max_lat_accel / speed_sq
        }
    }

    pub fn curvature(&self, target_linear: f64, target_angular: f64, current_linear: f64) -> f64 {
        if target_linear.abs() < MIN_STEER_SPEED {
            return 0.0;
        }

        let curvature = target_angular / target_linear;
        let limit = self.max_curvature(current_linear);
        if curvature.abs() > limit {
            trace!(
                "lateral limit binds: curvature {:.4} -> {:.4} at {:.2} m/s",
                curvature,
                limit.copysign(curvature),
                current_linear
            );
            limit.copysign(curvature)
        } else {
            curvature
        }
    }

    pub fn steer(&self, target_linear: f64, target_angular: f64, current_linear: f64) -> f64 {
        let curvature = self.curvature(target_linear, target_angular, current_linear);
        if curvature == 0.0 {
            return 0.0;
        }

        let wheel_angle = (curvature * self.wheel_base).atan();
        (wheel_angle * self.steer_ratio).clamp(-self.max_steer_angle, self.max_steer_angle)
    }
}
