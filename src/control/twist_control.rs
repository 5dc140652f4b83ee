use log::{debug, info, warn};

use crate::control::arbiter::ThrottleBrakeArbiter;
use crate::control::lowpass::LowPassFilter;
use crate::control::pid::PIDController;
use crate::control::yaw::{MIN_STEER_SPEED, YawController};
use crate::core::{ActuationCommand, ControlSnapshot, DbwParams, DriveMode, ParamsError};

pub trait VehicleController {
    fn control(&mut self, snapshot: &ControlSnapshot) -> Option<ActuationCommand>;
    fn reset(&mut self);
    fn mode(&self) -> DriveMode;
}

pub struct TwistController {
    speed_pid: PIDController,
    speed_filter: LowPassFilter,
    arbiter: ThrottleBrakeArbiter,
    yaw: YawController,
    sample_time: f64,
    mode: DriveMode,
}

impl TwistController {
    pub fn new(params: &DbwParams) -> Result<Self, ParamsError> {
        params.validate()?;

        let vehicle = &params.vehicle;
        let control = &params.control;

        let mut speed_pid = PIDController::new(control.kp, control.ki, control.kd);
        speed_pid.set_output_limits(-vehicle.decel_limit, vehicle.accel_limit);

        let arbiter = ThrottleBrakeArbiter::new(vehicle);
        info!(
            "twist controller up: mass {:.1} kg, hold torque {:.1} N·m, period {} s",
            vehicle.effective_mass(),
            arbiter.hold_torque(),
            control.sample_time
        );

        Ok(Self {
            speed_pid,
            speed_filter: LowPassFilter::new(control.speed_filter_tau, control.sample_time),
            arbiter,
            yaw: YawController::new(vehicle),
            sample_time: control.sample_time,
            mode: DriveMode::OVERRIDDEN,
        })
    }

    pub fn get_integral(&self) -> f64 {
        self.speed_pid.get_integral()
    }

    pub fn get_filtered_speed(&self) -> Option<f64> {
        self.speed_filter.get()
    }

    pub fn hold_torque(&self) -> f64 {
        self.arbiter.hold_torque()
    }

    fn set_mode(&mut self, mode: DriveMode) {
        if self.mode != mode {
            info!("drive-by-wire {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }
}

impl VehicleController for TwistController {
    fn control(&mut self, snapshot: &ControlSnapshot) -> Option<ActuationCommand> {
        if snapshot.dbw_override {
            self.set_mode(DriveMode::OVERRIDDEN);
            self.reset();
            return None;
        }
        self.set_mode(DriveMode::ENGAGED);

        let (target, measured) = match (snapshot.target, snapshot.current_speed) {
            (Some(target), Some(measured)) => (target, measured),
            _ => {
                debug!("waiting for twist and speed report");
                return None;
            }
        };

        if !measured.is_finite() || !target.linear.is_finite() || !target.angular.is_finite() {
            warn!("dropping non-finite sample {:?} at {:?} m/s", target, measured);
            return None;
        }

        let speed = self.speed_filter.update(measured);

        // held at standstill the speed loop is idle, keep it from winding up
        let (throttle, brake) =
            if target.linear.abs() < MIN_STEER_SPEED && self.arbiter.is_stopped(speed) {
                self.speed_pid.reset();
                (0.0, self.arbiter.hold_torque())
            } else {
                let accel = self.speed_pid.step(target.linear, speed, self.sample_time);
                self.arbiter.apportion(accel, speed)
            };
        let steer = self.yaw.steer(target.linear, target.angular, speed);

        debug!(
            "target {:.2} m/s {:.3} rad/s, speed {:.2} m/s -> throttle {:.3} brake {:.1} steer {:.3}",
            target.linear, target.angular, speed, throttle, brake, steer
        );

        match ActuationCommand::try_new(throttle, brake, steer) {
            Ok(command) => Some(command),
            Err(e) => {
                warn!("suppressing command: {}", e);
                None
            }
        }
    }

    fn reset(&mut self) {
        self.speed_pid.reset();
        self.speed_filter.reset();
    }

    fn mode(&self) -> DriveMode {
        self.mode
    }
}
