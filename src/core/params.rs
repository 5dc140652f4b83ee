//! Vehicle and controller parameters.
//!
//! Parameters are read once at start up from a TOML file with a `[vehicle]`
//! and a `[control]` table. Any field left out of the file takes the value of
//! the reference vehicle.

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Fuel density in kg per US gallon.
pub const GAS_DENSITY: f64 = 2.858;

/// Standard gravity, m/s².
pub const GRAVITY: f64 = 9.81;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("cannot load the parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read the parameter file: {0}")]
    Deserialise(#[from] toml::de::Error),

    #[error("parameter `{name}` must be positive, found {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("parameter `{name}` must be within [{min}, {max}], found {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("throttle bounds must satisfy 0 <= min <= max <= 1, found [{min}, {max}]")]
    InvalidThrottleBounds { min: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VehicleParameters {
    /// Curb mass, kg.
    pub vehicle_mass: f64,
    /// Fuel tank capacity, gal.
    pub fuel_capacity: f64,
    /// Fraction of the tank counted into the effective mass.
    pub fuel_fraction: f64,
    /// m
    pub wheel_radius: f64,
    /// m
    pub wheel_base: f64,
    /// Steering wheel angle per road wheel angle.
    pub steer_ratio: f64,
    /// Steering wheel angle limit, rad.
    pub max_steer_angle: f64,
    /// m/s²
    pub max_lat_accel: f64,
    /// Largest acceleration the throttle is scaled against, m/s².
    pub accel_limit: f64,
    /// Largest deceleration magnitude, m/s².
    pub decel_limit: f64,
    /// Deceleration requests smaller than this are not braked for, m/s².
    pub brake_deadband: f64,
    /// Below this speed the vehicle counts as stopped, m/s.
    pub standstill_speed: f64,
    /// Grade the standstill hold torque must resist.
    pub hold_grade: f64,
    /// N·m
    pub max_brake_torque: f64,
    pub min_throttle: f64,
    pub max_throttle: f64,
}

impl Default for VehicleParameters {
    fn default() -> Self {
        Self {
            vehicle_mass: 1736.35,
            fuel_capacity: 13.5,
            fuel_fraction: 1.0,
            wheel_radius: 0.2413,
            wheel_base: 2.8498,
            steer_ratio: 14.8,
            max_steer_angle: 8.0,
            max_lat_accel: 3.0,
            accel_limit: 1.0,
            decel_limit: 5.0,
            brake_deadband: 0.1,
            standstill_speed: 0.1,
            hold_grade: 0.17,
            max_brake_torque: 3250.0,
            min_throttle: 0.0,
            max_throttle: 1.0,
        }
    }
}

impl VehicleParameters {
    /// Curb mass plus the carried fuel.
    pub fn effective_mass(&self) -> f64 {
        self.vehicle_mass + self.fuel_capacity * self.fuel_fraction * GAS_DENSITY
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        positive("effective_mass", self.effective_mass())?;
        positive("wheel_radius", self.wheel_radius)?;
        positive("wheel_base", self.wheel_base)?;
        positive("steer_ratio", self.steer_ratio)?;
        positive("max_steer_angle", self.max_steer_angle)?;
        positive("max_lat_accel", self.max_lat_accel)?;
        positive("accel_limit", self.accel_limit)?;
        positive("decel_limit", self.decel_limit)?;
        positive("max_brake_torque", self.max_brake_torque)?;
        within("fuel_fraction", self.fuel_fraction, 0.0, 1.0)?;
        within("brake_deadband", self.brake_deadband, 0.0, f64::MAX)?;
        within("standstill_speed", self.standstill_speed, 0.0, f64::MAX)?;
        within("hold_grade", self.hold_grade, 0.0, f64::MAX)?;

        let (min, max) = (self.min_throttle, self.max_throttle);
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
            return Err(ParamsError::InvalidThrottleBounds { min, max });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlParams {
    /// Control loop period, s.
    pub sample_time: f64,
    /// Time constant of the speed feedback filter, s.
    pub speed_filter_tau: f64,
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

impl Default for ControlParams {
    fn default() -> Self {
        Self {
            sample_time: 0.02,
            speed_filter_tau: 0.5,
            kp: 0.8,
            ki: 0.1,
            kd: 0.0,
        }
    }
}

impl ControlParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        positive("sample_time", self.sample_time)?;
        within("speed_filter_tau", self.speed_filter_tau, 0.0, f64::MAX)?;
        within("kp", self.kp, 0.0, f64::MAX)?;
        within("ki", self.ki, 0.0, f64::MAX)?;
        within("kd", self.kd, 0.0, f64::MAX)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DbwParams {
    pub vehicle: VehicleParameters,
    pub control: ControlParams,
}

impl DbwParams {
    /// Load and validate a parameter file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let params_str = read_to_string(path)?;
        Self::from_toml(&params_str)
    }

    pub fn from_toml(s: &str) -> Result<Self, ParamsError> {
        let params: DbwParams = toml::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        self.vehicle.validate()?;
        self.control.validate()
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ParamsError> {
    // NaN fails this too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NonPositive { name, value })
    }
}

// rejects NaN and infinities along with anything outside [min, max]
fn within(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ParamsError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParamsError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
