use thiserror::Error;

// throttle and brake both above this count as simultaneous actuation
pub const ACTUATION_EPSILON: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("throttle must be within [0, 1], found {0}")]
    ThrottleOutOfRange(f64),

    #[error("brake torque must be finite and non-negative, found {0}")]
    InvalidBrake(f64),

    #[error("steering angle must be finite, found {0}")]
    InvalidSteer(f64),

    #[error("throttle {throttle} and brake {brake} requested together")]
    ThrottleAndBrake { throttle: f64, brake: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Twist {
    pub linear: f64,
    pub angular: f64,
}

impl Twist {
    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlSnapshot {
    pub target: Option<Twist>,
    pub current_speed: Option<f64>,
    pub dbw_override: bool,
}

impl ControlSnapshot {
    pub fn engaged(target: Twist, current_speed: f64) -> Self {
        Self {
            target: Some(target),
            current_speed: Some(current_speed),
            dbw_override: false,
        }
    }

    pub fn overridden() -> Self {
        Self {
            dbw_override: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuationCommand {
    throttle: f64, // fraction of full pedal
    brake: f64,    // N·m
    steer: f64,    // steering wheel angle, rad
}

impl ActuationCommand {
    pub fn try_new(throttle: f64, brake: f64, steer: f64) -> Result<Self, CommandError> {
        if !(0.0..=1.0).contains(&throttle) {
            return Err(CommandError::ThrottleOutOfRange(throttle));
        }
        if !brake.is_finite() || brake < 0.0 {
            return Err(CommandError::InvalidBrake(brake));
        }
        if !steer.is_finite() {
            return Err(CommandError::InvalidSteer(steer));
        }
        if throttle > ACTUATION_EPSILON && brake > ACTUATION_EPSILON {
            return Err(CommandError::ThrottleAndBrake { throttle, brake });
        }

        Ok(Self {
            throttle,
            brake,
            steer,
        })
    }

    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    pub fn brake(&self) -> f64 {
        self.brake
    }

    pub fn steer(&self) -> f64 {
        self.steer
    }
}
