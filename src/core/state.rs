use crate::core::{ControlSnapshot, Twist};

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum DriveMode {
    ENGAGED,
    OVERRIDDEN,
}

// latest value from each bus callback, dbw disabled until reported
#[derive(Debug, Clone, Default)]
pub struct DbwInputs {
    current_speed: Option<f64>,
    target: Option<Twist>,
    dbw_enabled: bool,
}

impl DbwInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_speed_report(&mut self, speed: f64) {
        self.current_speed = Some(speed);
    }

    pub fn on_twist(&mut self, linear: f64, angular: f64) {
        self.target = Some(Twist::new(linear, angular));
    }

    pub fn on_dbw_enabled(&mut self, enabled: bool) {
        self.dbw_enabled = enabled;
    }

    pub fn is_dbw_enabled(&self) -> bool {
        self.dbw_enabled
    }

    pub fn snapshot(&self) -> ControlSnapshot {
        ControlSnapshot {
            target: self.target,
            current_speed: self.current_speed,
            dbw_override: !self.dbw_enabled,
        }
    }
}
