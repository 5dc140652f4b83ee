pub struct PIDController {
    kp: f64,
    ki: f64,
    kd: f64,
    integral: f64,
    previous_error: Option<f64>,
    min_limit: f64,
    max_limit: f64,
}

impl PIDController {
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            integral: 0.0,
            previous_error: None,
            min_limit: -f64::INFINITY,
            max_limit: f64::INFINITY,
        }
    }

    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.previous_error = None;
    }

    pub fn get_integral(&self) -> f64 {
        self.integral
    }

    pub fn update(&mut self, error: f64, dt: f64) -> f64 {
        let derivative = match self.previous_error {
            Some(prev) => (error - prev) / dt,
            None => 0.0,
        };
        self.previous_error = Some(error);

        // conditional integration: hold the integral while pushing into saturation
        let candidate = self.bound_integral(self.integral + error * dt);
        let raw = self.kp * error + self.ki * candidate + self.kd * derivative;

        let winding_up =
            (raw > self.max_limit && error > 0.0) || (raw < self.min_limit && error < 0.0);
        if !winding_up {
            self.integral = candidate;
        }

        let output = self.kp * error + self.ki * self.integral + self.kd * derivative;
        output.clamp(self.min_limit, self.max_limit)
    }

    pub fn step(&mut self, target: f64, current: f64, dt: f64) -> f64 {
        self.update(target - current, dt)
    }

    pub fn set_output_limits(&mut self, min_limit: f64, max_limit: f64) {
        self.min_limit = min_limit;
        self.max_limit = max_limit;
    }

    // the integral term alone never needs to exceed the widest output bound
    fn bound_integral(&self, integral: f64) -> f64 {
        let reach = self.min_limit.abs().max(self.max_limit.abs());
        if self.ki.abs() <= f64::EPSILON || !reach.is_finite() {
            return integral;
        }
        let bound = reach / self.ki.abs();
        integral.clamp(-bound, bound)
    }
}

#[cfg(test)]
mod pid_tests {
    use super::*;

    const DT: f64 = 0.02;

    fn controller() -> PIDController {
        let mut pid = PIDController::new(0.8, 0.1, 0.05);
        pid.set_output_limits(-5.0, 1.0);
        pid
    }

    #[test]
    fn first_step_has_no_derivative_kick() {
        let mut pid = PIDController::new(0.0, 0.0, 1.0);
        assert_eq!(pid.update(3.0, DT), 0.0, "no previous error yet");
        assert!((pid.update(4.0, DT) - 1.0 / DT).abs() < 1e-9);
    }

    #[test]
    fn output_is_clamped() {
        let mut pid = controller();
        assert_eq!(pid.update(100.0, DT), 1.0, "clamped to max");
        pid.reset();
        assert_eq!(pid.update(-100.0, DT), -5.0, "clamped to min");
    }

    #[test]
    fn reset_matches_fresh_controller() {
        let mut used = controller();
        for i in 0..50 {
            used.step(10.0, i as f64 * 0.1, DT);
        }
        used.reset();

        let mut fresh = controller();
        assert_eq!(used.get_integral(), 0.0);
        assert_eq!(used.step(3.0, 1.0, DT), fresh.step(3.0, 1.0, DT));
        assert_eq!(used.step(3.0, 1.5, DT), fresh.step(3.0, 1.5, DT));
    }

    #[test]
    fn integral_stops_while_saturated() {
        let mut pid = controller();
        // proportional term alone saturates
        for _ in 0..500 {
            pid.update(10.0, DT);
        }
        assert_eq!(pid.get_integral(), 0.0, "no windup at saturation");

        // error reversing unwinds immediately
        let out = pid.update(-0.5, DT);
        assert!(out < 0.0, "output follows the new error, got {out}");
    }

    #[test]
    fn integral_accumulates_when_unsaturated() {
        let mut pid = controller();
        for _ in 0..10 {
            pid.update(0.5, DT);
        }
        assert!((pid.get_integral() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn integral_is_bounded_by_output_reach() {
        let mut pid = PIDController::new(0.0, 1.0, 0.0);
        pid.set_output_limits(-2.0, 2.0);
        for _ in 0..10_000 {
            pid.update(1.0, DT);
        }
        assert!(pid.get_integral() <= 2.0 + 1e-9, "got {}", pid.get_integral());
    }

    #[test]
    fn zero_error_holds_output_steady() {
        let mut pid = controller();
        for _ in 0..20 {
            pid.update(0.2, DT);
        }
        // derivative settles after one tick at the new error
        pid.update(0.0, DT);
        let held = pid.update(0.0, DT);
        for _ in 0..100 {
            let out = pid.update(0.0, DT);
            assert!((out - 0.1 * pid.get_integral()).abs() < 1e-12);
            assert!((out - held).abs() < 1e-12, "output stable at zero error");
        }
    }
}
