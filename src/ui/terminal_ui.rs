use crate::{
    ControlSnapshot, DriveMode, SimulatedActuators, TwistController, VehicleController,
    VehiclePhysics,
};

pub struct DisplayData {
    pub time: f64,
    pub mode: String,
    pub target_speed: Option<f64>,
    pub target_yaw_rate: Option<f64>,
    pub measured_speed: Option<f64>,
    pub filtered_speed: Option<f64>,
    pub integral: f64,

    pub throttle: f64,
    pub brake: f64,
    pub steer: f64,

    pub true_speed: f64,
    pub distance: f64,
}

pub fn format_mode(mode: DriveMode) -> String {
    match mode {
        DriveMode::ENGAGED => "ENGAGED".to_string(),
        DriveMode::OVERRIDDEN => "OVERRIDDEN".to_string(),
    }
}

fn format_optional(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.2}{}", v, unit),
        None => "N/A".to_string(),
    }
}

pub fn log_to_terminal(
    time: f64,
    snapshot: &ControlSnapshot,
    controller: &TwistController,
    actuators: &SimulatedActuators,
    physics: &VehiclePhysics,
) {
    let display_data = DisplayData {
        time,
        mode: format_mode(controller.mode()),
        target_speed: snapshot.target.map(|t| t.linear),
        target_yaw_rate: snapshot.target.map(|t| t.angular),
        measured_speed: snapshot.current_speed,
        filtered_speed: controller.get_filtered_speed(),
        integral: controller.get_integral(),
        throttle: actuators.get_throttle(),
        brake: actuators.get_brake(),
        steer: actuators.get_steer(),
        true_speed: physics.get_velocity(),
        distance: physics.get_distance(),
    };

    print!("\x1B[2J\x1B[1;1H");

    println!("--- Drive-by-wire ({:.2}s) ---", display_data.time);
    println!("Mode: {}", display_data.mode);
    println!(
        "Target: {} / {}",
        format_optional(display_data.target_speed, "m/s"),
        format_optional(display_data.target_yaw_rate, "rad/s")
    );
    println!(
        "Measured Speed: {}",
        format_optional(display_data.measured_speed, "m/s")
    );
    println!(
        "Filtered Speed: {}",
        format_optional(display_data.filtered_speed, "m/s")
    );
    println!("Speed Integral: {:.4}", display_data.integral);

    println!("\n--- Actuators ---");
    println!("Throttle: {:.1}%", display_data.throttle * 100.0);
    println!("Brake: {:.1}N·m", display_data.brake);
    println!("Steering Wheel: {:.3}rad", display_data.steer);

    println!("\n--- Physics Engine ---");
    println!("Speed: {:.2}m/s", display_data.true_speed);
    println!("Distance: {:.1}m", display_data.distance);
    println!("----------------------\n");
}
