use std::{env, thread, time::Duration};

use chrono::Local;
use dbw_controller::{
    Actuators, DbwInputs, DbwParams, SimulatedActuators, SimulatedSpeedometer, SpeedSensor,
    TwistController, VehicleController, VehiclePhysics, ui::terminal_ui::log_to_terminal,
};
use fern::Dispatch;
use log::{error, info};

const RUN_TIME: f64 = 40.0;

fn setup_logger() -> Result<(), Box<dyn std::error::Error>> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::fs::File::create("dbw.log")?)
        .apply()?;

    Ok(())
}

/// Scripted twist command and driver takeover for the demo drive.
fn scenario(time: f64) -> (Option<(f64, f64)>, bool) {
    match time {
        t if t < 1.0 => (None, false),
        t if t < 2.0 => (Some((10.0, 0.0)), false),
        t if t < 15.0 => (Some((10.0, 0.0)), true),
        t if t < 20.0 => (Some((8.0, 0.3)), true),
        t if t < 24.0 => (Some((8.0, 0.0)), false),
        t if t < 30.0 => (Some((6.0, 0.0)), true),
        _ => (Some((0.0, 0.0)), true),
    }
}

fn main() {
    if let Err(e) = setup_logger() {
        eprintln!("cannot set up logging: {}", e);
        return;
    }

    let params = match env::args().nth(1) {
        Some(path) => match DbwParams::load(&path) {
            Ok(p) => {
                info!("loaded parameters from {}", path);
                p
            }
            Err(e) => {
                error!("cannot load {}: {}", path, e);
                eprintln!("cannot load {}: {}", path, e);
                return;
            }
        },
        None => DbwParams::default(),
    };

    let mut controller = match TwistController::new(&params) {
        Ok(c) => c,
        Err(e) => {
            error!("refusing to start: {}", e);
            eprintln!("refusing to start: {}", e);
            return;
        }
    };

    println!("dbw-controller.");
    let dt = params.control.sample_time;
    let mut physics = VehiclePhysics::new(&params.vehicle, 0.0);
    let mut speedometer = SimulatedSpeedometer::new(0.15);
    let mut actuators = SimulatedActuators::new();
    let mut inputs = DbwInputs::new();

    let mut time = 0.0;
    while time < RUN_TIME {
        // Bus callbacks - latest values from each producer
        let (twist, dbw_enabled) = scenario(time);
        if let Some((linear, angular)) = twist {
            inputs.on_twist(linear, angular);
        }
        inputs.on_dbw_enabled(dbw_enabled);
        speedometer.set_speed(physics.get_velocity());
        inputs.on_speed_report(speedometer.get_speed());

        // Control Loop - decide how to drive -> outputs 'throttle, brake, steer'
        let snapshot = inputs.snapshot();
        match controller.control(&snapshot) {
            Some(command) => actuators.publish(&command),
            // driver has the pedals
            None if snapshot.dbw_override => {
                actuators.set_throttle(0.0);
                actuators.set_brake(0.0);
            }
            None => {}
        }
        physics.set_throttle(actuators.get_throttle());
        physics.set_brake_torque(actuators.get_brake());

        // Physics Loop - decide what happened -> outputs 'speed'
        physics.update(dt);

        log_to_terminal(time, &snapshot, &controller, &actuators, &physics);

        time += dt;
        thread::sleep(Duration::from_secs_f64(dt));
    }

    info!(
        "drive finished: {:.1} m, {} commands published",
        physics.get_distance(),
        actuators.get_published()
    );
}
