//! Demo binary: simulates one detection event end to end.
//!
//! Builds a non-planar demo array, computes exact arrival times for a
//! known source, recovers the source with the TOA solver and prints the
//! rendered scene as JSON. Also runs a planar hexagon through the solver
//! to show the deterministic singular-geometry failure.

use acoustic_localization::{
    assess, render, ArrivalTimes, Point3, SensorArray, ToaLocator,
};
use log::{info, warn};

fn exact_arrival_times(array: &SensorArray, source: &Point3, speed: f64) -> ArrivalTimes {
    ArrivalTimes::new(
        array
            .positions()
            .iter()
            .map(|sensor| sensor.distance_to(source) / speed)
            .collect(),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let locator = ToaLocator::new();

    // Three sensors on a 10 m ring plus one elevated above the center
    let array = SensorArray::new(vec![
        Point3::new(10.0, 0.0, 0.0),
        Point3::new(-5.0, 8.66, 0.0),
        Point3::new(-5.0, -8.66, 0.0),
        Point3::new(0.0, 0.0, 6.0),
    ])?;
    info!("array geometry quality: {:?}", assess(&array));

    let truth = Point3::new(12.5, -4.0, 1.8);
    let arrival_times = exact_arrival_times(&array, &truth, locator.speed_of_sound());

    let estimate = locator.locate(&array, &arrival_times)?;
    info!(
        "estimated source at ({:.3}, {:.3}, {:.3}) m, simulated at ({:.3}, {:.3}, {:.3}) m",
        estimate.x, estimate.y, estimate.z, truth.x, truth.y, truth.z
    );

    let scene = render(&estimate, &array);
    println!("{}", scene.to_json()?);

    // Planar rings cannot resolve z with the exact method; the solver
    // reports the singularity instead of guessing.
    let hexagon = SensorArray::circular(1.0, 6)?;
    let hexagon_times =
        exact_arrival_times(&hexagon, &Point3::new(0.0, 0.0, 2.0), locator.speed_of_sound());
    match locator.locate(&hexagon, &hexagon_times) {
        Ok(position) => warn!(
            "hexagon unexpectedly solved to ({:.3}, {:.3}, {:.3})",
            position.x, position.y, position.z
        ),
        Err(err) => info!("hexagon array rejected: {}", err),
    }

    Ok(())
}
