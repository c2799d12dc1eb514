//! Distance command - great-circle distance and proximity between two points

use crate::output::{self, OutputFormat};
use anyhow::Result;
use foodshare_geo::{score_location_proximity, Coordinate};

/// Run the distance command
pub fn run(from: (f64, f64), to: (f64, f64), max_distance_km: f64, format: OutputFormat) -> Result<()> {
    let from = Coordinate::try_new(from.0, from.1)?;
    let to = Coordinate::try_new(to.0, to.1)?;

    let proximity = score_location_proximity(&from, &to, max_distance_km);

    match format {
        OutputFormat::Json => output::print_json(&proximity),
        OutputFormat::Text => {
            output::field("Distance", format!("{:.3} km", proximity.distance_km));
            output::field("Proximity score", format!("{:.3}", proximity.score));
            output::field(
                "Within range",
                format!("{} ({max_distance_km} km)", proximity.is_within_range),
            );
            Ok(())
        }
    }
}
