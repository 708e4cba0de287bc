use mapty_core::config::ConfigSource;
use mapty_core::models::{Workout, WorkoutDetails};
use serde::Serialize;
use tabled::Tabled;

/// One rendered workout, as shown in the list view
#[derive(Debug, Serialize, Tabled)]
pub struct WorkoutRow {
    #[tabled(rename = "")]
    #[serde(skip)]
    pub icon: &'static str,
    #[tabled(rename = "Id")]
    pub id: String,
    #[tabled(rename = "Workout")]
    pub description: String,
    #[tabled(rename = "Distance")]
    pub distance: String,
    #[tabled(rename = "Duration")]
    pub duration: String,
    #[tabled(rename = "Pace/Speed")]
    pub metric: String,
    #[tabled(rename = "Cadence/Elevation")]
    pub extra: String,
    #[tabled(skip)]
    pub kind: String,
}

impl From<&Workout> for WorkoutRow {
    fn from(workout: &Workout) -> Self {
        let (metric, extra) = match workout.details() {
            WorkoutDetails::Running { cadence_spm, pace_min_per_km } => (
                format_pace(*pace_min_per_km),
                format!("{} spm", cadence_spm),
            ),
            WorkoutDetails::Cycling { elevation_gain_m, speed_km_per_h } => (
                format_speed(*speed_km_per_h),
                format!("{} m", elevation_gain_m),
            ),
        };

        Self {
            icon: workout.kind().icon(),
            id: workout.id().to_string(),
            description: workout.description().to_string(),
            distance: format!("{} km", workout.distance_km()),
            duration: format!("{} min", workout.duration_min()),
            metric,
            extra,
            kind: workout.kind().to_string(),
        }
    }
}

/// Pace is rounded to one decimal; an undefined pace shows as "-"
pub fn format_pace(pace_min_per_km: f64) -> String {
    if pace_min_per_km.is_finite() {
        format!("{:.1} min/km", pace_min_per_km)
    } else {
        "- min/km".to_string()
    }
}

/// Speed is shown as stored, without rounding
pub fn format_speed(speed_km_per_h: f64) -> String {
    if speed_km_per_h.is_finite() {
        format!("{} km/h", speed_km_per_h)
    } else {
        "- km/h".to_string()
    }
}

/// Output for list command
#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub count: usize,
    pub workouts: Vec<WorkoutRow>,
}

/// Output for add command
#[derive(Debug, Serialize)]
pub struct AddOutput {
    pub id: String,
    pub kind: String,
    pub label: String,
    pub stored_count: usize,
}

/// Output for show command
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub workout: Workout,
    pub map_url: String,
}

/// Output for reset command
#[derive(Debug, Serialize)]
pub struct ResetOutput {
    pub removed: usize,
    pub key: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub source: ConfigSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapty_core::models::Coordinates;

    #[test]
    fn test_running_row() {
        let run = Workout::running(Coordinates::new(30.0, 78.0), 5.2, 24.0, 178.0);
        let row = WorkoutRow::from(&run);

        assert_eq!(row.metric, "4.6 min/km");
        assert_eq!(row.extra, "178 spm");
        assert_eq!(row.distance, "5.2 km");
        assert_eq!(row.duration, "24 min");
        assert_eq!(row.kind, "running");
    }

    #[test]
    fn test_cycling_row() {
        let ride = Workout::cycling(Coordinates::new(30.0, 78.0), 20.0, 60.0, -40.0);
        let row = WorkoutRow::from(&ride);

        assert_eq!(row.metric, "20 km/h");
        assert_eq!(row.extra, "-40 m");
    }

    #[test]
    fn test_speed_is_not_rounded() {
        let ride = Workout::cycling(Coordinates::new(30.0, 78.0), 20.0, 65.0, 0.0);
        let row = WorkoutRow::from(&ride);

        assert_eq!(row.metric, format!("{} km/h", 20.0 / (65.0 / 60.0)));
        assert_eq!(format_speed(18.75), "18.75 km/h");
        assert_eq!(format_pace(4.6153), "4.6 min/km");
    }

    #[test]
    fn test_undefined_metric() {
        assert_eq!(format_pace(f64::INFINITY), "- min/km");
        assert_eq!(format_speed(f64::NAN), "- km/h");
    }
}
