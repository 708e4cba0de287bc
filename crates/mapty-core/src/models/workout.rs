//! Workout records and their two variants.
//!
//! Derived metrics and the description are computed once by the
//! constructors. Deserialization restores the stored values as they are and
//! never goes back through the constructors.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Opaque workout identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latitude/longitude pair, stored as `[lat, lng]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Google Maps link centred on these coordinates
    pub fn map_url(&self, zoom: u8) -> String {
        format!("https://www.google.com/maps/@{},{},{}z", self.lat, self.lng, zoom)
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coords: Coordinates) -> Self {
        [coords.lat, coords.lng]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Workout variant discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized name used in descriptions
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific fields, tagged by `type` in the stored form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        #[serde(rename = "cadence")]
        cadence_spm: f64,

        #[serde(rename = "pace", with = "metric")]
        pace_min_per_km: f64,
    },
    Cycling {
        #[serde(rename = "elevationGain")]
        elevation_gain_m: f64,

        #[serde(rename = "speed", with = "metric")]
        speed_km_per_h: f64,
    },
}

impl WorkoutDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// JSON cannot carry infinities, so a non-finite metric is written as `null`
/// and read back as NaN.
mod metric {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// A recorded exercise session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: WorkoutId,

    #[serde(rename = "date")]
    created_at: DateTime<Utc>,

    #[serde(rename = "coords")]
    coordinates: Coordinates,

    #[serde(rename = "distance")]
    distance_km: f64,

    #[serde(rename = "duration")]
    duration_min: f64,

    #[serde(default)]
    description: String,

    #[serde(flatten)]
    details: WorkoutDetails,
}

impl Workout {
    /// Create a running workout timestamped now.
    ///
    /// Inputs are not validated. A zero distance yields an infinite pace.
    pub fn running(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        Self::running_at(Utc::now(), coordinates, distance_km, duration_min, cadence_spm)
    }

    pub fn running_at(
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        let details = WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };
        Self::assemble(created_at, coordinates, distance_km, duration_min, details)
    }

    /// Create a cycling workout timestamped now.
    ///
    /// Elevation gain may be zero or negative. A zero duration yields an
    /// infinite speed.
    pub fn cycling(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self::cycling_at(Utc::now(), coordinates, distance_km, duration_min, elevation_gain_m)
    }

    pub fn cycling_at(
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        let details = WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_km_per_h: distance_km / (duration_min / 60.0),
        };
        Self::assemble(created_at, coordinates, distance_km, duration_min, details)
    }

    fn assemble(
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        details: WorkoutDetails,
    ) -> Self {
        let description = describe(details.kind(), &created_at.with_timezone(&Local));
        Self {
            id: WorkoutId::generate(),
            created_at,
            coordinates,
            distance_km,
            duration_min,
            description,
            details,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { pace_min_per_km, .. } => Some(pace_min_per_km),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    pub fn cadence_spm(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { cadence_spm, .. } => Some(cadence_spm),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
            WorkoutDetails::Running { .. } => None,
        }
    }

    pub fn elevation_gain_m(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { elevation_gain_m, .. } => Some(elevation_gain_m),
            WorkoutDetails::Running { .. } => None,
        }
    }

    /// Marker popup text, e.g. "🏃‍♂️ Running on April 14"
    pub fn popup_label(&self) -> String {
        format!("{} {}", self.kind().icon(), self.description)
    }
}

/// Human-readable label such as "Running on April 14".
///
/// Month and day are read in the time zone `created_at` carries, so callers
/// pass a local time to get the user's calendar date.
pub fn describe<Tz: TimeZone>(kind: WorkoutKind, created_at: &DateTime<Tz>) -> String {
    format!(
        "{} on {} {}",
        kind.label(),
        MONTHS[created_at.month0() as usize],
        created_at.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn april_14() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 14, 9, 30, 0).unwrap()
    }

    /// 09:30 on April 14 on the machine's own clock
    fn april_14_local() -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(2024, 4, 14, 9, 30, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_running_pace() {
        let run = Workout::running(Coordinates::new(30.0, 78.0), 5.2, 24.0, 178.0);

        assert_eq!(run.kind(), WorkoutKind::Running);
        assert!((run.pace_min_per_km().unwrap() - 4.615).abs() < 1e-3);
        assert_eq!(run.cadence_spm(), Some(178.0));
        assert_eq!(run.speed_km_per_h(), None);
        assert_eq!(run.elevation_gain_m(), None);
    }

    #[test]
    fn test_cycling_speed() {
        let ride = Workout::cycling(Coordinates::new(30.0, 78.0), 20.0, 60.0, 300.0);

        assert_eq!(ride.kind(), WorkoutKind::Cycling);
        assert_eq!(ride.speed_km_per_h(), Some(20.0));
        assert_eq!(ride.elevation_gain_m(), Some(300.0));
        assert_eq!(ride.pace_min_per_km(), None);
    }

    #[test]
    fn test_negative_elevation_is_kept() {
        let ride = Workout::cycling(Coordinates::new(0.0, 0.0), 12.0, 30.0, -85.0);
        assert_eq!(ride.elevation_gain_m(), Some(-85.0));
        assert_eq!(ride.speed_km_per_h(), Some(24.0));
    }

    #[test]
    fn test_zero_distance_gives_infinite_pace() {
        let run = Workout::running(Coordinates::new(0.0, 0.0), 0.0, 30.0, 160.0);
        let pace = run.pace_min_per_km().unwrap();
        assert!(pace.is_infinite());
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(WorkoutKind::Running, &april_14()), "Running on April 14");
        assert_eq!(describe(WorkoutKind::Cycling, &april_14()), "Cycling on April 14");

        let new_year = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(describe(WorkoutKind::Cycling, &new_year), "Cycling on January 1");

        let last_day = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(describe(WorkoutKind::Running, &last_day), "Running on December 31");
    }

    #[test]
    fn test_describe_uses_offset_calendar() {
        let india = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let early_morning = india.with_ymd_and_hms(2024, 4, 15, 3, 0, 0).unwrap();

        assert_eq!(describe(WorkoutKind::Running, &early_morning), "Running on April 15");
        assert_eq!(
            describe(WorkoutKind::Running, &early_morning.with_timezone(&Utc)),
            "Running on April 14"
        );
    }

    #[test]
    fn test_description_uses_local_date() {
        let local = Local.with_ymd_and_hms(2024, 4, 15, 3, 0, 0).unwrap();
        let run = Workout::running_at(
            local.with_timezone(&Utc),
            Coordinates::new(30.0, 78.0),
            5.0,
            25.0,
            178.0,
        );

        assert_eq!(run.description(), "Running on April 15");
        assert_eq!(run.created_at(), local.with_timezone(&Utc));
    }

    #[test]
    fn test_description_set_at_construction() {
        let run =
            Workout::running_at(april_14_local(), Coordinates::new(1.0, 2.0), 10.0, 50.0, 170.0);
        assert_eq!(run.description(), "Running on April 14");
        assert_eq!(run.popup_label(), "🏃‍♂️ Running on April 14");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Workout::running(Coordinates::new(0.0, 0.0), 1.0, 5.0, 150.0);
        let b = Workout::running(Coordinates::new(0.0, 0.0), 1.0, 5.0, 150.0);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_stored_field_names() {
        let run =
            Workout::running_at(april_14_local(), Coordinates::new(30.0, 78.0), 5.0, 25.0, 178.0);
        let value = serde_json::to_value(&run).unwrap();

        assert_eq!(value["type"], "running");
        assert_eq!(value["coords"], serde_json::json!([30.0, 78.0]));
        assert_eq!(value["distance"], 5.0);
        assert_eq!(value["duration"], 25.0);
        assert_eq!(value["cadence"], 178.0);
        assert_eq!(value["pace"], 5.0);
        assert_eq!(value["description"], "Running on April 14");
    }

    #[test]
    fn test_non_finite_metric_written_as_null() {
        let run = Workout::running(Coordinates::new(0.0, 0.0), 0.0, 30.0, 160.0);
        let value = serde_json::to_value(&run).unwrap();
        assert!(value["pace"].is_null());

        let restored: Workout = serde_json::from_value(value).unwrap();
        assert!(restored.pace_min_per_km().unwrap().is_nan());
    }

    #[test]
    fn test_map_url() {
        let coords = Coordinates::new(30.5, 78.25);
        assert_eq!(coords.map_url(12), "https://www.google.com/maps/@30.5,78.25,12z");
    }
}
