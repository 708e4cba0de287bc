//! Show command implementation

use crate::app::App;
use crate::cli::ShowArgs;
use crate::errors::workout_not_found;
use crate::output_types::{ShowOutput, WorkoutRow};
use anyhow::Result;
use chrono::Local;
use mapty_core::models::WorkoutKind;

pub fn execute(args: ShowArgs, app: &App) -> Result<()> {
    let Some(workout) = app.store().find_by_id(&args.id) else {
        return Err(workout_not_found(&args.id).into());
    };

    let map_url = workout.coordinates().map_url(args.zoom);

    if app.output.is_json() {
        app.output.result(ShowOutput {
            workout: workout.clone(),
            map_url,
        })?;
        return Ok(());
    }

    let row = WorkoutRow::from(workout);
    let output = &app.output;

    output.section(workout.popup_label());
    output.kv("Id", &row.id);
    output.kv(
        "Recorded",
        workout
            .created_at()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M %:z"),
    );
    output.kv("Location", workout.coordinates());
    output.kv("Distance", &row.distance);
    output.kv("Duration", &row.duration);
    let (metric, extra) = match workout.kind() {
        WorkoutKind::Running => ("Pace", "Cadence"),
        WorkoutKind::Cycling => ("Speed", "Elevation"),
    };
    output.kv(metric, &row.metric);
    output.kv(extra, &row.extra);
    output.kv("Map", map_url);

    Ok(())
}
