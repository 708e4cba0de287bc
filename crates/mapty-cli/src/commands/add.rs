//! Add command implementation

use crate::app::App;
use crate::cli::{AddArgs, AddCommand};
use crate::output_types::AddOutput;
use anyhow::Result;
use mapty_core::models::{Coordinates, Workout};
use mapty_core::validation::{validate_cycling, validate_running};

pub fn execute(args: AddArgs, app: &mut App) -> Result<()> {
    // Validate before constructing; the constructors accept anything
    let workout = match args.workout {
        AddCommand::Running(run) => {
            let s = run.session;
            validate_running(s.distance, s.duration, run.cadence)?;
            Workout::running(Coordinates::new(s.lat, s.lng), s.distance, s.duration, run.cadence)
        }
        AddCommand::Cycling(ride) => {
            let s = ride.session;
            validate_cycling(s.distance, s.duration, ride.elevation)?;
            Workout::cycling(Coordinates::new(s.lat, s.lng), s.distance, s.duration, ride.elevation)
        }
    };

    let recorded = app.record(workout)?;
    let (id, kind, label) = (
        recorded.id().to_string(),
        recorded.kind().to_string(),
        recorded.popup_label(),
    );
    let out = AddOutput {
        id,
        kind,
        label,
        stored_count: app.store().len(),
    };

    if app.output.is_json() {
        app.output.result(out)?;
    } else {
        app.output.success(&out.label);
        app.output.kv("Id", &out.id);
    }

    Ok(())
}
