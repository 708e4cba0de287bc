//! List command implementation

use crate::app::App;
use crate::output_types::{ListOutput, WorkoutRow};
use anyhow::Result;

pub fn execute(app: &App) -> Result<()> {
    let rows: Vec<WorkoutRow> = app.store().all().iter().map(WorkoutRow::from).collect();

    if app.output.is_json() {
        app.output.result(ListOutput {
            count: rows.len(),
            workouts: rows,
        })?;
        return Ok(());
    }

    let empty = rows.is_empty();
    app.output.table(rows);
    if empty {
        app.output.info("Record one with: mapty add running --help");
    }

    Ok(())
}
