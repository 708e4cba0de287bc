//! Reset command implementation

use crate::app::App;
use crate::output_types::ResetOutput;
use anyhow::Result;

pub fn execute(app: &mut App) -> Result<()> {
    let removed = app.reset()?;
    let key = app.store().key().to_string();

    if app.output.is_json() {
        app.output.result(ResetOutput { removed, key })?;
    } else {
        app.output.success(format!("Removed {} workout(s) stored under '{}'", removed, key));
    }

    Ok(())
}
