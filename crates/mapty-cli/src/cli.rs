use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Mapty - Record geotagged running and cycling workouts
#[derive(Parser, Debug)]
#[command(name = "mapty")]
#[command(about = "Record geotagged running and cycling workouts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the workout slot files
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Slot key the workouts are stored under
    #[arg(long, global = true, value_name = "KEY")]
    pub key: Option<String>,

    /// Configuration file (defaults to ./mapty.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new workout
    Add(AddArgs),

    /// List all workouts in the order they were recorded
    List,

    /// Show one workout and where it happened
    Show(ShowArgs),

    /// Delete all stored workouts
    Reset,

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(subcommand)]
    pub workout: AddCommand,
}

#[derive(Subcommand, Debug)]
pub enum AddCommand {
    /// Record a run
    Running(RunningArgs),

    /// Record a ride
    Cycling(CyclingArgs),
}

/// Fields shared by every workout kind
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Latitude of the workout location
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the workout location
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Distance in kilometers
    #[arg(long)]
    pub distance: f64,

    /// Duration in minutes
    #[arg(long)]
    pub duration: f64,
}

#[derive(Args, Debug)]
pub struct RunningArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Cadence in steps per minute
    #[arg(long)]
    pub cadence: f64,
}

#[derive(Args, Debug)]
pub struct CyclingArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Elevation gain in meters (negative for a net descent)
    #[arg(long, allow_negative_numbers = true)]
    pub elevation: f64,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Workout id as printed by `add` or `list`
    pub id: String,

    /// Zoom level for the map link
    #[arg(long, default_value = "15")]
    pub zoom: u8,
}
