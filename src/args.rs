// src/args.rs
use crate::parsers;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use price_clean_shared_kernel::{ArtifactName, ArtifactReference};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "price_clean", version, about = "A very basic data cleaning")]
pub struct Args {
    #[command(flatten)]
    pub artifacts: ArtifactOptions,

    #[command(flatten)]
    pub filter: FilterOptions,

    #[command(flatten)]
    pub storage: StorageOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

#[derive(ClapArgs, Debug)]
pub struct ArtifactOptions {
    /// The input artifact (`name` or `name:latest`)
    #[arg(long = "input_artifact", visible_alias = "input-artifact", help_heading = "Artifacts")]
    pub input_artifact: ArtifactReference,

    /// The name for the output artifact
    #[arg(long = "output_artifact", visible_alias = "output-artifact", help_heading = "Artifacts")]
    pub output_artifact: ArtifactName,

    /// The type for the output artifact
    #[arg(long = "output_type", visible_alias = "output-type", help_heading = "Artifacts")]
    pub output_type: String,

    /// A description for the output artifact
    #[arg(long = "output_description", visible_alias = "output-description", help_heading = "Artifacts")]
    pub output_description: String,
}

#[derive(ClapArgs, Debug)]
pub struct FilterOptions {
    /// The minimum price to consider
    #[arg(
        long = "min_price",
        visible_alias = "min-price",
        allow_negative_numbers = true,
        value_parser = parsers::parse_price_bound,
        help_heading = "Filter"
    )]
    pub min_price: f64,

    /// The maximum price to consider
    #[arg(
        long = "max_price",
        visible_alias = "max-price",
        allow_negative_numbers = true,
        value_parser = parsers::parse_price_bound,
        help_heading = "Filter"
    )]
    pub max_price: f64,

    /// Column the bounds apply to
    #[arg(long, env = "PRICE_CLEAN_FIELD", default_value = "price", help_heading = "Filter")]
    pub field: String,
}

#[derive(ClapArgs, Debug)]
pub struct StorageOptions {
    /// Root directory of the artifact store
    #[arg(
        long,
        env = "PRICE_CLEAN_STORE",
        default_value = ".artifacts",
        value_hint = ValueHint::DirPath,
        help_heading = "Storage"
    )]
    pub store_dir: PathBuf,

    /// Directory the cleaned CSV is written to before publishing
    #[arg(
        long,
        env = "PRICE_CLEAN_WORK_DIR",
        default_value = ".",
        value_hint = ValueHint::DirPath,
        help_heading = "Storage"
    )]
    pub work_dir: PathBuf,

    /// Publish FILE as the input artifact before cleaning
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "Storage")]
    pub seed: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Behavior")]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, help_heading = "Behavior")]
    pub quiet: bool,

    /// Print the run report as JSON on stdout
    #[arg(long, help_heading = "Behavior")]
    pub json: bool,
}
