use clap::{Args, Parser, Subcommand, ValueHint};
use clap_verbosity_flag::Verbosity;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub commands: Commands,
    #[command(flatten)]
    pub verbose: Verbosity,

    /// Use another configuration file than the default one.
    #[arg(long, global = true, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<String>,
}

#[derive(Debug, Subcommand, Clone, Eq, PartialEq)]
pub enum Commands {
    /// Check an ip pool can be created.
    #[command(arg_required_else_help = true)]
    Create(PoolArgs),
    /// Check an ip pool can be updated (status allocations are taken into account).
    #[command(arg_required_else_help = true)]
    Update(PoolArgs),
    /// Check an ip pool can be deleted.
    #[command(arg_required_else_help = true)]
    Delete(PoolArgs),
    /// Print the resources and operations handled by the validator.
    Resource,
}

#[derive(Default, Debug, Args, Clone, Eq, PartialEq)]
pub struct PoolArgs {
    /// The ip pool toml manifest.
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: String,
}
