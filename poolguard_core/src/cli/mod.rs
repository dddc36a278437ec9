mod types;
pub use types::*;

use crate::config::PoolGuardConfig;
use crate::pool::IpPool;
use crate::validator::{resource, Operation, Validator};

use clap::Parser;
use owo_colors::OwoColorize;

// Logger
use env_logger::Builder;

// Error Handling
use log::trace;
use miette::{IntoDiagnostic, Result};

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        Self::switch(cli)?;
        Ok(())
    }
    pub fn switch(cli: Cli) -> Result<()> {
        // Set verbosity
        let verbosity = cli.verbose.log_level_filter();
        std::env::set_var("POOLGUARD_LOG", verbosity.to_string().to_lowercase());
        Builder::from_env("POOLGUARD_LOG").init();

        match cli.commands {
            Commands::Create(args) => {
                Self::check(cli.config.as_deref(), &args, Operation::Create)?;
            }
            Commands::Update(args) => {
                Self::check(cli.config.as_deref(), &args, Operation::Update)?;
            }
            Commands::Delete(args) => {
                Self::check(cli.config.as_deref(), &args, Operation::Delete)?;
            }
            Commands::Resource => {
                let res = toml::to_string_pretty(&resource()).into_diagnostic()?;
                println!("{}", res);
            }
        }
        Ok(())
    }

    /*
    * Run one admission request against the configured registry snapshot.
    */
    fn check(config: Option<&str>, args: &PoolArgs, operation: Operation) -> Result<()> {
        let config = match config {
            Some(path) => PoolGuardConfig::from_file(path)?,
            None => PoolGuardConfig::get()?,
        };
        let registry = config.registry();
        let ip_pool = IpPool::from_file(&args.file)?;
        trace!("{:#?}", ip_pool);

        let validator = Validator::new(&registry, &registry);
        let res = match operation {
            Operation::Create => validator.create(&ip_pool),
            Operation::Update => validator.update(&ip_pool),
            Operation::Delete => validator.delete(&ip_pool),
        };
        match res {
            Ok(()) => {
                println!(
                    "{} {} ippool {}",
                    "[accepted]".green(),
                    operation,
                    ip_pool.namespaced_name()
                );
                Ok(())
            }
            Err(e) => {
                println!(
                    "{} {} ippool {}",
                    "[rejected]".red(),
                    operation,
                    ip_pool.namespaced_name()
                );
                Err(e.into())
            }
        }
    }
}
