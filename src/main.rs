use anyhow::Result;
use id3_forest::ui::build::build_experiment;
use id3_forest::ui::cli::{Command, parse_args, usage};
use id3_forest::ui::config::{ExperimentConfig, ModelChoice};
use std::io::{self, Write};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "id3-forest".to_string());

    match parse_args(args)? {
        Command::Help => println!("{}", usage(&program)),
        Command::PrintConfig(kind) => {
            let config = ExperimentConfig::new("dataset.arff", ModelChoice::default_for(kind));
            println!("{}", config.to_json_pretty()?);
        }
        Command::Run(config) => {
            let mut experiment = build_experiment(&config)?;
            let mut out = io::stdout().lock();
            experiment.run(&mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}
