use crate::ui::config::{
    BoostingForestParams, DecisionTreeParams, ExperimentConfig, ModelChoice, ModelKind,
};
use anyhow::{Context, Result, bail};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(ExperimentConfig),
    /// Print a default configuration for the given model kind.
    PrintConfig(ModelKind),
    Help,
}

pub fn usage(program: &str) -> String {
    let kinds: Vec<&'static str> = ModelKind::iter().map(Into::into).collect();
    format!(
        "usage:\n  \
         {program} <dataset.arff> [boosting_iterations] [max_depth]\n  \
         {program} --config <experiment.json>\n  \
         {program} --print-config <{}>",
        kinds.join("|")
    )
}

fn parse_count(arg: &str, what: &str) -> Result<usize> {
    arg.parse::<usize>()
        .with_context(|| format!("{what} must be a non-negative integer, got '{arg}'"))
}

/// Parses the arguments that follow the program name.
///
/// Without `boosting_iterations` a plain decision tree is trained. With it,
/// a boosted forest is trained whose trees are limited to `max_depth`
/// (default 2).
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    let rest: Vec<&str> = args.iter().map(String::as_str).collect();

    match rest.as_slice() {
        [] | ["-h"] | ["--help"] => Ok(Command::Help),
        ["--config", path] => Ok(Command::Run(ExperimentConfig::load(path)?)),
        ["--print-config", kind] => {
            let kind = ModelKind::from_str(kind)
                .with_context(|| format!("unknown model kind '{kind}'"))?;
            Ok(Command::PrintConfig(kind))
        }
        [flag, ..] if flag.starts_with("--") => bail!("unrecognised arguments: {}", rest.join(" ")),
        [dataset] => Ok(Command::Run(ExperimentConfig::new(
            *dataset,
            ModelChoice::DecisionTree(DecisionTreeParams::default()),
        ))),
        [dataset, iterations, depth @ ..] if depth.len() <= 1 => {
            let defaults = BoostingForestParams::default();
            let params = BoostingForestParams {
                iterations: parse_count(iterations, "boosting_iterations")?,
                max_depth: match depth.first() {
                    Some(d) => parse_count(d, "max_depth")?,
                    None => defaults.max_depth,
                },
            };
            let config = ExperimentConfig::new(*dataset, ModelChoice::BoostingForest(params));
            config.validate()?;
            Ok(Command::Run(config))
        }
        _ => bail!("too many arguments"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_dataset_only_trains_a_tree() {
        let Command::Run(config) = parse_args(["weather.arff"]).unwrap() else {
            panic!("expected a run command");
        };
        assert_eq!(config.dataset_path, PathBuf::from("weather.arff"));
        assert_eq!(config.model.kind(), ModelKind::DecisionTree);
        assert_eq!(config.repeats, 10);
    }

    #[test]
    fn test_iterations_and_depth_select_boosting() {
        let Command::Run(config) = parse_args(["d.arff", "25", "3"]).unwrap() else {
            panic!("expected a run command");
        };
        assert_eq!(
            config.model,
            ModelChoice::BoostingForest(BoostingForestParams {
                iterations: 25,
                max_depth: 3
            })
        );

        let Command::Run(config) = parse_args(["d.arff", "5"]).unwrap() else {
            panic!("expected a run command");
        };
        assert_eq!(
            config.model,
            ModelChoice::BoostingForest(BoostingForestParams {
                iterations: 5,
                max_depth: 2
            })
        );
    }

    #[test]
    fn test_bad_arguments_are_rejected() {
        assert!(parse_args(["d.arff", "many"]).is_err());
        assert!(parse_args(["d.arff", "0"]).is_err());
        assert!(parse_args(["d.arff", "3", "-1"]).is_err());
        assert!(parse_args(["d.arff", "3", "2", "1"]).is_err());
        assert!(parse_args(["--verbose", "d.arff"]).is_err());
        assert!(parse_args(["--print-config", "svm"]).is_err());
    }

    #[test]
    fn test_help_and_print_config() {
        assert_eq!(parse_args(Vec::<String>::new()).unwrap(), Command::Help);
        assert_eq!(parse_args(["--help"]).unwrap(), Command::Help);
        assert_eq!(
            parse_args(["--print-config", "boosting-forest"]).unwrap(),
            Command::PrintConfig(ModelKind::BoostingForest)
        );
        let text = usage("id3-forest");
        assert!(text.contains("--print-config <decision-tree|boosting-forest>"));
    }
}
