use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pulse_config::{Config, ConfigQuery, QueryBuilder, QueryContext};

/// Render the SQL used to read the configuration table
#[derive(Parser, Debug)]
#[command(name = "pulse-config-sql", version)]
struct Cli {
    /// Dataset qualifier (falls back to PULSE_DATASET)
    #[arg(long)]
    dataset: Option<String>,

    /// Print the query request body as JSON instead of bare SQL
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Select every configuration row
    List,
    /// Select one configuration row by name
    Get {
        name: String,

        #[arg(long, value_enum, default_value_t = Mode::Parameterized)]
        mode: Mode,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Bind the name as @config_name
    Parameterized,
    /// Inline the name as an escaped string literal
    Escaped,
    /// Inline the name verbatim (unsafe for untrusted input)
    Legacy,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(Config::from_env(), cli.dataset.clone());

    init_tracing(&config);

    let output = run(&cli, &config)?;
    println!("{}", output);

    Ok(())
}

/// `--dataset` wins over PULSE_DATASET
fn resolve_config(mut config: Config, dataset: Option<String>) -> Config {
    if let Some(dataset) = dataset {
        config.pulse_dataset = dataset;
    }
    config
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;
    let context = QueryContext::from_config(config)?;
    info!(dataset = %context.dataset(), "Rendering configuration query");

    let query = match &cli.command {
        Command::List => QueryBuilder::list_all_config_query(&context),
        Command::Get { name, mode } => render_get(&context, name, *mode)?,
    };

    render_output(&query, cli.json)
}

fn render_get(context: &QueryContext, name: &str, mode: Mode) -> anyhow::Result<ConfigQuery> {
    let query = match mode {
        Mode::Parameterized => QueryBuilder::config_by_name_query(context, name),
        Mode::Escaped => {
            ConfigQuery::new(QueryBuilder::config_by_name_sql_escaped(context, name))
        }
        Mode::Legacy => {
            if name.contains('\'') {
                bail!("Refusing to inline a name containing a quote; use --mode escaped or parameterized");
            }
            warn!("Legacy mode inlines the name without escaping");
            ConfigQuery::new(QueryBuilder::config_by_name_sql(context, name))
        }
    };

    Ok(query)
}

/// Bare SQL plus one `-- @name = "value"` line per parameter, or the JSON body
fn render_output(query: &ConfigQuery, json: bool) -> anyhow::Result<String> {
    if json {
        return serde_json::to_string_pretty(query).context("Failed to serialize query");
    }

    let mut output = query.sql().to_string();
    for parameter in query.parameters() {
        output.push_str(&format!(
            "\n-- @{} = {}",
            parameter.name,
            serde_json::to_string(&parameter.parameter_value.value)?
        ));
    }
    Ok(output)
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_SQL: &str = "SELECT config_name, config_value,UNIX_MILLIS(updated_at) as updatedAt from `analytics.cfg.configuration`";

    fn context() -> QueryContext {
        QueryContext::new("analytics.cfg").unwrap()
    }

    fn config(dataset: &str) -> Config {
        Config {
            pulse_dataset: dataset.to_string(),
            ..Config::default()
        }
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pulse-config-sql").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_render_get_parameterized() {
        let query = render_get(&context(), "o'brien", Mode::Parameterized).unwrap();
        assert_eq!(
            query.sql(),
            format!("{} where config_name = @config_name", LIST_SQL)
        );
        assert_eq!(query.parameter("config_name"), Some("o'brien"));
    }

    #[test]
    fn test_render_get_parameterized_accepts_empty_name() {
        let query = render_get(&context(), "", Mode::Parameterized).unwrap();
        assert_eq!(query.parameter("config_name"), Some(""));
    }

    #[test]
    fn test_render_get_escaped() {
        let query = render_get(&context(), "o'brien", Mode::Escaped).unwrap();
        assert_eq!(
            query.sql(),
            format!("{} where config_name = 'o\\'brien'", LIST_SQL)
        );
        assert!(query.parameters().is_empty());
    }

    #[test]
    fn test_render_get_legacy() {
        let query = render_get(&context(), "theme", Mode::Legacy).unwrap();
        assert_eq!(query.sql(), format!("{} where config_name = 'theme'", LIST_SQL));
        assert!(query.parameters().is_empty());
    }

    #[test]
    fn test_render_get_legacy_refuses_quotes() {
        let err = render_get(&context(), "x' OR '1'='1", Mode::Legacy).unwrap_err();
        assert!(err.to_string().starts_with("Refusing to inline a name containing a quote"));
    }

    #[test]
    fn test_resolve_config_dataset_flag_overrides_env() {
        let resolved = resolve_config(config("env.ds"), Some("flag.ds".to_string()));
        assert_eq!(resolved.pulse_dataset, "flag.ds");
    }

    #[test]
    fn test_resolve_config_falls_back_to_env() {
        let resolved = resolve_config(config("env.ds"), None);
        assert_eq!(resolved.pulse_dataset, "env.ds");
    }

    #[test]
    fn test_cli_parses_get_with_default_mode() {
        let parsed = cli(&["--dataset", "analytics.cfg", "get", "theme"]);
        assert_eq!(parsed.dataset.as_deref(), Some("analytics.cfg"));
        assert!(!parsed.json);
        assert_eq!(
            parsed.command,
            Command::Get {
                name: "theme".to_string(),
                mode: Mode::Parameterized
            }
        );
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["pulse-config-sql", "get", "theme", "--mode", "raw"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_list_prints_bare_sql() {
        let output = run(&cli(&["list"]), &config("analytics.cfg")).unwrap();
        assert_eq!(output, LIST_SQL);
    }

    #[test]
    fn test_run_get_prints_parameter_comment() {
        let output = run(&cli(&["get", "theme"]), &config("analytics.cfg")).unwrap();
        assert_eq!(
            output,
            format!(
                "{} where config_name = @config_name\n-- @config_name = \"theme\"",
                LIST_SQL
            )
        );
    }

    #[test]
    fn test_run_json_prints_request_body() {
        let output = run(&cli(&["--json", "get", "theme"]), &config("analytics.cfg")).unwrap();
        let body: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(body["parameterMode"], "NAMED");
        assert_eq!(body["useLegacySql"], false);
        assert_eq!(body["queryParameters"][0]["name"], "config_name");
        assert_eq!(body["queryParameters"][0]["parameterValue"]["value"], "theme");
    }

    #[test]
    fn test_run_fails_without_dataset() {
        let err = run(&cli(&["list"]), &config("")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration");
    }
}
