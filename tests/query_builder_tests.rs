//! Behavior of the configuration query builders through the public API

use pulse_config::{DatasetContext, QueryBuilder, QueryContext};

/// Caller-owned context read through the `DatasetContext` trait
#[allow(non_snake_case)]
struct PulseEnv {
    PULSE_DATASET: String,
}

impl DatasetContext for PulseEnv {
    fn pulse_dataset(&self) -> &str {
        &self.PULSE_DATASET
    }
}

fn env(dataset: &str) -> PulseEnv {
    PulseEnv {
        PULSE_DATASET: dataset.to_string(),
    }
}

#[test]
fn list_all_matches_exact_text() {
    assert_eq!(
        QueryBuilder::list_all_config_sql(&env("analytics.cfg")),
        "SELECT config_name, config_value,UNIX_MILLIS(updated_at) as updatedAt from `analytics.cfg.configuration`"
    );
}

#[test]
fn list_all_selects_the_three_columns() {
    let sql = QueryBuilder::list_all_config_sql(&env("proj.ds"));

    assert!(sql.contains("from `proj.ds.configuration`"));
    let select = sql
        .strip_prefix("SELECT ")
        .and_then(|s| s.split(" from ").next())
        .unwrap();
    let columns: Vec<&str> = select
        .split(',')
        .map(|c| c.trim().rsplit(' ').next().unwrap())
        .collect();
    assert_eq!(columns, vec!["config_name", "config_value", "updatedAt"]);
}

#[test]
fn by_name_is_list_all_plus_where_clause() {
    let context = env("analytics.cfg");
    for name in ["theme", "feature.flags", "with space", "ünïcödé"] {
        assert_eq!(
            QueryBuilder::config_by_name_sql(&context, name),
            format!(
                "{} where config_name = '{}'",
                QueryBuilder::list_all_config_sql(&context),
                name
            )
        );
    }
}

#[test]
fn builders_are_deterministic() {
    let context = env("analytics.cfg");
    assert_eq!(
        QueryBuilder::list_all_config_sql(&context),
        QueryBuilder::list_all_config_sql(&context)
    );
    assert_eq!(
        QueryBuilder::config_by_name_sql(&context, "theme"),
        QueryBuilder::config_by_name_sql(&context, "theme")
    );
}

#[test]
fn empty_name_yields_empty_literal() {
    let sql = QueryBuilder::config_by_name_sql(&env("analytics.cfg"), "");
    assert!(sql.ends_with(" where config_name = ''"));
}

/// Documents the current unsafe behavior of the verbatim builder
#[test]
fn verbatim_builder_allows_injection() {
    let sql = QueryBuilder::config_by_name_sql(&env("analytics.cfg"), "x' OR '1'='1");
    assert!(sql.ends_with(" where config_name = 'x' OR '1'='1'"));
}

#[test]
fn escaped_and_parameterized_builders_resist_injection() {
    let context = QueryContext::new("analytics.cfg").unwrap();
    let payload = "x' OR '1'='1";

    let escaped = QueryBuilder::config_by_name_sql_escaped(&context, payload);
    assert!(escaped.ends_with(" where config_name = 'x\\' OR \\'1\\'=\\'1'"));

    let query = QueryBuilder::config_by_name_query(&context, payload);
    assert!(!query.sql().contains(payload));
    assert_eq!(query.parameter("config_name"), Some(payload));
}

#[test]
fn unvalidated_contexts_still_produce_text() {
    assert!(QueryBuilder::list_all_config_sql(&env("")).ends_with("from `.configuration`"));
    assert!(QueryContext::new("").is_err());
}
