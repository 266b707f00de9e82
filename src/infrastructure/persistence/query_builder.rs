use crate::application::context::DatasetContext;
use crate::application::query::{ConfigQuery, QueryParameter};

/// SQL for the `configuration` table, warehouse (standard SQL) dialect
///
/// All builders are pure: the same input always yields the same string.
pub struct QueryBuilder;

impl QueryBuilder {
    /// Columns selected by every configuration query
    pub const CONFIG_SELECT: &'static str =
        "SELECT config_name, config_value,UNIX_MILLIS(updated_at) as updatedAt";

    /// Table name inside the dataset
    pub const CONFIG_TABLE: &'static str = "configuration";

    /// Named parameter used by the parameterized lookup
    pub const CONFIG_NAME_PARAM: &'static str = "config_name";

    /// Every configuration row in the dataset
    ///
    /// The qualifier is not checked; an empty one yields
    /// ``from `.configuration` `` and fails at execution.
    pub fn list_all_config_sql<C: DatasetContext + ?Sized>(context: &C) -> String {
        format!(
            "{} from `{}.{}`",
            Self::CONFIG_SELECT,
            context.pulse_dataset(),
            Self::CONFIG_TABLE
        )
    }

    /// Configuration rows matching `name`, interpolated verbatim
    ///
    /// `name` is NOT escaped: a value containing `'` rewrites the WHERE
    /// clause (`x' OR '1'='1` matches every row). Kept for callers that
    /// depend on the exact text; prefer [`Self::config_by_name_query`].
    pub fn config_by_name_sql<C: DatasetContext + ?Sized>(context: &C, name: &str) -> String {
        format!(
            "{} where config_name = '{}'",
            Self::list_all_config_sql(context),
            name
        )
    }

    /// Same as [`Self::config_by_name_sql`] with `name` escaped as a string literal
    pub fn config_by_name_sql_escaped<C: DatasetContext + ?Sized>(
        context: &C,
        name: &str,
    ) -> String {
        Self::config_by_name_sql(context, &Self::escape_string_literal(name))
    }

    /// List query as a [`ConfigQuery`] with no parameters
    pub fn list_all_config_query<C: DatasetContext + ?Sized>(context: &C) -> ConfigQuery {
        ConfigQuery::new(Self::list_all_config_sql(context))
    }

    /// Lookup by name with the name bound as `@config_name`
    ///
    /// Any string is accepted; it never enters the SQL text.
    pub fn config_by_name_query<C: DatasetContext + ?Sized>(context: &C, name: &str) -> ConfigQuery {
        let sql = format!(
            "{} where config_name = @{}",
            Self::list_all_config_sql(context),
            Self::CONFIG_NAME_PARAM
        );

        ConfigQuery::new(sql)
            .with_parameter(QueryParameter::string(Self::CONFIG_NAME_PARAM, name))
    }

    /// Escape a value for use inside a single-quoted string literal
    pub fn escape_string_literal(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '\\' => escaped.push_str("\\\\"),
                '\'' => escaped.push_str("\\'"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}
