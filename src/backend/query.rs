//! Query strings for the backend's REST gateway.
//!
//! Filters use the gateway's `column=operator.value` syntax. Pairs are
//! form-urlencoded as a whole, the gateway decodes them before parsing the
//! operator syntax.

use url::form_urlencoded;

/// Builder for a table path plus query string, e.g.
/// `audit_findings?select=*&status=neq.fechado`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestQuery {
    table: &'static str,
    params: Vec<(String, String)>,
}

impl RestQuery {
    pub fn from(table: &'static str) -> Self {
        Self {
            table,
            params: Vec::new(),
        }
    }

    /// Columns to return, may embed related tables (`company:companies(id,name)`)
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    pub fn eq(self, column: &str, value: &str) -> Self {
        self.filter(column, "eq", value)
    }

    pub fn neq(self, column: &str, value: &str) -> Self {
        self.filter(column, "neq", value)
    }

    pub fn lte(self, column: &str, value: &str) -> Self {
        self.filter(column, "lte", value)
    }

    pub fn gte(self, column: &str, value: &str) -> Self {
        self.filter(column, "gte", value)
    }

    /// `column=in.(v1,v2,...)`
    pub fn in_list<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let list = values
            .into_iter()
            .map(|v| quote_list_value(v.as_ref()))
            .collect::<Vec<_>>()
            .join(",");
        self.params
            .push((column.to_string(), format!("in.({})", list)));
        self
    }

    /// Disjunction of raw filter expressions, `or=(a.is.null,a.gte.x)`
    pub fn or(mut self, filters: &[String]) -> Self {
        self.params
            .push(("or".to_string(), format!("({})", filters.join(","))));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.params
            .push(("order".to_string(), format!("{}.{}", column, direction)));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.params.push(("limit".to_string(), limit.to_string()));
        self
    }

    /// Table path with encoded query string
    pub fn to_path(&self) -> String {
        if self.params.is_empty() {
            return self.table.to_string();
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish();

        format!("{}?{}", self.table, query)
    }

    fn filter(mut self, column: &str, operator: &str, value: &str) -> Self {
        self.params
            .push((column.to_string(), format!("{}.{}", operator, value)));
        self
    }
}

/// Values inside an `in.(...)` list are double quoted when they contain
/// list syntax characters.
fn quote_list_value(value: &str) -> String {
    if value.contains([',', '(', ')', '"']) {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

/// Splits a built path back into its table and decoded query pairs.
#[cfg(test)]
pub(crate) fn decode_path(path: &str) -> (String, Vec<(String, String)>) {
    let (table, query) = path.split_once('?').unwrap_or((path, ""));
    let pairs = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    (table.to_string(), pairs)
}
