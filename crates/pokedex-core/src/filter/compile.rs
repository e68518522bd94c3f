//! `FilterCriteria` → SQL fragment and in-memory predicate
//!
//! Both forms must accept exactly the same records. The SQL side targets
//! SQLite, whose `LIKE` and `LOWER` fold ASCII letters only, so the
//! predicate folds ASCII only as well.

use crate::filter::criteria::FilterCriteria;
use crate::model::{Pokemon, Stat};

/// A positional query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
}

/// Ordered `WHERE` conditions plus the parameters for their `?`
/// placeholders, in placeholder order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlFragment {
    conditions: Vec<String>,
    params: Vec<SqlParam>,
}

impl SqlFragment {
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// `""` when there are no conditions, otherwise `" WHERE a AND b ..."`
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    fn push(&mut self, condition: String, params: impl IntoIterator<Item = SqlParam>) {
        self.conditions.push(condition);
        self.params.extend(params);
    }
}

/// Compile criteria into SQL conditions
///
/// One condition per present constraint, in the fixed order name, types,
/// then each stat bound in `Stat::ALL` order (min before max).
pub fn compile(criteria: &FilterCriteria) -> SqlFragment {
    let mut fragment = SqlFragment::default();

    if let Some(name) = criteria.name_substring() {
        fragment.push(
            "name LIKE ? ESCAPE '\\'".to_string(),
            [SqlParam::Text(format!("%{}%", escape_like(name)))],
        );
    }

    let types = criteria.types();
    if !types.is_empty() {
        let placeholders = vec!["?"; types.len()].join(", ");
        let type_params = types.iter().map(|t| SqlParam::Text(t.clone()));
        fragment.push(
            format!(
                "(LOWER(type1) IN ({0}) OR LOWER(type2) IN ({0}))",
                placeholders
            ),
            type_params.clone().chain(type_params),
        );
    }

    for stat in Stat::ALL {
        let range = criteria.range(stat);
        if let Some(min) = range.min {
            fragment.push(format!("{} >= ?", stat.column()), [SqlParam::Integer(min)]);
        }
        if let Some(max) = range.max {
            fragment.push(format!("{} <= ?", stat.column()), [SqlParam::Integer(max)]);
        }
    }

    fragment
}

/// Escape `LIKE` metacharacters so the needle matches literally under
/// `ESCAPE '\'`
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// In-memory evaluation of a `FilterCriteria`
#[derive(Debug, Clone)]
pub struct Predicate {
    criteria: FilterCriteria,
    needle: Option<String>,
}

impl Predicate {
    pub fn new(criteria: &FilterCriteria) -> Self {
        Self {
            criteria: criteria.clone(),
            needle: criteria.name_substring().map(str::to_ascii_lowercase),
        }
    }

    /// Logical AND of every present constraint
    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        if let Some(needle) = &self.needle {
            if !pokemon.name.to_ascii_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        let types = self.criteria.types();
        if !types.is_empty()
            && !pokemon
                .types()
                .any(|t| types.contains(&t.to_ascii_lowercase()))
        {
            return false;
        }

        Stat::ALL
            .iter()
            .all(|&stat| self.criteria.range(stat).contains(i64::from(pokemon.stat(stat))))
    }
}

/// The SQL fragment and the predicate compiled from one `FilterCriteria`
///
/// Count and page fetch both take this value, so the total always counts
/// exactly the set that is paged through.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    criteria: FilterCriteria,
    sql: SqlFragment,
    predicate: Predicate,
}

impl CompiledFilter {
    pub fn new(criteria: &FilterCriteria) -> Self {
        Self {
            criteria: criteria.clone(),
            sql: compile(criteria),
            predicate: Predicate::new(criteria),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sql(&self) -> &SqlFragment {
        &self.sql
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("mr. mime"), "mr. mime");
        assert_eq!(escape_like("100%_\\"), "100\\%\\_\\\\");
    }

    #[test]
    fn test_where_clause_rendering() {
        assert_eq!(compile(&FilterCriteria::new()).where_clause(), "");

        let fragment = compile(&FilterCriteria::new().with_min(Stat::Hp, 10).with_max(Stat::Hp, 20));
        assert_eq!(fragment.where_clause(), " WHERE hp >= ? AND hp <= ?");
    }
}
