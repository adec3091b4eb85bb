use sqlx::SqlitePool;

use super::models::Category;
use super::StoreError;

/// Facade composing optional narrowing predicates over the category table.
///
/// Each `by_*` call adds a condition only when its input is non-empty, so
/// blank query parameters leave the base query untouched. Nothing hits the
/// database until [`fetch`](Self::fetch).
#[derive(Debug, Default)]
pub struct CategoryFilter {
    conditions: Vec<&'static str>,
    binds: Vec<String>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match on the primary key.
    pub fn by_id(mut self, id: &str) -> Self {
        if !id.is_empty() {
            self.conditions.push("id = ?");
            self.binds.push(id.to_string());
        }
        self
    }

    /// Substring match on the name, with the store's LIKE semantics.
    pub fn by_name(mut self, name: &str) -> Self {
        if !name.is_empty() {
            self.conditions.push("name LIKE ?");
            self.binds.push(format!("%{}%", name));
        }
        self
    }

    fn sql(&self) -> String {
        let mut sql = String::from("SELECT id, name FROM category");
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY id");
        sql
    }

    /// Run the composed query.
    pub async fn fetch(self, pool: &SqlitePool) -> Result<Vec<Category>, StoreError> {
        let sql = self.sql();
        let mut query = sqlx::query_as::<_, Category>(&sql);
        for bind in &self.binds {
            query = query.bind(bind);
        }
        Ok(query.fetch_all(pool).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_add_no_predicates() {
        let filter = CategoryFilter::new().by_id("").by_name("");
        assert_eq!(filter.sql(), "SELECT id, name FROM category ORDER BY id");
        assert!(filter.binds.is_empty());
    }

    #[test]
    fn test_id_predicate() {
        let filter = CategoryFilter::new().by_id("7");
        assert_eq!(
            filter.sql(),
            "SELECT id, name FROM category WHERE id = ? ORDER BY id"
        );
        assert_eq!(filter.binds, vec!["7"]);
    }

    #[test]
    fn test_predicates_compose_in_sequence() {
        let filter = CategoryFilter::new().by_id("7").by_name("tool");
        assert_eq!(
            filter.sql(),
            "SELECT id, name FROM category WHERE id = ? AND name LIKE ? ORDER BY id"
        );
        assert_eq!(filter.binds, vec!["7", "%tool%"]);
    }
}
