use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::employee_repository::EmployeeRepository;
use crate::domain::employees::employee::{
    Employee, EmployeeError, EmployeeUpdate, FilterValue, ListQuery, NewEmployee, SortKey,
    default_order,
};
use crate::infrastructure::db::PgPool;

pub struct SqlxEmployeeRepository {
    pub pool: PgPool,
}

impl SqlxEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_employee(r: &PgRow) -> Employee {
    Employee {
        id: r.get("id"),
        name: r.get("name"),
        title: r.get("title"),
        job_history: r.get("job_history"),
        salary: r.get("salary"),
        years_of_experience: r.get("years_of_experience"),
    }
}

/// Sort keys come from a closed column enum, so the clause is assembled from
/// static column names only.
fn order_by_clause(order_by: &[SortKey]) -> String {
    order_by
        .iter()
        .map(|key| {
            let dir = if key.descending { "DESC" } else { "ASC" };
            format!("{} {}", key.field.column(), dir)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn build_list_sql(query: &ListQuery, order_by: &[SortKey]) -> String {
    let mut sql = String::from(
        "SELECT id, name, title, job_history, salary::float8 AS salary, years_of_experience \
         FROM employees",
    );
    for (i, filter) in query.filters.iter().enumerate() {
        sql.push_str(if i == 0 { " WHERE " } else { " AND " });
        sql.push_str(filter.field.column());
        sql.push_str(&format!(" = ${}", i + 1));
    }
    sql.push_str(" ORDER BY ");
    sql.push_str(&order_by_clause(order_by));
    sql.push_str(&format!(" LIMIT ${}", query.filters.len() + 1));
    sql
}

impl SqlxEmployeeRepository {
    async fn list_tx(&self, query: &ListQuery) -> anyhow::Result<Vec<Employee>> {
        let order_by = if query.order_by.is_empty() {
            default_order()
        } else {
            query.order_by.clone()
        };
        let sql = build_list_sql(query, &order_by);

        let mut tx = self.pool.begin().await?;
        let mut q = sqlx::query(&sql);
        for filter in &query.filters {
            q = match &filter.value {
                FilterValue::Text(v) => q.bind(v.clone()),
                FilterValue::Number(v) => q.bind(*v),
                FilterValue::Integer(v) => q.bind(*v),
            };
        }
        let rows = q.bind(query.limit).fetch_all(&mut *tx).await?;
        tx.commit().await?;
        Ok(rows.iter().map(row_to_employee).collect())
    }

    async fn insert_tx(&self, new: &NewEmployee) -> anyhow::Result<Employee> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(
            r#"INSERT INTO employees (name, title, job_history, salary, years_of_experience)
               VALUES ($1, $2, $3, $4::numeric(12,2), $5)
               RETURNING id"#,
        )
        .bind(&new.name)
        .bind(&new.title)
        .bind(&new.job_history)
        .bind(new.salary)
        .bind(new.years_of_experience)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Employee {
            id: row.get("id"),
            name: new.name.clone(),
            title: new.title.clone(),
            job_history: new.job_history.clone(),
            salary: new.salary,
            years_of_experience: new.years_of_experience,
        })
    }

    async fn update_tx(
        &self,
        id: i64,
        changes: &EmployeeUpdate,
    ) -> anyhow::Result<Option<Employee>> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(
            r#"SELECT id, name, title, job_history, salary::float8 AS salary, years_of_experience
               FROM employees WHERE id = $1 FOR UPDATE"#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };

        let mut employee = row_to_employee(&row);
        changes.apply_to(&mut employee);

        sqlx::query(
            r#"UPDATE employees
               SET name = $1, title = $2, job_history = $3,
                   salary = $4::numeric(12,2), years_of_experience = $5
               WHERE id = $6"#,
        )
        .bind(&employee.name)
        .bind(&employee.title)
        .bind(&employee.job_history)
        .bind(employee.salary)
        .bind(employee.years_of_experience)
        .bind(id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Some(employee))
    }

    async fn delete_tx(&self, id: i64) -> anyhow::Result<bool> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl EmployeeRepository for SqlxEmployeeRepository {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Employee>, EmployeeError> {
        self.list_tx(query).await.map_err(EmployeeError::from)
    }

    async fn create(&self, new: &NewEmployee) -> Result<Employee, EmployeeError> {
        self.insert_tx(new).await.map_err(EmployeeError::from)
    }

    async fn update(&self, id: i64, changes: &EmployeeUpdate) -> Result<Employee, EmployeeError> {
        match self.update_tx(id, changes).await? {
            Some(employee) => Ok(employee),
            None => Err(EmployeeError::NotFound(id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), EmployeeError> {
        if self.delete_tx(id).await? {
            Ok(())
        } else {
            Err(EmployeeError::NotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employees::employee::{EmployeeField, FieldFilter};

    #[test]
    fn order_clause_uses_whitelisted_columns() {
        let order = vec![
            SortKey::parse("-salary").unwrap(),
            SortKey::parse("name").unwrap(),
        ];
        assert_eq!(order_by_clause(&order), "salary DESC, name ASC");
    }

    #[test]
    fn list_sql_numbers_filter_and_limit_placeholders() {
        let query = ListQuery {
            limit: 5,
            order_by: default_order(),
            filters: vec![FieldFilter {
                field: EmployeeField::Title,
                value: FilterValue::Text("Engineer".into()),
            }],
        };
        let sql = build_list_sql(&query, &query.order_by);
        assert!(sql.contains("WHERE title = $1"));
        assert!(sql.ends_with("LIMIT $2"));
        assert!(sql.contains("ORDER BY salary DESC"));
    }

    #[test]
    fn list_sql_without_filters_has_no_where() {
        let query = ListQuery::default();
        let sql = build_list_sql(&query, &query.order_by);
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("LIMIT $1"));
    }
}
