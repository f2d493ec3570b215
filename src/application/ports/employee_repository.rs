use async_trait::async_trait;

use crate::domain::employees::employee::{
    Employee, EmployeeError, EmployeeUpdate, ListQuery, NewEmployee,
};

/// Storage port for the employees table. Every operation is a single atomic
/// unit of work: it either commits fully or rolls back fully, and the backing
/// connection is released on every exit path.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Employee>, EmployeeError>;

    async fn create(&self, new: &NewEmployee) -> Result<Employee, EmployeeError>;

    /// Applies only the supplied fields. Fails with
    /// [`EmployeeError::NotFound`] before writing anything when the id is
    /// unknown.
    async fn update(&self, id: i64, changes: &EmployeeUpdate) -> Result<Employee, EmployeeError>;

    async fn delete(&self, id: i64) -> Result<(), EmployeeError>;
}
