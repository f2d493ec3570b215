use crate::application::ports::employee_repository::EmployeeRepository;
use crate::domain::employees::employee::{Employee, EmployeeError, EmployeeUpdate};

pub struct UpdateEmployee<'a, R: EmployeeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EmployeeRepository + ?Sized> UpdateEmployee<'a, R> {
    /// An update with zero supplied fields is rejected here, before storage
    /// is touched.
    pub async fn execute(
        &self,
        id: i64,
        changes: EmployeeUpdate,
    ) -> Result<Employee, EmployeeError> {
        if changes.is_empty() {
            return Err(EmployeeError::EmptyUpdate);
        }
        changes.validate()?;
        self.repo.update(id, &changes).await
    }
}
