use crate::application::ports::employee_repository::EmployeeRepository;
use crate::domain::employees::employee::{Employee, EmployeeError, NewEmployee};

pub struct CreateEmployee<'a, R: EmployeeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EmployeeRepository + ?Sized> CreateEmployee<'a, R> {
    /// Validates the payload before any storage access.
    pub async fn execute(&self, new: NewEmployee) -> Result<Employee, EmployeeError> {
        new.validate()?;
        self.repo.create(&new).await
    }
}
