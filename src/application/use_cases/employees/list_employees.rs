use crate::application::ports::employee_repository::EmployeeRepository;
use crate::domain::employees::employee::{Employee, EmployeeError, ListQuery};

pub struct ListEmployees<'a, R: EmployeeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EmployeeRepository + ?Sized> ListEmployees<'a, R> {
    pub async fn execute(&self, query: ListQuery) -> Result<Vec<Employee>, EmployeeError> {
        if query.limit <= 0 {
            return Err(EmployeeError::Validation(
                "top must be greater than 0".into(),
            ));
        }
        self.repo.list(&query).await
    }
}
