use crate::application::ports::employee_repository::EmployeeRepository;
use crate::domain::employees::employee::EmployeeError;

pub struct DeleteEmployee<'a, R: EmployeeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EmployeeRepository + ?Sized> DeleteEmployee<'a, R> {
    pub async fn execute(&self, id: i64) -> Result<(), EmployeeError> {
        self.repo.delete(id).await
    }
}
