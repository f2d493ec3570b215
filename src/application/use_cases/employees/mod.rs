pub mod create_employee;
pub mod delete_employee;
pub mod list_employees;
pub mod update_employee;
