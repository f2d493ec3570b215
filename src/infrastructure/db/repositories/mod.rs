pub mod employee_repository_sqlx;
