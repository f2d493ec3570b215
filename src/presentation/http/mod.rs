pub mod employees;
pub mod error;
pub mod health;
