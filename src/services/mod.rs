//! Business logic services layer

pub mod employee_service;
pub mod session_service;

pub use employee_service::EmployeeService;
pub use session_service::SessionService;
