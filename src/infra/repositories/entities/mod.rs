//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod employee;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use employee::{
    ActiveModel as EmployeeActiveModel, Entity as EmployeeEntity, Model as EmployeeModel,
};
