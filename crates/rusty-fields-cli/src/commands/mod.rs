pub mod batch;
pub mod check;
pub mod countries;
pub mod file;
pub mod phone;
