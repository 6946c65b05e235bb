pub mod education;
pub mod reports;
pub mod solutions;
