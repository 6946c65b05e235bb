mod solution_dto;

pub use solution_dto::*;
