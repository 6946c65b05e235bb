mod education_dto;

pub use education_dto::*;
