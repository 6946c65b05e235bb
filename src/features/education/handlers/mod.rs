pub mod education_handler;

pub use education_handler::*;
