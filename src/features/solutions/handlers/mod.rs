pub mod solution_handler;

pub use solution_handler::*;
