mod solution_service;

pub use solution_service::SolutionService;
