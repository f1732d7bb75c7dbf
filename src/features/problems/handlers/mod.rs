pub mod geocoding_handler;
pub mod problem_handler;

pub use problem_handler::ProblemState;
