mod geocoding_service;
mod problem_service;

pub use geocoding_service::GeocodingService;
pub use problem_service::ProblemService;
