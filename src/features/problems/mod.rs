pub mod dtos;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod snapshot;

pub use services::{GeocodingService, ProblemService};
