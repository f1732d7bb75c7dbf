pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod stats;

pub use clients::IdentityAdminClient;
pub use services::AdminService;
