mod identity_admin_client;

pub use identity_admin_client::IdentityAdminClient;
