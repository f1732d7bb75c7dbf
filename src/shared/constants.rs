// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - can triage report statuses, delete reports and user accounts
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// AGGREGATION
// =============================================================================

/// Window for the "recent reports" counter on the admin dashboard
pub const RECENT_WINDOW_DAYS: i64 = 7;
