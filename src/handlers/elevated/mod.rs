// handlers/elevated/mod.rs - Elevated handlers (ADMIN role required)
//
// Route stack: jwt_auth_middleware → require_admin → admin_audit_log → handler.
// Non-admin callers receive 403 before reaching any handler here.

pub mod admin;
