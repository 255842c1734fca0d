// handlers/mod.rs - 3-Tier Handler Architecture
//
// Public (no auth) → Protected (JWT auth) → Elevated (JWT auth + ADMIN role + audit log)
pub mod elevated; // Tier 3: ADMIN role required (/admin/*)
pub mod protected; // Tier 2: JWT authentication required (/todos/*, /users/*)
pub mod public; // Tier 1: No authentication required (/, /health, /auth/*)
