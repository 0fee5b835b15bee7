//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use userhub_auth::guard::IdentityGuard;
use userhub_service::account::AccountService;
use userhub_service::audit::AuditService;
use userhub_service::histogram::HistogramService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Auth ─────────────────────────────────────────────────
    /// Resolves bearer tokens to users.
    pub guard: Arc<IdentityGuard>,

    // ── Services ─────────────────────────────────────────────
    /// Account lifecycle service.
    pub account_service: Arc<AccountService>,
    /// Action ledger service.
    pub audit_service: Arc<AuditService>,
    /// Histogram service.
    pub histogram_service: Arc<HistogramService>,
}
