//! # Error Types
//!
//! Domain-specific error types for pizzeria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizzeria-core errors (this file)                                      │
//! │  └── CoreError        - Domain value failures (bad money amounts)      │
//! │                                                                         │
//! │  pizzeria-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  API errors (apps/api)                                                 │
//! │  └── ApiError         - What HTTP clients see ({"error": ...})         │
//! │                                                                         │
//! │  Flow: CoreError (inside serde) → JSON rejection → ApiError (400)      │
//! │        DbError → ApiError (500)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A decimal amount could not be turned into [`Money`](crate::Money).
    ///
    /// ## When This Occurs
    /// - `"price": 1e300` in a request body
    /// - NaN / infinity produced by a non-JSON caller
    #[error("Invalid amount {value}: {reason}")]
    InvalidAmount { value: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
