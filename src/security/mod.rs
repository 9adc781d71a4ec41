//! Request identity and request budgets.
//!
//! Identity arrives already verified by an upstream gateway. This layer only
//! turns the gateway's header into an explicit [`AuthContext`] that handlers
//! ask for through the [`CurrentUser`] extractor.

pub mod claims;
pub mod middleware;
pub mod rate_limit;

pub use claims::{AuthClaims, AuthContext, CurrentUser, decode_identity, encode_identity};
