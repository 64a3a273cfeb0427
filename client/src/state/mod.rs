//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `sign_in`) and kept free of DOM access
//! so it can be unit tested natively.

pub mod sign_in;
pub mod theme;
