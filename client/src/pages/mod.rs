//! Page modules for screen-level views.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its local form state and delegates rendering details to
//! `components`.

pub mod sign_in;
