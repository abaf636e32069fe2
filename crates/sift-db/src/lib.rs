//! SQL execution boundary for Sift.
//!
//! The core never issues or validates SQL itself; it hands an
//! already-cleaned statement to a [`SqlExecutor`] and gets back a flat
//! [`RowSet`]. [`SupabaseClient`] is the production implementation,
//! executing statements through a Supabase RPC function.

pub mod error;
pub mod executor;
pub mod supabase;

pub use error::DbError;
pub use executor::SqlExecutor;
pub use supabase::SupabaseClient;
