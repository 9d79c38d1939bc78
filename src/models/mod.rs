//! Wire records for the Honeycomb resources. Empty strings, zero numbers and
//! absent collections are left out when serialized, so a record built from a
//! handful of flags only carries those flags.

pub mod auth;
pub mod boards;
pub mod dataset_definitions;
pub mod datasets;
pub mod marker_settings;
pub mod markers;
pub mod queries;

pub(crate) fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}

pub(crate) fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}

pub(crate) fn is_false(v: &bool) -> bool {
    !*v
}
