//! API layer

pub mod native;
