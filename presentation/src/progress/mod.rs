//! Progress indicators for running lookups

pub mod reporter;
