//! Local image files

pub mod local;

pub use local::LocalImageSource;
