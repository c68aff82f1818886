//! Command implementations

pub mod behaviors;
pub mod check;
pub mod post_build;
pub mod slots;
pub mod version;
