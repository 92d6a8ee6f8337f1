//! Agent entities - the default panel, custom profiles, and the builder form

pub mod builder;
pub mod custom;
pub mod panel;
