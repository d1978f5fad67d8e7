//! Format implementations

pub mod json;
pub mod nuggt;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormat;
pub use nuggt::NuggtFormat;
pub use treeviz::TreevizFormat;
pub use yaml::YamlFormat;
