pub mod batch;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod extends;
pub mod extract;
pub mod ir;
pub mod logging;
pub mod model;
pub mod resolve;
pub mod schema;

pub use config::{GenConfig, HeaderConfig};
pub use error::{ResolveError, SkipReason};
pub use ir::{ModelDescriptor, PropertyDescriptor, TypeDescriptor};
pub use model::ModelBuilder;
pub use resolve::TypeResolver;
