pub mod catalog;
mod dependencies;
mod errors;
pub mod notifications;
pub mod profile;
pub mod requests;
pub mod tracking;

pub use dependencies::ServiceDependencies;
pub use errors::{Result, ServiceError};
