//! Bearer token authentication

pub mod discovery;
mod errors;
mod models;
mod scopes;
mod service;
#[cfg(test)]
mod test_support;
mod verifier;

pub use errors::*;
pub use models::*;
pub use scopes::*;
pub use service::*;
pub use verifier::TokenRules;
