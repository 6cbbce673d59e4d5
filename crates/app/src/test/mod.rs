//! Shared fixtures for service and store tests.

mod helpers;

pub(crate) use context::TestContext;
pub(crate) use helpers::*;
