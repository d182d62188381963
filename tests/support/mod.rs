// tests/support/mod.rs
// Shared mocks, builders and helpers for the integration test binaries.
// Individual test crates use different subsets, so allow the dead_code
// warnings at module level to keep CI output clean.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;

#[allow(unused_imports)]
pub use helpers::*;

#[allow(unused_imports)]
pub use mocks::*;
