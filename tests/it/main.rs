//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary, reducing linking
//! overhead to one link per run.
//!
//! Structure:
//! - unit: single-component tests against the public modules
//! - integration: full interaction workflows driven through `Pad`

mod helpers;
mod integration;
mod unit;
