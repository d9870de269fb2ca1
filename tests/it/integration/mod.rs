//! Integration tests for the pad engine.
//!
//! These drive complete interaction workflows through `Pad` and verify the
//! event stream the host would observe.

mod binding_tests;
