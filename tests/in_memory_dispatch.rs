//! End-to-end dispatch tests over in-memory adapters.
//!
//! Tests are organized into modules by functionality:
//! - `dispatch_tests`: routing, replies and destinations
//! - `failure_tests`: downstream failures and the fallback reply

mod in_memory_dispatch {
    pub mod helpers;

    mod dispatch_tests;
    mod failure_tests;
}
