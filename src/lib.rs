#![doc(test(attr(deny(warnings))))]

//! Calendar Core offers the transaction store, calendar range, holiday, and
//! recap primitives that power a personal finance calendar UI.

pub mod calendar;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod money;
pub mod profile;
pub mod storage;
pub mod user;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Calendar Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
