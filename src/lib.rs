pub mod api;
pub mod conf;
pub mod core;
pub mod index;
pub mod listing;
pub mod track;

#[cfg(feature = "testutil")]
pub mod testutil;
