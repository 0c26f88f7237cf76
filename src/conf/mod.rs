mod config;
mod listing;
mod server;

pub use config::Config;
pub use listing::ListingConfig;
pub use server::ServerConfig;
