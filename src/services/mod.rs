pub mod error;
pub mod link_resolver;
pub mod playlist_store;
pub mod snapshot;
