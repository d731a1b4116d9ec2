pub mod catalog;
pub mod listing;
pub mod watch_link;

pub use catalog::CatalogService;
