pub mod config;
pub mod dates;
pub mod error;
pub mod googleads;
pub mod report;
pub mod routes;

pub use error::SearchStreamError;
pub use routes::handle_search_stream;
