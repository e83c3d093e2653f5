pub mod lenient;
pub mod request;
pub mod response;

pub use request::{SearchRequest, MAX_RESULTS};
pub use response::{ResultItem, SearchResponse};
