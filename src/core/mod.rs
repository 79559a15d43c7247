pub mod mapper;
pub mod search;

pub use crate::domain::model::{PlayerRecord, Row, SearchResponse, SearchResult};
pub use crate::domain::ports::{StatsProvider, Summarizer};
pub use crate::utils::error::Result;
