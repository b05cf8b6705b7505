//! HTTP transport for the query endpoints (native targets)

mod chained_query_adapter;

pub use chained_query_adapter::{HttpChainedQueryAdapter, HttpConfigError};
