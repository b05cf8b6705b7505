//! SheetWright Shared - Wire contracts between the form client and the query backend
//!
//! This crate contains the types exchanged with the two chained-select query
//! endpoints:
//! - Request payloads (load-examples, load-values)
//! - The response envelope and error codes
//! - Client-side transport error classification
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Forward compatible** - Unknown envelope variants deserialize to
//!    `Unknown` instead of failing

pub mod requests;
pub mod responses;

pub use requests::{LoadExamplesRequest, LoadValuesRequest};
pub use responses::{
    ErrorCode, ExampleOptionData, LoadExamplesResponse, LoadValuesResponse, RequestError,
    ResponseResult,
};
