//! Test doubles shared by unit tests, integration tests, and the demo binary

mod in_memory_query;
mod recording_view;

pub use in_memory_query::InMemoryChainedQuery;
pub use recording_view::{
    RecordingFormsetView, RecordingSelect, RecordingSpendFormView, VisibleFlag,
};
