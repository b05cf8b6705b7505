//! Outbound ports - Interfaces for external collaborators
//!
//! These ports define the contracts that infrastructure adapters and the
//! rendering layer must implement, allowing the controllers to interact with
//! the query backend and the document tree without depending on concrete
//! implementations.

pub mod chained_query_port;
pub mod view_port;

pub use chained_query_port::ChainedQueryPort;
pub use view_port::{FieldWrap, FormsetView, SelectControl, SpendFormView};

#[cfg(any(test, feature = "testing"))]
pub use chained_query_port::MockChainedQueryPort;
