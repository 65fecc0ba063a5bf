//! Existence checks against the remote directory and their delivery back to the
//! form's thread.

pub mod dispatch;
pub mod oracle;

pub use crate::shared::errors::OracleError;
pub use dispatch::{
    DeferredDispatcher, QueryCompletion, QueryDispatcher, QueryTicket, ThreadedDispatcher,
};
pub use oracle::{group_exists_url, ExistenceOracle, HttpExistenceOracle};
