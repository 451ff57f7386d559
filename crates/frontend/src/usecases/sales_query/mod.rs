pub mod api;
pub mod form;
pub mod result;
pub mod state;

pub use form::QueryForm;
pub use result::QueryResult;
pub use state::{RequestPhase, RequestState};
