pub mod model;
pub mod request;
pub mod response;

pub use model::QueryModel;
pub use request::QueryRequest;
pub use response::QueryResponse;
