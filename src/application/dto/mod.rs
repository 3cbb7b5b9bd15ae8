/// Data Transfer Objects for the application layer
///
/// Requests carry raw, structurally typed input that the use cases validate.
/// Responses are the serializable projections handed back to adapters.
mod entity_requests;
mod page_request;
mod responses;

pub use entity_requests::{BranchRequest, VehicleRequest, YardRequest};
pub use page_request::PageRequest;
pub use responses::{BranchResponse, PageResponse, VehicleResponse, YardResponse};
