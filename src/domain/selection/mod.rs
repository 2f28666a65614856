pub mod dto;
pub mod error;
pub mod sampling;
pub mod service;

pub use dto::{AudioFilesResponse, SimulateApiCallQuery};
pub use error::SelectionServiceError;
pub use sampling::MAX_GENERAL_SAMPLES;
pub use service::{Selection, SelectionRequest, SelectionService, SelectionServiceApi};
