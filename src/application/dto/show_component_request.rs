use std::path::PathBuf;

/// ShowComponentRequest - Internal request DTO for the show-component use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowComponentRequest {
    /// Path of the JSON document holding the records to project
    pub request_path: PathBuf,
}

impl ShowComponentRequest {
    pub fn new(request_path: PathBuf) -> Self {
        Self { request_path }
    }
}
