//! component-ws - web-service projection of persisted components
//!
//! This library turns the records a component is persisted as (component
//! row, project row, organization, last analysis) into the component object
//! returned by the web service, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`component`): Records, qualifiers, visibility and the policies applied to them
//! - **Application Layer** (`application`): Read models, the projection mapper, use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Error types, logging and file security helpers
//!
//! # Example
//!
//! ```
//! use component_ws::prelude::*;
//!
//! let organization = OrganizationRecord::new("o1", "org-key");
//! let component = ComponentRecord::new("proj:1", "Demo", "TRK", "o1");
//! let project = ProjectRecord::new("proj:1", "TRK", "o1").with_tags(["a", "b"]);
//!
//! let ws_component = project_or_app_to_ws_component(&project, &component, &organization, None)
//!     .unwrap()
//!     .build();
//!
//! assert_eq!(ws_component.organization, "org-key");
//! assert_eq!(ws_component.visibility, Some(Visibility::Public));
//! assert_eq!(ws_component.tags, Some(vec!["a".to_string(), "b".to_string()]));
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod component;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        OutputFormat, ProjectionKind, ProjectionRequest, ProjectionResponse,
        ShowComponentRequest,
    };
    pub use crate::application::read_models::{
        component_to_ws_component, component_to_ws_component_with_org_key,
        project_or_app_to_ws_component, WsComponent, WsComponentBuilder,
    };
    pub use crate::application::use_cases::ShowComponentUseCase;
    pub use crate::component::domain::{
        qualifier, AnalysisSnapshot, ComponentRecord, OrganizationRecord, ProjectRecord,
        Visibility,
    };
    pub use crate::component::policies::{VisibilityPolicy, QUALIFIERS_WITH_VISIBILITY};
    pub use crate::ports::inbound::ComponentProjectionPort;
    pub use crate::ports::outbound::{
        ComponentFormatter, OutputPresenter, ProgressReporter, RequestReader,
    };
    pub use crate::shared::error::{AppError, ExitCode, ProjectionError};
    pub use crate::shared::Result;
}
