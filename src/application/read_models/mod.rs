//! Read models for the web-service layer
//!
//! View structs returned to clients, and the mapper building them from
//! persisted component records.

pub mod ws_component;
pub mod ws_component_mapper;

pub use ws_component::{WsComponent, WsComponentBuilder};
pub use ws_component_mapper::{
    component_to_ws_component, component_to_ws_component_with_org_key,
    project_or_app_to_ws_component,
};
