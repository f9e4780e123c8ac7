/// Inbound ports (Driving ports) - Use case interfaces
pub mod component_projection_port;

pub use component_projection_port::ComponentProjectionPort;
