/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what the CLI drives; outbound ports are what the
/// application core needs from infrastructure.
pub mod inbound;
pub mod outbound;
