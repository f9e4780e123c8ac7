/// Use cases - application workflows orchestrating ports and domain logic
mod show_component;

pub use show_component::ShowComponentUseCase;
