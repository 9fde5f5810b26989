// Application layer - Use case interactors

pub mod container;
pub mod rotation_interactor;
pub mod timestamp_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use rotation_interactor::RotationInteractor;
pub use timestamp_interactor::TimestampInteractor;
