pub mod error;
pub mod format;
pub mod graph;
pub mod scene;

pub use error::StoryError;
pub use graph::SceneGraph;
pub use scene::*;
