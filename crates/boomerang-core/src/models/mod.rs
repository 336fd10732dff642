pub mod resource;
pub mod transformation;

pub use resource::{DeleteResult, MediaResource, ResourceList};
pub use transformation::{Transformation, TransformationStage};
