pub mod annotation_repo;
pub mod label_repo;

pub use annotation_repo::AnnotationRepo;
pub use label_repo::LabelRepo;
