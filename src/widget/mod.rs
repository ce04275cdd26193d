pub mod annotation_toolbar;

pub use annotation_toolbar::AnnotationToolbar;
