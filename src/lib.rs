// Export modules for use in tests
pub mod annotation;
pub mod find;
pub mod panic_handler;
pub mod replay;
pub mod settings;
pub mod widget;

pub use annotation::{
    AnnotationAction, AnnotationActionType, AnnotationColor, AnnotationEvent, AnnotationSettings,
    AnnotationType, TextMarkupType,
};
pub use find::{DocumentFind, FindOptions, MatchRect, Page, TextLayerFind, effective_options};
