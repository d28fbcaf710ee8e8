pub mod diff;
pub mod export;
pub mod form;
pub mod navigation;

pub use diff::{highlight, opcodes};
pub use export::{ReviewExporter, review_object_path};
pub use form::{FormStage, ReviewForm};
