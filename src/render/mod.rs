//! Generated file rendering and output

pub mod template;
pub mod writer;

pub use template::{module_name, render_source, TemplateData};
pub use writer::{is_up_to_date, write_atomic};
