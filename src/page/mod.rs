//! HTML page assembly: stylesheet, inline reveal script, and the document template.

pub mod script;
pub mod style;
pub mod template;
