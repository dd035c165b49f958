pub mod navigation;
pub mod section_title;
pub mod social;
