//! Reusable HTML components for resume layouts
//!
//! Maud component functions shared by the classic, modern and compact
//! templates: page wrapper, headings, contact details and the section
//! renderers that embed markdown output.

pub mod contact;
pub mod heading;
pub mod icons;
pub mod layout;
pub mod sections;
