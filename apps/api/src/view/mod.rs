// Resume view: renders an information map into a node tree / HTML.
// Rendering is synchronous and infallible; missing data only makes the output sparser.

pub mod component;
pub mod date;
pub mod document;
pub mod handlers;
pub mod node;
pub mod sections;
pub mod styles;
