//! Candidate portal host: binds the upload form controller to a page and
//! drives analysis cycles.
pub mod platform;
