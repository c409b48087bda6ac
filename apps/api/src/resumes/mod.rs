// Resume document CRUD and the document-to-text flattening used by analysis.

pub mod flatten;
pub mod handlers;
