mod links;

pub use links::{check_document_links, HttpProbe, LinkStatus, UreqProbe};
