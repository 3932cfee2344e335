pub mod headers;
pub mod links;
pub mod slug;
pub mod toc;
pub mod types;

pub use headers::scan_headers;
pub use links::extract_links;
