//! Service layer: classification pipeline and document injection.

pub mod doc_matcher;
pub mod link_resolver;
pub mod table_injector;
pub mod table_renderer;

pub use doc_matcher::{doc_number, find_doc_file};
pub use link_resolver::LinkResolver;
pub use table_injector::{inject_file, splice_table, HostDocument, BEGIN_MARKER, END_MARKER};
pub use table_renderer::{
    format_handle, RenderRequest, RenderedTable, StatusGroup, TableRenderer, TABLE_HEADER,
    TABLE_SEPARATOR,
};
