mod page_document;
mod page_fetcher;

pub use page_document::PageDocument;
pub use page_fetcher::{FetchedPage, PageFetcher};
