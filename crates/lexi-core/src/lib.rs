pub mod collections;
pub mod service;
pub mod state;

pub use collections::{BookmarkSet, RecentList};
pub use service::WordLookupService;
pub use state::{SUBSCRIBER_CAPACITY, SearchTicket, StoreEvent, WordSnapshot, WordStore};
