#![forbid(unsafe_code)]

pub mod facets;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod pager;
pub mod time;

pub use facets::Facets;
pub use filter::FilterCriteria;
pub use pager::{PAGE_SIZE, Pager};
pub use time::Clock;
