pub mod config;
pub mod content;
pub mod section;
pub mod theme;
pub mod tracker;

pub use config::PortfolioConfig;
pub use section::Section;
pub use theme::{Theme, Variant};
pub use tracker::{RegionBounds, SectionTracker, TrackerConfig};
