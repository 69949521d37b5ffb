pub mod copyright;
pub mod error;
pub mod link;
pub mod load;
pub mod site;
pub mod social;
pub mod validate;
pub mod version;

pub use copyright::{build_copyright, current_year};
pub use error::ConfigError;
pub use link::NavLink;
pub use load::ConfigFormat;
pub use site::SiteConfig;
pub use social::Social;
pub use version::VersionEntry;
