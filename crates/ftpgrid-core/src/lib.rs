pub mod config;
pub mod error;
pub mod logging;

pub mod filter;
pub mod image_url;
pub mod lister;
pub mod present;
pub mod session;

pub use error::ListerError;
pub use image_url::ImageUrl;
pub use lister::list_image_urls;
