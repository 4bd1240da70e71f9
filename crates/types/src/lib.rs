pub mod geometry;
pub mod locale;

pub use geometry::{Rect, Size};
pub use locale::MessageCatalog;
