pub mod errors;
pub mod key;
pub mod types;

pub use errors::{PlacementError, SashError, StoreError};
pub use key::WindowKey;
pub use types::{Point, Rect, Size, POSITION_EPSILON};

pub type Result<T> = std::result::Result<T, SashError>;
