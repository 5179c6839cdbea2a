//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::interval::Interval;
pub use self::point_ops::{wrap_degrees, PointOps};

mod center;
mod interval;
mod point_ops;
