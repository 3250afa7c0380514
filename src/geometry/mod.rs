pub mod bounds;
pub mod exaggerate;
pub mod projection;
pub mod scaling;
pub mod simplify;

pub use bounds::{Bounds, Point3};
pub use exaggerate::{ExaggeratedPoint, exaggerate_points};
pub use projection::{ProjectedPoint, Projection};
pub use scaling::{ScaledPoint, Scaler};
pub use simplify::simplify_points;
