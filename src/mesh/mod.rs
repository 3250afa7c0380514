pub mod base;
pub mod buffer;
pub mod merge;
pub mod ribbon;
pub mod stl;
pub mod validation;

pub use base::build_base_plate;
pub use buffer::{Mesh, Triangle};
pub use merge::merge_meshes;
pub use ribbon::build_wall;
pub use stl::write_stl;
pub use validation::{ValidationReport, validate_mesh};
