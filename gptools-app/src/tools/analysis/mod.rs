// private sub-module defined in other files
mod buffer;
mod clip;
mod intersect;
mod near;
mod select;

// exports identifiers from private sub-modules in the current module namespace
pub use self::buffer::{Buffer, DissolveOption, LineEndType, LineSide};
pub use self::clip::Clip;
pub use self::intersect::{Intersect, JoinAttributes, OutputType};
pub use self::near::{AngleOption, DistanceMethod, LocationOption, Near};
pub use self::select::Select;

const TOOLBOX: &str = "Analysis Tools";
const TOOLBOX_ALIAS: &str = "analysis";
