// private sub-module defined in other files
mod hillshade;
mod slope;

// exports identifiers from private sub-modules in the current module namespace
pub use self::hillshade::{Hillshade, ShadowModel};
pub use self::slope::{OutputMeasurement, Slope};

use gptools_common::parameters::{Direction, Domain, ParameterKind, ParameterType, ToolParameter};

const TOOLBOX: &str = "Spatial Analyst Tools";
const TOOLBOX_ALIAS: &str = "sa";

/// The z conversion factor shared by the surface tools.
fn z_factor_parameter() -> ToolParameter {
    ToolParameter {
        name: "z_factor".to_owned(),
        display_name: "Z factor".to_owned(),
        description: "The number of ground x,y units in one surface z unit.".to_owned(),
        parameter_type: ParameterType::Double,
        direction: Direction::Input,
        kind: ParameterKind::Optional,
        default_value: Some("1".to_owned()),
        domain: Some(Domain::Range {
            min: Some(0.0),
            max: None,
        }),
        multi_value: false,
    }
}
