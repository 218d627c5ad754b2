// private sub-module defined in other files
mod aggregate_points;
mod aggregate_polygons;
mod collapse_dual_lines_to_centerline;
mod simplify_line;
mod simplify_polygon;
mod smooth_line;

// exports identifiers from private sub-modules in the current module namespace
pub use self::aggregate_points::AggregatePoints;
pub use self::aggregate_polygons::{AggregatePolygons, OrthogonalityOption};
pub use self::collapse_dual_lines_to_centerline::CollapseDualLinesToCenterline;
pub use self::simplify_line::{
    CollapsedPointOption, ErrorCheckingOption, ErrorResolvingOption, SimplificationAlgorithm,
    SimplifyLine,
};
pub use self::simplify_polygon::{SimplifyPolygon, TopologyErrorOption};
pub use self::smooth_line::{EndpointOption, SmoothLine, SmoothingAlgorithm, SmoothingErrorOption};

const TOOLBOX: &str = "Cartography Tools";
const TOOLBOX_ALIAS: &str = "cartography";
