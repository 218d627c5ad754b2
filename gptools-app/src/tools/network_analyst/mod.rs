// private sub-module defined in other files
mod make_service_area_layer;

// exports identifiers from private sub-modules in the current module namespace
pub use self::make_service_area_layer::{
    HierarchyOption, LineType, LinesSourceFields, MakeServiceAreaLayer, MergeOption, NestingType,
    OverlapOption, PolygonTrim, PolygonType, SplitOption, TravelFromTo, UTurnPolicy,
};

const TOOLBOX: &str = "Network Analyst Tools";
const TOOLBOX_ALIAS: &str = "na";
