// private sub-module defined in other files
mod drive_time_trade_area;

// exports identifiers from private sub-modules in the current module namespace
pub use self::drive_time_trade_area::{
    DriveTimeTradeArea, MeasureUnits, PolygonDetail, TradeAreaOverlap, TravelDirection,
};

const TOOLBOX: &str = "Business Analyst Tools";
const TOOLBOX_ALIAS: &str = "ba";
