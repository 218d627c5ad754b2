// private sub-module defined in other files
mod feature_class_to_feature_class;
mod table_to_table;

// exports identifiers from private sub-modules in the current module namespace
pub use self::feature_class_to_feature_class::FeatureClassToFeatureClass;
pub use self::table_to_table::TableToTable;

const TOOLBOX: &str = "Conversion Tools";
const TOOLBOX_ALIAS: &str = "conversion";
