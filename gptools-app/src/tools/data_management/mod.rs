// private sub-module defined in other files
mod add_field;
mod add_spatial_index;
mod compress;
mod create_enterprise_geodatabase;
mod create_version;
mod dissolve;

// exports identifiers from private sub-modules in the current module namespace
pub use self::add_field::{AddField, FieldDataType, FieldIsNullable, FieldIsRequired};
pub use self::add_spatial_index::AddSpatialIndex;
pub use self::compress::Compress;
pub use self::create_enterprise_geodatabase::{
    AccountAuthentication, CreateEnterpriseGeodatabase, DatabasePlatform, SdeSchema,
};
pub use self::create_version::{AccessPermission, CreateVersion};
pub use self::dissolve::{Dissolve, MultiPartOption, StatisticType, UnsplitLinesOption};

const TOOLBOX: &str = "Data Management Tools";
const TOOLBOX_ALIAS: &str = "management";
