/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 06/09/2026
Last Modified: 14/10/2026
License: MIT
*/

/*!
GpTools is a catalog of typed descriptors for ArcGIS geoprocessing tools.

Each descriptor names a tool, its toolbox and its parameters in the order the
geoprocessing engine expects, together with default values, domains and the
environment settings the tool honors. Descriptors are validated and
serialized into an `ExecuteRequest`, which a `Geoprocessor` dispatches to the
engine; the spatial work itself happens there.

```
use gptools::geoprocessor::ExecuteRequest;
use gptools::tools::cartography::AggregatePoints;
use gptools_common::environments::EnvironmentSettings;
use gptools_common::values::{LinearUnit, LinearUnitType};

let tool = AggregatePoints::new(
    "stores.shp",
    "store_clusters.shp",
    LinearUnit::new(500.0, LinearUnitType::Meters),
);
let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
assert_eq!(
    request.to_command_string(),
    "AggregatePoints_cartography stores.shp store_clusters.shp \"500 Meters\""
);
```
*/

pub mod geoprocessor;
pub mod tools;
