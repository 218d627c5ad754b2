/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 04/09/2026
Last Modified: 12/10/2026
License: MIT
*/

use crate::errors::{GpError, Result};
use std::collections::BTreeMap;
use tracing::debug;

coded_value_enum! {
    /// Geoprocessing environment settings, by their engine names.
    pub enum EnvironmentSetting {
        Workspace => "workspace",
        ScratchWorkspace => "scratchWorkspace",
        OutputCoordinateSystem => "outputCoordinateSystem",
        GeographicTransformations => "geographicTransformations",
        Extent => "extent",
        XYTolerance => "XYTolerance",
        XYResolution => "XYResolution",
        OutputZFlag => "outputZFlag",
        OutputZValue => "outputZValue",
        ZResolution => "ZResolution",
        ZTolerance => "ZTolerance",
        OutputMFlag => "outputMFlag",
        MResolution => "MResolution",
        MTolerance => "MTolerance",
        ConfigKeyword => "configKeyword",
        QualifiedFieldNames => "qualifiedFieldNames",
        TransferDomains => "transferDomains",
        MaintainAttachments => "maintainAttachments",
        ReferenceScale => "referenceScale",
        CartographicCoordinateSystem => "cartographicCoordinateSystem",
        CellSize => "cellSize",
        Mask => "mask",
        SnapRaster => "snapRaster",
        Compression => "compression",
        TileSize => "tileSize",
        PyramidReference => "pyramid",
        RasterStatistics => "rasterStatistics",
        ParallelProcessingFactor => "parallelProcessingFactor",
        AutoCommit => "autoCommit",
    }
}

use self::EnvironmentSetting::*;

/// Settings honored by every tool that writes output.
pub fn general_environments() -> Vec<EnvironmentSetting> {
    vec![Workspace, ScratchWorkspace]
}

/// Settings honored by tools that write feature classes.
pub fn feature_environments() -> Vec<EnvironmentSetting> {
    let mut envs = general_environments();
    envs.extend_from_slice(&[
        OutputCoordinateSystem,
        GeographicTransformations,
        Extent,
        XYTolerance,
        XYResolution,
        OutputZFlag,
        OutputZValue,
        ZResolution,
        ZTolerance,
        OutputMFlag,
        MResolution,
        MTolerance,
        ConfigKeyword,
        QualifiedFieldNames,
    ]);
    envs
}

/// Feature settings plus the cartographic ones.
pub fn cartography_environments() -> Vec<EnvironmentSetting> {
    let mut envs = feature_environments();
    envs.push(ReferenceScale);
    envs.push(CartographicCoordinateSystem);
    envs
}

/// Settings honored by tools that write rasters.
pub fn raster_environments() -> Vec<EnvironmentSetting> {
    let mut envs = general_environments();
    envs.extend_from_slice(&[
        OutputCoordinateSystem,
        GeographicTransformations,
        Extent,
        CellSize,
        Mask,
        SnapRaster,
        Compression,
        TileSize,
        PyramidReference,
        RasterStatistics,
        ParallelProcessingFactor,
    ]);
    envs
}

/// Settings honored by geodatabase administration tools.
pub fn geodatabase_environments() -> Vec<EnvironmentSetting> {
    vec![Workspace, ConfigKeyword]
}

/// Environment values to apply to a tool run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentSettings {
    values: BTreeMap<EnvironmentSetting, String>,
}

impl EnvironmentSettings {
    pub fn new() -> EnvironmentSettings {
        EnvironmentSettings {
            values: BTreeMap::new(),
        }
    }

    /// Builds settings from engine names; unknown names are rejected.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<EnvironmentSettings> {
        let mut settings = EnvironmentSettings::new();
        for (name, value) in map {
            let setting = name
                .parse::<EnvironmentSetting>()
                .map_err(|_| GpError::UnrecognizedEnvironment(name.clone()))?;
            settings.set(setting, value);
        }
        Ok(settings)
    }

    /// Sets `name=value` from a command-line style pair.
    pub fn set_pair(&mut self, pair: &str) -> Result<()> {
        let mut parts = pair.splitn(2, '=');
        let name = parts.next().unwrap_or("").trim();
        let value = parts
            .next()
            .ok_or_else(|| GpError::invalid_value("env", pair, "expected name=value"))?;
        let setting = name
            .parse::<EnvironmentSetting>()
            .map_err(|_| GpError::UnrecognizedEnvironment(name.to_string()))?;
        self.set(setting, value.trim().trim_matches('"'));
        Ok(())
    }

    pub fn set(&mut self, setting: EnvironmentSetting, value: &str) {
        self.values.insert(setting, value.to_string());
    }

    /// Sets a value only if none is present.
    pub fn set_default(&mut self, setting: EnvironmentSetting, value: &str) {
        self.values
            .entry(setting)
            .or_insert_with(|| value.to_string());
    }

    pub fn get(&self, setting: EnvironmentSetting) -> Option<&str> {
        self.values.get(&setting).map(|v| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The settings a tool honors, keyed by engine name. Others are dropped.
    pub fn applicable_to(&self, valid: &[EnvironmentSetting]) -> BTreeMap<String, String> {
        let mut ret = BTreeMap::new();
        for (setting, value) in &self.values {
            if valid.contains(setting) {
                ret.insert(setting.as_str().to_string(), value.clone());
            } else {
                debug!(environment = setting.as_str(), "not honored by tool; skipped");
            }
        }
        ret
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_groups() {
        let carto = cartography_environments();
        assert!(carto.contains(&ReferenceScale));
        assert!(carto.contains(&Workspace));
        assert!(!feature_environments().contains(&ReferenceScale));
        assert!(raster_environments().contains(&CellSize));
        assert!(!raster_environments().contains(&XYTolerance));
    }

    #[test]
    fn test_from_map() {
        let mut map = BTreeMap::new();
        map.insert("workspace".to_string(), "C:/data".to_string());
        map.insert("cellsize".to_string(), "30".to_string());
        let s = EnvironmentSettings::from_map(&map).unwrap();
        assert_eq!(s.get(Workspace), Some("C:/data"));
        assert_eq!(s.get(CellSize), Some("30"));

        map.insert("outSR".to_string(), "4326".to_string());
        match EnvironmentSettings::from_map(&map) {
            Err(GpError::UnrecognizedEnvironment(name)) => assert_eq!(name, "outSR"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_set_pair() {
        let mut s = EnvironmentSettings::new();
        s.set_pair("XYTolerance=\"0.001 Meters\"").unwrap();
        assert_eq!(s.get(XYTolerance), Some("0.001 Meters"));
        assert!(s.set_pair("workspace").is_err());
        assert!(s.set_pair("bogus=1").is_err());
    }

    #[test]
    fn test_set_default_keeps_existing() {
        let mut s = EnvironmentSettings::new();
        s.set(Workspace, "C:/gdb.gdb");
        s.set_default(Workspace, "C:/other");
        s.set_default(ScratchWorkspace, "C:/scratch");
        assert_eq!(s.get(Workspace), Some("C:/gdb.gdb"));
        assert_eq!(s.get(ScratchWorkspace), Some("C:/scratch"));
    }

    #[test]
    fn test_applicable_to() {
        let mut s = EnvironmentSettings::new();
        s.set(Workspace, "C:/data");
        s.set(CellSize, "10");
        s.set(ReferenceScale, "25000");
        let envs = s.applicable_to(&cartography_environments());
        assert_eq!(envs.len(), 2);
        assert_eq!(envs.get("referenceScale").map(|v| v.as_str()), Some("25000"));
        assert!(envs.get("cellSize").is_none());
    }
}
