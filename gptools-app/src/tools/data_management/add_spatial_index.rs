/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 15/09/2026
Last Modified: 15/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

/// Adds a spatial index to a shapefile, file geodatabase, mobile
/// geodatabase, or enterprise geodatabase feature class.
///
/// A grid size of 0 lets the engine calculate an optimal size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddSpatialIndex {
    pub in_features: String,
    pub spatial_grid_1: Option<f64>,
    pub spatial_grid_2: Option<f64>,
    pub spatial_grid_3: Option<f64>,
}

impl AddSpatialIndex {
    pub fn new(in_features: &str) -> AddSpatialIndex {
        AddSpatialIndex {
            in_features: in_features.to_string(),
            ..Default::default()
        }
    }
}

impl GpTool for AddSpatialIndex {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "AddSpatialIndex".to_string()
    }

    fn get_display_name(&self) -> String {
        "Add Spatial Index".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Adds a spatial index to a shapefile, file geodatabase, mobile geodatabase, or enterprise geodatabase feature class.".to_string()
    }

    fn get_toolbox(&self) -> String {
        TOOLBOX.to_string()
    }

    fn get_toolbox_alias(&self) -> String {
        TOOLBOX_ALIAS.to_string()
    }

    fn get_parameter_info(&self) -> Vec<ToolParameter> {
        let mut parameters = vec![ToolParameter {
            name: "in_features".to_owned(),
            display_name: "Input Features".to_owned(),
            description: "The shapefile or feature class to which a spatial index will be added.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        }];

        for (i, level) in ["first", "second", "third"].iter().enumerate() {
            parameters.push(ToolParameter {
                name: format!("spatial_grid_{}", i + 1),
                display_name: format!("Spatial Grid {}", i + 1),
                description: format!("The size of the {} grid of the spatial index.", level),
                parameter_type: ParameterType::Double,
                direction: Direction::Input,
                kind: ParameterKind::Optional,
                default_value: Some("0".to_owned()),
                domain: Some(Domain::Range {
                    min: Some(0.0),
                    max: None,
                }),
                multi_value: false,
            });
        }

        parameters.push(ToolParameter {
            name: "out_feature_class".to_owned(),
            display_name: "Updated Input Features".to_owned(),
            description: "The input features with the spatial index added.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Output,
            kind: ParameterKind::Derived,
            default_value: None,
            domain: None,
            multi_value: false,
        });
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(&self.in_features),
            GpValue::from(self.spatial_grid_1),
            GpValue::from(self.spatial_grid_2),
            GpValue::from(self.spatial_grid_3),
            GpValue::Empty,
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        geodatabase_environments()
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_features" => self.in_features = parse_optional_string(value).unwrap_or_default(),
            "spatial_grid_1" => self.spatial_grid_1 = parse_optional(name, value)?,
            "spatial_grid_2" => self.spatial_grid_2 = parse_optional(name, value)?,
            "spatial_grid_3" => self.spatial_grid_3 = parse_optional(name, value)?,
            _ => return Err(unrecognized_parameter(&self.get_tool_name(), name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geoprocessor::ExecuteRequest;

    #[test]
    fn test_grid_sizes() {
        let mut tool = AddSpatialIndex::new("parcels.shp");
        tool.set_parameter("spatial_grid_1", "500").unwrap();
        tool.set_parameter("spatial_grid_2", "2500.5").unwrap();
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "AddSpatialIndex_management parcels.shp 500 2500.5"
        );
    }
}
