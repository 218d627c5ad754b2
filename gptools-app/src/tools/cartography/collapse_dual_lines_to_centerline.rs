/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 12/09/2026
Last Modified: 12/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

/// Derives centerlines from dual-line (double-line) features, such as road
/// casings, based on specified width tolerances.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollapseDualLinesToCenterline {
    pub in_features: String,
    pub out_feature_class: String,
    pub maximum_width: Option<LinearUnit>,
    pub minimum_width: Option<LinearUnit>,
}

impl CollapseDualLinesToCenterline {
    pub fn new(
        in_features: &str,
        out_feature_class: &str,
        maximum_width: LinearUnit,
    ) -> CollapseDualLinesToCenterline {
        CollapseDualLinesToCenterline {
            in_features: in_features.to_string(),
            out_feature_class: out_feature_class.to_string(),
            maximum_width: Some(maximum_width),
            minimum_width: None,
        }
    }
}

impl GpTool for CollapseDualLinesToCenterline {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "CollapseDualLinesToCenterline".to_string()
    }

    fn get_display_name(&self) -> String {
        "Collapse Dual Lines To Centerline".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Derives centerlines from dual-line (or double-line) features, such as road casings, based on specified width tolerances.".to_string()
    }

    fn get_toolbox(&self) -> String {
        TOOLBOX.to_string()
    }

    fn get_toolbox_alias(&self) -> String {
        TOOLBOX_ALIAS.to_string()
    }

    fn get_parameter_info(&self) -> Vec<ToolParameter> {
        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "in_features".to_owned(),
            display_name: "Input Features".to_owned(),
            description: "The dual-line features, such as road casings, from which centerlines are derived.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![GeometryType::Polyline])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_feature_class".to_owned(),
            display_name: "Output Feature Class".to_owned(),
            description: "The output feature class to be created.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![GeometryType::Polyline])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "maximum_width".to_owned(),
            display_name: "Maximum Width".to_owned(),
            description: "The maximum width of the dual-line features to derive centerline.".to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::Range {
                min: Some(0.0),
                max: None,
            }),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "minimum_width".to_owned(),
            display_name: "Minimum Width".to_owned(),
            description: "The minimum width of the dual-line features to derive centerline.".to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some("0".to_owned()),
            domain: Some(Domain::Range {
                min: Some(0.0),
                max: None,
            }),
            multi_value: false,
        });
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(&self.in_features),
            GpValue::from(&self.out_feature_class),
            GpValue::from(self.maximum_width),
            GpValue::from(self.minimum_width),
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        cartography_environments()
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_features" => self.in_features = parse_optional_string(value).unwrap_or_default(),
            "out_feature_class" => {
                self.out_feature_class = parse_optional_string(value).unwrap_or_default()
            }
            "maximum_width" => self.maximum_width = parse_optional(name, value)?,
            "minimum_width" => self.minimum_width = parse_optional(name, value)?,
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
    fn test_collapse_parameter_order() {
        let mut tool = CollapseDualLinesToCenterline::new(
            "road_casings.shp",
            "centerlines.shp",
            LinearUnit::new(30.0, LinearUnitType::Meters),
        );
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "CollapseDualLinesToCenterline_cartography road_casings.shp centerlines.shp \"30 Meters\""
        );

        tool.set_parameter("minimum_width", "5 Meters").unwrap();
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "CollapseDualLinesToCenterline_cartography road_casings.shp centerlines.shp \"30 Meters\" \"5 Meters\""
        );
    }
}
