/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 08/09/2026
Last Modified: 08/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

/// Extracts input features that overlay the clip features.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Clip {
    pub in_features: String,
    pub clip_features: String,
    pub out_feature_class: String,
    pub cluster_tolerance: Option<LinearUnit>,
}

impl Clip {
    pub fn new(in_features: &str, clip_features: &str, out_feature_class: &str) -> Clip {
        Clip {
            in_features: in_features.to_string(),
            clip_features: clip_features.to_string(),
            out_feature_class: out_feature_class.to_string(),
            cluster_tolerance: None,
        }
    }
}

impl GpTool for Clip {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "Clip".to_string()
    }

    fn get_display_name(&self) -> String {
        "Clip".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Extracts input features that overlay the clip features.".to_string()
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
            description: "The features to be clipped.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "clip_features".to_owned(),
            display_name: "Clip Features".to_owned(),
            description: "The features used to clip the input features.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![GeometryType::Polygon])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_feature_class".to_owned(),
            display_name: "Output Feature Class".to_owned(),
            description: "The feature class to be created.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "cluster_tolerance".to_owned(),
            display_name: "XY Tolerance".to_owned(),
            description: "The minimum distance separating all feature coordinates.".to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
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
            GpValue::from(&self.clip_features),
            GpValue::from(&self.out_feature_class),
            GpValue::from(self.cluster_tolerance),
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        feature_environments()
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_features" => self.in_features = parse_optional_string(value).unwrap_or_default(),
            "clip_features" => self.clip_features = parse_optional_string(value).unwrap_or_default(),
            "out_feature_class" => {
                self.out_feature_class = parse_optional_string(value).unwrap_or_default()
            }
            "cluster_tolerance" => self.cluster_tolerance = parse_optional(name, value)?,
            _ => return Err(unrecognized_parameter(&self.get_tool_name(), name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_negative_tolerance_rejected() {
        let mut tool = Clip::new("roads.shp", "county.shp", "county_roads.shp");
        assert!(tool.validate().is_ok());
        tool.set_parameter("cluster_tolerance", "-1 Meters").unwrap();
        assert!(matches!(tool.validate(), Err(GpError::OutOfRange { .. })));
    }
}
