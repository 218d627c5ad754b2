/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 09/09/2026
Last Modified: 21/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    pub enum LocationOption {
        NoLocation => "NO_LOCATION",
        Location => "LOCATION",
    }
}

coded_value_enum! {
    pub enum AngleOption {
        NoAngle => "NO_ANGLE",
        Angle => "ANGLE",
    }
}

coded_value_enum! {
    /// Whether distances are measured on a plane or along the ellipsoid.
    pub enum DistanceMethod {
        Planar => "PLANAR",
        Geodesic => "GEODESIC",
    }
}

/// Calculates distance and additional proximity information between the
/// input features and the closest feature in another layer or feature class.
///
/// The input features are updated in place with `NEAR_FID` and `NEAR_DIST`
/// fields; the updated input is reported as a derived output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Near {
    pub in_features: String,
    pub near_features: Vec<String>,
    pub search_radius: Option<LinearUnit>,
    pub location: Option<LocationOption>,
    pub angle: Option<AngleOption>,
    pub method: Option<DistanceMethod>,
}

impl Near {
    pub fn new(in_features: &str, near_features: &[&str]) -> Near {
        Near {
            in_features: in_features.to_string(),
            near_features: near_features.iter().map(|f| f.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl GpTool for Near {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "Near".to_string()
    }

    fn get_display_name(&self) -> String {
        "Near".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Calculates distance and additional proximity information between the input features and the closest feature in another layer or feature class.".to_string()
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
            description: "The input features that can be point, polyline, polygon, or multipoint type.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "near_features".to_owned(),
            display_name: "Near Features".to_owned(),
            description: "One or more feature layers or feature classes containing near feature candidates.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: true,
        });

        parameters.push(ToolParameter {
            name: "search_radius".to_owned(),
            display_name: "Search Radius".to_owned(),
            description: "The radius used to search for near features.".to_owned(),
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

        parameters.push(ToolParameter {
            name: "location".to_owned(),
            display_name: "Location".to_owned(),
            description: "Specifies whether x- and y-coordinates of the closest location will be written.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(LocationOption::NoLocation.to_string()),
            domain: Some(Domain::CodedValues(LocationOption::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "angle".to_owned(),
            display_name: "Angle".to_owned(),
            description: "Specifies whether the near angle will be calculated and written.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(AngleOption::NoAngle.to_string()),
            domain: Some(Domain::CodedValues(AngleOption::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "method".to_owned(),
            display_name: "Method".to_owned(),
            description: "Specifies whether a shortest path on a spheroid or a flat earth will be used.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(DistanceMethod::Planar.to_string()),
            domain: Some(Domain::CodedValues(DistanceMethod::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_feature_class".to_owned(),
            display_name: "Updated Input Features".to_owned(),
            description: "The input features with the proximity fields added.".to_owned(),
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
            GpValue::Multi(self.near_features.clone()),
            GpValue::from(self.search_radius),
            GpValue::from(self.location),
            GpValue::from(self.angle),
            GpValue::from(self.method),
            GpValue::Empty,
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        feature_environments()
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_features" => self.in_features = parse_optional_string(value).unwrap_or_default(),
            "near_features" => self.near_features = parse_multi(value),
            "search_radius" => self.search_radius = parse_optional(name, value)?,
            "location" => self.location = parse_optional(name, value)?,
            "angle" => self.angle = parse_optional(name, value)?,
            "method" => self.method = parse_optional(name, value)?,
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
    fn test_derived_output_not_sent() {
        let mut tool = Near::new("schools.shp", &["parks.shp", "rivers.shp"]);
        tool.angle = Some(AngleOption::Angle);
        tool.method = Some(DistanceMethod::Geodesic);
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(request.parameters.len(), 6);
        assert_eq!(
            request.to_command_string(),
            "Near_analysis schools.shp parks.shp;rivers.shp # # ANGLE GEODESIC"
        );
    }

    #[test]
    fn test_near_features_required() {
        let tool = Near::new("schools.shp", &[]);
        assert!(matches!(tool.validate(), Err(GpError::MissingParameter(p)) if p == "near_features"));
    }
}
