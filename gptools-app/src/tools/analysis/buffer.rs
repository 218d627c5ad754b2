/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 08/09/2026
Last Modified: 02/10/2026
License: MIT
*/

use super::near::DistanceMethod;
use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    /// The sides of the input features that will be buffered.
    pub enum LineSide {
        Full => "FULL",
        Left => "LEFT",
        Right => "RIGHT",
        OutsideOnly => "OUTSIDE_ONLY",
    }
}

coded_value_enum! {
    /// The shape of the buffer at the end of line input features.
    pub enum LineEndType {
        Round => "ROUND",
        Flat => "FLAT",
    }
}

coded_value_enum! {
    pub enum DissolveOption {
        /// An individual buffer for each feature is maintained.
        None => "NONE",
        /// All buffers are dissolved together into a single feature.
        All => "ALL",
        /// Buffers sharing attribute values in `dissolve_field` are dissolved.
        List => "LIST",
    }
}

/// Creates buffer polygons around input features to a specified distance.
///
/// The distance may be a linear unit (`100 Feet`) or the name of a numeric
/// field of the input features holding a distance per feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Buffer {
    pub in_features: String,
    pub out_feature_class: String,
    pub buffer_distance_or_field: String,
    pub line_side: Option<LineSide>,
    pub line_end_type: Option<LineEndType>,
    pub dissolve_option: Option<DissolveOption>,
    pub dissolve_field: Vec<String>,
    pub method: Option<DistanceMethod>,
}

impl Buffer {
    pub fn new(in_features: &str, out_feature_class: &str, buffer_distance_or_field: &str) -> Buffer {
        Buffer {
            in_features: in_features.to_string(),
            out_feature_class: out_feature_class.to_string(),
            buffer_distance_or_field: buffer_distance_or_field.to_string(),
            ..Default::default()
        }
    }
}

impl GpTool for Buffer {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "Buffer".to_string()
    }

    fn get_display_name(&self) -> String {
        "Buffer".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Creates buffer polygons around input features to a specified distance.".to_string()
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
            description: "The input point, line, or polygon features to be buffered.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_feature_class".to_owned(),
            display_name: "Output Feature Class".to_owned(),
            description: "The feature class containing the output buffers.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![GeometryType::Polygon])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "buffer_distance_or_field".to_owned(),
            display_name: "Distance [value or field]".to_owned(),
            description: "The distance around the input features, as a linear unit or a numeric field.".to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "line_side".to_owned(),
            display_name: "Side Type".to_owned(),
            description: "Specifies the sides of the input features that will be buffered.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(LineSide::Full.to_string()),
            domain: Some(Domain::CodedValues(LineSide::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "line_end_type".to_owned(),
            display_name: "End Type".to_owned(),
            description: "Specifies the shape of the buffer at the end of line input features.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(LineEndType::Round.to_string()),
            domain: Some(Domain::CodedValues(LineEndType::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "dissolve_option".to_owned(),
            display_name: "Dissolve Type".to_owned(),
            description: "Specifies the type of dissolve that will be performed to remove buffer overlap.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(DissolveOption::None.to_string()),
            domain: Some(Domain::CodedValues(DissolveOption::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "dissolve_field".to_owned(),
            display_name: "Dissolve Field(s)".to_owned(),
            description: "The fields of the input features on which output buffers are dissolved.".to_owned(),
            parameter_type: ParameterType::Field,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: true,
        });

        parameters.push(ToolParameter {
            name: "method".to_owned(),
            display_name: "Method".to_owned(),
            description: "Specifies whether the planar or geodesic method will be used to create the buffers.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(DistanceMethod::Planar.to_string()),
            domain: Some(Domain::CodedValues(DistanceMethod::tokens())),
            multi_value: false,
        });
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(&self.in_features),
            GpValue::from(&self.out_feature_class),
            GpValue::from(&self.buffer_distance_or_field),
            GpValue::from(self.line_side),
            GpValue::from(self.line_end_type),
            GpValue::from(self.dissolve_option),
            GpValue::Multi(self.dissolve_field.clone()),
            GpValue::from(self.method),
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        feature_environments()
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_features" => self.in_features = parse_optional_string(value).unwrap_or_default(),
            "out_feature_class" => {
                self.out_feature_class = parse_optional_string(value).unwrap_or_default()
            }
            "buffer_distance_or_field" => {
                self.buffer_distance_or_field = parse_optional_string(value).unwrap_or_default()
            }
            "line_side" => self.line_side = parse_optional(name, value)?,
            "line_end_type" => self.line_end_type = parse_optional(name, value)?,
            "dissolve_option" => self.dissolve_option = parse_optional(name, value)?,
            "dissolve_field" => self.dissolve_field = parse_multi(value),
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
    fn test_buffer_by_field() {
        let mut tool = Buffer::new("wells.shp", "wells_buf.shp", "RADIUS");
        tool.dissolve_option = Some(DissolveOption::List);
        tool.dissolve_field = vec!["OWNER".to_string(), "STATUS".to_string()];
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "Buffer_analysis wells.shp wells_buf.shp RADIUS # # LIST OWNER;STATUS"
        );
    }

    #[test]
    fn test_geodesic_method_is_last() {
        let mut tool = Buffer::new("ports.shp", "ports_buf.shp", "50 NauticalMiles");
        tool.set_parameter("method", "geodesic").unwrap();
        let info = tool.get_parameter_info();
        assert_eq!(info.len(), 8);
        assert_eq!(info[7].name, "method");
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "Buffer_analysis ports.shp ports_buf.shp \"50 NauticalMiles\" # # # # GEODESIC"
        );
    }

    #[test]
    fn test_line_side_tokens() {
        let mut tool = Buffer::default();
        tool.set_parameter("LINE_SIDE", "outside_only").unwrap();
        assert_eq!(tool.line_side, Some(LineSide::OutsideOnly));
        assert!(tool.set_parameter("line_side", "BOTH").is_err());
        assert!(tool.validate().is_err());
    }
}
