/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 12/09/2026
Last Modified: 30/09/2026
License: MIT
*/

use super::simplify_line::{CollapsedPointOption, SimplificationAlgorithm};
use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    /// How topological errors introduced by the simplification are handled.
    pub enum TopologyErrorOption {
        NoCheck => "NO_CHECK",
        FlagErrors => "FLAG_ERRORS",
        ResolveErrors => "RESOLVE_ERRORS",
    }
}

/// Simplifies polygons by removing extraneous bends while preserving
/// essential shape. Polygons smaller than the minimum area after the
/// operation are removed.
///
/// # See Also
/// `SimplifyLine`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimplifyPolygon {
    pub in_features: String,
    pub out_feature_class: String,
    pub algorithm: Option<SimplificationAlgorithm>,
    pub tolerance: Option<LinearUnit>,
    pub minimum_area: Option<ArealUnit>,
    pub error_option: Option<TopologyErrorOption>,
    pub collapsed_point_option: Option<CollapsedPointOption>,
}

impl SimplifyPolygon {
    pub fn new(
        in_features: &str,
        out_feature_class: &str,
        algorithm: SimplificationAlgorithm,
        tolerance: LinearUnit,
    ) -> SimplifyPolygon {
        SimplifyPolygon {
            in_features: in_features.to_string(),
            out_feature_class: out_feature_class.to_string(),
            algorithm: Some(algorithm),
            tolerance: Some(tolerance),
            ..Default::default()
        }
    }
}

impl GpTool for SimplifyPolygon {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "SimplifyPolygon".to_string()
    }

    fn get_display_name(&self) -> String {
        "Simplify Polygon".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Simplifies polygons by removing extraneous bends while preserving essential shape.".to_string()
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
            description: "The polygon features to be simplified.".to_owned(),
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
            description: "The simplified output polygon feature class.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![GeometryType::Polygon])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "algorithm".to_owned(),
            display_name: "Simplification Algorithm".to_owned(),
            description: "Specifies the polygon simplification algorithm.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: Some(SimplificationAlgorithm::PointRemove.to_string()),
            domain: Some(Domain::CodedValues(SimplificationAlgorithm::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "tolerance".to_owned(),
            display_name: "Simplification Tolerance".to_owned(),
            description: "The tolerance that determines the degree of simplification.".to_owned(),
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
            name: "minimum_area".to_owned(),
            display_name: "Minimum Area".to_owned(),
            description: "The minimum area for a simplified polygon to be retained.".to_owned(),
            parameter_type: ParameterType::ArealUnit,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some("0".to_owned()),
            domain: Some(Domain::Range {
                min: Some(0.0),
                max: None,
            }),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "error_option".to_owned(),
            display_name: "Handling Topological Errors".to_owned(),
            description: "Specifies how topological errors are handled.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(TopologyErrorOption::NoCheck.to_string()),
            domain: Some(Domain::CodedValues(TopologyErrorOption::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "collapsed_point_option".to_owned(),
            display_name: "Keep collapsed points".to_owned(),
            description: "Specifies whether to keep polygons smaller than the minimum area as points.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(CollapsedPointOption::KeepCollapsedPoints.to_string()),
            domain: Some(Domain::CodedValues(CollapsedPointOption::tokens())),
            multi_value: false,
        });
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(&self.in_features),
            GpValue::from(&self.out_feature_class),
            GpValue::from(self.algorithm),
            GpValue::from(self.tolerance),
            GpValue::from(self.minimum_area),
            GpValue::from(self.error_option),
            GpValue::from(self.collapsed_point_option),
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
            "algorithm" => self.algorithm = parse_optional(name, value)?,
            "tolerance" => self.tolerance = parse_optional(name, value)?,
            "minimum_area" => self.minimum_area = parse_optional(name, value)?,
            "error_option" => self.error_option = parse_optional(name, value)?,
            "collapsed_point_option" => self.collapsed_point_option = parse_optional(name, value)?,
            _ => return Err(unrecognized_parameter(&self.get_tool_name(), name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_option_tokens() {
        let mut tool = SimplifyPolygon::default();
        tool.set_parameter("error_option", "resolve_errors").unwrap();
        assert_eq!(tool.error_option, Some(TopologyErrorOption::ResolveErrors));
        assert_eq!(
            tool.get_parameter_values()[5].to_gp_string().as_deref(),
            Some("RESOLVE_ERRORS")
        );
    }
}
