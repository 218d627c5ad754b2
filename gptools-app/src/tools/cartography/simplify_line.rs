/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 12/09/2026
Last Modified: 30/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    /// Line and polygon simplification algorithms.
    pub enum SimplificationAlgorithm {
        /// Removes redundant vertices; fast, but may produce angular results.
        PointRemove => "POINT_REMOVE",
        /// Removes insignificant bends; slower, but truer to the original shape.
        BendSimplify => "BEND_SIMPLIFY",
    }
}

coded_value_enum! {
    pub enum ErrorResolvingOption {
        FlagErrors => "FLAG_ERRORS",
        ResolveErrors => "RESOLVE_ERRORS",
    }
}

coded_value_enum! {
    /// Whether zero-length results are kept as points.
    pub enum CollapsedPointOption {
        KeepCollapsedPoints => "KEEP_COLLAPSED_POINTS",
        NoKeep => "NO_KEEP",
    }
}

coded_value_enum! {
    pub enum ErrorCheckingOption {
        Check => "CHECK",
        NoCheck => "NO_CHECK",
    }
}

/// Simplifies lines by removing extraneous bends while preserving essential
/// shape.
///
/// # See Also
/// `SimplifyPolygon`, `SmoothLine`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimplifyLine {
    pub in_features: String,
    pub out_feature_class: String,
    pub algorithm: Option<SimplificationAlgorithm>,
    pub tolerance: Option<LinearUnit>,
    pub error_resolving_option: Option<ErrorResolvingOption>,
    pub collapsed_point_option: Option<CollapsedPointOption>,
    pub error_checking_option: Option<ErrorCheckingOption>,
}

impl SimplifyLine {
    pub fn new(
        in_features: &str,
        out_feature_class: &str,
        algorithm: SimplificationAlgorithm,
        tolerance: LinearUnit,
    ) -> SimplifyLine {
        SimplifyLine {
            in_features: in_features.to_string(),
            out_feature_class: out_feature_class.to_string(),
            algorithm: Some(algorithm),
            tolerance: Some(tolerance),
            ..Default::default()
        }
    }
}

impl GpTool for SimplifyLine {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "SimplifyLine".to_string()
    }

    fn get_display_name(&self) -> String {
        "Simplify Line".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Simplifies lines by removing extraneous bends while preserving essential shape.".to_string()
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
            description: "The line features to be simplified.".to_owned(),
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
            description: "The simplified output line feature class.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![GeometryType::Polyline])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "algorithm".to_owned(),
            display_name: "Simplification Algorithm".to_owned(),
            description: "Specifies the line simplification algorithm.".to_owned(),
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
            name: "error_resolving_option".to_owned(),
            display_name: "Handling Topological Errors".to_owned(),
            description: "Specifies how topological errors are handled.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(ErrorResolvingOption::FlagErrors.to_string()),
            domain: Some(Domain::CodedValues(ErrorResolvingOption::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "collapsed_point_option".to_owned(),
            display_name: "Keep collapsed points".to_owned(),
            description: "Specifies whether to keep zero-length lines as points.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(CollapsedPointOption::KeepCollapsedPoints.to_string()),
            domain: Some(Domain::CodedValues(CollapsedPointOption::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "error_checking_option".to_owned(),
            display_name: "Check for topological errors".to_owned(),
            description: "Specifies whether to check for topological errors.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(ErrorCheckingOption::Check.to_string()),
            domain: Some(Domain::CodedValues(ErrorCheckingOption::tokens())),
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
            GpValue::from(self.error_resolving_option),
            GpValue::from(self.collapsed_point_option),
            GpValue::from(self.error_checking_option),
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
            "error_resolving_option" => self.error_resolving_option = parse_optional(name, value)?,
            "collapsed_point_option" => self.collapsed_point_option = parse_optional(name, value)?,
            "error_checking_option" => self.error_checking_option = parse_optional(name, value)?,
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
    fn test_bend_simplify() {
        let mut tool = SimplifyLine::new(
            "contours.shp",
            "contours_simple.shp",
            SimplificationAlgorithm::BendSimplify,
            LinearUnit::new(50.0, LinearUnitType::Meters),
        );
        tool.collapsed_point_option = Some(CollapsedPointOption::NoKeep);
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "SimplifyLine_cartography contours.shp contours_simple.shp BEND_SIMPLIFY \"50 Meters\" # NO_KEEP"
        );
    }

    #[test]
    fn test_missing_algorithm() {
        let mut tool = SimplifyLine::default();
        tool.in_features = "a.shp".to_string();
        tool.out_feature_class = "b.shp".to_string();
        tool.tolerance = Some(LinearUnit::new(1.0, LinearUnitType::Meters));
        match tool.validate() {
            Err(GpError::MissingParameter(name)) => assert_eq!(name, "algorithm"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
