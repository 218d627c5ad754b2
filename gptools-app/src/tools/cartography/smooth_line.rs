/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 13/09/2026
Last Modified: 13/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    pub enum SmoothingAlgorithm {
        /// Polynomial Approximation with Exponential Kernel.
        Paek => "PAEK",
        /// Fits Bezier curves between vertices; the tolerance is ignored.
        BezierInterpolation => "BEZIER_INTERPOLATION",
    }
}

coded_value_enum! {
    /// Whether endpoints of closed lines are preserved.
    pub enum EndpointOption {
        FixedClosedEndpoint => "FIXED_CLOSED_ENDPOINT",
        NoFixed => "NO_FIXED",
    }
}

coded_value_enum! {
    pub enum SmoothingErrorOption {
        NoCheck => "NO_CHECK",
        FlagErrors => "FLAG_ERRORS",
    }
}

/// Smooths sharp angles in lines to improve aesthetic or cartographic quality.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SmoothLine {
    pub in_features: String,
    pub out_feature_class: String,
    pub algorithm: Option<SmoothingAlgorithm>,
    pub tolerance: Option<LinearUnit>,
    pub endpoint_option: Option<EndpointOption>,
    pub error_option: Option<SmoothingErrorOption>,
}

impl SmoothLine {
    pub fn new(
        in_features: &str,
        out_feature_class: &str,
        algorithm: SmoothingAlgorithm,
        tolerance: LinearUnit,
    ) -> SmoothLine {
        SmoothLine {
            in_features: in_features.to_string(),
            out_feature_class: out_feature_class.to_string(),
            algorithm: Some(algorithm),
            tolerance: Some(tolerance),
            endpoint_option: None,
            error_option: None,
        }
    }
}

impl GpTool for SmoothLine {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "SmoothLine".to_string()
    }

    fn get_display_name(&self) -> String {
        "Smooth Line".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Smooths sharp angles in lines to improve aesthetic or cartographic quality.".to_string()
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
            description: "The line features to be smoothed.".to_owned(),
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
            description: "The output line feature class to be created.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![GeometryType::Polyline])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "algorithm".to_owned(),
            display_name: "Smoothing Algorithm".to_owned(),
            description: "Specifies the smoothing algorithm.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: Some(SmoothingAlgorithm::Paek.to_string()),
            domain: Some(Domain::CodedValues(SmoothingAlgorithm::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "tolerance".to_owned(),
            display_name: "Smoothing Tolerance".to_owned(),
            description: "The length of the path along which the PAEK algorithm smooths.".to_owned(),
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
            name: "endpoint_option".to_owned(),
            display_name: "Preserve endpoint for rings".to_owned(),
            description: "Specifies whether the endpoints of closed lines are preserved.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(EndpointOption::FixedClosedEndpoint.to_string()),
            domain: Some(Domain::CodedValues(EndpointOption::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "error_option".to_owned(),
            display_name: "Handling Topological Errors".to_owned(),
            description: "Specifies how topological errors are handled.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(SmoothingErrorOption::NoCheck.to_string()),
            domain: Some(Domain::CodedValues(SmoothingErrorOption::tokens())),
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
            GpValue::from(self.endpoint_option),
            GpValue::from(self.error_option),
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
            "endpoint_option" => self.endpoint_option = parse_optional(name, value)?,
            "error_option" => self.error_option = parse_optional(name, value)?,
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
    fn test_smooth_line_parameter_order() {
        let mut tool = SmoothLine::new(
            "rivers.shp",
            "rivers_smooth.shp",
            SmoothingAlgorithm::Paek,
            LinearUnit::new(100.0, LinearUnitType::Meters),
        );
        tool.error_option = Some(SmoothingErrorOption::FlagErrors);
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "SmoothLine_cartography rivers.shp rivers_smooth.shp PAEK \"100 Meters\" # FLAG_ERRORS"
        );
    }

    #[test]
    fn test_endpoint_option_tokens() {
        let mut tool = SmoothLine::default();
        tool.set_parameter("endpoint_option", "no_fixed").unwrap();
        assert_eq!(tool.endpoint_option, Some(EndpointOption::NoFixed));
        assert!(tool.set_parameter("algorithm", "SPLINE").is_err());
    }
}
