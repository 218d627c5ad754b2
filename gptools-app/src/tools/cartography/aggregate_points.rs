/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 11/09/2026
Last Modified: 11/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

/// Creates polygons around clusters of three or more point features within a
/// specified aggregation distance. Points that do not belong to a cluster are
/// left out of the output.
///
/// # See Also
/// `AggregatePolygons`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregatePoints {
    pub in_features: String,
    pub out_feature_class: String,
    pub aggregation_distance: Option<LinearUnit>,
}

impl AggregatePoints {
    pub fn new(
        in_features: &str,
        out_feature_class: &str,
        aggregation_distance: LinearUnit,
    ) -> AggregatePoints {
        AggregatePoints {
            in_features: in_features.to_string(),
            out_feature_class: out_feature_class.to_string(),
            aggregation_distance: Some(aggregation_distance),
        }
    }
}

impl GpTool for AggregatePoints {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "AggregatePoints".to_string()
    }

    fn get_display_name(&self) -> String {
        "Aggregate Points".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Creates polygons around clusters of three or more point features within a specified aggregation distance.".to_string()
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
            description: "The input point features that will be assessed for proximity and clustering.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![GeometryType::Point])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_feature_class".to_owned(),
            display_name: "Output Feature Class".to_owned(),
            description: "The feature class created to hold the polygons that represent the point clusters.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![GeometryType::Polygon])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "aggregation_distance".to_owned(),
            display_name: "Aggregation Distance".to_owned(),
            description: "The distance between points that will be clustered.".to_owned(),
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
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(&self.in_features),
            GpValue::from(&self.out_feature_class),
            GpValue::from(self.aggregation_distance),
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
            "aggregation_distance" => self.aggregation_distance = parse_optional(name, value)?,
            _ => return Err(unrecognized_parameter(&self.get_tool_name(), name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parameters_in_declared_order() {
        let tool = AggregatePoints::new(
            "stores.shp",
            "clusters.shp",
            LinearUnit::new(2.5, LinearUnitType::Kilometers),
        );
        let values: Vec<Option<String>> = tool
            .get_parameter_values()
            .iter()
            .map(|v| v.to_gp_string())
            .collect();
        assert_eq!(
            values,
            vec![
                Some("stores.shp".to_string()),
                Some("clusters.shp".to_string()),
                Some("2.5 Kilometers".to_string())
            ]
        );
        tool.validate().unwrap();
    }

    #[test]
    fn test_negative_distance_rejected() {
        let mut tool = AggregatePoints::default();
        tool.parse_args(&[
            "--in_features=a.shp".to_string(),
            "--out_feature_class=b.shp".to_string(),
            "--aggregation_distance=-5 Meters".to_string(),
        ])
        .unwrap();
        assert!(matches!(tool.validate(), Err(GpError::OutOfRange { .. })));
    }
}
