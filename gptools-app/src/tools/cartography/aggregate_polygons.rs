/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 11/09/2026
Last Modified: 24/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    /// Whether aggregated polygons keep an orthogonal outline, which suits
    /// building footprints.
    pub enum OrthogonalityOption {
        NonOrthogonal => "NON_ORTHOGONAL",
        Orthogonal => "ORTHOGONAL",
    }
}

/// Combines polygons within a specified distance to each other into new
/// polygons. Optionally writes a one-to-many table linking the aggregated
/// polygons to their source polygons.
///
/// # See Also
/// `AggregatePoints`, `Dissolve`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregatePolygons {
    pub in_features: String,
    pub out_feature_class: String,
    pub aggregation_distance: Option<LinearUnit>,
    pub minimum_area: Option<ArealUnit>,
    pub minimum_hole_size: Option<ArealUnit>,
    pub orthogonality_option: Option<OrthogonalityOption>,
    pub barrier_features: Vec<String>,
    pub out_table: Option<String>,
}

impl AggregatePolygons {
    pub fn new(
        in_features: &str,
        out_feature_class: &str,
        aggregation_distance: LinearUnit,
    ) -> AggregatePolygons {
        AggregatePolygons {
            in_features: in_features.to_string(),
            out_feature_class: out_feature_class.to_string(),
            aggregation_distance: Some(aggregation_distance),
            ..Default::default()
        }
    }
}

impl GpTool for AggregatePolygons {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "AggregatePolygons".to_string()
    }

    fn get_display_name(&self) -> String {
        "Aggregate Polygons".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Combines polygons within a specified distance to each other into new polygons.".to_string()
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
            description: "The polygon features to be aggregated.".to_owned(),
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
            description: "The output feature class to be created.".to_owned(),
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
            description: "The distance to be satisfied between polygon boundaries for aggregation to happen.".to_owned(),
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
            description: "The minimum area for an aggregated polygon to be retained.".to_owned(),
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
            name: "minimum_hole_size".to_owned(),
            display_name: "Minimum Hole Size".to_owned(),
            description: "The minimum size of a polygon hole to be retained.".to_owned(),
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
            name: "orthogonality_option".to_owned(),
            display_name: "Preserve orthogonal shape".to_owned(),
            description: "Specifies the characteristic of the output features when constructed.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(OrthogonalityOption::NonOrthogonal.to_string()),
            domain: Some(Domain::CodedValues(OrthogonalityOption::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "barrier_features".to_owned(),
            display_name: "Barrier Features".to_owned(),
            description: "The layers containing the line or polygon features that are aggregation barriers.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![
                GeometryType::Polyline,
                GeometryType::Polygon,
            ])),
            multi_value: true,
        });

        parameters.push(ToolParameter {
            name: "out_table".to_owned(),
            display_name: "Output Table".to_owned(),
            description: "A one-to-many relationship table that links the aggregated polygons to their source polygons.".to_owned(),
            parameter_type: ParameterType::Table,
            direction: Direction::Output,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: false,
        });
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(&self.in_features),
            GpValue::from(&self.out_feature_class),
            GpValue::from(self.aggregation_distance),
            GpValue::from(self.minimum_area),
            GpValue::from(self.minimum_hole_size),
            GpValue::from(self.orthogonality_option),
            GpValue::Multi(self.barrier_features.clone()),
            GpValue::from(self.out_table.clone()),
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
            "minimum_area" => self.minimum_area = parse_optional(name, value)?,
            "minimum_hole_size" => self.minimum_hole_size = parse_optional(name, value)?,
            "orthogonality_option" => self.orthogonality_option = parse_optional(name, value)?,
            "barrier_features" => self.barrier_features = parse_multi(value),
            "out_table" => self.out_table = parse_optional_string(value),
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
    fn test_building_footprints() {
        let mut tool = AggregatePolygons::new(
            "buildings.shp",
            "built_up.shp",
            LinearUnit::new(10.0, LinearUnitType::Meters),
        );
        tool.minimum_area = Some(ArealUnit::new(1000.0, ArealUnitType::SquareMeters));
        tool.orthogonality_option = Some(OrthogonalityOption::Orthogonal);
        tool.barrier_features = vec!["roads.shp".to_string(), "rivers.shp".to_string()];
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "AggregatePolygons_cartography buildings.shp built_up.shp \"10 Meters\" \"1000 SquareMeters\" # ORTHOGONAL roads.shp;rivers.shp"
        );
    }

    #[test]
    fn test_orthogonality_from_text() {
        let mut tool = AggregatePolygons::default();
        tool.set_parameter("orthogonality_option", "orthogonal").unwrap();
        assert_eq!(tool.orthogonality_option, Some(OrthogonalityOption::Orthogonal));
        assert!(tool.set_parameter("orthogonality_option", "SQUARE").is_err());
        tool.set_parameter("orthogonality_option", "#").unwrap();
        assert_eq!(tool.orthogonality_option, None);
    }
}
