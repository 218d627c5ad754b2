/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 09/09/2026
Last Modified: 27/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    /// Which attributes of the inputs are transferred to the output.
    pub enum JoinAttributes {
        All => "ALL",
        NoFid => "NO_FID",
        OnlyFid => "ONLY_FID",
    }
}

coded_value_enum! {
    /// The geometry type of the intersections returned.
    pub enum OutputType {
        Input => "INPUT",
        Line => "LINE",
        Point => "POINT",
    }
}

/// Computes a geometric intersection of the input features. Features or
/// portions of features that overlap in all layers are written to the
/// output feature class.
///
/// Each input is a row of the `in_features` value table holding the feature
/// layer and an optional priority rank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Intersect {
    pub in_features: ValueTable,
    pub out_feature_class: String,
    pub join_attributes: Option<JoinAttributes>,
    pub cluster_tolerance: Option<LinearUnit>,
    pub output_type: Option<OutputType>,
}

impl Intersect {
    pub fn new(in_features: &[&str], out_feature_class: &str) -> Intersect {
        let mut table = ValueTable::new();
        for f in in_features {
            table.add_row(vec![f.to_string()]);
        }
        Intersect {
            in_features: table,
            out_feature_class: out_feature_class.to_string(),
            ..Default::default()
        }
    }

    /// Adds an input with a priority rank; lower ranks move less when
    /// coordinates are clustered.
    pub fn add_ranked_input(&mut self, features: &str, rank: i64) {
        self.in_features
            .add_row(vec![features.to_string(), rank.to_string()]);
    }
}

impl GpTool for Intersect {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "Intersect".to_string()
    }

    fn get_display_name(&self) -> String {
        "Intersect".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Computes a geometric intersection of the input features.".to_string()
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
            description: "A list of the input feature classes or layers, each with an optional rank.".to_owned(),
            parameter_type: ParameterType::ValueTable,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_feature_class".to_owned(),
            display_name: "Output Feature Class".to_owned(),
            description: "The output feature class.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "join_attributes".to_owned(),
            display_name: "Attributes To Join".to_owned(),
            description: "Specifies which attributes from the input features will be transferred to the output.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(JoinAttributes::All.to_string()),
            domain: Some(Domain::CodedValues(JoinAttributes::tokens())),
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

        parameters.push(ToolParameter {
            name: "output_type".to_owned(),
            display_name: "Output Type".to_owned(),
            description: "Specifies the type of intersections that will be returned.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(OutputType::Input.to_string()),
            domain: Some(Domain::CodedValues(OutputType::tokens())),
            multi_value: false,
        });
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(self.in_features.clone()),
            GpValue::from(&self.out_feature_class),
            GpValue::from(self.join_attributes),
            GpValue::from(self.cluster_tolerance),
            GpValue::from(self.output_type),
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        feature_environments()
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_features" => {
                self.in_features = parse_optional::<ValueTable>(name, value)?.unwrap_or_default()
            }
            "out_feature_class" => {
                self.out_feature_class = parse_optional_string(value).unwrap_or_default()
            }
            "join_attributes" => self.join_attributes = parse_optional(name, value)?,
            "cluster_tolerance" => self.cluster_tolerance = parse_optional(name, value)?,
            "output_type" => self.output_type = parse_optional(name, value)?,
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
    fn test_ranked_inputs() {
        let mut tool = Intersect::new(&["soils.shp"], "soil_parcels.shp");
        tool.add_ranked_input("parcels.shp", 2);
        tool.output_type = Some(OutputType::Line);
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "Intersect_analysis \"soils.shp;parcels.shp 2\" soil_parcels.shp # # LINE"
        );
    }

    #[test]
    fn test_inputs_from_text() {
        let mut tool = Intersect::default();
        tool.set_parameter("in_features", "'My Soils.shp' 1;parcels.shp 2").unwrap();
        assert_eq!(tool.in_features.rows.len(), 2);
        assert_eq!(tool.in_features.rows[0], vec!["My Soils.shp", "1"]);
    }
}
