/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 10/09/2026
Last Modified: 10/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

/// Extracts features from an input feature class or input feature layer,
/// typically using a select or Structured Query Language (SQL) expression,
/// and stores them in an output feature class.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    pub in_features: String,
    pub out_feature_class: String,
    pub where_clause: Option<String>,
}

impl Select {
    pub fn new(in_features: &str, out_feature_class: &str) -> Select {
        Select {
            in_features: in_features.to_string(),
            out_feature_class: out_feature_class.to_string(),
            where_clause: None,
        }
    }
}

impl GpTool for Select {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "Select".to_string()
    }

    fn get_display_name(&self) -> String {
        "Select".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Extracts features from an input feature class or input feature layer, typically using a select or SQL expression.".to_string()
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
            description: "The input feature class or layer from which features are selected.".to_owned(),
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
            description: "The output feature class to be created.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "where_clause".to_owned(),
            display_name: "Expression".to_owned(),
            description: "An SQL expression used to select a subset of features.".to_owned(),
            parameter_type: ParameterType::SqlExpression,
            direction: Direction::Input,
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
            GpValue::from(self.where_clause.clone()),
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
            "where_clause" => self.where_clause = parse_optional_string(value),
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
    fn test_select_parameter_order() {
        let mut tool = Select::new("parcels.shp", "large_parcels.shp");
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "Select_analysis parcels.shp large_parcels.shp"
        );

        tool.set_parameter("where_clause", "AREA > 5000").unwrap();
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "Select_analysis parcels.shp large_parcels.shp \"AREA > 5000\""
        );
    }
}
