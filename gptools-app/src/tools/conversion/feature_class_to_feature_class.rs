/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 14/09/2026
Last Modified: 03/10/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

/// Converts a shapefile, coverage feature class, or geodatabase feature
/// class to a shapefile or geodatabase feature class.
///
/// The output location (`out_path`) and name (`out_name`) are given
/// separately; the engine reports the full output path as a derived value.
///
/// # See Also
/// `TableToTable`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureClassToFeatureClass {
    pub in_features: String,
    pub out_path: String,
    pub out_name: String,
    pub where_clause: Option<String>,
    pub field_mapping: Option<String>,
    pub config_keyword: Option<String>,
}

impl FeatureClassToFeatureClass {
    pub fn new(in_features: &str, out_path: &str, out_name: &str) -> FeatureClassToFeatureClass {
        FeatureClassToFeatureClass {
            in_features: in_features.to_string(),
            out_path: out_path.to_string(),
            out_name: out_name.to_string(),
            ..Default::default()
        }
    }
}

impl GpTool for FeatureClassToFeatureClass {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "FeatureClassToFeatureClass".to_string()
    }

    fn get_display_name(&self) -> String {
        "Feature Class To Feature Class".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Converts a shapefile, coverage feature class, or geodatabase feature class to a shapefile or geodatabase feature class.".to_string()
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
            description: "The feature class or feature layer to be converted.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_path".to_owned(),
            display_name: "Output Location".to_owned(),
            description: "The location in which the output feature class will be created.".to_owned(),
            parameter_type: ParameterType::Workspace,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_name".to_owned(),
            display_name: "Output Feature Class".to_owned(),
            description: "The name of the output feature class.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
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

        parameters.push(ToolParameter {
            name: "field_mapping".to_owned(),
            display_name: "Field Map".to_owned(),
            description: "The fields and field contents chosen from the input.".to_owned(),
            parameter_type: ParameterType::FieldMappings,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "config_keyword".to_owned(),
            display_name: "Configuration Keyword".to_owned(),
            description: "Specifies the default storage parameters for an enterprise geodatabase.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_feature_class".to_owned(),
            display_name: "Output Feature Class".to_owned(),
            description: "The full path of the created feature class.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
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
            GpValue::from(&self.out_path),
            GpValue::from(&self.out_name),
            GpValue::from(self.where_clause.clone()),
            GpValue::from(self.field_mapping.clone()),
            GpValue::from(self.config_keyword.clone()),
            GpValue::Empty,
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        let mut envs = feature_environments();
        envs.push(EnvironmentSetting::TransferDomains);
        envs.push(EnvironmentSetting::MaintainAttachments);
        envs
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_features" => self.in_features = parse_optional_string(value).unwrap_or_default(),
            "out_path" => self.out_path = parse_optional_string(value).unwrap_or_default(),
            "out_name" => self.out_name = parse_optional_string(value).unwrap_or_default(),
            "where_clause" => self.where_clause = parse_optional_string(value),
            "field_mapping" => self.field_mapping = parse_optional_string(value),
            "config_keyword" => self.config_keyword = parse_optional_string(value),
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
    fn test_export_with_where_clause() {
        let mut tool = FeatureClassToFeatureClass::new("roads.shp", "C:/data/city.gdb", "major_roads");
        tool.where_clause = Some("CLASS = 'A'".to_string());
        let mut envs = EnvironmentSettings::new();
        envs.set(EnvironmentSetting::ConfigKeyword, "DEFAULTS");
        envs.set(EnvironmentSetting::CellSize, "10");
        let request = ExecuteRequest::from_tool(&tool, &envs).unwrap();
        assert_eq!(request.parameters.len(), 6);
        assert_eq!(request.environments.len(), 1);
        assert_eq!(
            request.to_command_string(),
            "FeatureClassToFeatureClass_conversion roads.shp C:/data/city.gdb major_roads \"CLASS = 'A'\""
        );
    }
}
