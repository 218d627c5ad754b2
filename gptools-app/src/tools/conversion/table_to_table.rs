/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 14/09/2026
Last Modified: 14/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

/// Exports the rows of a table or table view to a table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableToTable {
    pub in_rows: String,
    pub out_path: String,
    pub out_name: String,
    pub where_clause: Option<String>,
    pub field_mapping: Option<String>,
    pub config_keyword: Option<String>,
}

impl TableToTable {
    pub fn new(in_rows: &str, out_path: &str, out_name: &str) -> TableToTable {
        TableToTable {
            in_rows: in_rows.to_string(),
            out_path: out_path.to_string(),
            out_name: out_name.to_string(),
            ..Default::default()
        }
    }
}

impl GpTool for TableToTable {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "TableToTable".to_string()
    }

    fn get_display_name(&self) -> String {
        "Table To Table".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Exports the rows of a table or table view to a table.".to_string()
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
            name: "in_rows".to_owned(),
            display_name: "Input Rows".to_owned(),
            description: "The input table to be exported to a new table.".to_owned(),
            parameter_type: ParameterType::TableView,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_path".to_owned(),
            display_name: "Output Location".to_owned(),
            description: "The destination where the output table will be written.".to_owned(),
            parameter_type: ParameterType::Workspace,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_name".to_owned(),
            display_name: "Output Table".to_owned(),
            description: "The name of the output table.".to_owned(),
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
            description: "An SQL expression used to select a subset of records.".to_owned(),
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
            description: "The fields and field contents chosen from the input table.".to_owned(),
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
            name: "out_table".to_owned(),
            display_name: "Output Table".to_owned(),
            description: "The full path of the created table.".to_owned(),
            parameter_type: ParameterType::Table,
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
            GpValue::from(&self.in_rows),
            GpValue::from(&self.out_path),
            GpValue::from(&self.out_name),
            GpValue::from(self.where_clause.clone()),
            GpValue::from(self.field_mapping.clone()),
            GpValue::from(self.config_keyword.clone()),
            GpValue::Empty,
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        let mut envs = general_environments();
        envs.extend_from_slice(&[
            EnvironmentSetting::ConfigKeyword,
            EnvironmentSetting::QualifiedFieldNames,
            EnvironmentSetting::TransferDomains,
        ]);
        envs
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_rows" => self.in_rows = parse_optional_string(value).unwrap_or_default(),
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
    fn test_table_to_table_parameter_order() {
        let mut tool = TableToTable::new("permits.csv", "C:/data/city.gdb", "permits");
        tool.config_keyword = Some("DEFAULTS".to_string());
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(request.parameters.len(), 6);
        assert_eq!(
            request.to_command_string(),
            "TableToTable_conversion permits.csv C:/data/city.gdb permits # # DEFAULTS"
        );
    }

    #[test]
    fn test_derived_output_cannot_be_set() {
        let mut tool = TableToTable::default();
        assert!(tool.set_parameter("out_table", "x").is_err());
        assert_eq!(tool.get_parameter_info().len(), 7);
        assert_eq!(tool.get_parameter_values().len(), 7);
    }
}
