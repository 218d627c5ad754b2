/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 16/09/2026
Last Modified: 16/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

/// Compresses an enterprise geodatabase by removing states not referenced
/// by a version and redundant rows.
///
/// The workspace must be a connection file for the geodatabase
/// administrator. No environment settings apply.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compress {
    pub in_workspace: String,
}

impl Compress {
    pub fn new(in_workspace: &str) -> Compress {
        Compress {
            in_workspace: in_workspace.to_string(),
        }
    }
}

impl GpTool for Compress {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "Compress".to_string()
    }

    fn get_display_name(&self) -> String {
        "Compress".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Compresses an enterprise geodatabase by removing states not referenced by a version and redundant rows.".to_string()
    }

    fn get_toolbox(&self) -> String {
        TOOLBOX.to_string()
    }

    fn get_toolbox_alias(&self) -> String {
        TOOLBOX_ALIAS.to_string()
    }

    fn get_parameter_info(&self) -> Vec<ToolParameter> {
        vec![
            ToolParameter {
                name: "in_workspace".to_owned(),
                display_name: "Input Database Connection".to_owned(),
                description: "The database connection (.sde) to the enterprise geodatabase that will be compressed.".to_owned(),
                parameter_type: ParameterType::Workspace,
                direction: Direction::Input,
                kind: ParameterKind::Required,
                default_value: None,
                domain: None,
                multi_value: false,
            },
            ToolParameter {
                name: "out_workspace".to_owned(),
                display_name: "Updated Input Database Connection".to_owned(),
                description: "The compressed geodatabase.".to_owned(),
                parameter_type: ParameterType::Workspace,
                direction: Direction::Output,
                kind: ParameterKind::Derived,
                default_value: None,
                domain: None,
                multi_value: false,
            },
        ]
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![GpValue::from(&self.in_workspace), GpValue::Empty]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        vec![]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_workspace" => self.in_workspace = parse_optional_string(value).unwrap_or_default(),
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
    fn test_no_environments_sent() {
        let tool = Compress::new("C:/connections/gdb_admin.sde");
        let mut envs = EnvironmentSettings::new();
        envs.set(EnvironmentSetting::Workspace, "C:/data");
        let request = ExecuteRequest::from_tool(&tool, &envs).unwrap();
        assert!(request.environments.is_empty());
        assert_eq!(
            request.to_command_string(),
            "Compress_management C:/connections/gdb_admin.sde"
        );
    }
}
