/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 17/09/2026
Last Modified: 17/09/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    /// Who may view and edit the new version.
    pub enum AccessPermission {
        Private => "PRIVATE",
        Public => "PUBLIC",
        Protected => "PROTECTED",
    }
}

/// Creates a branch or traditional version in an enterprise geodatabase.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateVersion {
    pub in_workspace: String,
    pub parent_version: String,
    pub version_name: String,
    pub access_permission: Option<AccessPermission>,
}

impl CreateVersion {
    pub fn new(in_workspace: &str, parent_version: &str, version_name: &str) -> CreateVersion {
        CreateVersion {
            in_workspace: in_workspace.to_string(),
            parent_version: parent_version.to_string(),
            version_name: version_name.to_string(),
            access_permission: None,
        }
    }
}

impl GpTool for CreateVersion {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "CreateVersion".to_string()
    }

    fn get_display_name(&self) -> String {
        "Create Version".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Creates a branch or traditional version in an enterprise geodatabase.".to_string()
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
            name: "in_workspace".to_owned(),
            display_name: "Input Workspace".to_owned(),
            description: "The enterprise geodatabase that contains the parent version.".to_owned(),
            parameter_type: ParameterType::Workspace,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "parent_version".to_owned(),
            display_name: "Parent Version".to_owned(),
            description: "The version from which the new version will be created.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: Some("sde.DEFAULT".to_owned()),
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "version_name".to_owned(),
            display_name: "Version Name".to_owned(),
            description: "The name of the version that will be created.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "access_permission".to_owned(),
            display_name: "Access Permission".to_owned(),
            description: "Specifies the permission access level for the version.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(AccessPermission::Private.to_string()),
            domain: Some(Domain::CodedValues(AccessPermission::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_workspace".to_owned(),
            display_name: "Updated Workspace".to_owned(),
            description: "The workspace containing the new version.".to_owned(),
            parameter_type: ParameterType::Workspace,
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
            GpValue::from(&self.in_workspace),
            GpValue::from(&self.parent_version),
            GpValue::from(&self.version_name),
            GpValue::from(self.access_permission),
            GpValue::Empty,
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        vec![]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_workspace" => self.in_workspace = parse_optional_string(value).unwrap_or_default(),
            "parent_version" => {
                self.parent_version = parse_optional_string(value).unwrap_or_default()
            }
            "version_name" => self.version_name = parse_optional_string(value).unwrap_or_default(),
            "access_permission" => self.access_permission = parse_optional(name, value)?,
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
    fn test_public_version() {
        let mut tool = CreateVersion::new("editor.sde", "sde.DEFAULT", "parcel_edits");
        tool.access_permission = Some(AccessPermission::Public);
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "CreateVersion_management editor.sde sde.DEFAULT parcel_edits PUBLIC"
        );
    }
}
