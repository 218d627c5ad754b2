/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 16/09/2026
Last Modified: 08/10/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    /// The database management system hosting the geodatabase.
    pub enum DatabasePlatform {
        SqlServer => "SQL_Server",
        Oracle => "Oracle",
        PostgreSql => "PostgreSQL",
    }
}

coded_value_enum! {
    pub enum AccountAuthentication {
        DatabaseAuth => "DATABASE_AUTH",
        OperatingSystemAuth => "OPERATING_SYSTEM_AUTH",
    }
}

coded_value_enum! {
    /// The schema owning the geodatabase repository; SQL Server only.
    pub enum SdeSchema {
        SdeSchema => "SDE_SCHEMA",
        DboSchema => "DBO_SCHEMA",
    }
}

/// Creates a database and storage locations and a database user to be used
/// as the geodatabase administrator in Oracle, PostgreSQL, or SQL Server,
/// then creates the geodatabase in that database.
///
/// Passwords are sent as given; the engine treats them as encrypted
/// strings. The authorization file is the last positional parameter even
/// though it is required.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateEnterpriseGeodatabase {
    pub database_platform: Option<DatabasePlatform>,
    pub instance_name: String,
    pub database_name: Option<String>,
    pub account_authentication: Option<AccountAuthentication>,
    pub database_admin: Option<String>,
    pub database_admin_password: Option<String>,
    pub sde_schema: Option<SdeSchema>,
    pub gdb_admin_name: Option<String>,
    pub gdb_admin_password: Option<String>,
    pub tablespace_name: Option<String>,
    pub authorization_file: String,
}

impl CreateEnterpriseGeodatabase {
    pub fn new(
        database_platform: DatabasePlatform,
        instance_name: &str,
        authorization_file: &str,
    ) -> CreateEnterpriseGeodatabase {
        CreateEnterpriseGeodatabase {
            database_platform: Some(database_platform),
            instance_name: instance_name.to_string(),
            authorization_file: authorization_file.to_string(),
            ..Default::default()
        }
    }
}

impl GpTool for CreateEnterpriseGeodatabase {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "CreateEnterpriseGeodatabase".to_string()
    }

    fn get_display_name(&self) -> String {
        "Create Enterprise Geodatabase".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Creates a database, storage locations, and a geodatabase administrator user, then creates a geodatabase in that database.".to_string()
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
            name: "database_platform".to_owned(),
            display_name: "Database Platform".to_owned(),
            description: "Specifies the type of database management system to which a connection will be made.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::CodedValues(DatabasePlatform::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "instance_name".to_owned(),
            display_name: "Instance".to_owned(),
            description: "The database instance, e.g. the SQL Server instance name or the PostgreSQL server name.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "database_name".to_owned(),
            display_name: "Database".to_owned(),
            description: "The name of the database to be created; not used for Oracle.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "account_authentication".to_owned(),
            display_name: "Operating System Authentication".to_owned(),
            description: "Specifies the type of authorization used for the database connection.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(AccountAuthentication::DatabaseAuth.to_string()),
            domain: Some(Domain::CodedValues(AccountAuthentication::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "database_admin".to_owned(),
            display_name: "Database Administrator".to_owned(),
            description: "The database administrator user.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "database_admin_password".to_owned(),
            display_name: "Database Administrator Password".to_owned(),
            description: "The password for the database administrator.".to_owned(),
            parameter_type: ParameterType::EncryptedString,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "sde_schema".to_owned(),
            display_name: "Sde Owned Schema".to_owned(),
            description: "Specifies whether the geodatabase is created in the schema of the sde user or the dbo schema.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(SdeSchema::SdeSchema.to_string()),
            domain: Some(Domain::CodedValues(SdeSchema::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "gdb_admin_name".to_owned(),
            display_name: "Geodatabase Administrator".to_owned(),
            description: "The name of the geodatabase administrator user.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some("sde".to_owned()),
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "gdb_admin_password".to_owned(),
            display_name: "Geodatabase Administrator Password".to_owned(),
            description: "The password for the geodatabase administrator user.".to_owned(),
            parameter_type: ParameterType::EncryptedString,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "tablespace_name".to_owned(),
            display_name: "Tablespace Name".to_owned(),
            description: "The tablespace for the geodatabase administrator; Oracle and PostgreSQL only.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "authorization_file".to_owned(),
            display_name: "Authorization File".to_owned(),
            description: "The keycodes file created when ArcGIS Server Enterprise was authorized.".to_owned(),
            parameter_type: ParameterType::File,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(self.database_platform),
            GpValue::from(&self.instance_name),
            GpValue::from(self.database_name.clone()),
            GpValue::from(self.account_authentication),
            GpValue::from(self.database_admin.clone()),
            GpValue::from(self.database_admin_password.clone()),
            GpValue::from(self.sde_schema),
            GpValue::from(self.gdb_admin_name.clone()),
            GpValue::from(self.gdb_admin_password.clone()),
            GpValue::from(self.tablespace_name.clone()),
            GpValue::from(&self.authorization_file),
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        vec![]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "database_platform" => self.database_platform = parse_optional(name, value)?,
            "instance_name" => self.instance_name = parse_optional_string(value).unwrap_or_default(),
            "database_name" => self.database_name = parse_optional_string(value),
            "account_authentication" => self.account_authentication = parse_optional(name, value)?,
            "database_admin" => self.database_admin = parse_optional_string(value),
            "database_admin_password" => self.database_admin_password = parse_optional_string(value),
            "sde_schema" => self.sde_schema = parse_optional(name, value)?,
            "gdb_admin_name" => self.gdb_admin_name = parse_optional_string(value),
            "gdb_admin_password" => self.gdb_admin_password = parse_optional_string(value),
            "tablespace_name" => self.tablespace_name = parse_optional_string(value),
            "authorization_file" => {
                self.authorization_file = parse_optional_string(value).unwrap_or_default()
            }
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
    fn test_postgresql_geodatabase() {
        let mut tool = CreateEnterpriseGeodatabase::new(
            DatabasePlatform::PostgreSql,
            "dbserver",
            "/keycodes/keycodes",
        );
        tool.database_name = Some("gisdata".to_string());
        tool.database_admin = Some("postgres".to_string());
        tool.gdb_admin_name = Some("sde".to_string());
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "CreateEnterpriseGeodatabase_management PostgreSQL dbserver gisdata # postgres # # sde # # /keycodes/keycodes"
        );
    }

    #[test]
    fn test_authorization_file_is_required() {
        let tool = CreateEnterpriseGeodatabase::new(DatabasePlatform::Oracle, "orcl", "");
        assert!(matches!(
            tool.validate(),
            Err(GpError::MissingParameter(p)) if p == "authorization_file"
        ));
    }

    #[test]
    fn test_platform_tokens_are_mixed_case() {
        assert_eq!(DatabasePlatform::SqlServer.as_str(), "SQL_Server");
        assert_eq!(
            "sql_server".parse::<DatabasePlatform>().unwrap(),
            DatabasePlatform::SqlServer
        );
    }
}
