/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 08/09/2026
Last Modified: 15/10/2026
License: MIT
*/

//! Serializes tool descriptors into execution requests and hands them to a
//! geoprocessor.

use crate::tools::GpTool;
use gptools_common::environments::EnvironmentSettings;
use gptools_common::errors::GpError;
use gptools_common::utils::{get_formatted_elapsed_time, python_string_literal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::process::Command;
use std::time::Instant;
use tracing::{debug, warn};

/// One positional value of a request. `None` leaves the engine default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParameterValue {
    pub name: String,
    pub value: Option<String>,
}

/// A validated, serialized tool invocation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExecuteRequest {
    pub tool_name: String,
    pub execute_name: String,
    pub toolbox_alias: String,
    pub parameters: Vec<ParameterValue>,
    pub environments: BTreeMap<String, String>,
}

impl ExecuteRequest {
    /// Validates the tool and captures its values. Derived outputs are not
    /// sent, and only the environments the tool honors are kept.
    pub fn from_tool(
        tool: &dyn GpTool,
        environments: &EnvironmentSettings,
    ) -> Result<ExecuteRequest, GpError> {
        tool.validate()?;
        let parameters = tool
            .get_parameter_info()
            .iter()
            .zip(tool.get_parameter_values().iter())
            .filter(|(p, _)| !p.is_derived())
            .map(|(p, v)| ParameterValue {
                name: p.name.clone(),
                value: v.to_gp_string(),
            })
            .collect();
        Ok(ExecuteRequest {
            tool_name: tool.get_tool_name(),
            execute_name: tool.get_execute_name(),
            toolbox_alias: tool.get_toolbox_alias(),
            parameters,
            environments: environments.applicable_to(&tool.get_environments()),
        })
    }

    pub fn to_json(&self) -> Result<String, GpError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Positional values with trailing unset values removed.
    fn positional_values(&self) -> Vec<Option<&str>> {
        let mut values: Vec<Option<&str>> = self
            .parameters
            .iter()
            .map(|p| p.value.as_deref())
            .collect();
        while let Some(None) = values.last() {
            values.pop();
        }
        values
    }

    /// The command-line form, e.g.
    /// `Buffer_analysis roads.shp roads_buf.shp "100 Feet" # # ALL`.
    pub fn to_command_string(&self) -> String {
        let mut s = self.execute_name.clone();
        for v in self.positional_values() {
            s.push(' ');
            match v {
                Some(v) if v.contains(' ') || v.contains('"') => {
                    s.push_str(&format!("\"{}\"", v.replace('"', "\\\"")))
                }
                Some(v) => s.push_str(v),
                None => s.push('#'),
            }
        }
        s
    }

    /// A Python snippet that applies the environments and runs the tool with
    /// arcpy, printing the tool messages.
    pub fn to_arcpy_script(&self) -> String {
        let mut s = String::from("import arcpy\n");
        for (name, value) in &self.environments {
            s.push_str(&format!(
                "arcpy.env.{} = {}\n",
                name,
                python_string_literal(value)
            ));
        }
        let args: Vec<String> = self
            .positional_values()
            .iter()
            .map(|v| python_string_literal(v.unwrap_or("#")))
            .collect();
        s.push_str(&format!(
            "result = arcpy.{}({})\n",
            self.execute_name,
            args.join(", ")
        ));
        s.push_str("print(result.getMessages())\n");
        s
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteResult {
    pub execute_name: String,
    pub messages: Vec<String>,
    pub elapsed: String,
}

/// Runs execution requests against a geoprocessing engine.
pub trait Geoprocessor {
    fn execute(&self, request: &ExecuteRequest) -> Result<ExecuteResult, GpError>;
}

/// Runs requests through arcpy in a child Python process.
#[derive(Debug, Clone)]
pub struct ArcpyGeoprocessor {
    python_executable: String,
}

impl ArcpyGeoprocessor {
    pub fn new(python_executable: &str) -> ArcpyGeoprocessor {
        ArcpyGeoprocessor {
            python_executable: python_executable.to_string(),
        }
    }
}

impl Geoprocessor for ArcpyGeoprocessor {
    fn execute(&self, request: &ExecuteRequest) -> Result<ExecuteResult, GpError> {
        let script = request.to_arcpy_script();
        debug!(python = %self.python_executable, %script, "running arcpy");
        let start = Instant::now();
        let output = Command::new(&self.python_executable)
            .arg("-c")
            .arg(&script)
            .output()?;

        let mut messages: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.to_string())
            .collect();
        if !output.status.success() {
            messages.extend(
                String::from_utf8_lossy(&output.stderr)
                    .lines()
                    .filter(|l| !l.trim().is_empty())
                    .map(|l| l.to_string()),
            );
            warn!(tool = %request.execute_name, status = %output.status, "tool failed");
            return Err(GpError::ExecutionFailed {
                tool: request.execute_name.clone(),
                messages: messages.join("\n"),
            });
        }
        Ok(ExecuteResult {
            execute_name: request.execute_name.clone(),
            messages,
            elapsed: get_formatted_elapsed_time(start),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::analysis::{Buffer, DissolveOption};
    use crate::tools::cartography::AggregatePoints;
    use crate::tools::data_management::{AddField, FieldDataType};
    use gptools_common::environments::EnvironmentSetting;
    use gptools_common::values::{LinearUnit, LinearUnitType};

    fn aggregate_points() -> AggregatePoints {
        AggregatePoints::new(
            "C:/data/stores.shp",
            "C:/data/store clusters.shp",
            LinearUnit::new(500.0, LinearUnitType::Meters),
        )
    }

    #[test]
    fn test_request_values_in_order() {
        let request =
            ExecuteRequest::from_tool(&aggregate_points(), &EnvironmentSettings::new()).unwrap();
        assert_eq!(request.execute_name, "AggregatePoints_cartography");
        assert_eq!(request.toolbox_alias, "cartography");
        let names: Vec<&str> = request.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["in_features", "out_feature_class", "aggregation_distance"]);
        assert_eq!(request.parameters[2].value.as_deref(), Some("500 Meters"));
    }

    #[test]
    fn test_request_filters_environments() {
        let mut envs = EnvironmentSettings::new();
        envs.set(EnvironmentSetting::Workspace, "C:/data");
        envs.set(EnvironmentSetting::CellSize, "30");
        envs.set(EnvironmentSetting::ReferenceScale, "24000");
        let request = ExecuteRequest::from_tool(&aggregate_points(), &envs).unwrap();
        assert_eq!(request.environments.len(), 2);
        assert!(request.environments.contains_key("workspace"));
        assert!(request.environments.contains_key("referenceScale"));
    }

    #[test]
    fn test_request_rejects_invalid_tool() {
        let tool = AggregatePoints::default();
        assert!(matches!(
            ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()),
            Err(GpError::MissingParameter(_))
        ));
    }

    #[test]
    fn test_derived_outputs_are_not_sent() {
        let tool = AddField::new("parcels.shp", "ZONE", FieldDataType::Text);
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert!(request.parameters.iter().all(|p| p.name != "out_table"));
        assert_eq!(request.to_command_string(), "AddField_management parcels.shp ZONE TEXT");
    }

    #[test]
    fn test_command_string_marks_skipped_values() {
        let mut tool = Buffer::new("roads.shp", "roads_buf.shp", "100 Feet");
        tool.dissolve_option = Some(DissolveOption::All);
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "Buffer_analysis roads.shp roads_buf.shp \"100 Feet\" # # ALL"
        );
    }

    #[test]
    fn test_arcpy_script() {
        let mut envs = EnvironmentSettings::new();
        envs.set(EnvironmentSetting::Workspace, r"C:\data");
        let request = ExecuteRequest::from_tool(&aggregate_points(), &envs).unwrap();
        let script = request.to_arcpy_script();
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[0], "import arcpy");
        assert_eq!(lines[1], r#"arcpy.env.workspace = "C:\\data""#);
        assert_eq!(
            lines[2],
            r#"result = arcpy.AggregatePoints_cartography("C:/data/stores.shp", "C:/data/store clusters.shp", "500 Meters")"#
        );
        assert_eq!(lines[3], "print(result.getMessages())");
    }

    #[test]
    fn test_json() {
        let request =
            ExecuteRequest::from_tool(&aggregate_points(), &EnvironmentSettings::new()).unwrap();
        let json = request.to_json().unwrap();
        let back: ExecuteRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[cfg(unix)]
    #[test]
    fn test_arcpy_geoprocessor_exit_status() {
        let request =
            ExecuteRequest::from_tool(&aggregate_points(), &EnvironmentSettings::new()).unwrap();

        let result = ArcpyGeoprocessor::new("true").execute(&request).unwrap();
        assert_eq!(result.execute_name, "AggregatePoints_cartography");
        assert!(result.messages.is_empty());

        match ArcpyGeoprocessor::new("false").execute(&request) {
            Err(GpError::ExecutionFailed { tool, .. }) => {
                assert_eq!(tool, "AggregatePoints_cartography")
            }
            other => panic!("unexpected result {:?}", other),
        }

        assert!(matches!(
            ArcpyGeoprocessor::new("/no/such/python").execute(&request),
            Err(GpError::Io(_))
        ));
    }
}
