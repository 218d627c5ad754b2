/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 10/09/2026
Last Modified: 15/10/2026
License: MIT
*/

use crate::tools::*;
use serde::{Deserialize, Serialize};

/// A tool described by a JSON file rather than compiled in, e.g. a script
/// tool from a custom toolbox. Values are held as text.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CustomTool {
    tool_name: String,
    display_name: String,
    toolbox: String,
    toolbox_alias: String,
    description: String,
    parameters: Vec<ToolParameter>,
    #[serde(default)]
    environments: Vec<String>,
    #[serde(skip)]
    values: Vec<GpValue>,
    #[serde(skip)]
    source_file: String,
}

impl CustomTool {
    pub fn from_file(path: &Path) -> Result<CustomTool, GpError> {
        let contents = fs::read_to_string(path)?;
        let mut tool: CustomTool = serde_json::from_str(&contents)?;
        tool.source_file = path.display().to_string();
        tool.reset_values();
        for env in &tool.environments {
            if env.parse::<EnvironmentSetting>().is_err() {
                warn!(tool = %tool.tool_name, environment = %env, "unknown environment setting ignored");
            }
        }
        Ok(tool)
    }

    fn reset_values(&mut self) {
        self.values = self
            .parameters
            .iter()
            .map(|p| match &p.default_value {
                Some(v) if p.kind == ParameterKind::Required => {
                    text_value(p, v).unwrap_or(GpValue::Empty)
                }
                _ => GpValue::Empty,
            })
            .collect();
    }
}

fn text_value(p: &ToolParameter, value: &str) -> Result<GpValue, GpError> {
    let value = match parse_optional_string(value) {
        Some(s) => s,
        None => return Ok(GpValue::Empty),
    };
    if p.parameter_type == ParameterType::ValueTable {
        Ok(GpValue::ValueTable(value.parse()?))
    } else if p.multi_value {
        Ok(GpValue::Multi(parse_multi(&value)))
    } else {
        Ok(GpValue::String(value))
    }
}

impl GpTool for CustomTool {
    fn get_source_file(&self) -> String {
        self.source_file.clone()
    }

    fn get_tool_name(&self) -> String {
        self.tool_name.clone()
    }

    fn get_display_name(&self) -> String {
        self.display_name.clone()
    }

    fn get_tool_description(&self) -> String {
        self.description.clone()
    }

    fn get_toolbox(&self) -> String {
        self.toolbox.clone()
    }

    fn get_toolbox_alias(&self) -> String {
        self.toolbox_alias.clone()
    }

    fn get_parameter_info(&self) -> Vec<ToolParameter> {
        self.parameters.clone()
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        self.values.clone()
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        self.environments
            .iter()
            .filter_map(|e| e.parse::<EnvironmentSetting>().ok())
            .collect()
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        let index = self
            .parameters
            .iter()
            .position(|p| !p.is_derived() && p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| unrecognized_parameter(&self.tool_name, name))?;
        self.values[index] = text_value(&self.parameters[index], value)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::geoprocessor::ExecuteRequest;

    pub(crate) const DESCRIPTOR: &str = r#"{
    "tool_name": "CountTrees",
    "display_name": "Count Trees",
    "toolbox": "Forestry Tools",
    "toolbox_alias": "forestry",
    "description": "Counts tree crowns within stand polygons.",
    "parameters": [
        {
            "name": "in_stands",
            "display_name": "Input Stands",
            "description": "Stand polygons.",
            "parameter_type": "GPFeatureLayer",
            "direction": "Input",
            "kind": "Required",
            "default_value": null,
            "domain": {"GeometryTypes": ["Polygon"]}
        },
        {
            "name": "in_crowns",
            "display_name": "Input Crowns",
            "description": "",
            "parameter_type": "GPFeatureLayer",
            "direction": "Input",
            "kind": "Required",
            "default_value": null,
            "multi_value": true
        },
        {
            "name": "method",
            "display_name": "Method",
            "description": "",
            "parameter_type": "GPString",
            "direction": "Input",
            "kind": "Optional",
            "default_value": "CENTROID",
            "domain": {"CodedValues": ["CENTROID", "INTERSECT"]}
        },
        {
            "name": "out_table",
            "display_name": "Output Table",
            "description": "",
            "parameter_type": "GPTableView",
            "direction": "Output",
            "kind": "Derived",
            "default_value": null
        }
    ],
    "environments": ["workspace", "extent", "notAnEnvironment"]
}"#;

    fn tool() -> CustomTool {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("count_trees.json");
        fs::write(&path, DESCRIPTOR).unwrap();
        CustomTool::from_file(&path).unwrap()
    }

    #[test]
    fn test_metadata() {
        let t = tool();
        assert_eq!(t.get_execute_name(), "CountTrees_forestry");
        assert_eq!(t.get_parameter_info().len(), 4);
        assert_eq!(t.get_parameter_values().len(), 4);
        assert_eq!(
            t.get_environments(),
            vec![EnvironmentSetting::Workspace, EnvironmentSetting::Extent]
        );
        assert!(t.get_source_file().ends_with("count_trees.json"));
    }

    #[test]
    fn test_set_and_validate() {
        let mut t = tool();
        assert!(matches!(t.validate(), Err(GpError::MissingParameter(_))));
        t.set_parameter("in_stands", "stands.shp").unwrap();
        t.set_parameter("IN_CROWNS", "crowns_a.shp;crowns_b.shp").unwrap();
        t.validate().unwrap();

        t.set_parameter("method", "NEAREST").unwrap();
        assert!(matches!(t.validate(), Err(GpError::InvalidValue { .. })));
        t.set_parameter("method", "intersect").unwrap();
        t.validate().unwrap();

        assert!(matches!(
            t.set_parameter("out_table", "x"),
            Err(GpError::UnrecognizedParameter { .. })
        ));
    }

    #[test]
    fn test_request() {
        let mut t = tool();
        t.set_parameter("in_stands", "stands.shp").unwrap();
        t.set_parameter("in_crowns", "crowns_a.shp;crowns_b.shp").unwrap();
        let request = ExecuteRequest::from_tool(&t, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "CountTrees_forestry stands.shp crowns_a.shp;crowns_b.shp"
        );
    }

    #[test]
    fn test_value_table_parameter_keeps_cells() {
        let descriptor = DESCRIPTOR.replacen(
            r#""parameter_type": "GPFeatureLayer",
            "direction": "Input",
            "kind": "Required",
            "default_value": null,
            "multi_value": true"#,
            r#""parameter_type": "GPValueTable",
            "direction": "Input",
            "kind": "Required",
            "default_value": null"#,
            1,
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("count_trees.json");
        fs::write(&path, descriptor).unwrap();
        let mut t = CustomTool::from_file(&path).unwrap();
        assert_eq!(t.get_parameter_info()[1].parameter_type, ParameterType::ValueTable);

        t.set_parameter("in_stands", "stands.shp").unwrap();
        t.set_parameter("in_crowns", "POP SUM;AREA MEAN").unwrap();
        let request = ExecuteRequest::from_tool(&t, &EnvironmentSettings::new()).unwrap();
        assert_eq!(request.parameters[1].value.as_deref(), Some("POP SUM;AREA MEAN"));
        assert_eq!(
            request.to_command_string(),
            "CountTrees_forestry stands.shp \"POP SUM;AREA MEAN\""
        );
    }

    #[test]
    fn test_malformed_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"tool_name": "Broken"}"#).unwrap();
        assert!(matches!(CustomTool::from_file(&path), Err(GpError::Json(_))));
    }
}
