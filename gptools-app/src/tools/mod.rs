/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 06/09/2026
Last Modified: 15/10/2026
License: MIT
*/

pub mod analysis;
pub mod business_analyst;
pub mod cartography;
pub mod conversion;
pub mod custom_tool;
pub mod data_management;
pub mod network_analyst;
pub mod spatial_analyst;

pub use self::custom_tool::CustomTool;

use crate::geoprocessor::{ExecuteRequest, ExecuteResult, Geoprocessor};
use gptools_common::coded_value_enum;
use gptools_common::environments::*;
use gptools_common::errors::GpError;
use gptools_common::parameters::*;
use gptools_common::utils::wrapped_text;
use gptools_common::values::*;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Default)]
pub struct ToolManager {
    pub working_dir: String,
    pub verbose: bool,
    tool_names: Vec<String>,
    custom_tools: BTreeMap<String, CustomTool>,
}

impl ToolManager {
    pub fn new(working_directory: &str, verbose: bool) -> Result<ToolManager, GpError> {
        let mut tool_names = vec![];
        // analysis
        tool_names.push("Buffer".to_string());
        tool_names.push("Clip".to_string());
        tool_names.push("Intersect".to_string());
        tool_names.push("Near".to_string());
        tool_names.push("Select".to_string());

        // business_analyst
        tool_names.push("DriveTimeTradeArea".to_string());

        // cartography
        tool_names.push("AggregatePoints".to_string());
        tool_names.push("AggregatePolygons".to_string());
        tool_names.push("CollapseDualLinesToCenterline".to_string());
        tool_names.push("SimplifyLine".to_string());
        tool_names.push("SimplifyPolygon".to_string());
        tool_names.push("SmoothLine".to_string());

        // conversion
        tool_names.push("FeatureClassToFeatureClass".to_string());
        tool_names.push("TableToTable".to_string());

        // data_management
        tool_names.push("AddField".to_string());
        tool_names.push("AddSpatialIndex".to_string());
        tool_names.push("Compress".to_string());
        tool_names.push("CreateEnterpriseGeodatabase".to_string());
        tool_names.push("CreateVersion".to_string());
        tool_names.push("Dissolve".to_string());

        // network_analyst
        tool_names.push("MakeServiceAreaLayer".to_string());

        // spatial_analyst
        tool_names.push("Hillshade".to_string());
        tool_names.push("Slope".to_string());

        let mut tm = ToolManager {
            working_dir: working_directory.to_string(),
            verbose,
            tool_names,
            custom_tools: BTreeMap::new(),
        };
        if let Some(dir) = default_custom_tool_directory() {
            if dir.is_dir() {
                tm.load_custom_tools(&dir)?;
            }
        }
        Ok(tm)
    }

    /// Loads every `*.json` custom tool descriptor in `dir`. Returns the
    /// number of tools loaded.
    pub fn load_custom_tools(&mut self, dir: &Path) -> Result<usize, GpError> {
        let mut count = 0;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let file_name = path
                .file_name()
                .map(|f| f.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if !file_name.ends_with(".json") || file_name.starts_with("._") {
                continue;
            }
            let tool = match CustomTool::from_file(&path) {
                Ok(tool) => tool,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid custom tool descriptor; ignored");
                    continue;
                }
            };
            let key = normalize_name(&tool.get_tool_name());
            if self.get_builtin_tool(&key).is_some() {
                warn!(tool = %tool.get_tool_name(), "custom tool shadows a built-in tool; ignored");
                continue;
            }
            debug!(tool = %tool.get_tool_name(), path = %path.display(), "loaded custom tool");
            self.custom_tools.insert(key, tool);
            count += 1;
        }
        info!(count, dir = %dir.display(), "custom tools loaded");
        Ok(count)
    }

    pub fn get_tool(&self, tool_name: &str) -> Option<Box<dyn GpTool>> {
        let key = normalize_name(tool_name);
        match self.get_builtin_tool(&key) {
            Some(tool) => Some(tool),
            None => self
                .custom_tools
                .get(&key)
                .map(|t| Box::new(t.clone()) as Box<dyn GpTool>),
        }
    }

    fn get_builtin_tool(&self, key: &str) -> Option<Box<dyn GpTool>> {
        match key {
            // analysis
            "buffer" => Some(Box::new(analysis::Buffer::default())),
            "clip" => Some(Box::new(analysis::Clip::default())),
            "intersect" => Some(Box::new(analysis::Intersect::default())),
            "near" => Some(Box::new(analysis::Near::default())),
            "select" => Some(Box::new(analysis::Select::default())),

            // business_analyst
            "drivetimetradearea" => Some(Box::new(business_analyst::DriveTimeTradeArea::default())),

            // cartography
            "aggregatepoints" => Some(Box::new(cartography::AggregatePoints::default())),
            "aggregatepolygons" => Some(Box::new(cartography::AggregatePolygons::default())),
            "collapseduallinestocenterline" => {
                Some(Box::new(cartography::CollapseDualLinesToCenterline::default()))
            }
            "simplifyline" => Some(Box::new(cartography::SimplifyLine::default())),
            "simplifypolygon" => Some(Box::new(cartography::SimplifyPolygon::default())),
            "smoothline" => Some(Box::new(cartography::SmoothLine::default())),

            // conversion
            "featureclasstofeatureclass" => {
                Some(Box::new(conversion::FeatureClassToFeatureClass::default()))
            }
            "tabletotable" => Some(Box::new(conversion::TableToTable::default())),

            // data_management
            "addfield" => Some(Box::new(data_management::AddField::default())),
            "addspatialindex" => Some(Box::new(data_management::AddSpatialIndex::default())),
            "compress" => Some(Box::new(data_management::Compress::default())),
            "createenterprisegeodatabase" => {
                Some(Box::new(data_management::CreateEnterpriseGeodatabase::default()))
            }
            "createversion" => Some(Box::new(data_management::CreateVersion::default())),
            "dissolve" => Some(Box::new(data_management::Dissolve::default())),

            // network_analyst
            "makeservicearealayer" => {
                Some(Box::new(network_analyst::MakeServiceAreaLayer::default()))
            }

            // spatial_analyst
            "hillshade" => Some(Box::new(spatial_analyst::Hillshade::default())),
            "slope" => Some(Box::new(spatial_analyst::Slope::default())),

            _ => None,
        }
    }

    fn require_tool(&self, tool_name: &str) -> Result<Box<dyn GpTool>, GpError> {
        self.get_tool(tool_name)
            .ok_or_else(|| GpError::UnrecognizedTool(tool_name.to_string()))
    }

    /// Names of every available tool, built-in and custom, sorted.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names = self.tool_names.clone();
        for tool in self.custom_tools.values() {
            names.push(tool.get_tool_name());
        }
        names.sort();
        names
    }

    pub fn tool_help(&self, tool_name: &str) -> Result<String, GpError> {
        if !tool_name.is_empty() {
            return Ok(get_help(self.require_tool(tool_name)?.as_ref()));
        }
        let mut ret = String::new();
        for (i, val) in self.tool_names().iter().enumerate() {
            let tool = self.require_tool(val)?;
            ret.push_str(&format!("{}. {}\n", i + 1, get_help(tool.as_ref())));
        }
        Ok(ret)
    }

    pub fn tool_parameters(&self, tool_name: &str) -> Result<String, GpError> {
        Ok(self.require_tool(tool_name)?.get_tool_parameters())
    }

    pub fn toolbox(&self, tool_name: &str) -> Result<String, GpError> {
        if !tool_name.is_empty() {
            return Ok(self.require_tool(tool_name)?.get_toolbox());
        }
        let mut tool_details: Vec<(String, String)> = Vec::new();
        for val in self.tool_names() {
            let tool = self.require_tool(&val)?;
            tool_details.push((val, tool.get_toolbox()));
        }
        tool_details.sort();
        let lines: Vec<String> = tool_details
            .iter()
            .map(|(tool, toolbox)| format!("{}: {}", tool, toolbox))
            .collect();
        Ok(lines.join("\n"))
    }

    /// The environment settings honored by a tool, one per line.
    pub fn environments(&self, tool_name: &str) -> Result<String, GpError> {
        let tool = self.require_tool(tool_name)?;
        let names: Vec<&str> = tool.get_environments().iter().map(|e| e.as_str()).collect();
        Ok(names.join("\n"))
    }

    pub fn list_tools(&self) -> String {
        let mut tool_details: Vec<(String, String)> = Vec::new();
        for val in self.tool_names() {
            if let Some(tool) = self.get_tool(&val) {
                tool_details.push(get_name_and_description(tool.as_ref()));
            }
        }
        tool_details.sort();

        let mut ret = format!("All {} Available Tools:\n", tool_details.len());
        for (name, description) in &tool_details {
            ret.push_str(&format!("{}: {}\n\n", name, description));
        }
        ret
    }

    pub fn list_tools_with_keywords(&self, keywords: &[String]) -> String {
        let mut tool_details: Vec<(String, String)> = Vec::new();
        for val in self.tool_names() {
            let tool = match self.get_tool(&val) {
                Some(t) => t,
                None => continue,
            };
            let toolbox = tool.get_toolbox().to_lowercase();
            let display_name = tool.get_display_name().to_lowercase();
            let (nm, des) = get_name_and_description(tool.as_ref());
            for kw in keywords {
                let kw = kw.to_lowercase();
                if nm.to_lowercase().contains(&kw)
                    || display_name.contains(&kw)
                    || des.to_lowercase().contains(&kw)
                    || toolbox.contains(&kw)
                {
                    tool_details.push((nm, des));
                    break;
                }
            }
        }

        let mut ret = format!("All {} Tools containing keywords:\n", tool_details.len());
        for (name, description) in &tool_details {
            ret.push_str(&format!("{}: {}\n\n", name, description));
        }
        ret
    }

    /// Builds the request for a tool from command-line style arguments.
    pub fn build_request(
        &self,
        tool_name: &str,
        args: &[String],
        environments: &EnvironmentSettings,
    ) -> Result<ExecuteRequest, GpError> {
        let mut tool = self.require_tool(tool_name)?;
        tool.parse_args(args)?;
        ExecuteRequest::from_tool(tool.as_ref(), environments)
    }

    pub fn run_tool(
        &self,
        tool_name: &str,
        args: &[String],
        environments: &EnvironmentSettings,
        geoprocessor: &dyn Geoprocessor,
    ) -> Result<ExecuteResult, GpError> {
        let request = self.build_request(tool_name, args, environments)?;
        info!(tool = %request.execute_name, "dispatching");
        geoprocessor.execute(&request)
    }
}

/// The client-side description of one geoprocessing tool invocation.
pub trait GpTool {
    fn get_tool_name(&self) -> String;
    fn get_display_name(&self) -> String;
    fn get_tool_description(&self) -> String;
    fn get_toolbox(&self) -> String;
    fn get_toolbox_alias(&self) -> String;
    fn get_source_file(&self) -> String;
    /// Parameter metadata, in the order the engine expects.
    fn get_parameter_info(&self) -> Vec<ToolParameter>;
    /// Current parameter values, parallel to `get_parameter_info`.
    fn get_parameter_values(&self) -> Vec<GpValue>;
    fn get_environments(&self) -> Vec<EnvironmentSetting>;
    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError>;

    fn get_execute_name(&self) -> String {
        format!("{}_{}", self.get_tool_name(), self.get_toolbox_alias())
    }

    fn get_tool_parameters(&self) -> String {
        let parameters = self.get_parameter_info();
        let mut s = String::from("{\"parameters\": [");
        for i in 0..parameters.len() {
            s.push_str(&(parameters[i].to_string()));
            if i < parameters.len() - 1 {
                s.push_str(",");
            }
        }
        s.push_str("]}");
        s
    }

    fn get_example_usage(&self) -> String {
        let mut s = format!(">>./gptools run {}", self.get_tool_name());
        for p in self.get_parameter_info() {
            if p.kind == ParameterKind::Required {
                s.push_str(&format!(" --{}={}", p.name, example_value(&p)));
            }
        }
        s
    }

    /// Sets parameters from `--name=value` or `--name value` arguments.
    fn parse_args(&mut self, args: &[String]) -> Result<(), GpError> {
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].trim();
            if !arg.starts_with('-') {
                return Err(GpError::invalid_value(
                    "argument",
                    arg,
                    "expected --name=value",
                ));
            }
            let arg = arg.trim_start_matches('-');
            let (name, value) = match arg.split_once('=') {
                Some((n, v)) => (n.to_string(), v.to_string()),
                None => {
                    i += 1;
                    match args.get(i) {
                        Some(v) => (arg.to_string(), v.clone()),
                        None => {
                            return Err(GpError::invalid_value(arg, "", "missing value"));
                        }
                    }
                }
            };
            self.set_parameter(name.trim(), strip_quotes(value.trim()))?;
            i += 1;
        }
        Ok(())
    }

    /// Checks that required parameters are set and values lie in their domains.
    fn validate(&self) -> Result<(), GpError> {
        let info = self.get_parameter_info();
        let values = self.get_parameter_values();
        if info.len() != values.len() {
            return Err(GpError::invalid_value(
                &self.get_tool_name(),
                &values.len().to_string(),
                format!("expected {} parameter values", info.len()),
            ));
        }
        for (p, v) in info.iter().zip(values.iter()) {
            if p.is_derived() {
                continue;
            }
            p.check(v)?;
        }
        Ok(())
    }
}

pub(crate) fn unrecognized_parameter(tool_name: &str, name: &str) -> GpError {
    GpError::UnrecognizedParameter {
        tool: tool_name.to_string(),
        parameter: name.to_string(),
    }
}

/// Removes one pair of matching surrounding quotes.
fn strip_quotes(value: &str) -> &str {
    for q in ['"', '\''] {
        if value.len() > 1 && value.starts_with(q) && value.ends_with(q) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn normalize_name(tool_name: &str) -> String {
    tool_name.trim().to_lowercase().replace("_", "")
}

fn default_custom_tool_directory() -> Option<PathBuf> {
    let mut dir = env::current_exe().ok()?;
    dir.pop();
    dir.push("custom_tools");
    Some(dir)
}

fn example_value(p: &ToolParameter) -> String {
    if let Some(Domain::CodedValues(codes)) = &p.domain {
        if let Some(code) = codes.first() {
            return code.clone();
        }
    }
    let input = p.direction == Direction::Input;
    match p.parameter_type {
        ParameterType::FeatureLayer | ParameterType::FeatureClass => {
            format!("{}.shp", if input { "input" } else { "output" })
        }
        ParameterType::TableView | ParameterType::Table => {
            format!("{}.dbf", if input { "input" } else { "output" })
        }
        ParameterType::RasterLayer | ParameterType::RasterDataset => {
            format!("{}.tif", if input { "input" } else { "output" })
        }
        ParameterType::Workspace => "data.gdb".to_string(),
        ParameterType::Folder => "*path*to*folder".to_string(),
        ParameterType::LinearUnit => "\"10 Meters\"".to_string(),
        ParameterType::ArealUnit => "\"100 SquareMeters\"".to_string(),
        ParameterType::Long => "1".to_string(),
        ParameterType::Double => "1.0".to_string(),
        ParameterType::Boolean => "true".to_string(),
        _ => p.name.clone(),
    }
}

fn get_help(wt: &dyn GpTool) -> String {
    let mut p = String::new();
    p.push_str("Flag                          Type                   Description\n");
    p.push_str("----------------------------  ---------------------  -----------\n");
    for d in wt.get_parameter_info() {
        let mut description = d.display_name.clone();
        if !d.description.is_empty() {
            description.push_str(&format!(". {}", d.description));
        }
        match d.kind {
            ParameterKind::Optional => description.push_str(" (optional)"),
            ParameterKind::Derived => description.push_str(" (derived)"),
            ParameterKind::Required => {}
        }
        if let Some(default) = &d.default_value {
            description.push_str(&format!(" Default: {}.", default));
        }
        if let Some(Domain::CodedValues(codes)) = &d.domain {
            description.push_str(&format!(" Options: {}.", codes.join(", ")));
        }
        p.push_str(&format!(
            "{:width$}  {:tw$}  {}\n",
            format!("--{}", d.name),
            d.parameter_type.data_type(),
            description,
            width = 28,
            tw = 21
        ));
    }
    format!(
        "{} ({})
Description:\n{}
Toolbox: {} ({})
Execute name: {}
Parameters:\n
{}
Example usage:
{}
",
        wt.get_display_name(),
        wt.get_tool_name(),
        wrapped_text(&wt.get_tool_description(), 80),
        wt.get_toolbox(),
        wt.get_toolbox_alias(),
        wt.get_execute_name(),
        p,
        wt.get_example_usage()
    )
}

fn get_name_and_description(wt: &dyn GpTool) -> (String, String) {
    (wt.get_tool_name(), wt.get_tool_description())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    fn manager() -> ToolManager {
        ToolManager::new("", false).unwrap()
    }

    #[test]
    fn test_every_registered_tool_resolves() {
        let tm = manager();
        for name in tm.tool_names() {
            let tool = tm.get_tool(&name).expect(&name);
            assert_eq!(tool.get_tool_name(), name);
        }
        assert_eq!(tm.tool_names().len(), 23);
    }

    #[test]
    fn test_parameter_lists_are_consistent() {
        let tm = manager();
        for name in tm.tool_names() {
            let tool = tm.get_tool(&name).unwrap();
            let info = tool.get_parameter_info();
            let values = tool.get_parameter_values();
            assert_eq!(info.len(), values.len(), "{}", name);
            let unique: HashSet<String> = info.iter().map(|p| p.name.clone()).collect();
            assert_eq!(unique.len(), info.len(), "{} has duplicate parameter names", name);
            let json: serde_json::Value =
                serde_json::from_str(&tool.get_tool_parameters()).unwrap();
            assert_eq!(json["parameters"].as_array().unwrap().len(), info.len());
        }
    }

    #[test]
    fn test_every_parameter_can_be_set_by_name() {
        let tm = manager();
        for name in tm.tool_names() {
            let mut tool = tm.get_tool(&name).unwrap();
            for p in tool.get_parameter_info() {
                if p.is_derived() {
                    assert!(tool.set_parameter(&p.name, "x").is_err(), "{}.{}", name, p.name);
                } else {
                    tool.set_parameter(&p.name, "#")
                        .or_else(|_| tool.set_parameter(&p.name, &example_value(&p).replace("\"", "")))
                        .unwrap_or_else(|e| panic!("{}.{}: {}", name, p.name, e));
                }
            }
        }
    }

    #[test]
    fn test_lookup_ignores_case_and_underscores() {
        let tm = manager();
        assert!(tm.get_tool("aggregate_points").is_some());
        assert!(tm.get_tool("SIMPLIFYLINE").is_some());
        assert!(tm.get_tool("NoSuchTool").is_none());
        assert!(matches!(
            tm.tool_parameters("NoSuchTool"),
            Err(GpError::UnrecognizedTool(_))
        ));
    }

    #[test]
    fn test_execute_names() {
        let tm = manager();
        let expected = [
            ("AggregatePoints", "AggregatePoints_cartography"),
            ("Buffer", "Buffer_analysis"),
            ("CreateEnterpriseGeodatabase", "CreateEnterpriseGeodatabase_management"),
            ("Slope", "Slope_sa"),
            ("MakeServiceAreaLayer", "MakeServiceAreaLayer_na"),
            ("FeatureClassToFeatureClass", "FeatureClassToFeatureClass_conversion"),
            ("DriveTimeTradeArea", "DriveTimeTradeArea_ba"),
        ];
        for (name, execute_name) in expected.iter() {
            assert_eq!(tm.get_tool(name).unwrap().get_execute_name(), *execute_name);
        }
    }

    #[test]
    fn test_toolbox() {
        let tm = manager();
        assert_eq!(tm.toolbox("SmoothLine").unwrap(), "Cartography Tools");
        let all = tm.toolbox("").unwrap();
        assert_eq!(all.lines().count(), 23);
        assert!(all.lines().next().unwrap().starts_with("AddField: "));
    }

    #[test]
    fn test_list_tools_with_keywords() {
        let tm = manager();
        let s = tm.list_tools_with_keywords(&["simplify".to_string()]);
        assert!(s.starts_with("All 2 Tools containing keywords:"));
        let s = tm.list_tools_with_keywords(&["spatial analyst".to_string()]);
        assert!(s.contains("Hillshade: "));
        assert!(s.contains("Slope: "));
        assert!(tm.list_tools().starts_with("All 23 Available Tools:"));
    }

    #[test]
    fn test_tool_help() {
        let tm = manager();
        let help = tm.tool_help("SimplifyLine").unwrap();
        assert!(help.starts_with("Simplify Line (SimplifyLine)"));
        assert!(help.contains("Execute name: SimplifyLine_cartography"));
        assert!(help.contains("--algorithm"));
        assert!(help.contains("POINT_REMOVE, BEND_SIMPLIFY"));
        assert!(help.contains(">>./gptools run SimplifyLine"));
    }

    #[test]
    fn test_environments_listing() {
        let tm = manager();
        let envs = tm.environments("AggregatePoints").unwrap();
        assert!(envs.lines().any(|l| l == "referenceScale"));
        let envs = tm.environments("Slope").unwrap();
        assert!(envs.lines().any(|l| l == "cellSize"));
    }

    #[test]
    fn test_build_request_from_args() {
        let tm = manager();
        let args: Vec<String> = vec![
            "--in_features=stores.shp".to_string(),
            "--out_feature_class".to_string(),
            "clusters.shp".to_string(),
            "--aggregation_distance=\"500 Meters\"".to_string(),
        ];
        let request = tm
            .build_request("AggregatePoints", &args, &EnvironmentSettings::new())
            .unwrap();
        assert_eq!(
            request.to_command_string(),
            "AggregatePoints_cartography stores.shp clusters.shp \"500 Meters\""
        );
    }

    #[test]
    fn test_build_request_errors() {
        let tm = manager();
        let envs = EnvironmentSettings::new();
        let args = vec!["--in_features=stores.shp".to_string()];
        assert!(matches!(
            tm.build_request("AggregatePoints", &args, &envs),
            Err(GpError::MissingParameter(_))
        ));
        let args = vec!["--bogus=1".to_string()];
        assert!(matches!(
            tm.build_request("AggregatePoints", &args, &envs),
            Err(GpError::UnrecognizedParameter { .. })
        ));
        let args = vec!["stores.shp".to_string()];
        assert!(tm.build_request("AggregatePoints", &args, &envs).is_err());
        let args = vec!["--in_features".to_string()];
        assert!(tm.build_request("AggregatePoints", &args, &envs).is_err());
    }

    #[test]
    fn test_where_clause_keeps_equals_signs() {
        let tm = manager();
        let args = vec![
            "--in_features=parcels.shp".to_string(),
            "--out_feature_class=res.shp".to_string(),
            "--where_clause=\"ZONE\" = 'R1'".to_string(),
        ];
        let request = tm
            .build_request("Select", &args, &EnvironmentSettings::new())
            .unwrap();
        assert_eq!(
            request.parameters[2].value.as_deref(),
            Some("\"ZONE\" = 'R1'")
        );
    }

    #[test]
    fn test_load_custom_tools() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("count_trees.json"),
            custom_tool::test::DESCRIPTOR,
        )
        .unwrap();
        fs::write(dir.path().join("._count_trees.json"), "garbage").unwrap();
        fs::write(dir.path().join("readme.txt"), "not a tool").unwrap();

        let mut tm = manager();
        assert_eq!(tm.load_custom_tools(dir.path()).unwrap(), 1);
        assert_eq!(tm.tool_names().len(), 24);
        let tool = tm.get_tool("count_trees").unwrap();
        assert_eq!(tool.get_execute_name(), "CountTrees_forestry");
        assert_eq!(tm.toolbox("CountTrees").unwrap(), "Forestry Tools");
    }

    #[test]
    fn test_invalid_custom_tool_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.json"), custom_tool::test::DESCRIPTOR).unwrap();
        fs::write(dir.path().join("bad.json"), "{ not json").unwrap();

        let mut tm = manager();
        assert_eq!(tm.load_custom_tools(dir.path()).unwrap(), 1);
        assert!(tm.get_tool("CountTrees").is_some());
        assert!(tm.get_tool("Buffer").is_some());
    }

    #[test]
    fn test_custom_tool_cannot_shadow_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = custom_tool::test::DESCRIPTOR.replace("CountTrees", "Buffer");
        fs::write(dir.path().join("buffer.json"), descriptor).unwrap();
        let mut tm = manager();
        assert_eq!(tm.load_custom_tools(dir.path()).unwrap(), 0);
        assert_eq!(tm.toolbox("Buffer").unwrap(), "Analysis Tools");
    }
}
