/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 20/09/2026
Last Modified: 13/10/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    pub enum TravelFromTo {
        TravelFrom => "TRAVEL_FROM",
        TravelTo => "TRAVEL_TO",
    }
}

coded_value_enum! {
    pub enum PolygonType {
        SimplePolys => "SIMPLE_POLYS",
        DetailedPolys => "DETAILED_POLYS",
        NoPolys => "NO_POLYS",
    }
}

coded_value_enum! {
    /// How polygons from multiple facilities sharing a break value combine.
    pub enum MergeOption {
        NoMerge => "NO_MERGE",
        NoOverlap => "NO_OVERLAP",
        Merge => "MERGE",
    }
}

coded_value_enum! {
    pub enum NestingType {
        Rings => "RINGS",
        Disks => "DISKS",
    }
}

coded_value_enum! {
    pub enum LineType {
        NoLines => "NO_LINES",
        TrueLines => "TRUE_LINES",
        TrueLinesWithMeasures => "TRUE_LINES_WITH_MEASURES",
    }
}

coded_value_enum! {
    pub enum OverlapOption {
        Overlap => "OVERLAP",
        NonOverlap => "NON_OVERLAP",
    }
}

coded_value_enum! {
    pub enum SplitOption {
        NoSplit => "NO_SPLIT",
        Split => "SPLIT",
    }
}

coded_value_enum! {
    /// Where U-turns are allowed on the network.
    pub enum UTurnPolicy {
        AllowUturns => "ALLOW_UTURNS",
        NoUturns => "NO_UTURNS",
        AllowDeadEndsOnly => "ALLOW_DEAD_ENDS_ONLY",
        AllowDeadEndsAndIntersectionsOnly => "ALLOW_DEAD_ENDS_AND_INTERSECTIONS_ONLY",
    }
}

coded_value_enum! {
    pub enum PolygonTrim {
        TrimPolys => "TRIM_POLYS",
        NoTrimPolys => "NO_TRIM_POLYS",
    }
}

coded_value_enum! {
    pub enum LinesSourceFields {
        NoLinesSourceFields => "NO_LINES_SOURCE_FIELDS",
        LinesSourceFields => "LINES_SOURCE_FIELDS",
    }
}

coded_value_enum! {
    pub enum HierarchyOption {
        UseHierarchy => "USE_HIERARCHY",
        NoHierarchy => "NO_HIERARCHY",
    }
}

/// Makes a service area network analysis layer and sets its analysis
/// properties. A service area layer determines the region that encompasses
/// all accessible streets within a specified impedance.
///
/// Break values are space-separated impedance cutoffs, e.g. `"5 10 15"`.
/// `time_of_day` is only honored with a time-based impedance attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MakeServiceAreaLayer {
    pub in_network_dataset: String,
    pub out_network_analysis_layer: String,
    pub impedance_attribute: String,
    pub travel_from_to: Option<TravelFromTo>,
    pub default_break_values: Option<String>,
    pub polygon_type: Option<PolygonType>,
    pub merge: Option<MergeOption>,
    pub nesting_type: Option<NestingType>,
    pub line_type: Option<LineType>,
    pub overlap: Option<OverlapOption>,
    pub split: Option<SplitOption>,
    pub excluded_source_name: Vec<String>,
    pub accumulate_attribute_name: Vec<String>,
    pub uturn_policy: Option<UTurnPolicy>,
    pub restriction_attribute_name: Vec<String>,
    pub polygon_trim: Option<PolygonTrim>,
    pub poly_trim_value: Option<LinearUnit>,
    pub lines_source_fields: Option<LinesSourceFields>,
    pub hierarchy: Option<HierarchyOption>,
    pub time_of_day: Option<String>,
}

impl MakeServiceAreaLayer {
    pub fn new(
        in_network_dataset: &str,
        out_network_analysis_layer: &str,
        impedance_attribute: &str,
    ) -> MakeServiceAreaLayer {
        MakeServiceAreaLayer {
            in_network_dataset: in_network_dataset.to_string(),
            out_network_analysis_layer: out_network_analysis_layer.to_string(),
            impedance_attribute: impedance_attribute.to_string(),
            ..Default::default()
        }
    }
}

fn coded_parameter(
    name: &str,
    display_name: &str,
    description: &str,
    parameter_type: ParameterType,
    tokens: Vec<String>,
) -> ToolParameter {
    ToolParameter {
        name: name.to_owned(),
        display_name: display_name.to_owned(),
        description: description.to_owned(),
        parameter_type,
        direction: Direction::Input,
        kind: ParameterKind::Optional,
        default_value: tokens.first().cloned(),
        domain: Some(Domain::CodedValues(tokens)),
        multi_value: false,
    }
}

fn string_parameter(name: &str, display_name: &str, description: &str, multi_value: bool) -> ToolParameter {
    ToolParameter {
        name: name.to_owned(),
        display_name: display_name.to_owned(),
        description: description.to_owned(),
        parameter_type: ParameterType::String,
        direction: Direction::Input,
        kind: ParameterKind::Optional,
        default_value: None,
        domain: None,
        multi_value,
    }
}

impl GpTool for MakeServiceAreaLayer {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "MakeServiceAreaLayer".to_string()
    }

    fn get_display_name(&self) -> String {
        "Make Service Area Layer".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Makes a service area network analysis layer and sets its analysis properties.".to_string()
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
            name: "in_network_dataset".to_owned(),
            display_name: "Input Analysis Network".to_owned(),
            description: "The network dataset on which the service area analysis will be performed.".to_owned(),
            parameter_type: ParameterType::NetworkDatasetLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_network_analysis_layer".to_owned(),
            display_name: "Output Layer Name".to_owned(),
            description: "The name of the service area network analysis layer to create.".to_owned(),
            parameter_type: ParameterType::NetworkAnalystLayer,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "impedance_attribute".to_owned(),
            display_name: "Impedance Attribute".to_owned(),
            description: "The cost attribute to be used as impedance in the analysis.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(coded_parameter(
            "travel_from_to",
            "Travel From or To Facility",
            "Specifies the direction of travel to or from the facilities.",
            ParameterType::String,
            TravelFromTo::tokens(),
        ));

        parameters.push(ToolParameter {
            default_value: Some("5".to_owned()),
            ..string_parameter(
                "default_break_values",
                "Default Break Values",
                "The default impedance values indicating the extent of the service area.",
                false,
            )
        });

        parameters.push(coded_parameter(
            "polygon_type",
            "Polygon Type",
            "Specifies the type of polygons that will be generated.",
            ParameterType::String,
            PolygonType::tokens(),
        ));

        parameters.push(coded_parameter(
            "merge",
            "Merge Polygons with Similar Ranges",
            "Specifies the options to merge polygons that share similar break values.",
            ParameterType::String,
            MergeOption::tokens(),
        ));

        parameters.push(coded_parameter(
            "nesting_type",
            "Polygon Nest Option",
            "Specifies the option for creating concentric service area polygons as disks or rings.",
            ParameterType::String,
            NestingType::tokens(),
        ));

        parameters.push(coded_parameter(
            "line_type",
            "Line Type",
            "Specifies the type of lines that will be generated.",
            ParameterType::String,
            LineType::tokens(),
        ));

        parameters.push(coded_parameter(
            "overlap",
            "Overlap Lines",
            "Specifies whether overlapping lines will be generated.",
            ParameterType::Boolean,
            OverlapOption::tokens(),
        ));

        parameters.push(coded_parameter(
            "split",
            "Split Lines when They Cross a Service Area Break",
            "Specifies whether lines that fall on two service area breaks are split.",
            ParameterType::Boolean,
            SplitOption::tokens(),
        ));

        parameters.push(string_parameter(
            "excluded_source_name",
            "Exclude Sources from Polygon Generation",
            "The network sources to be excluded when generating polygons.",
            true,
        ));

        parameters.push(string_parameter(
            "accumulate_attribute_name",
            "Accumulators",
            "The cost attributes to be accumulated during analysis.",
            true,
        ));

        parameters.push(coded_parameter(
            "UTurn_policy",
            "U-Turn Policy",
            "Specifies the U-turn policy that will be used at junctions.",
            ParameterType::String,
            UTurnPolicy::tokens(),
        ));

        parameters.push(string_parameter(
            "restriction_attribute_name",
            "Restrictions",
            "The restriction attributes that will be respected during analysis.",
            true,
        ));

        parameters.push(coded_parameter(
            "polygon_trim",
            "Trim Polygons",
            "Specifies whether polygons will be trimmed near the outer edge of the network.",
            ParameterType::Boolean,
            PolygonTrim::tokens(),
        ));

        parameters.push(ToolParameter {
            name: "poly_trim_value".to_owned(),
            display_name: "Polygon Trim".to_owned(),
            description: "The distance within which the service area polygons are trimmed.".to_owned(),
            parameter_type: ParameterType::LinearUnit,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some("100 Meters".to_owned()),
            domain: Some(Domain::Range {
                min: Some(0.0),
                max: None,
            }),
            multi_value: false,
        });

        parameters.push(coded_parameter(
            "lines_source_fields",
            "Include Network Source Fields in Lines",
            "Specifies whether source ID fields are added to the output lines.",
            ParameterType::Boolean,
            LinesSourceFields::tokens(),
        ));

        parameters.push(coded_parameter(
            "hierarchy",
            "Use Hierarchy in Analysis",
            "Specifies whether the hierarchy attribute will be used for the analysis.",
            ParameterType::Boolean,
            HierarchyOption::tokens(),
        ));

        parameters.push(ToolParameter {
            name: "time_of_day".to_owned(),
            display_name: "Time of Day".to_owned(),
            description: "The time to depart from or arrive at the facilities.".to_owned(),
            parameter_type: ParameterType::Date,
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
            GpValue::from(&self.in_network_dataset),
            GpValue::from(&self.out_network_analysis_layer),
            GpValue::from(&self.impedance_attribute),
            GpValue::from(self.travel_from_to),
            GpValue::from(self.default_break_values.clone()),
            GpValue::from(self.polygon_type),
            GpValue::from(self.merge),
            GpValue::from(self.nesting_type),
            GpValue::from(self.line_type),
            GpValue::from(self.overlap),
            GpValue::from(self.split),
            GpValue::Multi(self.excluded_source_name.clone()),
            GpValue::Multi(self.accumulate_attribute_name.clone()),
            GpValue::from(self.uturn_policy),
            GpValue::Multi(self.restriction_attribute_name.clone()),
            GpValue::from(self.polygon_trim),
            GpValue::from(self.poly_trim_value),
            GpValue::from(self.lines_source_fields),
            GpValue::from(self.hierarchy),
            GpValue::from(self.time_of_day.clone()),
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        general_environments()
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_network_dataset" => {
                self.in_network_dataset = parse_optional_string(value).unwrap_or_default()
            }
            "out_network_analysis_layer" => {
                self.out_network_analysis_layer = parse_optional_string(value).unwrap_or_default()
            }
            "impedance_attribute" => {
                self.impedance_attribute = parse_optional_string(value).unwrap_or_default()
            }
            "travel_from_to" => self.travel_from_to = parse_optional(name, value)?,
            "default_break_values" => self.default_break_values = parse_optional_string(value),
            "polygon_type" => self.polygon_type = parse_optional(name, value)?,
            "merge" => self.merge = parse_optional(name, value)?,
            "nesting_type" => self.nesting_type = parse_optional(name, value)?,
            "line_type" => self.line_type = parse_optional(name, value)?,
            "overlap" => self.overlap = parse_optional(name, value)?,
            "split" => self.split = parse_optional(name, value)?,
            "excluded_source_name" => self.excluded_source_name = parse_multi(value),
            "accumulate_attribute_name" => self.accumulate_attribute_name = parse_multi(value),
            "uturn_policy" => self.uturn_policy = parse_optional(name, value)?,
            "restriction_attribute_name" => self.restriction_attribute_name = parse_multi(value),
            "polygon_trim" => self.polygon_trim = parse_optional(name, value)?,
            "poly_trim_value" => self.poly_trim_value = parse_optional(name, value)?,
            "lines_source_fields" => self.lines_source_fields = parse_optional(name, value)?,
            "hierarchy" => self.hierarchy = parse_optional(name, value)?,
            "time_of_day" => self.time_of_day = parse_optional_string(value),
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
    fn test_drive_time_polygons() {
        let mut tool = MakeServiceAreaLayer::new("Streets_ND", "FireStationCoverage", "TravelTime");
        tool.default_break_values = Some("5 10 15".to_string());
        tool.polygon_type = Some(PolygonType::DetailedPolys);
        tool.restriction_attribute_name = vec!["Oneway".to_string()];
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "MakeServiceAreaLayer_na Streets_ND FireStationCoverage TravelTime # \"5 10 15\" DETAILED_POLYS # # # # # # # # Oneway"
        );
    }

    #[test]
    fn test_uturn_policy_name_is_case_insensitive() {
        let mut tool = MakeServiceAreaLayer::default();
        tool.set_parameter("UTurn_policy", "no_uturns").unwrap();
        assert_eq!(tool.uturn_policy, Some(UTurnPolicy::NoUturns));
        tool.set_parameter("poly_trim_value", "50 Meters").unwrap();
        assert_eq!(
            tool.get_parameter_values()[16].to_gp_string().as_deref(),
            Some("50 Meters")
        );
        let info = tool.get_parameter_info();
        assert_eq!(info[13].name, "UTurn_policy");
        assert_eq!(info[13].default_value.as_deref(), Some("ALLOW_UTURNS"));
    }
}
