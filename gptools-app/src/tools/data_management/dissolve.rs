/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 18/09/2026
Last Modified: 11/10/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    /// Summary statistics computed over the dissolved features.
    pub enum StatisticType {
        Sum => "SUM",
        Mean => "MEAN",
        Min => "MIN",
        Max => "MAX",
        Range => "RANGE",
        Std => "STD",
        Count => "COUNT",
        First => "FIRST",
        Last => "LAST",
    }
}

coded_value_enum! {
    pub enum MultiPartOption {
        MultiPart => "MULTI_PART",
        SinglePart => "SINGLE_PART",
    }
}

coded_value_enum! {
    pub enum UnsplitLinesOption {
        DissolveLines => "DISSOLVE_LINES",
        UnsplitLines => "UNSPLIT_LINES",
    }
}

/// Aggregates features based on specified attributes.
///
/// `statistics_fields` is a value table of `[field, statistic]` rows; each
/// statistic must be a `StatisticType` token.
///
/// # See Also
/// `AggregatePolygons`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dissolve {
    pub in_features: String,
    pub out_feature_class: String,
    pub dissolve_field: Vec<String>,
    pub statistics_fields: ValueTable,
    pub multi_part: Option<MultiPartOption>,
    pub unsplit_lines: Option<UnsplitLinesOption>,
}

impl Dissolve {
    pub fn new(in_features: &str, out_feature_class: &str) -> Dissolve {
        Dissolve {
            in_features: in_features.to_string(),
            out_feature_class: out_feature_class.to_string(),
            ..Default::default()
        }
    }

    pub fn add_statistic(&mut self, field: &str, statistic: StatisticType) {
        self.statistics_fields
            .add_row(vec![field.to_string(), statistic.to_string()]);
    }
}

impl GpTool for Dissolve {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "Dissolve".to_string()
    }

    fn get_display_name(&self) -> String {
        "Dissolve".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Aggregates features based on specified attributes.".to_string()
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
            description: "The features to be aggregated.".to_owned(),
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
            description: "The feature class to be created that will contain the aggregated features.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "dissolve_field".to_owned(),
            display_name: "Dissolve Field(s)".to_owned(),
            description: "The field or fields on which features will be aggregated.".to_owned(),
            parameter_type: ParameterType::Field,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: true,
        });

        parameters.push(ToolParameter {
            name: "statistics_fields".to_owned(),
            display_name: "Statistics Field(s)".to_owned(),
            description: "The fields and statistics with which attributes will be summarized.".to_owned(),
            parameter_type: ParameterType::ValueTable,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "multi_part".to_owned(),
            display_name: "Create multipart features".to_owned(),
            description: "Specifies whether multipart features will be allowed in the output feature class.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(MultiPartOption::MultiPart.to_string()),
            domain: Some(Domain::CodedValues(MultiPartOption::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "unsplit_lines".to_owned(),
            display_name: "Unsplit lines".to_owned(),
            description: "Specifies how line features will be dissolved.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(UnsplitLinesOption::DissolveLines.to_string()),
            domain: Some(Domain::CodedValues(UnsplitLinesOption::tokens())),
            multi_value: false,
        });
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(&self.in_features),
            GpValue::from(&self.out_feature_class),
            GpValue::Multi(self.dissolve_field.clone()),
            GpValue::from(self.statistics_fields.clone()),
            GpValue::from(self.multi_part),
            GpValue::from(self.unsplit_lines),
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
            "dissolve_field" => self.dissolve_field = parse_multi(value),
            "statistics_fields" => {
                let mut table: ValueTable = parse_optional(name, value)?.unwrap_or_default();
                for row in table.rows.iter_mut() {
                    match row.get(1) {
                        Some(statistic) => {
                            let stat = parse_value::<StatisticType>(name, statistic)?;
                            row[1] = stat.as_str().to_string();
                        }
                        None => {
                            return Err(GpError::invalid_value(
                                name,
                                &row.join(" "),
                                "expected a field and a statistic type",
                            ))
                        }
                    }
                }
                self.statistics_fields = table;
            }
            "multi_part" => self.multi_part = parse_optional(name, value)?,
            "unsplit_lines" => self.unsplit_lines = parse_optional(name, value)?,
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
    fn test_dissolve_with_statistics() {
        let mut tool = Dissolve::new("counties.shp", "states.shp");
        tool.dissolve_field = vec!["STATE_NAME".to_string()];
        tool.add_statistic("POP2020", StatisticType::Sum);
        tool.add_statistic("AREA", StatisticType::Mean);
        tool.multi_part = Some(MultiPartOption::SinglePart);
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "Dissolve_management counties.shp states.shp STATE_NAME \"POP2020 SUM;AREA MEAN\" SINGLE_PART"
        );
    }

    #[test]
    fn test_statistics_from_text() {
        let mut tool = Dissolve::default();
        tool.set_parameter("statistics_fields", "POP2020 sum;AREA MEAN").unwrap();
        assert_eq!(tool.statistics_fields.rows.len(), 2);
        assert_eq!(tool.statistics_fields.rows[0], vec!["POP2020".to_string(), "SUM".to_string()]);
        assert_eq!(tool.statistics_fields.to_string(), "POP2020 SUM;AREA MEAN");
        assert!(tool.set_parameter("statistics_fields", "POP2020 MEDIAN").is_err());
        assert!(tool.set_parameter("statistics_fields", "POP2020").is_err());
        assert_eq!(tool.statistics_fields.rows.len(), 2);
    }
}
