/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 19/09/2026
Last Modified: 19/09/2026
License: MIT
*/

use super::{z_factor_parameter, TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    pub enum OutputMeasurement {
        Degree => "DEGREE",
        PercentRise => "PERCENT_RISE",
    }
}

/// Identifies the slope (gradient or steepness) from each cell of a raster.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Slope {
    pub in_raster: String,
    pub out_raster: String,
    pub output_measurement: Option<OutputMeasurement>,
    pub z_factor: Option<f64>,
}

impl Slope {
    pub fn new(in_raster: &str, out_raster: &str) -> Slope {
        Slope {
            in_raster: in_raster.to_string(),
            out_raster: out_raster.to_string(),
            ..Default::default()
        }
    }
}

impl GpTool for Slope {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "Slope".to_string()
    }

    fn get_display_name(&self) -> String {
        "Slope".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Identifies the slope (gradient or steepness) from each cell of a raster.".to_string()
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
            name: "in_raster".to_owned(),
            display_name: "Input raster".to_owned(),
            description: "The input surface raster.".to_owned(),
            parameter_type: ParameterType::RasterLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_raster".to_owned(),
            display_name: "Output raster".to_owned(),
            description: "The output slope raster.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "output_measurement".to_owned(),
            display_name: "Output measurement".to_owned(),
            description: "Specifies the measurement units (degrees or percentages) of the output slope raster.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(OutputMeasurement::Degree.to_string()),
            domain: Some(Domain::CodedValues(OutputMeasurement::tokens())),
            multi_value: false,
        });

        parameters.push(z_factor_parameter());
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(&self.in_raster),
            GpValue::from(&self.out_raster),
            GpValue::from(self.output_measurement),
            GpValue::from(self.z_factor),
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        raster_environments()
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_raster" => self.in_raster = parse_optional_string(value).unwrap_or_default(),
            "out_raster" => self.out_raster = parse_optional_string(value).unwrap_or_default(),
            "output_measurement" => self.output_measurement = parse_optional(name, value)?,
            "z_factor" => self.z_factor = parse_optional(name, value)?,
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
    fn test_percent_rise_with_cell_size() {
        let mut tool = Slope::new("dem.tif", "slope.tif");
        tool.output_measurement = Some(OutputMeasurement::PercentRise);
        tool.z_factor = Some(0.3048);
        let mut envs = EnvironmentSettings::new();
        envs.set(EnvironmentSetting::CellSize, "30");
        envs.set(EnvironmentSetting::ReferenceScale, "24000");
        let request = ExecuteRequest::from_tool(&tool, &envs).unwrap();
        assert_eq!(request.environments.get("cellSize").map(|s| s.as_str()), Some("30"));
        assert!(!request.environments.contains_key("referenceScale"));
        assert_eq!(
            request.to_command_string(),
            "Slope_sa dem.tif slope.tif PERCENT_RISE 0.3048"
        );
    }
}
