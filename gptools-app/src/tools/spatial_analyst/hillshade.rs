/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 19/09/2026
Last Modified: 29/09/2026
License: MIT
*/

use super::{z_factor_parameter, TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    /// Whether cells in the shadow of other cells are modelled.
    pub enum ShadowModel {
        NoShadows => "NO_SHADOWS",
        Shadows => "SHADOWS",
    }
}

/// Creates a shaded relief from a surface raster by considering the
/// illumination source angle and shadows.
///
/// Azimuth is measured clockwise from north in degrees (0 to 360); altitude
/// is the angle of the illumination source above the horizon (0 to 90).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hillshade {
    pub in_raster: String,
    pub out_raster: String,
    pub azimuth: Option<f64>,
    pub altitude: Option<f64>,
    pub model_shadows: Option<ShadowModel>,
    pub z_factor: Option<f64>,
}

impl Hillshade {
    pub fn new(in_raster: &str, out_raster: &str) -> Hillshade {
        Hillshade {
            in_raster: in_raster.to_string(),
            out_raster: out_raster.to_string(),
            ..Default::default()
        }
    }
}

impl GpTool for Hillshade {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "Hillshade".to_string()
    }

    fn get_display_name(&self) -> String {
        "Hillshade".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Creates a shaded relief from a surface raster by considering the illumination source angle and shadows.".to_string()
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
            description: "The output hillshade raster.".to_owned(),
            parameter_type: ParameterType::RasterDataset,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "azimuth".to_owned(),
            display_name: "Azimuth".to_owned(),
            description: "The azimuth angle of the light source.".to_owned(),
            parameter_type: ParameterType::Double,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some("315".to_owned()),
            domain: Some(Domain::Range {
                min: Some(0.0),
                max: Some(360.0),
            }),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "altitude".to_owned(),
            display_name: "Altitude".to_owned(),
            description: "The altitude angle of the light source above the horizon.".to_owned(),
            parameter_type: ParameterType::Double,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some("45".to_owned()),
            domain: Some(Domain::Range {
                min: Some(0.0),
                max: Some(90.0),
            }),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "model_shadows".to_owned(),
            display_name: "Model shadows".to_owned(),
            description: "Specifies the type of shaded relief to be generated.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(ShadowModel::NoShadows.to_string()),
            domain: Some(Domain::CodedValues(ShadowModel::tokens())),
            multi_value: false,
        });

        parameters.push(z_factor_parameter());
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(&self.in_raster),
            GpValue::from(&self.out_raster),
            GpValue::from(self.azimuth),
            GpValue::from(self.altitude),
            GpValue::from(self.model_shadows),
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
            "azimuth" => self.azimuth = parse_optional(name, value)?,
            "altitude" => self.altitude = parse_optional(name, value)?,
            "model_shadows" => self.model_shadows = parse_optional(name, value)?,
            "z_factor" => self.z_factor = parse_optional(name, value)?,
            _ => return Err(unrecognized_parameter(&self.get_tool_name(), name)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_angle_ranges() {
        let mut tool = Hillshade::new("dem.tif", "hs.tif");
        tool.azimuth = Some(360.0);
        tool.altitude = Some(90.0);
        assert!(tool.validate().is_ok());
        tool.set_parameter("azimuth", "400").unwrap();
        match tool.validate() {
            Err(GpError::OutOfRange { parameter, range, .. }) => {
                assert_eq!(parameter, "azimuth");
                assert_eq!(range, "[0, 360]");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
