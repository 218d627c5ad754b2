/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 03/09/2026
Last Modified: 13/10/2026
License: MIT
*/

use crate::errors::{GpError, Result};
use crate::values::GpValue;
use serde::{Deserialize, Serialize};

/// Describes one parameter of a geoprocessing tool.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToolParameter {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub parameter_type: ParameterType,
    pub direction: Direction,
    pub kind: ParameterKind,
    pub default_value: Option<String>,
    #[serde(default)]
    pub domain: Option<Domain>,
    #[serde(default)]
    pub multi_value: bool,
}

impl ToolParameter {
    pub fn to_string(&self) -> String {
        let v = match serde_json::to_string(&self) {
            Ok(json_str) => json_str,
            Err(err) => format!("{:?}", err),
        };
        v
    }

    pub fn is_optional(&self) -> bool {
        self.kind != ParameterKind::Required
    }

    pub fn is_derived(&self) -> bool {
        self.kind == ParameterKind::Derived
    }

    /// Checks a value against this parameter: required parameters must be
    /// set, and set values must lie within the domain.
    pub fn check(&self, value: &GpValue) -> Result<()> {
        if value.is_empty() {
            if self.kind == ParameterKind::Required {
                return Err(GpError::MissingParameter(self.name.clone()));
            }
            return Ok(());
        }
        match &self.domain {
            Some(domain) => domain.check(&self.name, value),
            None => Ok(()),
        }
    }
}

/// ArcGIS data types. Serializes as the data type keyword.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    #[serde(rename = "GPString")]
    String,
    #[serde(rename = "GPEncryptedString")]
    EncryptedString,
    #[serde(rename = "GPLong")]
    Long,
    #[serde(rename = "GPDouble")]
    Double,
    #[serde(rename = "GPBoolean")]
    Boolean,
    #[serde(rename = "GPDate")]
    Date,
    #[serde(rename = "GPLinearUnit")]
    LinearUnit,
    #[serde(rename = "GPArealUnit")]
    ArealUnit,
    #[serde(rename = "GPSQLExpression")]
    SqlExpression,
    #[serde(rename = "GPValueTable")]
    ValueTable,
    #[serde(rename = "GPFeatureLayer")]
    FeatureLayer,
    #[serde(rename = "GPTableView")]
    TableView,
    #[serde(rename = "GPRasterLayer")]
    RasterLayer,
    #[serde(rename = "GPFieldMapping")]
    FieldMappings,
    #[serde(rename = "GPNALayer")]
    NetworkAnalystLayer,
    #[serde(rename = "GPNetworkDatasetLayer")]
    NetworkDatasetLayer,
    #[serde(rename = "DEFeatureClass")]
    FeatureClass,
    #[serde(rename = "DETable")]
    Table,
    #[serde(rename = "DERasterDataset")]
    RasterDataset,
    #[serde(rename = "DEWorkspace")]
    Workspace,
    #[serde(rename = "DEFolder")]
    Folder,
    #[serde(rename = "DEFile")]
    File,
    #[serde(rename = "GPCoordinateSystem")]
    CoordinateSystem,
    Field,
}

impl ParameterType {
    /// The ArcGIS data type keyword.
    pub fn data_type(&self) -> String {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::String(s)) => s,
            _ => format!("{:?}", self),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Required,
    Optional,
    /// An output the engine fills in; never sent.
    Derived,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Point,
    Multipoint,
    Polyline,
    Polygon,
    MultiPatch,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Short,
    Long,
    Float,
    Double,
    Text,
    Date,
    #[serde(rename = "OID")]
    ObjectId,
    #[serde(rename = "GUID")]
    Guid,
    Blob,
    Raster,
}

/// Constraints on the values a parameter accepts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Domain {
    CodedValues(Vec<String>),
    Range { min: Option<f64>, max: Option<f64> },
    GeometryTypes(Vec<GeometryType>),
    FieldTypes(Vec<FieldType>),
}

impl Domain {
    pub fn check(&self, parameter: &str, value: &GpValue) -> Result<()> {
        match self {
            Domain::CodedValues(codes) => {
                for item in value.items() {
                    if !codes.iter().any(|c| c.eq_ignore_ascii_case(&item)) {
                        return Err(GpError::invalid_value(
                            parameter,
                            &item,
                            format!("expected one of {}", codes.join(", ")),
                        ));
                    }
                }
                Ok(())
            }
            Domain::Range { min, max } => {
                let v = value.as_number().ok_or_else(|| {
                    GpError::invalid_value(
                        parameter,
                        &value.to_gp_string().unwrap_or_default(),
                        "expected a number",
                    )
                })?;
                let below = min.map_or(false, |m| v < m);
                let above = max.map_or(false, |m| v > m);
                if below || above {
                    return Err(GpError::OutOfRange {
                        parameter: parameter.to_string(),
                        value: v,
                        range: self.range_text(),
                    });
                }
                Ok(())
            }
            // Requires the input data; the engine checks these.
            Domain::GeometryTypes(_) | Domain::FieldTypes(_) => Ok(()),
        }
    }

    fn range_text(&self) -> String {
        match self {
            Domain::Range { min, max } => {
                let lo = min.map_or("-inf".to_string(), |m| m.to_string());
                let hi = max.map_or("inf".to_string(), |m| m.to_string());
                format!("[{}, {}]", lo, hi)
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::values::{LinearUnit, LinearUnitType};

    fn azimuth() -> ToolParameter {
        ToolParameter {
            name: "azimuth".to_owned(),
            display_name: "Azimuth".to_owned(),
            description: "Azimuth angle of the light source.".to_owned(),
            parameter_type: ParameterType::Double,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some("315".to_owned()),
            domain: Some(Domain::Range {
                min: Some(0.0),
                max: Some(360.0),
            }),
            multi_value: false,
        }
    }

    #[test]
    fn test_parameter_json() {
        let json = azimuth().to_string();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["name"], "azimuth");
        assert_eq!(v["parameter_type"], "GPDouble");
        assert_eq!(v["kind"], "Optional");
        assert_eq!(v["domain"]["Range"]["max"], 360.0);
    }

    #[test]
    fn test_parameter_json_defaults() {
        let json = r#"{"name":"in_table","display_name":"Input Table",
            "description":"","parameter_type":"GPTableView","direction":"Input",
            "kind":"Required","default_value":null}"#;
        let p: ToolParameter = serde_json::from_str(json).unwrap();
        assert_eq!(p.parameter_type, ParameterType::TableView);
        assert_eq!(p.domain, None);
        assert!(!p.multi_value);
    }

    #[test]
    fn test_data_type_keyword() {
        assert_eq!(ParameterType::FeatureClass.data_type(), "DEFeatureClass");
        assert_eq!(ParameterType::Field.data_type(), "Field");
    }

    #[test]
    fn test_range_domain() {
        let p = azimuth();
        assert!(p.check(&GpValue::Double(90.0)).is_ok());
        assert!(p.check(&GpValue::Empty).is_ok());
        match p.check(&GpValue::Double(400.0)) {
            Err(GpError::OutOfRange { parameter, range, .. }) => {
                assert_eq!(parameter, "azimuth");
                assert_eq!(range, "[0, 360]");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_range_domain_on_units() {
        let d = Domain::Range {
            min: Some(0.0),
            max: None,
        };
        let neg = GpValue::LinearUnit(LinearUnit::new(-1.0, LinearUnitType::Meters));
        assert!(d.check("tolerance", &neg).is_err());
        assert!(d.check("tolerance", &GpValue::String("abc".to_owned())).is_err());
    }

    #[test]
    fn test_coded_value_domain() {
        let d = Domain::CodedValues(vec!["ROUND".to_owned(), "FLAT".to_owned()]);
        assert!(d.check("line_end_type", &GpValue::String("flat".to_owned())).is_ok());
        assert!(d.check("line_end_type", &GpValue::String("SQUARE".to_owned())).is_err());
        let multi = GpValue::Multi(vec!["ROUND".to_owned(), "SQUARE".to_owned()]);
        assert!(d.check("line_end_type", &multi).is_err());
    }

    #[test]
    fn test_required_parameter() {
        let mut p = azimuth();
        p.kind = ParameterKind::Required;
        match p.check(&GpValue::String(String::new())) {
            Err(GpError::MissingParameter(name)) => assert_eq!(name, "azimuth"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
