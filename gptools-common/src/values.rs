/*
This code is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 03/09/2026
Last Modified: 14/10/2026
License: MIT
*/

use crate::errors::{GpError, Result};
use std::fmt;
use std::str::FromStr;

coded_value_enum! {
    /// Units accepted by `GPLinearUnit` parameters.
    pub enum LinearUnitType {
        Unknown => "Unknown",
        Inches => "Inches",
        Points => "Points",
        Feet => "Feet",
        Yards => "Yards",
        Miles => "Miles",
        NauticalMiles => "NauticalMiles",
        Millimeters => "Millimeters",
        Centimeters => "Centimeters",
        Decimeters => "Decimeters",
        Meters => "Meters",
        Kilometers => "Kilometers",
        DecimalDegrees => "DecimalDegrees",
    }
}

coded_value_enum! {
    /// Units accepted by `GPArealUnit` parameters.
    pub enum ArealUnitType {
        Unknown => "Unknown",
        SquareInches => "SquareInches",
        SquareFeet => "SquareFeet",
        SquareYards => "SquareYards",
        Acres => "Acres",
        SquareMiles => "SquareMiles",
        SquareMillimeters => "SquareMillimeters",
        SquareCentimeters => "SquareCentimeters",
        SquareDecimeters => "SquareDecimeters",
        SquareMeters => "SquareMeters",
        Ares => "Ares",
        Hectares => "Hectares",
        SquareKilometers => "SquareKilometers",
    }
}

/// A distance with units, e.g. `10 Meters`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearUnit {
    pub value: f64,
    pub units: LinearUnitType,
}

impl LinearUnit {
    pub fn new(value: f64, units: LinearUnitType) -> LinearUnit {
        LinearUnit { value, units }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_double(self.value), self.units)
    }
}

impl FromStr for LinearUnit {
    type Err = GpError;

    fn from_str(s: &str) -> Result<LinearUnit> {
        let (value, units) = split_measure(s)?;
        let units = match units {
            Some(u) => u.parse::<LinearUnitType>()?,
            None => LinearUnitType::Unknown,
        };
        Ok(LinearUnit { value, units })
    }
}

/// An area with units, e.g. `500 SquareMeters`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArealUnit {
    pub value: f64,
    pub units: ArealUnitType,
}

impl ArealUnit {
    pub fn new(value: f64, units: ArealUnitType) -> ArealUnit {
        ArealUnit { value, units }
    }
}

impl fmt::Display for ArealUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_double(self.value), self.units)
    }
}

impl FromStr for ArealUnit {
    type Err = GpError;

    fn from_str(s: &str) -> Result<ArealUnit> {
        let (value, units) = split_measure(s)?;
        let units = match units {
            Some(u) => u.parse::<ArealUnitType>()?,
            None => ArealUnitType::Unknown,
        };
        Ok(ArealUnit { value, units })
    }
}

fn split_measure(s: &str) -> Result<(f64, Option<&str>)> {
    let s = s.trim().trim_matches('"').trim_matches('\'');
    let mut parts = s.split_whitespace();
    let number = parts
        .next()
        .ok_or_else(|| GpError::invalid_value("unit", s, "expected a value"))?;
    let value = number
        .parse::<f64>()
        .map_err(|e| GpError::invalid_value("unit", s, e))?;
    let units = parts.next();
    if parts.next().is_some() {
        return Err(GpError::invalid_value(
            "unit",
            s,
            "expected '<value> <units>'",
        ));
    }
    Ok((value, units))
}

/// A multi-column parameter value; each row is one entry, e.g. a field
/// name and a statistic type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueTable {
    pub rows: Vec<Vec<String>>,
}

impl ValueTable {
    pub fn new() -> ValueTable {
        ValueTable { rows: vec![] }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for ValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| quote_item(cell))
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect();
        f.write_str(&rows.join(";"))
    }
}

impl FromStr for ValueTable {
    type Err = GpError;

    /// Rows are separated by `;` and cells by whitespace; a cell may be
    /// single-quoted to include spaces.
    fn from_str(s: &str) -> Result<ValueTable> {
        let mut table = ValueTable::new();
        for row in split_raw_items(s) {
            let cells = split_cells(&row);
            if !cells.is_empty() {
                table.add_row(cells);
            }
        }
        Ok(table)
    }
}

/// The value of one geoprocessing parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum GpValue {
    Empty,
    String(String),
    Long(i64),
    Double(f64),
    Boolean(bool),
    LinearUnit(LinearUnit),
    ArealUnit(ArealUnit),
    Multi(Vec<String>),
    ValueTable(ValueTable),
}

impl GpValue {
    /// Renders the literal token the engine expects; `None` for an unset
    /// value.
    pub fn to_gp_string(&self) -> Option<String> {
        match self {
            GpValue::Empty => None,
            GpValue::String(s) => {
                if s.is_empty() {
                    None
                } else {
                    Some(s.clone())
                }
            }
            GpValue::Long(v) => Some(v.to_string()),
            GpValue::Double(v) => Some(format_double(*v)),
            GpValue::Boolean(b) => Some(if *b { "true" } else { "false" }.to_string()),
            GpValue::LinearUnit(u) => Some(u.to_string()),
            GpValue::ArealUnit(u) => Some(u.to_string()),
            GpValue::Multi(items) => {
                if items.is_empty() {
                    None
                } else {
                    Some(
                        items
                            .iter()
                            .map(|i| quote_item(i))
                            .collect::<Vec<String>>()
                            .join(";"),
                    )
                }
            }
            GpValue::ValueTable(t) => {
                if t.is_empty() {
                    None
                } else {
                    Some(t.to_string())
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_gp_string().is_none()
    }

    /// The numeric content of the value, if any. Units contribute their
    /// magnitude; strings are parsed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            GpValue::Long(v) => Some(*v as f64),
            GpValue::Double(v) => Some(*v),
            GpValue::LinearUnit(u) => Some(u.value),
            GpValue::ArealUnit(u) => Some(u.value),
            GpValue::String(s) => s
                .parse::<LinearUnit>()
                .ok()
                .map(|u| u.value),
            _ => None,
        }
    }

    /// The individual items of the value; multivalues yield each entry.
    pub fn items(&self) -> Vec<String> {
        match self {
            GpValue::Multi(items) => items.clone(),
            GpValue::ValueTable(t) => t.rows.iter().filter_map(|r| r.first().cloned()).collect(),
            v => v.to_gp_string().into_iter().collect(),
        }
    }
}

impl From<&str> for GpValue {
    fn from(s: &str) -> GpValue {
        GpValue::String(s.to_string())
    }
}

impl From<String> for GpValue {
    fn from(s: String) -> GpValue {
        GpValue::String(s)
    }
}

impl From<&String> for GpValue {
    fn from(s: &String) -> GpValue {
        GpValue::String(s.clone())
    }
}

impl From<f64> for GpValue {
    fn from(v: f64) -> GpValue {
        GpValue::Double(v)
    }
}

impl From<i64> for GpValue {
    fn from(v: i64) -> GpValue {
        GpValue::Long(v)
    }
}

impl From<bool> for GpValue {
    fn from(v: bool) -> GpValue {
        GpValue::Boolean(v)
    }
}

impl From<LinearUnit> for GpValue {
    fn from(v: LinearUnit) -> GpValue {
        GpValue::LinearUnit(v)
    }
}

impl From<ArealUnit> for GpValue {
    fn from(v: ArealUnit) -> GpValue {
        GpValue::ArealUnit(v)
    }
}

impl From<Vec<String>> for GpValue {
    fn from(v: Vec<String>) -> GpValue {
        GpValue::Multi(v)
    }
}

impl From<ValueTable> for GpValue {
    fn from(v: ValueTable) -> GpValue {
        GpValue::ValueTable(v)
    }
}

impl<T: Into<GpValue>> From<Option<T>> for GpValue {
    fn from(v: Option<T>) -> GpValue {
        match v {
            Some(v) => v.into(),
            None => GpValue::Empty,
        }
    }
}

/// Shortest decimal rendering of a double, e.g. `10`, `0.5`.
pub fn format_double(v: f64) -> String {
    format!("{}", v)
}

/// Parses a parameter value, reporting failures against the parameter name.
pub fn parse_value<T>(parameter: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let v = value.trim().trim_matches('"');
    v.parse::<T>()
        .map_err(|e| GpError::invalid_value(parameter, v, e))
}

/// Like `parse_value`, but an empty value or `#` leaves the parameter unset.
pub fn parse_optional<T>(parameter: &str, value: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    if is_unset(value) {
        return Ok(None);
    }
    parse_value(parameter, value).map(Some)
}

/// An optional text value; empty or `#` leaves it unset.
pub fn parse_optional_string(value: &str) -> Option<String> {
    if is_unset(value) {
        None
    } else {
        Some(value.trim().to_string())
    }
}

/// Splits a multivalue on `;`, removing quotes around items.
pub fn parse_multi(value: &str) -> Vec<String> {
    if is_unset(value) {
        return vec![];
    }
    split_items(value)
}

fn is_unset(value: &str) -> bool {
    let v = value.trim().trim_matches('"');
    v.is_empty() || v == "#"
}

fn split_items(value: &str) -> Vec<String> {
    split_raw_items(value).iter().map(|i| unquote(i)).collect()
}

fn split_raw_items(value: &str) -> Vec<String> {
    let value = value.trim();
    let value = if value.len() > 1 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    };
    let mut items = vec![];
    let mut current = String::new();
    let mut quoted = false;
    for c in value.chars() {
        match c {
            '\'' => {
                quoted = !quoted;
                current.push(c);
            }
            ';' if !quoted => {
                let item = current.trim().to_string();
                if !item.is_empty() {
                    items.push(item);
                }
                current.clear();
            }
            _ => current.push(c),
        }
    }
    let item = current.trim().to_string();
    if !item.is_empty() {
        items.push(item);
    }
    items
}

fn split_cells(row: &str) -> Vec<String> {
    let mut cells = vec![];
    let mut current = String::new();
    let mut quoted = false;
    for c in row.chars() {
        match c {
            '\'' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    cells.push(current.clone());
                    current.clear();
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        cells.push(current);
    }
    cells
}

fn unquote(item: &str) -> String {
    if item.len() > 1 && item.starts_with('\'') && item.ends_with('\'') {
        item[1..item.len() - 1].to_string()
    } else {
        item.to_string()
    }
}

fn quote_item(item: &str) -> String {
    if item.contains(' ') || item.contains(';') {
        format!("'{}'", item)
    } else {
        item.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_linear_unit_rendering() {
        let u = LinearUnit::new(10.0, LinearUnitType::Meters);
        assert_eq!(GpValue::from(u).to_gp_string().unwrap(), "10 Meters");
        let u = LinearUnit::new(0.25, LinearUnitType::DecimalDegrees);
        assert_eq!(u.to_string(), "0.25 DecimalDegrees");
    }

    #[test]
    fn test_linear_unit_parsing() {
        let u: LinearUnit = "15 feet".parse().unwrap();
        assert_eq!(u, LinearUnit::new(15.0, LinearUnitType::Feet));
        let u: LinearUnit = "2.5".parse().unwrap();
        assert_eq!(u.units, LinearUnitType::Unknown);
        assert!("ten Meters".parse::<LinearUnit>().is_err());
        assert!("10 Parsecs".parse::<LinearUnit>().is_err());
        assert!("10 Meters extra".parse::<LinearUnit>().is_err());
    }

    #[test]
    fn test_areal_unit_parsing() {
        let u: ArealUnit = "\"500 SquareMeters\"".parse().unwrap();
        assert_eq!(u, ArealUnit::new(500.0, ArealUnitType::SquareMeters));
        assert_eq!(u.to_string(), "500 SquareMeters");
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(GpValue::Empty.to_gp_string(), None);
        assert_eq!(GpValue::String(String::new()).to_gp_string(), None);
        assert_eq!(GpValue::Multi(vec![]).to_gp_string(), None);
        assert!(GpValue::from(None::<f64>).is_empty());
        assert!(!GpValue::from(Some(0.0)).is_empty());
    }

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(GpValue::Double(0.5).to_gp_string().unwrap(), "0.5");
        assert_eq!(GpValue::Double(45.0).to_gp_string().unwrap(), "45");
        assert_eq!(GpValue::Long(-3).to_gp_string().unwrap(), "-3");
        assert_eq!(GpValue::Boolean(true).to_gp_string().unwrap(), "true");
    }

    #[test]
    fn test_multivalue_quotes_items_with_spaces() {
        let v = GpValue::Multi(vec!["roads.shp".to_string(), "C:/my data/rivers.shp".to_string()]);
        assert_eq!(v.to_gp_string().unwrap(), "roads.shp;'C:/my data/rivers.shp'");
        assert_eq!(
            parse_multi("roads.shp;'C:/my data/rivers.shp'"),
            vec!["roads.shp", "C:/my data/rivers.shp"]
        );
    }

    #[test]
    fn test_value_table() {
        let t: ValueTable = "POP SUM;'AREA KM' MEAN".parse().unwrap();
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[1], vec!["AREA KM".to_string(), "MEAN".to_string()]);
        assert_eq!(GpValue::from(t).to_gp_string().unwrap(), "POP SUM;'AREA KM' MEAN");
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(parse_optional::<f64>("z_factor", "#").unwrap(), None);
        assert_eq!(parse_optional::<f64>("z_factor", "").unwrap(), None);
        assert_eq!(parse_optional::<f64>("z_factor", "2").unwrap(), Some(2.0));
        match parse_optional::<f64>("z_factor", "abc") {
            Err(GpError::InvalidValue { parameter, .. }) => assert_eq!(parameter, "z_factor"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_as_number() {
        assert_eq!(GpValue::Long(3).as_number(), Some(3.0));
        assert_eq!(GpValue::String("12 Meters".to_string()).as_number(), Some(12.0));
        assert_eq!(GpValue::String("abc".to_string()).as_number(), None);
    }
}
