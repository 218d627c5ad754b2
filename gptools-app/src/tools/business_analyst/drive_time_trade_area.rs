/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 21/09/2026
Last Modified: 14/10/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    pub enum MeasureUnits {
        Minutes => "MINUTES",
        Miles => "MILES",
        Kilometers => "KILOMETERS",
    }
}

coded_value_enum! {
    /// How trade areas of neighboring stores that overlap are treated.
    pub enum TradeAreaOverlap {
        Overlap => "OVERLAP",
        NotOverlap => "NOT_OVERLAP",
        Split => "SPLIT",
    }
}

coded_value_enum! {
    pub enum TravelDirection {
        TowardStores => "TOWARD_STORES",
        AwayFromStores => "AWAY_FROM_STORES",
    }
}

coded_value_enum! {
    pub enum PolygonDetail {
        Standard => "STANDARD",
        Generalized => "GENERALIZED",
        High => "HIGH",
    }
}

/// Creates a feature class of trade areas around store points based on
/// drive time or distance along a street network.
///
/// `break_values` holds one or more space-separated cutoffs in
/// `measure_units`, e.g. `"5 10 15"` minutes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DriveTimeTradeArea {
    pub in_features: String,
    pub out_feature_class: String,
    pub break_values: String,
    pub measure_units: Option<MeasureUnits>,
    pub id_field: Option<String>,
    pub overlap_type: Option<TradeAreaOverlap>,
    pub travel_direction: Option<TravelDirection>,
    pub polygon_detail: Option<PolygonDetail>,
}

impl DriveTimeTradeArea {
    pub fn new(in_features: &str, out_feature_class: &str, break_values: &str) -> DriveTimeTradeArea {
        DriveTimeTradeArea {
            in_features: in_features.to_string(),
            out_feature_class: out_feature_class.to_string(),
            break_values: break_values.to_string(),
            ..Default::default()
        }
    }
}

impl GpTool for DriveTimeTradeArea {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "DriveTimeTradeArea".to_string()
    }

    fn get_display_name(&self) -> String {
        "Drive Time Trade Area".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Creates trade areas around stores based on drive time or distance along a street network.".to_string()
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
            display_name: "Input Store Features".to_owned(),
            description: "The input point features representing stores or facilities.".to_owned(),
            parameter_type: ParameterType::FeatureLayer,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![GeometryType::Point])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_feature_class".to_owned(),
            display_name: "Output Feature Class".to_owned(),
            description: "The output trade area polygon feature class.".to_owned(),
            parameter_type: ParameterType::FeatureClass,
            direction: Direction::Output,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::GeometryTypes(vec![GeometryType::Polygon])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "break_values".to_owned(),
            display_name: "Distance".to_owned(),
            description: "The drive time or distance cutoffs that define the trade areas.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "measure_units".to_owned(),
            display_name: "Units".to_owned(),
            description: "Specifies the units of the break values.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(MeasureUnits::Minutes.to_string()),
            domain: Some(Domain::CodedValues(MeasureUnits::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "id_field".to_owned(),
            display_name: "ID Field".to_owned(),
            description: "The field uniquely identifying each store.".to_owned(),
            parameter_type: ParameterType::Field,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: Some(Domain::FieldTypes(vec![
                FieldType::Short,
                FieldType::Long,
                FieldType::Text,
                FieldType::ObjectId,
            ])),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "overlap_type".to_owned(),
            display_name: "Overlap Type".to_owned(),
            description: "Specifies how overlapping trade areas of neighboring stores are handled.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(TradeAreaOverlap::Overlap.to_string()),
            domain: Some(Domain::CodedValues(TradeAreaOverlap::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "travel_direction".to_owned(),
            display_name: "Travel Direction".to_owned(),
            description: "Specifies whether travel is measured toward or away from the stores.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(TravelDirection::AwayFromStores.to_string()),
            domain: Some(Domain::CodedValues(TravelDirection::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "polygon_detail".to_owned(),
            display_name: "Polygon Detail".to_owned(),
            description: "Specifies the level of detail of the output polygons.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(PolygonDetail::Standard.to_string()),
            domain: Some(Domain::CodedValues(PolygonDetail::tokens())),
            multi_value: false,
        });
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(&self.in_features),
            GpValue::from(&self.out_feature_class),
            GpValue::from(&self.break_values),
            GpValue::from(self.measure_units),
            GpValue::from(self.id_field.clone()),
            GpValue::from(self.overlap_type),
            GpValue::from(self.travel_direction),
            GpValue::from(self.polygon_detail),
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
            "break_values" => self.break_values = parse_optional_string(value).unwrap_or_default(),
            "measure_units" => self.measure_units = parse_optional(name, value)?,
            "id_field" => self.id_field = parse_optional_string(value),
            "overlap_type" => self.overlap_type = parse_optional(name, value)?,
            "travel_direction" => self.travel_direction = parse_optional(name, value)?,
            "polygon_detail" => self.polygon_detail = parse_optional(name, value)?,
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
    fn test_trade_areas_toward_stores() {
        let mut tool = DriveTimeTradeArea::new("stores.shp", "trade_areas.shp", "5 10 15");
        tool.id_field = Some("STORE_ID".to_string());
        tool.travel_direction = Some(TravelDirection::TowardStores);
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "DriveTimeTradeArea_ba stores.shp trade_areas.shp \"5 10 15\" # STORE_ID # TOWARD_STORES"
        );
    }

    #[test]
    fn test_break_values_required() {
        let tool = DriveTimeTradeArea::new("stores.shp", "trade_areas.shp", "");
        assert!(matches!(
            tool.validate(),
            Err(GpError::MissingParameter(p)) if p == "break_values"
        ));
    }
}
