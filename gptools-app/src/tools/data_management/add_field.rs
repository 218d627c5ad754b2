/*
This tool is part of the GpTools geoprocessing catalog.
Authors: GpTools developers
Created: 15/09/2026
Last Modified: 06/10/2026
License: MIT
*/

use super::{TOOLBOX, TOOLBOX_ALIAS};
use crate::tools::*;

coded_value_enum! {
    /// The data type of a new field.
    pub enum FieldDataType {
        Text => "TEXT",
        Float => "FLOAT",
        Double => "DOUBLE",
        Short => "SHORT",
        Long => "LONG",
        Date => "DATE",
        Blob => "BLOB",
        Raster => "RASTER",
        Guid => "GUID",
    }
}

coded_value_enum! {
    pub enum FieldIsNullable {
        Nullable => "NULLABLE",
        NonNullable => "NON_NULLABLE",
    }
}

coded_value_enum! {
    pub enum FieldIsRequired {
        NonRequired => "NON_REQUIRED",
        Required => "REQUIRED",
    }
}

/// Adds a new field to a table or the table of a feature class, feature
/// layer, or raster with attribute tables.
///
/// Precision and scale apply to numeric fields only; length applies to
/// text fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddField {
    pub in_table: String,
    pub field_name: String,
    pub field_type: Option<FieldDataType>,
    pub field_precision: Option<i64>,
    pub field_scale: Option<i64>,
    pub field_length: Option<i64>,
    pub field_alias: Option<String>,
    pub field_is_nullable: Option<FieldIsNullable>,
    pub field_is_required: Option<FieldIsRequired>,
    pub field_domain: Option<String>,
}

impl AddField {
    pub fn new(in_table: &str, field_name: &str, field_type: FieldDataType) -> AddField {
        AddField {
            in_table: in_table.to_string(),
            field_name: field_name.to_string(),
            field_type: Some(field_type),
            ..Default::default()
        }
    }
}

impl GpTool for AddField {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        "AddField".to_string()
    }

    fn get_display_name(&self) -> String {
        "Add Field".to_string()
    }

    fn get_tool_description(&self) -> String {
        "Adds a new field to a table or the table of a feature class, feature layer, or raster with attribute tables.".to_string()
    }

    fn get_toolbox(&self) -> String {
        TOOLBOX.to_string()
    }

    fn get_toolbox_alias(&self) -> String {
        TOOLBOX_ALIAS.to_string()
    }

    fn get_parameter_info(&self) -> Vec<ToolParameter> {
        let non_negative = Some(Domain::Range {
            min: Some(0.0),
            max: None,
        });

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "in_table".to_owned(),
            display_name: "Input Table".to_owned(),
            description: "The input table to which the specified field will be added.".to_owned(),
            parameter_type: ParameterType::TableView,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "field_name".to_owned(),
            display_name: "Field Name".to_owned(),
            description: "The name of the field that will be added to the input table.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "field_type".to_owned(),
            display_name: "Field Type".to_owned(),
            description: "Specifies the field type of the new field.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Required,
            default_value: None,
            domain: Some(Domain::CodedValues(FieldDataType::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "field_precision".to_owned(),
            display_name: "Field Precision".to_owned(),
            description: "The number of digits that can be stored in the field.".to_owned(),
            parameter_type: ParameterType::Long,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: non_negative.clone(),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "field_scale".to_owned(),
            display_name: "Field Scale".to_owned(),
            description: "The number of decimal places stored in a field.".to_owned(),
            parameter_type: ParameterType::Long,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: non_negative.clone(),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "field_length".to_owned(),
            display_name: "Field Length".to_owned(),
            description: "The length of the field, for text fields.".to_owned(),
            parameter_type: ParameterType::Long,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: non_negative,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "field_alias".to_owned(),
            display_name: "Field Alias".to_owned(),
            description: "The alternate name given to the field name.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "field_is_nullable".to_owned(),
            display_name: "Field IsNullable".to_owned(),
            description: "Specifies whether the field can contain null values.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(FieldIsNullable::Nullable.to_string()),
            domain: Some(Domain::CodedValues(FieldIsNullable::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "field_is_required".to_owned(),
            display_name: "Field IsRequired".to_owned(),
            description: "Specifies whether the field being created is a required field for the table.".to_owned(),
            parameter_type: ParameterType::Boolean,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: Some(FieldIsRequired::NonRequired.to_string()),
            domain: Some(Domain::CodedValues(FieldIsRequired::tokens())),
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "field_domain".to_owned(),
            display_name: "Field Domain".to_owned(),
            description: "Constrains the values allowed in any particular attribute.".to_owned(),
            parameter_type: ParameterType::String,
            direction: Direction::Input,
            kind: ParameterKind::Optional,
            default_value: None,
            domain: None,
            multi_value: false,
        });

        parameters.push(ToolParameter {
            name: "out_table".to_owned(),
            display_name: "Updated Input Table".to_owned(),
            description: "The input table with the field added.".to_owned(),
            parameter_type: ParameterType::TableView,
            direction: Direction::Output,
            kind: ParameterKind::Derived,
            default_value: None,
            domain: None,
            multi_value: false,
        });
        parameters
    }

    fn get_parameter_values(&self) -> Vec<GpValue> {
        vec![
            GpValue::from(&self.in_table),
            GpValue::from(&self.field_name),
            GpValue::from(self.field_type),
            GpValue::from(self.field_precision),
            GpValue::from(self.field_scale),
            GpValue::from(self.field_length),
            GpValue::from(self.field_alias.clone()),
            GpValue::from(self.field_is_nullable),
            GpValue::from(self.field_is_required),
            GpValue::from(self.field_domain.clone()),
            GpValue::Empty,
        ]
    }

    fn get_environments(&self) -> Vec<EnvironmentSetting> {
        general_environments()
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), GpError> {
        match name.to_lowercase().as_ref() {
            "in_table" => self.in_table = parse_optional_string(value).unwrap_or_default(),
            "field_name" => self.field_name = parse_optional_string(value).unwrap_or_default(),
            "field_type" => self.field_type = parse_optional(name, value)?,
            "field_precision" => self.field_precision = parse_optional(name, value)?,
            "field_scale" => self.field_scale = parse_optional(name, value)?,
            "field_length" => self.field_length = parse_optional(name, value)?,
            "field_alias" => self.field_alias = parse_optional_string(value),
            "field_is_nullable" => self.field_is_nullable = parse_optional(name, value)?,
            "field_is_required" => self.field_is_required = parse_optional(name, value)?,
            "field_domain" => self.field_domain = parse_optional_string(value),
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
    fn test_text_field_with_length() {
        let mut tool = AddField::new("parcels.shp", "OWNER", FieldDataType::Text);
        tool.field_length = Some(50);
        tool.field_alias = Some("Owner Name".to_string());
        tool.field_is_nullable = Some(FieldIsNullable::NonNullable);
        let request = ExecuteRequest::from_tool(&tool, &EnvironmentSettings::new()).unwrap();
        assert_eq!(
            request.to_command_string(),
            "AddField_management parcels.shp OWNER TEXT # # 50 \"Owner Name\" NON_NULLABLE"
        );
    }

    #[test]
    fn test_field_length_must_be_a_number() {
        let mut tool = AddField::default();
        assert!(tool.set_parameter("field_length", "long").is_err());
        tool.set_parameter("field_length", "-5").unwrap();
        assert!(matches!(tool.validate(), Err(GpError::MissingParameter(_))));
        tool.set_parameter("in_table", "t.dbf").unwrap();
        tool.set_parameter("field_name", "F").unwrap();
        tool.set_parameter("field_type", "short").unwrap();
        assert!(matches!(tool.validate(), Err(GpError::OutOfRange { .. })));
    }
}
