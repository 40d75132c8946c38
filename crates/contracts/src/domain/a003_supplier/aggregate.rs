use crate::domain::common::AggregateRoot;
use crate::shared::editable::{EditableField, EditableRecord};
use crate::shared::serde_helpers::null_as_default;
use crate::shared::validation::{ValidationError, ValidationRules};
use serde::{Deserialize, Serialize};
use serde_json::json;

crate::aggregate_id!(SupplierId);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "contacto", default, deserialize_with = "null_as_default")]
    pub contact: String,

    #[serde(rename = "telefono", default, deserialize_with = "null_as_default")]
    pub phone: String,

    #[serde(rename = "email", default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "inventario/proveedores"
    }

    fn element_name() -> &'static str {
        "Proveedor"
    }

    fn list_name() -> &'static str {
        "Proveedores"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierField {
    Name,
    Contact,
    Phone,
    Email,
}

impl EditableField for SupplierField {
    fn key(&self) -> &'static str {
        match self {
            SupplierField::Name => "nombre",
            SupplierField::Contact => "contacto",
            SupplierField::Phone => "telefono",
            SupplierField::Email => "email",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SupplierField::Name => "Nombre",
            SupplierField::Contact => "Contacto",
            SupplierField::Phone => "Teléfono",
            SupplierField::Email => "Email",
        }
    }
}

const SUPPLIER_FIELDS: &[SupplierField] = &[
    SupplierField::Name,
    SupplierField::Contact,
    SupplierField::Phone,
    SupplierField::Email,
];

impl EditableRecord for Supplier {
    type Field = SupplierField;
    type Draft = SupplierDto;

    fn fields() -> &'static [Self::Field] {
        SUPPLIER_FIELDS
    }

    fn field_value(&self, field: Self::Field) -> String {
        match field {
            SupplierField::Name => self.name.clone(),
            SupplierField::Contact => self.contact.clone(),
            SupplierField::Phone => self.phone.clone(),
            SupplierField::Email => self.email.clone(),
        }
    }

    fn set_field(&mut self, field: Self::Field, raw: &str) -> Result<(), ValidationError> {
        let value = raw.trim().to_string();
        match field {
            SupplierField::Name => self.name = value,
            SupplierField::Contact => self.contact = value,
            SupplierField::Phone => self.phone = value,
            SupplierField::Email => self.email = value,
        }
        Ok(())
    }

    fn field_json(&self, field: Self::Field) -> serde_json::Value {
        json!(self.field_value(field))
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required()
            .with_max_length(120)
            .validate_string(&self.name, "Nombre")?;
        ValidationRules::none()
            .with_min_length(6)
            .with_max_length(20)
            .validate_string(&self.phone, "Teléfono")
    }

    fn draft(name: &str) -> Result<Self::Draft, ValidationError> {
        let dto = SupplierDto {
            name: name.trim().to_string(),
            ..SupplierDto::default()
        };
        ValidationRules::required().validate_string(&dto.name, "Nombre")?;
        Ok(dto)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "contacto")]
    pub contact: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "email")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_phone_rejected() {
        let supplier = Supplier {
            id: SupplierId(2),
            name: "Flores del Valle".into(),
            contact: String::new(),
            phone: String::new(),
            email: String::new(),
        };
        assert!(supplier.edit_cell(SupplierField::Phone, "123").is_err());
        assert!(supplier.edit_cell(SupplierField::Phone, "+56 9 1234 5678").is_ok());
        // Пустой телефон допустим
        assert!(supplier.edit_cell(SupplierField::Phone, "").is_ok());
    }
}
