//! Built-in record shapes.

use serde::{Deserialize, Serialize};

use crate::types::{DataType, Field, FieldRef, Record, Schema, Value};

/// A single sale line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub product: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    /// Date as text (`YYYY-MM-DD`).
    pub date: String,
}

/// Fields of [`Sale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaleField {
    Id,
    Product,
    Category,
    Price,
    Quantity,
    Date,
}

/// Numeric fields of [`Sale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaleNumericField {
    Id,
    Price,
    Quantity,
}

impl FieldRef for SaleField {
    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Product => "product",
            Self::Category => "category",
            Self::Price => "price",
            Self::Quantity => "quantity",
            Self::Date => "date",
        }
    }
}

impl FieldRef for SaleNumericField {
    fn name(&self) -> &'static str {
        SaleField::from(*self).name()
    }
}

impl From<SaleNumericField> for SaleField {
    fn from(f: SaleNumericField) -> Self {
        match f {
            SaleNumericField::Id => Self::Id,
            SaleNumericField::Price => Self::Price,
            SaleNumericField::Quantity => Self::Quantity,
        }
    }
}

impl Record for Sale {
    type Field = SaleField;
    type NumericField = SaleNumericField;

    const SHAPE: &'static str = "Sale";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("product", DataType::Utf8),
            Field::new("category", DataType::Utf8),
            Field::new("price", DataType::Float64),
            Field::new("quantity", DataType::Int64),
            Field::new("date", DataType::Date),
        ])
    }

    fn value(&self, field: SaleField) -> Value {
        match field {
            SaleField::Id => Value::Int64(self.id),
            SaleField::Product => Value::Utf8(self.product.clone()),
            SaleField::Category => Value::Utf8(self.category.clone()),
            SaleField::Price => Value::Float64(self.price),
            SaleField::Quantity => Value::Int64(self.quantity),
            SaleField::Date => Value::Utf8(self.date.clone()),
        }
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub active: bool,
}

/// Fields of [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Id,
    Name,
    Email,
    Age,
    Active,
}

/// Numeric fields of [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserNumericField {
    Id,
    Age,
}

impl FieldRef for UserField {
    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Active => "active",
        }
    }
}

impl FieldRef for UserNumericField {
    fn name(&self) -> &'static str {
        UserField::from(*self).name()
    }
}

impl From<UserNumericField> for UserField {
    fn from(f: UserNumericField) -> Self {
        match f {
            UserNumericField::Id => Self::Id,
            UserNumericField::Age => Self::Age,
        }
    }
}

impl Record for User {
    type Field = UserField;
    type NumericField = UserNumericField;

    const SHAPE: &'static str = "User";

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("name", DataType::Utf8),
            Field::new("email", DataType::Utf8),
            Field::new("age", DataType::Int64),
            Field::new("active", DataType::Bool),
        ])
    }

    fn value(&self, field: UserField) -> Value {
        match field {
            UserField::Id => Value::Int64(self.id),
            UserField::Name => Value::Utf8(self.name.clone()),
            UserField::Email => Value::Utf8(self.email.clone()),
            UserField::Age => Value::Int64(self.age),
            UserField::Active => Value::Bool(self.active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Sale, SaleField, SaleNumericField, User, UserField};
    use crate::types::{FieldRef, Record, Value};

    #[test]
    fn field_names_follow_schema_order() {
        let fields = [
            SaleField::Id,
            SaleField::Product,
            SaleField::Category,
            SaleField::Price,
            SaleField::Quantity,
            SaleField::Date,
        ];
        let schema = Sale::schema();
        let names: Vec<&str> = schema.field_names().collect();
        let expected: Vec<&str> = fields.iter().map(|f| f.name()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn numeric_fields_map_onto_shape_fields() {
        assert_eq!(SaleField::from(SaleNumericField::Price), SaleField::Price);
        assert_eq!(SaleNumericField::Quantity.name(), "quantity");
    }

    #[test]
    fn value_reads_typed_fields() {
        let user = User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: 36,
            active: true,
        };
        assert_eq!(user.value(UserField::Age), Value::Int64(36));
        assert_eq!(user.value(UserField::Active), Value::Bool(true));
        assert_eq!(user.value(UserField::Name), Value::from("Ada"));
    }
}
