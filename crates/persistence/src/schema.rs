//! Static table descriptors.
//!
//! Every statement the generic repository builds takes its table and column
//! names from these descriptors and nowhere else. Values are always bound.

use std::fmt;

/// Storage type of a column, used to bind values with the right SQL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// `BIGINT`, including foreign keys.
    BigInt,
    /// `INTEGER`.
    Integer,
    /// `DOUBLE PRECISION`.
    Double,
    Text,
    Boolean,
    Date,
    /// `TIMESTAMPTZ`.
    Timestamp,
}

impl ColumnKind {
    pub fn sql_name(&self) -> &'static str {
        match self {
            ColumnKind::BigInt => "bigint",
            ColumnKind::Integer => "integer",
            ColumnKind::Double => "double precision",
            ColumnKind::Text => "text",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Date => "date",
            ColumnKind::Timestamp => "timestamptz",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

/// A writable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
    /// NOT NULL without a default: must be supplied on insert.
    pub required: bool,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Table referenced when this column is a foreign key.
    pub references: Option<&'static str>,
}

impl Column {
    pub const fn required(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            nullable: false,
            references: None,
        }
    }

    /// NOT NULL with a database default: may be omitted on insert, never
    /// set to NULL.
    pub const fn defaulted(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: false,
            references: None,
        }
    }

    pub const fn optional(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: true,
            references: None,
        }
    }

    pub const fn foreign_key(name: &'static str, table: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::BigInt,
            required: true,
            nullable: false,
            references: Some(table),
        }
    }

    pub const fn optional_foreign_key(name: &'static str, table: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::BigInt,
            required: false,
            nullable: true,
            references: Some(table),
        }
    }

    pub fn is_foreign_key(&self) -> bool {
        self.references.is_some()
    }
}

/// Descriptor of one stored entity.
#[derive(Debug)]
pub struct TableSchema {
    pub table: &'static str,
    /// Singular name used in messages, e.g. `"apartment"`.
    pub entity: &'static str,
    /// Server-assigned `BIGSERIAL` key. Never writable.
    pub primary_key: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&'static Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn required_columns(&self) -> impl Iterator<Item = &'static Column> {
        self.columns.iter().filter(|c| c.required)
    }

    /// Primary key followed by every writable column, in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.primary_key).chain(self.columns.iter().map(|c| c.name))
    }

    /// Quoted, comma-separated select list.
    pub fn select_list(&self) -> String {
        self.column_names()
            .map(quote_ident)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Double-quotes an identifier taken from a descriptor.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

use ColumnKind::*;

/// Columns shared by realtors, owners and buyers.
const ACCOUNT: [Column; 6] = [
    Column::required("username", Text),
    Column::required("password", Text),
    Column::required("name", Text),
    Column::required("contact_info", Text),
    Column::required("birth_date", Date),
    Column::required("gender", Text),
];

pub const AGENCIES: TableSchema = TableSchema {
    table: "agencies",
    entity: "agency",
    primary_key: "id",
    columns: &[
        Column::required("name", Text),
        Column::required("address", Text),
        Column::required("contact_info", Text),
        Column::optional("commission_rate", Double),
    ],
};

pub const REALTORS: TableSchema = TableSchema {
    table: "realtors",
    entity: "realtor",
    primary_key: "id",
    columns: &[
        ACCOUNT[0],
        ACCOUNT[1],
        ACCOUNT[2],
        ACCOUNT[3],
        ACCOUNT[4],
        ACCOUNT[5],
        Column::foreign_key("agency_id", "agencies"),
    ],
};

pub const OWNERS: TableSchema = TableSchema {
    table: "owners",
    entity: "owner",
    primary_key: "owners_id",
    columns: &ACCOUNT,
};

pub const BUYERS: TableSchema = TableSchema {
    table: "buyers",
    entity: "buyer",
    primary_key: "id",
    columns: &ACCOUNT,
};

pub const DISTRICTS: TableSchema = TableSchema {
    table: "districts",
    entity: "district",
    primary_key: "id",
    columns: &[Column::required("name", Text)],
};

pub const STREETS: TableSchema = TableSchema {
    table: "streets",
    entity: "street",
    primary_key: "id",
    columns: &[
        Column::foreign_key("district_id", "districts"),
        Column::required("name", Text),
    ],
};

pub const HOUSE_TYPES: TableSchema = TableSchema {
    table: "house_types",
    entity: "house type",
    primary_key: "id",
    columns: &[
        Column::required("description", Text),
        Column::optional("type", Text),
    ],
};

pub const HOUSES: TableSchema = TableSchema {
    table: "houses",
    entity: "house",
    primary_key: "id",
    columns: &[
        Column::foreign_key("street_id", "streets"),
        Column::required("house_number", Text),
        Column::foreign_key("type_id", "house_types"),
        Column::optional("floors", Integer),
    ],
};

pub const APARTMENT_TYPES: TableSchema = TableSchema {
    table: "apartment_types",
    entity: "apartment type",
    primary_key: "id",
    columns: &[
        Column::optional("num_rooms", Integer),
        Column::optional("is_furnished", Boolean),
        Column::required("description", Text),
    ],
};

pub const CONDITIONS: TableSchema = TableSchema {
    table: "conditions",
    entity: "condition",
    primary_key: "id",
    columns: &[
        Column::required("description", Text),
        Column::required("price", Double),
        Column::required("for_sale", Boolean),
    ],
};

pub const STATUSES: TableSchema = TableSchema {
    table: "statuses",
    entity: "status",
    primary_key: "id",
    columns: &[
        Column::optional("date_listed", Timestamp),
        Column::required("is_active", Boolean),
    ],
};

pub const APARTMENTS: TableSchema = TableSchema {
    table: "apartments",
    entity: "apartment",
    primary_key: "id",
    columns: &[
        Column::optional_foreign_key("house_id", "houses"),
        Column::foreign_key("apartment_type_id", "apartment_types"),
        Column::optional_foreign_key("owner_id", "owners"),
        Column::optional_foreign_key("condition_id", "conditions"),
        Column::optional_foreign_key("status_id", "statuses"),
        Column::required("apartment_number", Text),
        Column::required("square_meters", Double),
        Column::required("owner_price", Double),
        Column::optional("description", Text),
    ],
};

pub const APARTMENT_PHOTOS: TableSchema = TableSchema {
    table: "apartment_photos",
    entity: "apartment photo",
    primary_key: "id",
    columns: &[
        Column::foreign_key("apartment_id", "apartments"),
        Column::required("photo_url", Text),
    ],
};

pub const SALES: TableSchema = TableSchema {
    table: "sales",
    entity: "sale",
    primary_key: "id",
    columns: &[
        Column::foreign_key("apartment_id", "apartments"),
        Column::foreign_key("buyer_id", "buyers"),
        Column::foreign_key("seller_id", "owners"),
        Column::foreign_key("realtor_id", "realtors"),
        Column::required("sale_date", Timestamp),
        Column::required("sale_price", Double),
        Column::required("commission", Double),
        Column::required("profit", Double),
    ],
};

pub const SALES_RENT: TableSchema = TableSchema {
    table: "sales_rent",
    entity: "sale or rental",
    primary_key: "id",
    columns: &[
        Column::foreign_key("apartment_id", "apartments"),
        Column::foreign_key("renter_id", "buyers"),
        Column::foreign_key("owner_id", "owners"),
        Column::foreign_key("realtor_id", "realtors"),
        Column::required("kind", Text),
        Column::optional("sale_date", Timestamp),
        Column::optional("sale_price", Double),
        Column::optional("rent_start", Timestamp),
        Column::optional("rent_end", Timestamp),
        Column::optional("rent_price", Double),
        Column::required("commission", Double),
        Column::required("profit", Double),
    ],
};

pub const ANALYTICS: TableSchema = TableSchema {
    table: "analytics",
    entity: "analytics event",
    primary_key: "id",
    columns: &[
        Column::foreign_key("buyer_id", "buyers"),
        Column::foreign_key("apartment_id", "apartments"),
        Column::required("event_type", Text),
        Column::defaulted("event_timestamp", Timestamp),
    ],
};

/// Every descriptor, parents before children.
pub static ALL_TABLES: [&TableSchema; 16] = [
    &AGENCIES,
    &REALTORS,
    &OWNERS,
    &BUYERS,
    &DISTRICTS,
    &STREETS,
    &HOUSE_TYPES,
    &HOUSES,
    &APARTMENT_TYPES,
    &CONDITIONS,
    &STATUSES,
    &APARTMENTS,
    &APARTMENT_PHOTOS,
    &SALES,
    &SALES_RENT,
    &ANALYTICS,
];

/// Looks up a descriptor by table name.
pub fn table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().copied().find(|t| t.table == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_primary_key() {
        assert_eq!(OWNERS.primary_key, "owners_id");
        assert!(OWNERS.column("owners_id").is_none());
        assert_eq!(OWNERS.column_names().next(), Some("owners_id"));
    }

    #[test]
    fn test_foreign_keys_reference_known_tables() {
        for schema in ALL_TABLES.iter() {
            for column in schema.columns.iter().filter(|c| c.is_foreign_key()) {
                let target = column.references.unwrap();
                assert!(
                    table(target).is_some(),
                    "{}.{} references unknown table {}",
                    schema.table,
                    column.name,
                    target
                );
                assert_eq!(column.kind, ColumnKind::BigInt);
            }
        }
    }

    #[test]
    fn test_referenced_tables_come_first() {
        for (idx, schema) in ALL_TABLES.iter().enumerate() {
            for column in schema.columns.iter().filter_map(|c| c.references) {
                let parent = ALL_TABLES.iter().position(|t| t.table == column).unwrap();
                assert!(parent < idx, "{} listed before {}", schema.table, column);
            }
        }
    }

    #[test]
    fn test_column_names_are_unique() {
        for schema in ALL_TABLES.iter() {
            let mut names: Vec<&str> = schema.column_names().collect();
            let len = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), len, "duplicate column in {}", schema.table);
        }
    }

    #[test]
    fn test_apartment_optional_links() {
        for name in ["house_id", "owner_id", "condition_id", "status_id"] {
            let column = APARTMENTS.column(name).unwrap();
            assert!(!column.required, "{name} should be nullable");
            assert!(column.is_foreign_key());
        }
        assert!(APARTMENTS.column("apartment_type_id").unwrap().required);
    }

    #[test]
    fn test_defaulted_column_is_neither_required_nor_nullable() {
        let column = ANALYTICS.column("event_timestamp").unwrap();
        assert!(!column.required);
        assert!(!column.nullable);
        assert!(ANALYTICS.column("event_type").unwrap().required);
    }

    #[test]
    fn test_select_list_quotes_reserved_words() {
        assert_eq!(
            HOUSE_TYPES.select_list(),
            r#""id", "description", "type""#
        );
    }

    #[test]
    fn test_quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }
}
