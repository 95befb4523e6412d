use diesel::prelude::*;

use super::schema::contacts;
use crate::api::{Contact, ContactFields, ContactId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContactRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Contact {
            id: ContactId(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
        }
    }
}

/// Writable columns, shared by inserts and full-row updates.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = contacts)]
pub struct ContactFieldsRow {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<&ContactFields> for ContactFieldsRow {
    fn from(fields: &ContactFields) -> Self {
        ContactFieldsRow {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            phone: fields.phone.clone(),
        }
    }
}
