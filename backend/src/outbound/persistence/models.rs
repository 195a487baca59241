//! Internal Diesel row structs for the customer tables.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversion into domain records happens
//! here so schema changes stay contained.

use diesel::prelude::*;

use crate::domain::{Corporate, Individual};

use super::schema::{corporates, individuals};

/// Row struct for reading from the individuals table.
///
/// `email` is deliberately not selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = individuals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct IndividualRow {
    pub id: i64,
    pub name: String,
}

impl From<IndividualRow> for Individual {
    fn from(row: IndividualRow) -> Self {
        Self::new(row.id, row.name)
    }
}

/// Insertable struct for creating individual records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = individuals)]
pub(crate) struct NewIndividualRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Row struct for reading from the corporates table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = corporates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CorporateRow {
    pub id: i64,
    pub name: String,
}

impl From<CorporateRow> for Corporate {
    fn from(row: CorporateRow) -> Self {
        Self::new(row.id, row.name)
    }
}

/// Insertable struct for creating corporate records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = corporates)]
pub(crate) struct NewCorporateRow<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_convert_into_domain_records() {
        let individual = Individual::from(IndividualRow {
            id: 1,
            name: "個人A".to_owned(),
        });
        let corporate = Corporate::from(CorporateRow {
            id: 10,
            name: "法人X".to_owned(),
        });

        assert_eq!(individual, Individual::new(1, "個人A"));
        assert_eq!(corporate, Corporate::new(10, "法人X"));
    }
}
