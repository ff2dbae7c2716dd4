//! Dengue case records.

use serde::{Deserialize, Serialize};

use crate::error::{JoinError, Result};

/// Columns of the case file, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseColumn {
    Id,
    DataIniSe,
    Casos,
    IbgeCode,
    Cidade,
    Uf,
    Cep,
    Latitude,
    Longitude,
}

impl CaseColumn {
    /// Positional schema of a case line.
    pub const ALL: [CaseColumn; 9] = [
        CaseColumn::Id,
        CaseColumn::DataIniSe,
        CaseColumn::Casos,
        CaseColumn::IbgeCode,
        CaseColumn::Cidade,
        CaseColumn::Uf,
        CaseColumn::Cep,
        CaseColumn::Latitude,
        CaseColumn::Longitude,
    ];

    /// Column name as it appears in the source header.
    pub fn name(self) -> &'static str {
        match self {
            CaseColumn::Id => "id",
            CaseColumn::DataIniSe => "data_iniSE",
            CaseColumn::Casos => "casos",
            CaseColumn::IbgeCode => "ibge_code",
            CaseColumn::Cidade => "cidade",
            CaseColumn::Uf => "uf",
            CaseColumn::Cep => "cep",
            CaseColumn::Latitude => "latitude",
            CaseColumn::Longitude => "longitude",
        }
    }
}

/// Name of the derived year-month field.
pub const ANO_MES: &str = "ano_mes";

/// One line of the case file with its fields named.
///
/// A field is `None` when the source line was too short to reach it.
/// `ano_mes` stays `None` until the month has been derived from `data_iniSE`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: Option<String>,
    pub data_ini_se: Option<String>,
    pub casos: Option<String>,
    pub ibge_code: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
    pub cep: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub ano_mes: Option<String>,
}

impl CaseRecord {
    /// Names fields positionally. Missing trailing fields stay absent and
    /// fields beyond the ninth are dropped.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut fields = fields.into_iter();
        Self {
            id: fields.next(),
            data_ini_se: fields.next(),
            casos: fields.next(),
            ibge_code: fields.next(),
            cidade: fields.next(),
            uf: fields.next(),
            cep: fields.next(),
            latitude: fields.next(),
            longitude: fields.next(),
            ano_mes: None,
        }
    }

    /// Value of a schema column, if present.
    pub fn get(&self, column: CaseColumn) -> Option<&str> {
        let value = match column {
            CaseColumn::Id => &self.id,
            CaseColumn::DataIniSe => &self.data_ini_se,
            CaseColumn::Casos => &self.casos,
            CaseColumn::IbgeCode => &self.ibge_code,
            CaseColumn::Cidade => &self.cidade,
            CaseColumn::Uf => &self.uf,
            CaseColumn::Cep => &self.cep,
            CaseColumn::Latitude => &self.latitude,
            CaseColumn::Longitude => &self.longitude,
        };
        value.as_deref()
    }

    /// Value of a schema column, or a missing-field error.
    pub fn require(&self, column: CaseColumn) -> Result<&str> {
        self.get(column)
            .ok_or_else(|| JoinError::missing(column.name()))
    }

    /// Derived year-month, or a missing-field error.
    pub fn require_ano_mes(&self) -> Result<&str> {
        self.ano_mes
            .as_deref()
            .ok_or_else(|| JoinError::missing(ANO_MES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn names_fields_in_schema_order() {
        let record = CaseRecord::from_fields(fields(&[
            "1",
            "2015-11-05",
            "10",
            "2300000",
            "Fortaleza",
            "CE",
            "60000",
            "-3.7",
            "-38.5",
        ]));
        assert_eq!(record.get(CaseColumn::Id), Some("1"));
        assert_eq!(record.get(CaseColumn::Casos), Some("10"));
        assert_eq!(record.get(CaseColumn::Uf), Some("CE"));
        assert_eq!(record.get(CaseColumn::Longitude), Some("-38.5"));
        assert_eq!(record.ano_mes, None);
    }

    #[test]
    fn short_line_leaves_trailing_fields_absent() {
        let record = CaseRecord::from_fields(fields(&["1", "2015-11-05", "10"]));
        assert_eq!(record.get(CaseColumn::Casos), Some("10"));
        assert_eq!(record.get(CaseColumn::Uf), None);
        let err = record.require(CaseColumn::Uf).unwrap_err();
        assert!(matches!(err, JoinError::MissingField { field: "uf" }));
    }

    #[test]
    fn extra_fields_are_dropped() {
        let mut values = vec!["x"; 12];
        values[8] = "lon";
        let record = CaseRecord::from_fields(fields(&values));
        assert_eq!(record.get(CaseColumn::Longitude), Some("lon"));
    }

    #[test]
    fn schema_names_match_source_header() {
        let names: Vec<&str> = CaseColumn::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names.join("|"),
            "id|data_iniSE|casos|ibge_code|cidade|uf|cep|latitude|longitude"
        );
    }
}
