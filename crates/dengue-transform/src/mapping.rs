//! Per-line mapping: naming case fields, deriving the month, keying rain.

use tracing::debug;

use dengue_model::{CaseColumn, CaseRecord, JoinError, JoinKey, KEY_SEPARATOR, Result};

/// Number of columns in a rainfall line.
pub const RAIN_FIELD_COUNT: usize = 3;

/// First two dash-separated components of a date, e.g. `2015-11-05` → `2015-11`.
pub fn year_month(date: &str) -> String {
    let mut parts = date.splitn(3, KEY_SEPARATOR);
    match (parts.next(), parts.next()) {
        (Some(year), Some(month)) => format!("{year}{KEY_SEPARATOR}{month}"),
        (Some(year), None) => year.to_string(),
        _ => String::new(),
    }
}

/// Names a parsed case line against the fixed case schema.
pub fn to_case_record(fields: Vec<String>) -> CaseRecord {
    CaseRecord::from_fields(fields)
}

/// Sets `ano_mes` from `data_iniSE`.
pub fn derive_month(mut record: CaseRecord) -> Result<CaseRecord> {
    let ano_mes = year_month(record.require(CaseColumn::DataIniSe)?);
    record.ano_mes = Some(ano_mes);
    Ok(record)
}

/// A parsed rainfall line, before negative readings are clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainReading<'a> {
    pub data: &'a str,
    pub mm: f64,
    pub uf: &'a str,
}

impl<'a> RainReading<'a> {
    /// Reads `(data, mm, uf)`; any other field count is malformed.
    pub fn from_fields(fields: &'a [String]) -> Result<Self> {
        let [data, mm, uf] = fields else {
            return Err(JoinError::MalformedLine {
                expected: RAIN_FIELD_COUNT,
                found: fields.len(),
            });
        };
        let mm = mm
            .trim()
            .parse::<f64>()
            .map_err(|source| JoinError::InvalidRainfall {
                value: mm.clone(),
                source,
            })?;
        Ok(Self {
            data: data.as_str(),
            mm,
            uf: uf.as_str(),
        })
    }

    /// Sensor artifacts below zero.
    pub fn is_negative(&self) -> bool {
        self.mm < 0.0
    }

    /// `(uf-ano-mes, mm)` with negative readings clamped to zero.
    pub fn keyed(&self) -> (JoinKey, f64) {
        let key = JoinKey::new(self.uf, &year_month(self.data));
        let mm = if self.is_negative() {
            debug!(key = %key, mm = self.mm, "clamping negative rainfall");
            0.0
        } else {
            self.mm
        };
        (key, mm)
    }
}

/// Turns a parsed rainfall line into its keyed contribution.
pub fn rain_to_keyed(fields: &[String]) -> Result<(JoinKey, f64)> {
    Ok(RainReading::from_fields(fields)?.keyed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn year_month_takes_first_two_components() {
        assert_eq!(year_month("2015-11-05"), "2015-11");
        assert_eq!(year_month("2015-11-05T00:00:00"), "2015-11");
        assert_eq!(year_month("2015-11"), "2015-11");
        assert_eq!(year_month("20151105"), "20151105");
        assert_eq!(year_month(""), "");
    }

    #[test]
    fn derive_month_sets_ano_mes() {
        let record = to_case_record(fields(&["1", "2016-02-14", "3"]));
        let record = derive_month(record).unwrap();
        assert_eq!(record.ano_mes.as_deref(), Some("2016-02"));
    }

    #[test]
    fn derive_month_without_date_fails() {
        let record = to_case_record(fields(&["1"]));
        let err = derive_month(record).unwrap_err();
        assert!(matches!(err, JoinError::MissingField { field: "data_iniSE" }));
    }

    #[test]
    fn rain_line_is_keyed_by_region_month() {
        let (key, mm) = rain_to_keyed(&fields(&["2015-11-05", "38.2", "CE"])).unwrap();
        assert_eq!(key.as_str(), "CE-2015-11");
        assert_eq!(mm, 38.2);
    }

    #[test]
    fn negative_rain_is_clamped() {
        let (key, mm) = rain_to_keyed(&fields(&["2015-03-01", "-5.0", "SP"])).unwrap();
        assert_eq!(key.as_str(), "SP-2015-03");
        assert_eq!(mm, 0.0);
    }

    #[test]
    fn rain_value_may_be_padded() {
        let (_, mm) = rain_to_keyed(&fields(&["2015-03-01", " 1.5 ", "SP"])).unwrap();
        assert_eq!(mm, 1.5);
    }

    #[test]
    fn non_numeric_rain_is_fatal() {
        let err = rain_to_keyed(&fields(&["2015-03-01", "n/a", "SP"])).unwrap_err();
        assert!(matches!(err, JoinError::InvalidRainfall { .. }));
        assert!(err.to_string().contains("n/a"));
    }

    #[test]
    fn rain_line_needs_three_fields() {
        let err = rain_to_keyed(&fields(&["2015-03-01", "1.0", "SP", "extra"])).unwrap_err();
        assert!(matches!(
            err,
            JoinError::MalformedLine {
                expected: 3,
                found: 4
            }
        ));
        assert!(rain_to_keyed(&fields(&["2015-03-01,1.0"])).is_err());
    }
}
