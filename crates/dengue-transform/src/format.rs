//! Flattening joined groups into output rows and lines.

use dengue_model::{JoinError, JoinedGroup, OutputRow, Result, Source};

/// Renders a float the way the report has always shown it: integral values
/// keep a trailing `.0` (`8.0`), everything else uses the shortest
/// round-tripping form (`38.2`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

fn first(group: &JoinedGroup, source: Source) -> Result<f64> {
    group
        .values(source)
        .first()
        .copied()
        .ok_or_else(|| JoinError::missing(source.name()))
}

/// Splits the key into `(uf, ano, mes)` and takes the first value of each side.
pub fn flatten(group: &JoinedGroup) -> Result<OutputRow> {
    let (uf, ano, mes) = group.key.parts()?;
    let chuva = first(group, Source::Chuvas)?;
    let dengue = first(group, Source::Dengue)?;
    Ok(OutputRow {
        uf: uf.to_string(),
        ano: ano.to_string(),
        mes: mes.to_string(),
        chuva: format_float(chuva),
        dengue: format_float(dengue),
    })
}

/// Joins the row's fields with `delimiter`.
pub fn format_row(row: &OutputRow, delimiter: char) -> String {
    let mut buf = [0u8; 4];
    row.fields().join(&*delimiter.encode_utf8(&mut buf))
}
