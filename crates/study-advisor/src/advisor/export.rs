//! Tabular export of a recommendation list.

use super::domain::Recommendation;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize recommendations: {0}")]
    Csv(#[from] csv::Error),
    #[error("exported CSV was not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Render recommendations as CSV with one header row, columns in the wire
/// order `activity,description,confidence,reason,priority,duration,category,rule_fired`.
pub fn to_csv(recommendations: &[Recommendation]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for recommendation in recommendations {
        writer.serialize(recommendation)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Csv(csv::Error::from(err.into_error())))?;
    Ok(String::from_utf8(bytes)?)
}
