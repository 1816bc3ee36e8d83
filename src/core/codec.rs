use crate::domain::model::{EligibleRecord, RawRecord, INPUT_COLUMNS, OUTPUT_COLUMNS};
use crate::utils::error::Result;

/// Parses CSV bytes with a header row into records.
///
/// Short rows simply lack the trailing fields; extra cells without a
/// header are dropped.
pub fn decode_records(data: &[u8]) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    for column in missing_columns(&headers) {
        tracing::warn!("Input has no '{}' column; treating it as empty", column);
    }

    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let record: RawRecord = headers.iter().zip(row.iter()).collect();
        records.push(record);
    }

    tracing::debug!("Decoded {} rows with columns: {:?}", records.len(), headers);
    Ok(records)
}

/// Writes results with the fixed output header.
pub fn encode_results<'a, I>(records: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a EligibleRecord>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(OUTPUT_COLUMNS)?;

    for record in records {
        let funding = record.funding().to_string();
        let row = OUTPUT_COLUMNS.iter().map(|column| match *column {
            "funding_amount_parsed" => funding.as_str(),
            field => record.get(field),
        });
        writer.write_record(row)?;
    }

    into_bytes(writer)
}

/// Writes rows using the input header, for the starter template.
pub fn encode_raw_records(records: &[RawRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(INPUT_COLUMNS)?;

    for record in records {
        writer.write_record(INPUT_COLUMNS.iter().map(|field| record.get(field)))?;
    }

    into_bytes(writer)
}

fn into_bytes(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| crate::utils::error::TrackerError::IoError(e.into_error()))
}

fn missing_columns(headers: &csv::StringRecord) -> Vec<&'static str> {
    INPUT_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|name| name == *column))
        .collect()
}
