use crate::error::DatasetError;
use core_types::{Algorithm, BenchmarkRecord, DensityRecord};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One raw row of the timing benchmark, using the harness' column names.
#[derive(Debug, Deserialize)]
struct BenchmarkRow {
    alg: String,
    n: u32,
    k: u32,
    t: i64,
    file: String,
    min_st: u32,
}

/// One raw row of the determinization density experiment.
#[derive(Debug, Deserialize)]
struct DensityRow {
    states: u32,
    alpha: u32,
    d: f64,
    fd: f64,
    states_dfa: u64,
    c_h: u64,
    t_h: i64,
    c_i: u64,
    t_i: i64,
    c_hi: u64,
    t_hi: i64,
}

impl TryFrom<BenchmarkRow> for BenchmarkRecord {
    type Error = core_types::CoreError;

    fn try_from(row: BenchmarkRow) -> Result<Self, Self::Error> {
        let algorithm: Algorithm = row.alg.parse()?;
        BenchmarkRecord::new(algorithm, row.n, row.k, row.t, row.file, row.min_st)
    }
}

impl TryFrom<DensityRow> for DensityRecord {
    type Error = core_types::CoreError;

    fn try_from(row: DensityRow) -> Result<Self, Self::Error> {
        let record = DensityRecord {
            states: row.states,
            alphabet: row.alpha,
            density: row.d,
            final_density: row.fd,
            dfa_states: row.states_dfa,
            hopcroft_classes: row.c_h,
            hopcroft_time_ns: row.t_h,
            incremental_classes: row.c_i,
            incremental_time_ns: row.t_i,
            hybrid_classes: row.c_hi,
            hybrid_time_ns: row.t_hi,
        };
        record.validate()?;
        Ok(record)
    }
}

/// Reads every benchmark record from the CSV file at `path`.
pub fn read_benchmark_records<P: AsRef<Path>>(path: P) -> Result<Vec<BenchmarkRecord>, DatasetError> {
    let path = path.as_ref();
    let file = open(path)?;
    let records = parse_rows::<BenchmarkRow, BenchmarkRecord, _>(file, &path.display().to_string())?;
    tracing::info!(path = %path.display(), records = records.len(), "Benchmark dataset loaded.");
    Ok(records)
}

/// Parses benchmark records from any CSV source.
pub fn parse_benchmark_records<R: Read>(reader: R) -> Result<Vec<BenchmarkRecord>, DatasetError> {
    parse_rows::<BenchmarkRow, BenchmarkRecord, _>(reader, "<input>")
}

/// Reads every density record from the CSV file at `path`.
pub fn read_density_records<P: AsRef<Path>>(path: P) -> Result<Vec<DensityRecord>, DatasetError> {
    let path = path.as_ref();
    let file = open(path)?;
    let records = parse_rows::<DensityRow, DensityRecord, _>(file, &path.display().to_string())?;
    tracing::info!(path = %path.display(), records = records.len(), "Density dataset loaded.");
    Ok(records)
}

/// Parses density records from any CSV source.
pub fn parse_density_records<R: Read>(reader: R) -> Result<Vec<DensityRecord>, DatasetError> {
    parse_rows::<DensityRow, DensityRecord, _>(reader, "<input>")
}

fn open(path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_rows<Row, Record, R>(reader: R, name: &str) -> Result<Vec<Record>, DatasetError>
where
    Row: DeserializeOwned,
    Record: TryFrom<Row, Error = core_types::CoreError>,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<Row>().enumerate() {
        let row = row?;
        let record = Record::try_from(row).map_err(|source| DatasetError::InvalidRecord {
            row: index + 1,
            source,
        })?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(DatasetError::Empty(name.to_string()));
    }
    Ok(records)
}
