//! Parquet fixture writers shared by unit tests.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use parquet::basic::{Repetition, Type as PhysicalType};
use parquet::column::writer::ColumnWriter;
use parquet::file::metadata::KeyValue;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::SerializedFileWriter;
use parquet::schema::types::Type;

/// Shape of the footer key-value list to write.
pub(crate) enum KvSpec {
    /// No key-value list in the footer at all.
    Absent,
    /// A key-value list with zero entries.
    Empty,
    /// The given `(key, value)` entries; `None` leaves the value unset.
    Entries(Vec<(&'static str, Option<&'static str>)>),
}

impl KvSpec {
    fn into_key_values(self) -> Option<Vec<KeyValue>> {
        match self {
            KvSpec::Absent => None,
            KvSpec::Empty => Some(Vec::new()),
            KvSpec::Entries(entries) => Some(
                entries
                    .into_iter()
                    .map(|(k, v)| KeyValue::new(k.to_string(), v.map(str::to_string)))
                    .collect(),
            ),
        }
    }
}

/// Write a small single-column Parquet file whose footer carries `kv`.
pub(crate) fn write_kv_parquet(path: &Path, kv: KvSpec) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let col = Arc::new(
        Type::primitive_type_builder("id", PhysicalType::INT64)
            .with_repetition(Repetition::REQUIRED)
            .build()?,
    );
    let schema = Arc::new(
        Type::group_type_builder("schema")
            .with_fields(vec![col])
            .build()?,
    );

    let props = WriterProperties::builder()
        .set_key_value_metadata(kv.into_key_values())
        .build();

    let file = File::create(path)?;
    let mut writer = SerializedFileWriter::new(file, schema, Arc::new(props))?;

    let mut row_group_writer = writer.next_row_group()?;
    while let Some(mut col_writer) = row_group_writer.next_column()? {
        match col_writer.untyped() {
            ColumnWriter::Int64ColumnWriter(typed) => {
                typed.write_batch(&[1, 2, 3], None, None)?;
            }
            _ => return Err("unexpected column writer type".into()),
        }
        col_writer.close()?;
    }
    row_group_writer.close()?;
    writer.close()?;
    Ok(())
}
