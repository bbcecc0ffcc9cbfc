use std::{path::Path, sync::Arc};

use arrow::array::{Int64Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::{ArrowWriter, arrow_writer::ArrowWriterOptions};
use parquet::file::metadata::KeyValue;
use parquet::file::properties::WriterProperties;

type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Write a small Parquet file whose footer key-value list is exactly `kv`.
///
/// `None` writes no list at all. The Arrow schema entry is skipped so the
/// footer holds only what the test asked for.
pub fn write_parquet_with_metadata(path: &Path, kv: Option<&[(&str, &str)]>) -> TestResult {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut id_builder = Int64Builder::with_capacity(3);
    let mut name_builder = StringBuilder::new();
    for (id, name) in [(1, "a"), (2, "b"), (3, "c")] {
        id_builder.append_value(id);
        name_builder.append_value(name);
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("name", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(id_builder.finish()) as _,
            Arc::new(name_builder.finish()),
        ],
    )?;

    let kvs = kv.map(|pairs| {
        pairs
            .iter()
            .map(|(k, v)| KeyValue::new(k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
    });
    let props = WriterProperties::builder()
        .set_key_value_metadata(kvs)
        .build();
    let options = ArrowWriterOptions::new()
        .with_properties(props)
        .with_skip_arrow_metadata(true);

    let file = std::fs::File::create(path)?;
    let mut writer = ArrowWriter::try_new_with_options(file, schema, options)?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}
