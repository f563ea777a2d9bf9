use crate::cell::Cell;
use anyhow::{Context, Result};
use contagion_common::Snapshot;
use log::{error, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialization formats accepted for recorded snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Bincode,
    MessagePack,
}

impl SnapshotFormat {
    /// Maps the config string to a format. Unknown names fall back to JSON.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.unwrap_or("json") {
            "json" => SnapshotFormat::Json,
            "bincode" => SnapshotFormat::Bincode,
            "messagepack" => SnapshotFormat::MessagePack,
            other => {
                error!("Unknown output format: {}. Using JSON instead.", other);
                SnapshotFormat::Json
            }
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            SnapshotFormat::Json => "json",
            SnapshotFormat::Bincode => "bin",
            SnapshotFormat::MessagePack => "msgpack",
        }
    }
}

/// Writes all snapshots to `<base>_snapshots.<ext>` and returns the path used.
pub fn save_snapshots(base_filename: &str, format: SnapshotFormat, snapshots: &[Snapshot]) -> Result<String> {
    let filename = format!("{}_snapshots.{}", base_filename, format.extension());
    let file = File::create(&filename)
        .with_context(|| format!("Error creating snapshot file '{}'", filename))?;
    let mut writer = BufWriter::new(file);
    write_snapshots(&mut writer, format, snapshots)?;
    writer.flush()?;
    info!("All snapshots saved to {} ({:?} format)", filename, format);
    Ok(filename)
}

/// Serializes `snapshots` into any writer.
pub fn write_snapshots<W: Write>(writer: &mut W, format: SnapshotFormat, snapshots: &[Snapshot]) -> Result<()> {
    match format {
        SnapshotFormat::Json => serde_json::to_writer(writer, snapshots)
            .context("Error serializing snapshots to JSON")?,
        SnapshotFormat::Bincode => bincode::serialize_into(writer, snapshots)
            .context("Error serializing snapshots to bincode")?,
        SnapshotFormat::MessagePack => rmp_serde::encode::write(writer, snapshots)
            .context("Error serializing snapshots to MessagePack")?,
    }
    Ok(())
}

/// Writes final cell positions and health labels as CSV.
pub fn save_positions<P: AsRef<Path>>(path: P, population: &[Cell]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Error saving CSV file '{}'", path.display()))?;
    write_positions(&mut writer, population)?;
    writer.flush()?;
    info!("Final positions saved to {}", path.display());
    Ok(())
}

fn write_positions<W: Write>(writer: &mut csv::Writer<W>, population: &[Cell]) -> Result<()> {
    writer.write_record(["x", "y", "health"])?;
    for cell in population {
        writer.write_record([
            format!("{:.4}", cell.location.x),
            format!("{:.4}", cell.location.y),
            cell.color_tag().to_string(),
        ])?;
    }
    Ok(())
}
