use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::World;

/// Surviving alien row for the JSONL snapshot. The kill switch itself
/// is runtime state and is flattened to a boolean here.
#[derive(Serialize)]
struct AlienRow<'a> {
    id: u64,
    city: Option<&'a str>,
    cancelled: bool,
}

fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Snapshot the final world state as JSONL in `output_dir` (created if
/// missing): `cities.jsonl` with one city per line and `aliens.jsonl`
/// with one surviving alien per line. Diagnostics only; the canonical
/// output is the map-format `Display` rendering.
pub fn flush_to_jsonl(world: &World, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join("cities.jsonl"), world.cities.values())?;
    write_jsonl(
        &output_dir.join("aliens.jsonl"),
        world.aliens.values().map(|alien| AlienRow {
            id: alien.id,
            city: alien.city.as_deref(),
            cancelled: alien.is_cancelled(),
        }),
    )?;

    Ok(())
}
