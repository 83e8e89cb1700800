use std::path::Path;

use csv::WriterBuilder;

use crate::error::MapaError;
use crate::export::SheetLayout;

pub fn write_csv(layout: &SheetLayout, path: &Path) -> Result<(), MapaError> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    write_rows(&mut writer, layout)?;
    writer.flush()?;
    Ok(())
}

fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    layout: &SheetLayout,
) -> Result<(), MapaError> {
    for row in &layout.rows {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    Ok(())
}
