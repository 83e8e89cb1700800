use mapa_core::error::MapaError;
use mapa_core::model::ScheduleRecord;

pub fn print(records: &[ScheduleRecord]) -> Result<(), MapaError> {
    let json = serde_json::to_string_pretty(records)?;
    println!("{json}");
    Ok(())
}
