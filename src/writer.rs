use std::fs::File;
use std::path::Path;

use csv::Writer;

use super::error::WriterError;
use super::plane::DecodedEvent;

/*
    The CSV sink: one row per surviving channel, carrying the event number,
    the plane it landed on, the trigger id, the grid position, and the
    sixteen sample fields of the hit record. The trigger column is left
    empty when no trigger id could be read.
 */
pub struct PlaneCsvWriter {
    writer: Writer<File>,
}

impl PlaneCsvWriter {
    pub fn new(path: &Path) -> Result<Self, WriterError> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record([
            "event", "plane", "trigger", "row", "column", "lg_m2", "lg_m1", "lg_0", "lg_p1",
            "lg_p2", "hg_m2", "hg_m1", "hg_0", "hg_p1", "hg_p2", "toa_fall", "toa_rise",
            "tot_slow", "tot_fast", "ped_1", "ped_2",
        ])?;
        Ok(PlaneCsvWriter { writer })
    }

    /// Append one row per hit of the event and flush.
    pub fn write_event(
        &mut self,
        event_number: u64,
        event: &DecodedEvent,
    ) -> Result<(), WriterError> {
        for plane in event.planes.iter() {
            let trigger = match plane.trigger_id {
                Some(id) => id.to_string(),
                None => String::new(),
            };
            for hit in plane.hits.iter() {
                let mut record: Vec<String> = Vec::with_capacity(21);
                record.push(event_number.to_string());
                record.push(plane.id.to_string());
                record.push(trigger.clone());
                record.push(hit.row.to_string());
                record.push(hit.column.to_string());
                for sample in hit.samples.iter() {
                    record.push(sample.to_string());
                }
                self.writer.write_record(&record)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
