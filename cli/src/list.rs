use job_catalog::{Catalog, Query};
use std::io::Write;

use crate::Result;

pub fn list(catalog: &Catalog, query: &Query, json: bool, out: &mut impl Write) -> Result<()> {
    let view = catalog.query(query);
    log::info!("Showing {} of {} jobs", view.len(), catalog.len());
    if json {
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
        return Ok(());
    }
    if view.is_empty() {
        writeln!(out, "No jobs available.")?;
        return Ok(());
    }
    for record in view {
        let job_no = record
            .job_no()
            .map(ToString::to_string)
            .unwrap_or_default();
        writeln!(out, "{}: {}", job_no, record.summary())?;
    }
    Ok(())
}
