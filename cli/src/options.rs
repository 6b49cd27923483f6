use job_catalog::{Catalog, Dimension};
use std::io::Write;

use crate::Result;

pub fn options(catalog: &Catalog, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, catalog.options())?;
        writeln!(out)?;
        return Ok(());
    }
    for dimension in Dimension::ALL {
        let values = catalog
            .options()
            .for_dimension(dimension)
            .iter()
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{}: {}", dimension.label(), values)?;
    }
    Ok(())
}
