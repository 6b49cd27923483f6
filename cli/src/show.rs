use clap::ValueEnum;
use job_catalog::Catalog;
use std::io::Write;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Html,
    Json,
}

pub fn show(catalog: &Catalog, job_no: &str, format: Format, out: &mut impl Write) -> Result<()> {
    let record = catalog
        .find(job_no)
        .ok_or_else(|| Error::UnknownJob(job_no.to_owned()))?;
    let detail = record.details();
    match format {
        Format::Text => write!(out, "{}", detail)?,
        Format::Html => writeln!(out, "{}", detail.to_html()?.trim_end())?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &detail)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
