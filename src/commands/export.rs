//! Export the catalog in the loadable data format

use anyhow::Result;
use std::io::Write;

use crate::content::{loader, DataFormat};
use crate::PostCatalog;

/// Write every post, in catalog order
pub fn run<W: Write>(out: &mut W, catalog: &PostCatalog, format: DataFormat) -> Result<()> {
    loader::write_posts(out, catalog.all(), format)?;
    tracing::debug!("Exported {} posts as {:?}", catalog.len(), format);
    Ok(())
}
