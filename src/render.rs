//! Renderers: consumers of a finished [`ReportModel`].

use std::io::Write;

use anyhow::Result;
use parking_lot::Mutex;

use crate::reports::{ReportModel, SubItem};

/// Consumes an assembled report model.
///
/// The engine hands each renderer exactly one model per job, and only on
/// the non-fatal path. Renderers cross the job task boundary, so they must
/// be shareable.
pub trait Renderer: Send + Sync {
    fn render(&self, model: &ReportModel) -> Result<()>;
}

/// Plain-text renderer for terminals and files.
pub struct TextRenderer<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> Renderer for TextRenderer<W> {
    fn render(&self, model: &ReportModel) -> Result<()> {
        let mut out = self.out.lock();

        writeln!(out, "tallyfin report: {}", model.kind)?;
        writeln!(out, "instance:  {}", model.instance_url)?;
        writeln!(out, "version:   {}", model.tool_version)?;
        writeln!(out, "generated: {}", model.generated_at.to_rfc3339())?;
        writeln!(out)?;

        for entry in &model.entries {
            match entry.sub_items.len() {
                0 => writeln!(out, "{}", entry.name)?,
                1 => writeln!(out, "{} (1 item)", entry.name)?,
                n => writeln!(out, "{} ({n} items)", entry.name)?,
            }
            for sub in &entry.sub_items {
                writeln!(out, "  - {}", sub_item_label(sub))?;
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "{} entities, {} correlated items",
            model.entity_count, model.sub_item_count
        )?;

        if !model.failed_items.is_empty() {
            writeln!(
                out,
                "{} items failed metadata fetch:",
                model.failed_items.len()
            )?;
            for failed in &model.failed_items {
                writeln!(out, "  - {}: {}", failed.item_id, failed.error)?;
            }
        }

        Ok(())
    }
}

/// Label for a correlated item; episodes are prefixed with their series.
fn sub_item_label(sub: &SubItem) -> String {
    match sub.metadata.as_ref().and_then(|m| m.series_name.as_deref()) {
        Some(series) => format!("{series}: {}", sub.name),
        None => sub.name.clone(),
    }
}

/// JSON renderer: pretty-prints the whole model.
pub struct JsonRenderer<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> Renderer for JsonRenderer<W> {
    fn render(&self, model: &ReportModel) -> Result<()> {
        let mut out = self.out.lock();
        serde_json::to_writer_pretty(&mut *out, model)?;
        writeln!(out)?;
        Ok(())
    }
}
