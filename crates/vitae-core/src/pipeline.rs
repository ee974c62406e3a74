//! Parse pipeline orchestration.
//!
//! Stages run strictly in order:
//! text extraction -> heuristics -> refinement (optional) -> icon enrichment
//! -> schema validation (optional). The first failing stage aborts the parse
//! and its error is returned unchanged; no partial record escapes.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::enrich::{assign_icons, IconTables};
use crate::error::{Result, VitaeError};
use crate::heuristics::HeuristicExtractor;
use crate::models::config::{ParseOptions, VitaeConfig};
use crate::models::resume::ResumeRecord;
use crate::pdf::{PdfExtractor, TextExtractor};
use crate::refine::Refiner;
use crate::schema;

/// The resume parse pipeline.
///
/// Holds only immutable collaborators, so one instance can serve concurrent
/// parses.
#[derive(Clone)]
pub struct ResumePipeline {
    extractor: Arc<dyn TextExtractor>,
    heuristics: HeuristicExtractor,
    refiner: Option<Refiner>,
    icons: Arc<IconTables>,
    min_text_length: usize,
}

impl ResumePipeline {
    /// Pipeline with PDF extraction, default heuristics, built-in icon tables
    /// and no refinement backend.
    pub fn new() -> Self {
        Self {
            extractor: Arc::new(PdfExtractor::new()),
            heuristics: HeuristicExtractor::new(),
            refiner: None,
            icons: IconTables::builtin(),
            min_text_length: 1,
        }
    }

    /// Pipeline configured from `config`, with an optional refiner.
    pub fn from_config(config: &VitaeConfig, refiner: Option<Refiner>) -> Self {
        let mut pipeline = Self::new().with_text_extractor(Arc::new(PdfExtractor::from_config(&config.pdf)));
        pipeline.min_text_length = config.pdf.min_text_length;
        pipeline.refiner = refiner;
        pipeline
    }

    /// Replace the text extraction capability.
    pub fn with_text_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replace the heuristic extractor.
    pub fn with_heuristics(mut self, heuristics: HeuristicExtractor) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Attach the refinement stage.
    pub fn with_refiner(mut self, refiner: Refiner) -> Self {
        self.refiner = Some(refiner);
        self
    }

    /// Replace the icon lookup tables.
    pub fn with_icon_tables(mut self, icons: Arc<IconTables>) -> Self {
        self.icons = icons;
        self
    }

    /// Whether a refinement stage is attached.
    pub fn has_refiner(&self) -> bool {
        self.refiner.is_some()
    }

    /// Parse one document into a final record.
    pub async fn parse(&self, data: &[u8], options: ParseOptions) -> Result<ResumeRecord> {
        let start = Instant::now();
        match self.run(data, options).await {
            Ok(record) => {
                info!(
                    "Parsed resume '{}' in {}ms (refinement={}, validation={})",
                    record.slug,
                    start.elapsed().as_millis(),
                    options.use_refinement,
                    options.validate
                );
                Ok(record)
            }
            Err(e) => {
                warn!("Resume parse failed at {} stage: {}", e.kind(), e);
                Err(e)
            }
        }
    }

    async fn run(&self, data: &[u8], options: ParseOptions) -> Result<ResumeRecord> {
        // Checked before any stage runs so a misconfiguration has no side effects.
        let refiner = match (options.use_refinement, &self.refiner) {
            (true, Some(refiner)) => Some(refiner),
            (true, None) => {
                return Err(VitaeError::Config(
                    "refinement is enabled but no generative backend is configured".to_string(),
                ));
            }
            (false, _) => None,
        };

        let text = self.extractor.extract_text(data)?;
        info!("Text extraction successful ({} chars)", text.len());
        if text.trim().chars().count() < self.min_text_length {
            warn!("Extracted text is shorter than {} chars; the document may be scanned", self.min_text_length);
        }

        let preliminary = self.heuristics.extract(&text);

        let candidate = match refiner {
            Some(refiner) => refiner.refine(&text, &preliminary).await?,
            None => {
                debug!("Refinement disabled, using preliminary record");
                preliminary
            }
        };

        let record = assign_icons(candidate, &self.icons);

        if options.validate {
            schema::validate(&record)?;
        }

        Ok(record)
    }
}

impl Default for ResumePipeline {
    fn default() -> Self {
        Self::new()
    }
}
