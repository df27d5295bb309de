use crate::core::{aggregate, eligibility, ingest, rank};
use crate::domain::model::{DegreeProgram, Institution, Selection, UniversityMatch};
use crate::domain::ports::{Dataset, DatasetSource};
use crate::utils::error::Result;
use std::collections::HashMap;

/// Runs the whole match pipeline: fetch the three datasets concurrently,
/// coerce them, evaluate eligibility, aggregate offerings, rank. Each run is
/// a pure function of the datasets and the selection; nothing is cached
/// across runs.
pub struct MatchEngine<S: DatasetSource> {
    source: S,
}

impl<S: DatasetSource> MatchEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn run(&self, selection: &Selection) -> Result<Vec<UniversityMatch>> {
        tracing::info!("Loading datasets...");
        let (institutions_text, programs_text, offerings_text) = tokio::try_join!(
            self.source.fetch(Dataset::Institutions),
            self.source.fetch(Dataset::DegreePrograms),
            self.source.fetch(Dataset::CourseOfferings),
        )?;

        let institutions = ingest::load_institutions(&ingest::parse_payload(&institutions_text)?);
        let programs = ingest::load_programs(&ingest::parse_payload(&programs_text)?);
        let offerings = ingest::load_offerings(&ingest::parse_payload(&offerings_text)?);
        tracing::debug!(
            "Coerced {} institutions ({} dropped), {} programs ({} dropped), {} offerings ({} dropped)",
            institutions.records.len(),
            institutions.dropped,
            programs.records.len(),
            programs.dropped,
            offerings.records.len(),
            offerings.dropped,
        );

        let institutions_by_id: HashMap<String, Institution> = institutions
            .records
            .into_iter()
            .map(|i| (i.id.clone(), i))
            .collect();
        let programs_by_id: HashMap<String, DegreeProgram> = programs
            .records
            .iter()
            .map(|p| (p.id.clone(), p.clone()))
            .collect();

        let eligible = eligibility::eligible_programs(&programs.records, selection);
        tracing::debug!("{} programs eligible for the selection", eligible.len());

        let aggregated = aggregate::aggregate(offerings.records, &eligible);
        let matches = rank::rank(&aggregated, &institutions_by_id, &programs_by_id);
        tracing::info!("Matched {} universities", matches.len());

        Ok(matches)
    }
}
