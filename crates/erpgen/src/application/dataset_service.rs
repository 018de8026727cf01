//! Dataset Application Service (Use Case)
//!
//! Generates the collections of the selected datasets and writes each one as
//! a JSON array file.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::domain::records::{self, quality, CollectionSpec};
use crate::domain::services::{ConversationAssembler, QueryGenerator, Sampler, TemplateCatalog};
use crate::domain::{Dataset, DomainError};

const FAQS: &str = "faqs";
const CONVERSATIONS: &str = "conversations";
const DEFAULT_INTERACTIONS: usize = 200;

/// What to generate and where to put it
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Empty means every dataset
    pub datasets: Vec<Dataset>,
    /// Per-collection record counts, overriding the scaled default
    pub counts: HashMap<String, usize>,
    /// Multiplier applied to every default count
    pub scale: f64,
    pub output_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            datasets: Vec::new(),
            counts: HashMap::new(),
            scale: 1.0,
            output_dir: PathBuf::from("data"),
        }
    }
}

/// One written collection file
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCollection {
    pub dataset: Dataset,
    pub name: String,
    pub records: usize,
    pub path: PathBuf,
}

#[derive(Clone, Copy)]
enum Source {
    Records(CollectionSpec),
    Faqs,
    Conversations,
}

#[derive(Clone, Copy)]
struct Planned {
    dataset: Dataset,
    name: &'static str,
    count: usize,
    source: Source,
}

/// Application service for dataset generation
pub struct DatasetService {
    queries: QueryGenerator,
    conversations: ConversationAssembler,
}

impl DatasetService {
    pub fn new(catalog: Arc<TemplateCatalog>) -> Self {
        Self {
            queries: QueryGenerator::new(catalog.clone()),
            conversations: ConversationAssembler::new(QueryGenerator::new(catalog)),
        }
    }

    /// Service over the built-in template catalog
    pub fn builtin() -> Result<Self, DomainError> {
        Ok(Self::new(Arc::new(TemplateCatalog::builtin()?)))
    }

    /// Every collection name known to `dataset`, with its default count
    pub fn collection_names(dataset: Dataset) -> Vec<(&'static str, usize)> {
        match dataset {
            Dataset::Interaction => vec![
                (FAQS, DEFAULT_INTERACTIONS),
                (CONVERSATIONS, DEFAULT_INTERACTIONS),
            ],
            other => records::collections(other)
                .into_iter()
                .map(|c| (c.name, c.default_count))
                .collect(),
        }
    }

    /// Generate every selected collection in memory, in dataset order
    pub fn build(
        &self,
        s: &mut Sampler,
        options: &GenerateOptions,
    ) -> Result<Vec<(Dataset, &'static str, Vec<Value>)>, DomainError> {
        let plan = plan(options)?;
        let mut out = Vec::with_capacity(plan.len());

        for item in plan {
            let values = self.produce(s, item)?;
            tracing::debug!("Generated {} {} records", values.len(), item.name);
            out.push((item.dataset, item.name, values));
        }

        Ok(out)
    }

    /// Generate every selected collection and write `<output_dir>/<name>.json`
    pub fn generate(
        &self,
        s: &mut Sampler,
        options: &GenerateOptions,
    ) -> Result<Vec<GeneratedCollection>, DomainError> {
        let plan = plan(options)?;
        fs::create_dir_all(&options.output_dir)
            .map_err(|e| DomainError::io(&options.output_dir, e))?;

        let mut written = Vec::with_capacity(plan.len());
        for item in plan {
            let values = self.produce(s, item)?;
            let path = options.output_dir.join(format!("{}.json", item.name));
            write_json(&path, &values)?;

            tracing::info!("Generated {} records -> {}", values.len(), path.display());
            written.push(GeneratedCollection {
                dataset: item.dataset,
                name: item.name.to_string(),
                records: values.len(),
                path,
            });
        }

        Ok(written)
    }

    /// Append `count` PDIR entries to an existing `pdir_entries.json`,
    /// drawing product codes and batch numbers from the file's entries.
    ///
    /// Returns the new total.
    pub fn extend_pdir_file(
        &self,
        s: &mut Sampler,
        path: &Path,
        count: usize,
    ) -> Result<usize, DomainError> {
        let content = fs::read_to_string(path).map_err(|e| DomainError::io(path, e))?;
        let mut existing: Vec<Value> =
            serde_json::from_str(&content).map_err(|e| DomainError::MalformedJson {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let seed = quality::PdirSeed::from_values(&existing);
        let added = quality::extend_pdir_entries(s, &seed, count)?;
        existing.extend(records::to_values(added)?);

        write_json(path, &existing)?;
        tracing::info!(
            "Added {} PDIR entries to {} ({} total)",
            count,
            path.display(),
            existing.len()
        );

        Ok(existing.len())
    }

    fn produce(&self, s: &mut Sampler, item: Planned) -> Result<Vec<Value>, DomainError> {
        match item.source {
            Source::Records(spec) => spec.generate(s, item.count),
            Source::Faqs => Ok(records::to_values(self.queries.generate_faqs(s, item.count))?),
            Source::Conversations => Ok(records::to_values(
                self.conversations.generate_conversations(s, item.count),
            )?),
        }
    }
}

fn plan(options: &GenerateOptions) -> Result<Vec<Planned>, DomainError> {
    if !options.scale.is_finite() || options.scale < 0.0 {
        return Err(DomainError::Validation(format!(
            "Scale must be a non-negative number, got {}",
            options.scale
        )));
    }

    let known: Vec<&str> = Dataset::ALL
        .into_iter()
        .flat_map(DatasetService::collection_names)
        .map(|(name, _)| name)
        .collect();
    if let Some(unknown) = options.counts.keys().find(|k| !known.contains(&k.as_str())) {
        return Err(DomainError::Validation(format!(
            "Unknown collection: {}",
            unknown
        )));
    }

    let datasets: Vec<Dataset> = if options.datasets.is_empty() {
        Dataset::ALL.to_vec()
    } else {
        let mut selected = options.datasets.clone();
        selected.sort();
        selected.dedup();
        selected
    };

    let mut planned = Vec::new();
    for dataset in Dataset::ALL {
        let sources: Vec<(&'static str, usize, Source)> = match dataset {
            Dataset::Interaction => vec![
                (FAQS, DEFAULT_INTERACTIONS, Source::Faqs),
                (CONVERSATIONS, DEFAULT_INTERACTIONS, Source::Conversations),
            ],
            other => records::collections(other)
                .into_iter()
                .map(|c| (c.name, c.default_count, Source::Records(c)))
                .collect(),
        };

        for (name, default_count, source) in sources {
            if !datasets.contains(&dataset) {
                if options.counts.contains_key(name) {
                    tracing::warn!("Count for '{}' ignored: dataset {} not selected", name, dataset);
                }
                continue;
            }

            let count = options
                .counts
                .get(name)
                .copied()
                .unwrap_or_else(|| scaled(default_count, options.scale));
            planned.push(Planned {
                dataset,
                name,
                count,
                source,
            });
        }
    }

    Ok(planned)
}

/// Scaled default; never rounds a non-empty collection down to nothing
fn scaled(default_count: usize, scale: f64) -> usize {
    if scale == 0.0 {
        return 0;
    }
    ((default_count as f64 * scale).round() as usize).max(1)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DomainError> {
    let file = File::create(path).map_err(|e| DomainError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| DomainError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sampler() -> Sampler {
        Sampler::seeded(5, Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_plan_uses_defaults_and_overrides() {
        let options = GenerateOptions {
            datasets: vec![Dataset::Stores],
            counts: HashMap::from([("stock_items".to_string(), 7)]),
            ..Default::default()
        };
        let planned = plan(&options).unwrap();

        let names: Vec<&str> = planned.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "inventory_zones",
                "stock_categories",
                "stock_items",
                "goods_issue_notes",
                "stock_transfers",
                "stock_aging"
            ]
        );
        assert_eq!(planned[0].count, 10);
        assert_eq!(planned[2].count, 7);
    }

    #[test]
    fn test_scale_never_empties_a_collection() {
        assert_eq!(scaled(10, 0.01), 1);
        assert_eq!(scaled(1000, 0.01), 10);
        assert_eq!(scaled(1000, 0.0), 0);
        assert_eq!(scaled(12, 1.0), 12);
    }

    #[test]
    fn test_plan_rejects_bad_input() {
        let negative = GenerateOptions {
            scale: -1.0,
            ..Default::default()
        };
        assert!(matches!(plan(&negative), Err(DomainError::Validation(_))));

        let unknown = GenerateOptions {
            counts: HashMap::from([("nope".to_string(), 1)]),
            ..Default::default()
        };
        assert!(matches!(plan(&unknown), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_build_interaction() {
        let service = DatasetService::builtin().unwrap();
        let options = GenerateOptions {
            datasets: vec![Dataset::Interaction],
            counts: HashMap::from([
                (FAQS.to_string(), 3),
                (CONVERSATIONS.to_string(), 2),
            ]),
            ..Default::default()
        };

        let built = service.build(&mut sampler(), &options).unwrap();
        assert_eq!(built.len(), 2);
        assert_eq!(built[0].1, FAQS);
        assert_eq!(built[0].2.len(), 3);
        assert_eq!(built[0].2[0]["id"], "FAQ0001");
        assert_eq!(built[1].2[1]["id"], "CONV0002");
    }

    #[test]
    fn test_every_collection_has_a_unique_name() {
        let mut names: Vec<&str> = Dataset::ALL
            .into_iter()
            .flat_map(DatasetService::collection_names)
            .map(|(name, _)| name)
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
