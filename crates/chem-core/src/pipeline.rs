//! Orquestación de una búsqueda completa.
//!
//! `InventorySearch` no guarda estado entre peticiones: el proveedor es
//! compartido e inmutable y el inventario se relee en cada `run`.
use std::sync::Arc;

use chem_domain::{SearchRequest, SearchResults, SimilarityQuery, DEFAULT_MAX_RECORDS, DEFAULT_THRESHOLD};
use chem_inventory::InventorySource;
use chem_providers::CompoundProvider;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::{enrich, match_inventory, MatchKey, Outcome, SearchError, SearchStage};

/// Parámetros fijados al arrancar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub threshold: u8,
    pub max_records: u32,
    pub match_key: MatchKey,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD,
               max_records: DEFAULT_MAX_RECORDS,
               match_key: MatchKey::default() }
    }
}

struct StageTracker {
    search_id: Uuid,
    stage: SearchStage,
}

impl StageTracker {
    fn new(search_id: Uuid) -> Self {
        Self { search_id,
               stage: SearchStage::Received }
    }

    fn advance(&mut self, to: SearchStage) {
        debug_assert!(self.stage.can_transition_to(to), "invalid transition {:?} -> {:?}", self.stage, to);
        debug!("search {}: {:?} -> {:?}", self.search_id, self.stage, to);
        self.stage = to;
    }
}

pub struct InventorySearch {
    provider: Arc<dyn CompoundProvider>,
    inventory: InventorySource,
    settings: SearchSettings,
}

impl InventorySearch {
    pub fn new(provider: Arc<dyn CompoundProvider>, inventory: InventorySource) -> Self {
        Self { provider,
               inventory,
               settings: SearchSettings::default() }
    }

    pub fn with_settings(mut self, settings: SearchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Ejecuta la búsqueda completa para `request`.
    pub async fn run(&self, request: &SearchRequest) -> Result<SearchResults, SearchError> {
        let mut tracker = StageTracker::new(Uuid::new_v4());
        let result = self.execute(request, &mut tracker).await;
        Self::finish(&mut tracker, result)
    }

    /// Igual que `run`, pero partiendo del cuerpo HTTP sin interpretar.
    ///
    /// Un cuerpo sin `smiles` utilizable sale de `Received` directamente a
    /// `Responded(ClientError)`.
    pub async fn run_body(&self, body: &[u8]) -> Result<SearchResults, SearchError> {
        let mut tracker = StageTracker::new(Uuid::new_v4());
        let result = match SearchRequest::from_body(body) {
            Ok(request) => self.execute(&request, &mut tracker).await,
            Err(e) => Err(e.into()),
        };
        Self::finish(&mut tracker, result)
    }

    fn finish(tracker: &mut StageTracker, result: Result<SearchResults, SearchError>) -> Result<SearchResults, SearchError> {
        debug_assert!(!tracker.stage.is_terminal(), "search {} already responded", tracker.search_id);
        let outcome = match &result {
            Ok(results) => {
                info!("search {}: {} pubchem hits, {} inventory matches",
                      tracker.search_id,
                      results.pubchem_hits.len(),
                      results.inventory_matches.len());
                Outcome::Success
            }
            Err(e) => {
                warn!("search {} failed at {:?}: {e}", tracker.search_id, tracker.stage);
                Outcome::from(e)
            }
        };
        tracker.advance(SearchStage::Responded(outcome));
        result
    }

    async fn execute(&self, request: &SearchRequest, tracker: &mut StageTracker) -> Result<SearchResults, SearchError> {
        tracker.advance(SearchStage::Validating);
        let query = SimilarityQuery::new(request.smiles.as_str(), self.settings.threshold, self.settings.max_records)?;

        tracker.advance(SearchStage::Searching);
        let cids = self.provider.similar_compounds(&query).await?;

        tracker.advance(SearchStage::Enriching);
        let enrichment = enrich(self.provider.as_ref(), &cids).await;
        if cids.is_empty() {
            tracker.advance(SearchStage::Responding);
            return Ok(SearchResults::empty());
        }

        tracker.advance(SearchStage::Loading);
        let source = self.inventory.clone();
        let inventory = tokio::task::spawn_blocking(move || source.load())
            .await
            .map_err(|e| SearchError::Unexpected(e.to_string()))??;

        tracker.advance(SearchStage::Matching);
        let inventory_matches = match_inventory(&inventory, &enrichment.sets, self.settings.match_key)?;

        tracker.advance(SearchStage::Responding);
        Ok(SearchResults { pubchem_hits: enrichment.hits,
                           inventory_matches })
    }
}
