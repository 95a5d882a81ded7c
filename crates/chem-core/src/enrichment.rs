//! Enriquecimiento de hits: nombre y CAS por CID.
//!
//! Las consultas se hacen de una en una, en el orden de los hits. Un fallo en
//! un CID se registra como datos ausentes y el lote continúa.
use chem_domain::{Cid, CompoundProperties};
use chem_providers::CompoundProvider;
use log::warn;

use crate::MatchSets;

/// Resultado del enriquecimiento de un lote de CIDs.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    /// Un registro por CID de entrada, en el mismo orden.
    pub hits: Vec<CompoundProperties>,
    pub sets: MatchSets,
}

pub async fn enrich(provider: &dyn CompoundProvider, cids: &[Cid]) -> Enrichment {
    let mut enrichment = Enrichment { hits: Vec::with_capacity(cids.len()),
                                      sets: MatchSets::default() };
    for &cid in cids {
        let props = match provider.compound_properties(cid).await {
            // The provider's record is re-keyed to the requested CID.
            Ok(p) => CompoundProperties::new(cid, p.name, p.cas),
            Err(e) => {
                warn!("property lookup for CID {cid} via {} failed: {e}", provider.get_name());
                CompoundProperties::absent(cid)
            }
        };
        enrichment.sets.add_hit(cid);
        enrichment.sets.absorb(&props);
        enrichment.hits.push(props);
    }
    enrichment
}

#[cfg(test)]
mod tests {
    use super::*;
    use chem_providers::StaticCompoundProvider;

    #[tokio::test]
    async fn test_failure_is_isolated() {
        let provider = StaticCompoundProvider::new(vec![]).with_properties(Cid(1), Some("Acetone"), Some("67-64-1"))
                                                          .with_properties(Cid(3), None, Some("64-17-5"));
        let out = enrich(&provider, &[Cid(1), Cid(2), Cid(3)]).await;
        assert_eq!(out.hits.len(), 3);
        assert_eq!(out.hits[0].name.as_deref(), Some("Acetone"));
        assert!(out.hits[1].is_absent());
        assert_eq!(out.hits[1].cid, Cid(2));
        assert_eq!(out.hits[2].cas.as_deref(), Some("64-17-5"));
        assert_eq!(out.sets.names().len(), 1);
        assert_eq!(out.sets.cas_numbers().len(), 2);
        assert_eq!(out.sets.cids().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let provider = StaticCompoundProvider::default();
        let out = enrich(&provider, &[]).await;
        assert!(out.hits.is_empty());
        assert!(out.sets.names().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_cids_are_kept() {
        let provider = StaticCompoundProvider::default().with_properties(Cid(7), Some("Water"), None);
        let out = enrich(&provider, &[Cid(7), Cid(7)]).await;
        assert_eq!(out.hits.len(), 2);
        assert_eq!(out.sets.cids().len(), 1);
    }
}
