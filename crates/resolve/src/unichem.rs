use tracing::debug;

use crate::error::ResolveError;
use crate::namespace::CHEMBL_SRC_ID;
use crate::schema::{CompoundIds, SourceMapping};

pub const DEFAULT_BASE_URL: &str = "https://www.ebi.ac.uk/unichem/rest";

#[derive(Clone)]
pub struct UniChemClient {
    base_url: String,
    client: reqwest::Client,
}

/// Outcome of one lookup. `ids` is always usable; `error` says why it may be
/// chembl-only.
#[derive(Debug)]
pub struct Resolution {
    pub ids: CompoundIds,
    pub error: Option<ResolveError>,
}

impl Resolution {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl UniChemClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }

    /// e.g. https://www.ebi.ac.uk/unichem/rest/src_compound_id/CHEMBL12/1
    pub fn url_for(&self, chembl_id: &str) -> String {
        format!(
            "{}/src_compound_id/{}/{}",
            self.base_url, chembl_id, CHEMBL_SRC_ID
        )
    }

    /// Fetch the raw UniChem mappings for a ChEMBL identifier.
    pub async fn lookup(&self, chembl_id: &str) -> Result<Vec<SourceMapping>, ResolveError> {
        let url = self.url_for(chembl_id);
        debug!(url = %url, "querying UniChem");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ResolveError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mappings: Vec<SourceMapping> = serde_json::from_str(&body)?;
        Ok(mappings)
    }

    /// Resolve a ChEMBL identifier into its cross-references. The result
    /// always carries `chembl_id`, even when the lookup fails.
    pub async fn resolve(&self, chembl_id: &str) -> Resolution {
        let mut ids = CompoundIds::degenerate(chembl_id);
        match self.lookup(chembl_id).await {
            Ok(mappings) => {
                ids.apply(&mappings);
                Resolution { ids, error: None }
            }
            Err(e) => Resolution { ids, error: Some(e) },
        }
    }
}
