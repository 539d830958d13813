use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::namespace::Namespace;

/// A compound's aliases across the namespaces this tool knows about.
///
/// Mappings come from
/// `https://www.ebi.ac.uk/unichem/rest/src_compound_id/{compound_id}/{source_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundIds {
    /// src_id 1, always the query identifier
    pub chembl: String,
    /// src_id 22
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubchem: Option<String>,
    /// src_id 2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drugbank: Option<String>,
    /// src_id 7
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chebi: Option<String>,
}

/// One entry of a UniChem `src_compound_id` response.
pub type SourceMapping = HashMap<String, String>;

pub const SRC_ID_KEY: &str = "src_id";
pub const SRC_COMPOUND_ID_KEY: &str = "src_compound_id";

impl CompoundIds {
    /// The chembl-only set returned when nothing else could be resolved.
    pub fn degenerate(chembl_id: &str) -> Self {
        Self {
            chembl: chembl_id.to_string(),
            ..Default::default()
        }
    }

    /// Fold UniChem mappings into this set. Entries with an unknown or missing
    /// `src_id` are skipped; for repeated codes the last entry wins. A missing
    /// or empty `src_compound_id` leaves the field unset.
    pub fn apply(&mut self, mappings: &[SourceMapping]) {
        for mapping in mappings {
            let Some(namespace) = mapping
                .get(SRC_ID_KEY)
                .and_then(|code| Namespace::from_src_id(code))
            else {
                continue;
            };
            let value = mapping
                .get(SRC_COMPOUND_ID_KEY)
                .filter(|v| !v.is_empty())
                .cloned();
            namespace.set(self, value);
        }
    }

    /// True when only the query identifier is populated.
    pub fn is_degenerate(&self) -> bool {
        self.pubchem.is_none() && self.drugbank.is_none() && self.chebi.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(src_id: &str, compound_id: &str) -> SourceMapping {
        HashMap::from([
            (SRC_ID_KEY.to_string(), src_id.to_string()),
            (SRC_COMPOUND_ID_KEY.to_string(), compound_id.to_string()),
        ])
    }

    #[test]
    fn test_apply_known_namespaces() {
        let mut ids = CompoundIds::degenerate("CHEMBL1");
        ids.apply(&[
            mapping("2", "DB1"),
            mapping("7", "CB1"),
            mapping("99", "X"),
        ]);

        assert_eq!(ids.chembl, "CHEMBL1");
        assert_eq!(ids.drugbank.as_deref(), Some("DB1"));
        assert_eq!(ids.chebi.as_deref(), Some("CB1"));
        assert_eq!(ids.pubchem, None);
    }

    #[test]
    fn test_chembl_entry_does_not_override_query() {
        let mut ids = CompoundIds::degenerate("CHEMBL12");
        ids.apply(&[mapping("1", "CHEMBL99"), mapping("22", "PC99")]);

        assert_eq!(ids.chembl, "CHEMBL12");
        assert_eq!(ids.pubchem.as_deref(), Some("PC99"));
    }

    #[test]
    fn test_last_entry_wins() {
        let mut ids = CompoundIds::degenerate("CHEMBL1");
        ids.apply(&[mapping("22", "first"), mapping("22", "second")]);

        assert_eq!(ids.pubchem.as_deref(), Some("second"));
    }

    #[test]
    fn test_entry_without_src_id_is_skipped() {
        let mut ids = CompoundIds::degenerate("CHEMBL1");
        let orphan = HashMap::from([(SRC_COMPOUND_ID_KEY.to_string(), "DB1".to_string())]);
        ids.apply(&[orphan]);

        assert!(ids.is_degenerate());
    }

    #[test]
    fn test_empty_compound_id_left_unset() {
        let mut ids = CompoundIds::degenerate("CHEMBL1");
        let no_value = HashMap::from([(SRC_ID_KEY.to_string(), "2".to_string())]);
        ids.apply(&[no_value, mapping("7", "")]);

        assert!(ids.is_degenerate());
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"{"chembl":"CHEMBL1"}"#);
    }

    #[test]
    fn test_later_empty_entry_clears_field() {
        let mut ids = CompoundIds::degenerate("CHEMBL1");
        ids.apply(&[mapping("22", "PC1"), mapping("22", "")]);

        assert_eq!(ids.pubchem, None);
    }

    #[test]
    fn test_serialize_omits_unset() {
        let ids = CompoundIds {
            chembl: "CHEMBL12".to_string(),
            pubchem: Some("PC99".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&ids).unwrap(),
            r#"{"chembl":"CHEMBL12","pubchem":"PC99"}"#
        );

        let empty = CompoundIds::degenerate("");
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"chembl":""}"#);
    }
}
