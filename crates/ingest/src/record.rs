use serde::{Deserialize, Serialize};

/// One drug/gene interaction as emitted by the interaction dataset producer.
///
/// Only `chembl_id` is consumed downstream; the remaining fields are parsed so
/// that a structurally broken line is caught, then dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionRecord {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gene_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub entrez_id: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub drug_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chembl_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub publications: Vec<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interaction_types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interaction_claims: Vec<InteractionClaim>,
}

impl InteractionRecord {
    /// The ChEMBL identifier to resolve, or `""` when the record has none.
    pub fn chembl_id(&self) -> &str {
        self.chembl_id.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

/// A single source's claim about a drug-gene interaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionClaim {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub drug: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gene: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interaction_types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_parses() {
        let line = r#"{
            "id": "0a1b",
            "gene_name": "EGFR",
            "entrez_id": 1956,
            "drug_name": "ERLOTINIB",
            "chembl_id": "CHEMBL553",
            "publications": [15118073, 16043828],
            "interaction_types": ["inhibitor"],
            "sources": ["CIViC", "DrugBank"],
            "attributes": [{"name": "Approval", "value": "approved", "sources": ["DrugBank"]}],
            "interaction_claims": [{
                "source": "DrugBank",
                "drug": "Erlotinib",
                "gene": "EGFR",
                "interaction_types": ["inhibitor"],
                "attributes": [{"name": "PMID", "value": "15118073"}]
            }]
        }"#;

        let record: InteractionRecord = serde_json::from_str(line).unwrap();

        assert_eq!(record.chembl_id(), "CHEMBL553");
        assert_eq!(record.entrez_id, 1956);
        assert_eq!(record.publications, vec![15118073, 16043828]);
        assert_eq!(record.attributes[0].sources, vec!["DrugBank"]);
        assert_eq!(record.interaction_claims[0].attributes[0].value, "15118073");
    }

    #[test]
    fn test_missing_chembl_id_is_empty() {
        let record: InteractionRecord =
            serde_json::from_str(r#"{"gene_name": "BRAF"}"#).unwrap();
        assert_eq!(record.chembl_id(), "");

        let record: InteractionRecord =
            serde_json::from_str(r#"{"chembl_id": null}"#).unwrap();
        assert_eq!(record.chembl_id(), "");
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<InteractionRecord>(r#"{"publications": ["x"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let record: InteractionRecord =
            serde_json::from_str(r#"{"chembl_id": "CHEMBL1", "score": 0.7}"#).unwrap();
        assert_eq!(record.chembl_id(), "CHEMBL1");
    }

    #[test]
    fn test_serialize_omits_empty_fields() {
        let record = InteractionRecord {
            chembl_id: Some("CHEMBL12".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"chembl_id":"CHEMBL12"}"#
        );
    }
}
