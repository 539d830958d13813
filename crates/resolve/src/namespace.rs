use crate::schema::CompoundIds;

/// UniChem source code of the query namespace (ChEMBL).
pub const CHEMBL_SRC_ID: &str = "1";

/// External namespaces copied out of a UniChem response.
///
/// Source codes are listed at https://www.ebi.ac.uk/unichem/ucquery/listSources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    DrugBank,
    ChEBI,
    PubChem,
}

/// UniChem source code -> namespace. Adding a namespace means adding a row
/// here and a field on [`CompoundIds`].
const SOURCES: &[(&str, Namespace)] = &[
    ("2", Namespace::DrugBank),
    ("7", Namespace::ChEBI),
    ("22", Namespace::PubChem),
];

impl Namespace {
    pub fn from_src_id(src_id: &str) -> Option<Self> {
        SOURCES
            .iter()
            .find(|(code, _)| *code == src_id)
            .map(|(_, namespace)| *namespace)
    }

    pub(crate) fn set(self, ids: &mut CompoundIds, value: Option<String>) {
        let field = match self {
            Namespace::DrugBank => &mut ids.drugbank,
            Namespace::ChEBI => &mut ids.chebi,
            Namespace::PubChem => &mut ids.pubchem,
        };
        *field = value;
    }
}
