/// Names of the query parameters that identify a course in catalog links, e.g.
/// `bwckctlg.p_display_courses?one_subj=CIS&sel_crse_strt=310&...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogVocabulary {
    pub subject_parameter: String,
    pub number_parameter: String,
}

pub const DEFAULT_SUBJECT_PARAMETER: &str = "one_subj";
pub const DEFAULT_NUMBER_PARAMETER: &str = "sel_crse_strt";

impl CatalogVocabulary {
    pub fn new(subject_parameter: &str, number_parameter: &str) -> CatalogVocabulary {
        CatalogVocabulary {
            subject_parameter: subject_parameter.to_string(),
            number_parameter: number_parameter.to_string(),
        }
    }
}

impl Default for CatalogVocabulary {
    /// The vocabulary of the Banner course catalog.
    fn default() -> Self {
        CatalogVocabulary::new(DEFAULT_SUBJECT_PARAMETER, DEFAULT_NUMBER_PARAMETER)
    }
}
