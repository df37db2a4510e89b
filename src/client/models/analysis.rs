use serde::Deserialize;

/// Success payload of `POST {base}/analyze`. Replaced wholesale by the next
/// successful call; the nationality order is whatever the service returned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    /// Name of the analyzed upload; absent or null when text was pasted.
    #[serde(default)]
    pub filename: Option<String>,
    pub summary: String,
    pub nationalities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_response() {
        let body = r#"{"filename":"a.txt","summary":"S","nationalities":["French","German"]}"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.filename.as_deref(), Some("a.txt"));
        assert_eq!(result.summary, "S");
        assert_eq!(result.nationalities, vec!["French", "German"]);
    }

    #[test]
    fn filename_may_be_null_or_absent() {
        let with_null: AnalysisResult =
            serde_json::from_str(r#"{"filename":null,"summary":"S","nationalities":[]}"#).unwrap();
        assert_eq!(with_null.filename, None);

        let without: AnalysisResult =
            serde_json::from_str(r#"{"summary":"S","nationalities":[]}"#).unwrap();
        assert_eq!(without.filename, None);
    }

    #[test]
    fn empty_nationality_list_is_preserved() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"summary":"S","nationalities":[]}"#).unwrap();
        assert!(result.nationalities.is_empty());
    }

    #[test]
    fn missing_summary_is_rejected() {
        assert!(serde_json::from_str::<AnalysisResult>(r#"{"nationalities":[]}"#).is_err());
    }
}
