/// Case loader
///
/// Cases live in `endpoint_cases.json`, an array mixing comment strings
/// and objects with an `input` plus the expected components.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum CaseEntry {
    /// A parse case
    Case(Case),
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Case {
    pub input: String,
    pub href: Option<String>,
    pub protocol: Option<String>,
    pub host: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    pub pathname: Option<String>,
    pub search: Option<String>,
    pub hash: Option<String>,
    /// Expected `FormatError::field()` when parsing must fail
    pub failure: Option<String>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct CaseFailure {
    pub case_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

impl CaseResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_cases() -> Vec<CaseEntry> {
    serde_json::from_str(include_str!("endpoint_cases.json"))
        .unwrap_or_else(|e| panic!("endpoint_cases.json is malformed: {e}"))
}
