use serde::{
    Deserialize,
    Serialize,
};

/// A recording rule as returned by `GET /rules`.
///
/// Only the fields the exporter needs are decoded, the search, reserve and save
/// options EPGStation also sends are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: i64,
    pub is_time_specification: bool,
    /// Number of reserves currently held by this rule. EPGStation omits the
    /// field (or sends `null`) when it has not counted them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserves_cnt: Option<i64>,
}

/// Body of a successful `GET /rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub total: u64,
}

/// Error envelope EPGStation returns with non-200 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

/// Query parameters of `GET /rules`. Unset fields are left out of the query
/// string, so the default requests every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetRulesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_without_reserves_count() {
        let rule: Rule = serde_json::from_str(r#"{"id":2,"isTimeSpecification":true,"reservesCnt":null}"#).unwrap();
        assert_eq!(
            rule,
            Rule {
                id: 2,
                is_time_specification: true,
                reserves_cnt: None,
            }
        );

        let rule: Rule = serde_json::from_str(r#"{"id":3,"isTimeSpecification":false}"#).unwrap();
        assert_eq!(rule.reserves_cnt, None);
    }

    #[test]
    fn rules_ignore_unknown_fields() {
        let body = r#"{
            "rules": [
                {
                    "id": 1,
                    "isTimeSpecification": false,
                    "reservesCnt": 2,
                    "searchOption": {"keyword": "news"},
                    "reserveOption": {"enable": true}
                }
            ],
            "total": 1
        }"#;
        let rules: Rules = serde_json::from_str(body).unwrap();
        assert_eq!(rules.total, 1);
        assert_eq!(rules.rules[0].reserves_cnt, Some(2));
    }
}
