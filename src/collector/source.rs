use epgstation_client::{
    Client,
    GetRulesParams,
    Rule,
};
use std::{
    future::Future,
    pin::Pin,
};

/// Something that can list all recording rules.
pub trait RuleSource: Send + Sync {
    fn fetch_rules(&self) -> Pin<Box<dyn Future<Output = epgstation_client::Result<Vec<Rule>>> + Send + '_>>;
}

impl RuleSource for Client {
    /// Requests every rule in one call: no offset, limit, type or keyword.
    fn fetch_rules(&self) -> Pin<Box<dyn Future<Output = epgstation_client::Result<Vec<Rule>>> + Send + '_>> {
        Box::pin(async move {
            let rules = self.get_rules(&GetRulesParams::default()).await?;
            Ok(rules.rules)
        })
    }
}
