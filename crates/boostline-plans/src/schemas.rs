use boostline_entities::campaigns::{PlanType, Platform};
use serde::{Deserialize, Serialize};

/// A client's request to create a campaign. Also the shape of campaign
/// entries in the CLI seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRequest {
    pub plan_type: PlanType,
    pub plan_name: String,
    pub platform: Platform,
    /// The page or profile being promoted. Must be an absolute http(s) URL.
    pub target_link: String,
    #[serde(default)]
    pub profile_link: Option<String>,
    #[serde(default)]
    pub video_link: Option<String>,
}

/// Proof URLs a worker submits for a claimed task. `follow` is always
/// required; the other three only for `full_engagement` campaigns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBundle {
    #[serde(default)]
    pub follow: Option<String>,
    #[serde(default)]
    pub like: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub share: Option<String>,
}
