use async_graphql::{Enum, SimpleObject};

use upstream::models as rsp;

/// Maps an enumerated GraphQL argument to the string token the Euroleague
/// API expects in paths and query parameters.
pub trait UpstreamToken {
    fn token(&self) -> &'static str;
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum CompetitionCode {
    /// Euroleague
    E,
    /// EuroCup
    U,
}

impl UpstreamToken for CompetitionCode {
    fn token(&self) -> &'static str {
        match self {
            CompetitionCode::E => "E",
            CompetitionCode::U => "U",
        }
    }
}

/// Club/team imagery. Upstream may omit the whole substructure or the crest;
/// mapping always materializes this with an empty-string crest instead, so
/// clients never have to null-check two levels deep.
#[derive(SimpleObject, Clone, Debug)]
pub struct Images {
    pub crest: Option<String>,
}

impl Images {
    pub fn from_raw(raw: Option<rsp::Images>) -> Self {
        Self {
            crest: Some(raw.and_then(|i| i.crest).unwrap_or_default()),
        }
    }
}
