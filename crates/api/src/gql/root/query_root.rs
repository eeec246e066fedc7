use async_graphql::MergedObject;

use crate::gql::domains::clubs::ClubQuery;
use crate::gql::domains::games::GameQuery;
use crate::gql::domains::players::PlayerStatsQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ClubQuery, GameQuery, PlayerStatsQuery);
