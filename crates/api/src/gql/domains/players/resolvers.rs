use async_graphql::{Context, Object, Result};

use upstream::models as rsp;

use crate::gql::common::helpers::decode;
use crate::gql::common::types::{CompetitionCode, UpstreamToken};
use crate::gql::domains::players::types::{
    PhaseTypeCode, PlayerTraditionalResponse, SeasonMode, SortDirection, Statistic, StatisticMode,
    StatisticSortMode,
};
use crate::state::AppState;

#[derive(Default)]
pub struct PlayerStatsQuery;

#[Object]
impl PlayerStatsQuery {
    /// Traditional per-player statistics for a competition. Season-code-like
    /// arguments are plain years; the competition token is prefixed before
    /// they go upstream (2024 under "E" becomes "E2024"). Sorting happens
    /// server-side; rows come back in upstream's order.
    #[allow(clippy::too_many_arguments)]
    async fn player_traditional_stats(
        &self,
        ctx: &Context<'_>,
        competition_code: CompetitionCode,
        season_mode: Option<SeasonMode>,
        season_code: Option<i32>,
        from_season_code: Option<i32>,
        to_season_code: Option<i32>,
        phase_type_code: Option<PhaseTypeCode>,
        statistic_mode: Option<StatisticMode>,
        statistic_sort_mode: Option<StatisticSortMode>,
        statistic: Option<Statistic>,
        sort_direction: Option<SortDirection>,
        #[graphql(default = 0)] offset: i32,
        #[graphql(default = 10)] limit: i32,
    ) -> Result<PlayerTraditionalResponse> {
        let state = ctx.data::<AppState>()?;
        let competition = competition_code.token();
        let season = |year: i32| format!("{competition}{year}");

        let endpoint = format!("competitions/{competition}/statistics/players/traditional");
        let params = [
            ("SeasonMode", season_mode.map(|m| m.token().to_string())),
            ("SeasonCode", season_code.map(season)),
            ("FromSeasonCode", from_season_code.map(season)),
            ("ToSeasonCode", to_season_code.map(season)),
            ("phaseTypeCode", phase_type_code.map(|p| p.token().to_string())),
            ("statisticMode", statistic_mode.map(|m| m.token().to_string())),
            (
                "statisticSortMode",
                statistic_sort_mode.map(|m| m.token().to_string()),
            ),
            ("statistic", statistic.map(|s| s.token().to_string())),
            ("sortDirection", sort_direction.map(|d| d.token().to_string())),
            ("Offset", Some(offset.to_string())),
            ("Limit", Some(limit.to_string())),
        ];

        let body = state.upstream.request(&endpoint, &params).await;
        Ok(decode::<rsp::PlayerStatsRsp>(body).into())
    }
}
