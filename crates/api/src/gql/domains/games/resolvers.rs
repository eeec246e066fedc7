use async_graphql::{Context, Object, Result};

use upstream::models as rsp;

use crate::gql::common::helpers::decode;
use crate::gql::common::types::{CompetitionCode, UpstreamToken};
use crate::gql::domains::games::types::GameReport;
use crate::state::AppState;

#[derive(Default)]
pub struct GameQuery;

#[Object]
impl GameQuery {
    /// Report for one game, addressed by competition, season year and game
    /// code. The season code sent upstream is the competition token followed
    /// by the year, e.g. "E2024".
    async fn game_report(
        &self,
        ctx: &Context<'_>,
        #[graphql(default_with = "CompetitionCode::E")] competition_code: CompetitionCode,
        #[graphql(default = 2024)] year: i32,
        #[graphql(default = 1)] game_code: i32,
    ) -> Result<Option<GameReport>> {
        let state = ctx.data::<AppState>()?;
        let season_code = format!("{}{}", competition_code.token(), year);
        let endpoint = format!(
            "competitions/{}/seasons/{}/games/{}/report",
            competition_code.token(),
            season_code,
            game_code
        );
        let body = state.upstream.request(&endpoint, &[]).await;
        if body.is_empty() {
            return Ok(None);
        }
        Ok(Some(decode::<rsp::GameReportRsp>(body).into()))
    }
}
