use async_graphql::{Context, Object, Result};

use upstream::models as rsp;

use crate::gql::common::helpers::decode;
use crate::gql::common::types::UpstreamToken;
use crate::gql::domains::clubs::types::{Club, ClubCode};
use crate::state::AppState;

#[derive(Default)]
pub struct ClubQuery;

#[Object]
impl ClubQuery {
    /// List clubs, in the order upstream returns them.
    async fn clubs(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10)] limit: i32,
        #[graphql(default = 0)] offset: i32,
        has_parent_club: Option<bool>,
        search: Option<String>,
    ) -> Result<Vec<Club>> {
        let state = ctx.data::<AppState>()?;
        let params = [
            ("Limit", Some(limit.to_string())),
            ("Offset", Some(offset.to_string())),
            ("hasParentClub", has_parent_club.map(|v| v.to_string())),
            ("search", search),
        ];
        let body = state.upstream.request("clubs", &params).await;
        let page: rsp::ClubsRsp = decode(body);
        Ok(page.data.into_iter().map(Club::from).collect())
    }

    /// Get a single club by its code, or null when upstream has nothing.
    async fn club_by_code(&self, ctx: &Context<'_>, club_code: ClubCode) -> Result<Option<Club>> {
        let state = ctx.data::<AppState>()?;
        let endpoint = format!("clubs/{}", club_code.token());
        let body = state.upstream.request(&endpoint, &[]).await;
        if body.is_empty() {
            return Ok(None);
        }
        let raw: rsp::Club = decode(body);
        Ok(Some(raw.into()))
    }

    /// Free-text info blurb for a club. Empty string when upstream has none.
    async fn club_info(&self, ctx: &Context<'_>, club_code: ClubCode) -> Result<String> {
        let state = ctx.data::<AppState>()?;
        let endpoint = format!("clubs/{}/info", club_code.token());
        let body = state.upstream.request(&endpoint, &[]).await;
        let raw: rsp::ClubInfoRsp = decode(body);
        Ok(raw.info.unwrap_or_default())
    }
}
