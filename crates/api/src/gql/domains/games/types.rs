use async_graphql::SimpleObject;

use upstream::models as rsp;

use crate::gql::common::types::Images;

#[derive(SimpleObject, Clone, Debug)]
pub struct Season {
    pub name: Option<String>,
    pub code: Option<String>,
    pub alias: Option<String>,
    pub competition_code: Option<String>,
    pub year: Option<i32>,
    pub start_date: Option<String>,
}

impl From<rsp::Season> for Season {
    fn from(raw: rsp::Season) -> Self {
        Self {
            name: raw.name,
            code: raw.code,
            alias: raw.alias,
            competition_code: raw.competition_code,
            year: raw.year,
            start_date: raw.start_date,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Group {
    pub id: Option<String>,
    pub order: Option<i32>,
    pub name: Option<String>,
    pub raw_name: Option<String>,
}

impl From<rsp::Group> for Group {
    fn from(raw: rsp::Group) -> Self {
        Self {
            id: raw.id,
            order: raw.order,
            name: raw.name,
            raw_name: raw.raw_name,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct PhaseType {
    pub code: Option<String>,
    pub alias: Option<String>,
    pub name: Option<String>,
    pub is_group_phase: Option<bool>,
}

impl From<rsp::PhaseType> for PhaseType {
    fn from(raw: rsp::PhaseType) -> Self {
        Self {
            code: raw.code,
            alias: raw.alias,
            name: raw.name,
            is_group_phase: raw.is_group_phase,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct GameClub {
    pub code: Option<String>,
    pub name: Option<String>,
    pub abbreviated_name: Option<String>,
    pub editorial_name: Option<String>,
    pub tv_code: Option<String>,
    pub is_virtual: Option<bool>,
    pub images: Option<Images>,
}

impl From<rsp::GameClub> for GameClub {
    fn from(raw: rsp::GameClub) -> Self {
        Self {
            code: raw.code,
            name: raw.name,
            abbreviated_name: raw.abbreviated_name,
            editorial_name: raw.editorial_name,
            tv_code: raw.tv_code,
            is_virtual: raw.is_virtual,
            images: Some(Images::from_raw(raw.images)),
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct GameTeam {
    pub club: Option<GameClub>,
    pub score: Option<i32>,
    pub standings_score: Option<i32>,
}

impl From<rsp::GameTeam> for GameTeam {
    fn from(raw: rsp::GameTeam) -> Self {
        Self {
            // A side always carries a club, even when upstream leaves it out.
            club: Some(GameClub::from(raw.club.unwrap_or_default())),
            score: raw.score,
            standings_score: raw.standings_score,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct GameReport {
    pub game_code: Option<i32>,
    pub season: Option<Season>,
    pub group: Option<Group>,
    pub phase_type: Option<PhaseType>,
    pub round: Option<i32>,
    pub round_alias: Option<String>,
    pub round_name: Option<String>,
    pub played: Option<bool>,
    pub date: Option<String>,
    pub confirmed_date: Option<bool>,
    pub confirmed_hour: Option<bool>,
    pub local_time_zone: Option<i32>,
    pub local_date: Option<String>,
    pub utc_date: Option<String>,
    pub local: Option<GameTeam>,
    pub road: Option<GameTeam>,
    pub local_last5_form: Vec<String>,
    pub road_last5_form: Vec<String>,
}

impl From<rsp::GameReportRsp> for GameReport {
    fn from(raw: rsp::GameReportRsp) -> Self {
        Self {
            game_code: raw.game_code,
            // Nested sections are materialized empty-shaped rather than null
            // so clients can select into them unconditionally.
            season: Some(Season::from(raw.season.unwrap_or_default())),
            group: Some(Group::from(raw.group.unwrap_or_default())),
            phase_type: Some(PhaseType::from(raw.phase_type.unwrap_or_default())),
            round: raw.round,
            round_alias: raw.round_alias,
            round_name: raw.round_name,
            played: raw.played,
            date: raw.date,
            confirmed_date: raw.confirmed_date,
            confirmed_hour: raw.confirmed_hour,
            local_time_zone: raw.local_time_zone,
            local_date: raw.local_date,
            utc_date: raw.utc_date,
            local: Some(GameTeam::from(raw.local.unwrap_or_default())),
            road: Some(GameTeam::from(raw.road.unwrap_or_default())),
            local_last5_form: raw.local_last5_form.unwrap_or_default(),
            road_last5_form: raw.road_last5_form.unwrap_or_default(),
        }
    }
}
