//! Wire-shape models for Euroleague v3 responses.
//!
//! The upstream API omits or nulls fields freely, so every field is optional
//! and every struct tolerates missing keys via `#[serde(default)]`. Resolvers
//! in the api crate convert these into the GraphQL types.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    pub code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Images {
    pub crest: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Venue {
    pub name: Option<String>,
    pub code: Option<String>,
    pub capacity: Option<i32>,
    pub address: Option<String>,
    pub images: Option<Images>,
    pub active: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Club {
    pub code: Option<String>,
    pub name: Option<String>,
    pub alias: Option<String>,
    pub is_virtual: Option<bool>,
    pub country: Option<Country>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub tickets_url: Option<String>,
    pub twitter_account: Option<String>,
    pub instagram_account: Option<String>,
    pub facebook_account: Option<String>,
    pub venue: Option<Venue>,
    pub venue_backup: Option<Venue>,
    pub national_competition_code: Option<String>,
    pub city: Option<String>,
    pub president: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub images: Option<Images>,
}

/// Paged envelope of `GET clubs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClubsRsp {
    pub data: Vec<Club>,
}

/// Body of `GET clubs/{code}/info`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClubInfoRsp {
    pub info: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Season {
    pub name: Option<String>,
    pub code: Option<String>,
    pub alias: Option<String>,
    pub competition_code: Option<String>,
    pub year: Option<i32>,
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    pub id: Option<String>,
    pub order: Option<i32>,
    pub name: Option<String>,
    pub raw_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhaseType {
    pub code: Option<String>,
    pub alias: Option<String>,
    pub name: Option<String>,
    pub is_group_phase: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameClub {
    pub code: Option<String>,
    pub name: Option<String>,
    pub abbreviated_name: Option<String>,
    pub editorial_name: Option<String>,
    pub tv_code: Option<String>,
    pub is_virtual: Option<bool>,
    pub images: Option<Images>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameTeam {
    pub club: Option<GameClub>,
    pub score: Option<i32>,
    pub standings_score: Option<i32>,
}

/// Body of `GET competitions/{c}/seasons/{s}/games/{g}/report`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameReportRsp {
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
    pub local_last5_form: Option<Vec<String>>,
    pub road_last5_form: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerTeam {
    pub code: Option<String>,
    pub tv_codes: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub code: Option<String>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub image_url: Option<String>,
    pub team: Option<PlayerTeam>,
}

// Percentages arrive as preformatted strings ("35.7%"), counts as floats
// because accumulated and per-game modes share one shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    pub player_ranking: Option<i32>,
    pub player: Option<Player>,
    pub games_played: Option<f64>,
    pub games_started: Option<f64>,
    pub minutes_played: Option<f64>,
    pub points_scored: Option<f64>,
    pub two_pointers_made: Option<f64>,
    pub two_pointers_attempted: Option<f64>,
    pub two_pointers_percentage: Option<String>,
    pub three_pointers_made: Option<f64>,
    pub three_pointers_attempted: Option<f64>,
    pub three_pointers_percentage: Option<String>,
    pub free_throws_made: Option<f64>,
    pub free_throws_attempted: Option<f64>,
    pub free_throws_percentage: Option<String>,
    pub offensive_rebounds: Option<f64>,
    pub defensive_rebounds: Option<f64>,
    pub total_rebounds: Option<f64>,
    pub assists: Option<f64>,
    pub steals: Option<f64>,
    pub turnovers: Option<f64>,
    pub blocks: Option<f64>,
    pub blocks_against: Option<f64>,
    // Upstream spells it "foulsCommited".
    pub fouls_commited: Option<f64>,
    pub fouls_drawn: Option<f64>,
    pub pir: Option<f64>,
}

/// Body of `GET competitions/{c}/statistics/players/traditional`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStatsRsp {
    pub total: Option<i32>,
    pub players: Vec<PlayerStats>,
}
