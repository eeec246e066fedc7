use async_graphql::{Enum, SimpleObject};

use upstream::models as rsp;

use crate::gql::common::types::UpstreamToken;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum SeasonMode {
    All,
    Single,
    Range,
}

impl UpstreamToken for SeasonMode {
    fn token(&self) -> &'static str {
        match self {
            SeasonMode::All => "All",
            SeasonMode::Single => "Single",
            SeasonMode::Range => "Range",
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum PhaseTypeCode {
    /// Regular season
    Rs,
    /// Play-in
    Pi,
    /// Playoffs
    Po,
    /// Final Four
    Ff,
}

impl UpstreamToken for PhaseTypeCode {
    fn token(&self) -> &'static str {
        match self {
            PhaseTypeCode::Rs => "RS",
            PhaseTypeCode::Pi => "PI",
            PhaseTypeCode::Po => "PO",
            PhaseTypeCode::Ff => "FF",
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum StatisticMode {
    Accumulated,
    PerGame,
    PerMinute,
}

impl UpstreamToken for StatisticMode {
    fn token(&self) -> &'static str {
        match self {
            StatisticMode::Accumulated => "accumulated",
            StatisticMode::PerGame => "perGame",
            StatisticMode::PerMinute => "perMinute",
        }
    }
}

/// Aggregation mode the server applies before sorting on `statistic`.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum StatisticSortMode {
    Accumulated,
    PerGame,
    PerMinute,
}

impl UpstreamToken for StatisticSortMode {
    fn token(&self) -> &'static str {
        match self {
            StatisticSortMode::Accumulated => "accumulated",
            StatisticSortMode::PerGame => "perGame",
            StatisticSortMode::PerMinute => "perMinute",
        }
    }
}

/// Traditional stat columns accepted by the upstream `statistic` parameter.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum Statistic {
    GamesPlayed,
    GamesStarted,
    MinutesPlayed,
    PointsScored,
    TwoPointersMade,
    TwoPointersAttempted,
    ThreePointersMade,
    ThreePointersAttempted,
    FreeThrowsMade,
    FreeThrowsAttempted,
    OffensiveRebounds,
    DefensiveRebounds,
    TotalRebounds,
    Assists,
    Steals,
    Turnovers,
    Blocks,
    BlocksAgainst,
    FoulsCommited,
    FoulsDrawn,
    Pir,
}

impl UpstreamToken for Statistic {
    fn token(&self) -> &'static str {
        match self {
            Statistic::GamesPlayed => "gamesPlayed",
            Statistic::GamesStarted => "gamesStarted",
            Statistic::MinutesPlayed => "minutesPlayed",
            Statistic::PointsScored => "pointsScored",
            Statistic::TwoPointersMade => "twoPointersMade",
            Statistic::TwoPointersAttempted => "twoPointersAttempted",
            Statistic::ThreePointersMade => "threePointersMade",
            Statistic::ThreePointersAttempted => "threePointersAttempted",
            Statistic::FreeThrowsMade => "freeThrowsMade",
            Statistic::FreeThrowsAttempted => "freeThrowsAttempted",
            Statistic::OffensiveRebounds => "offensiveRebounds",
            Statistic::DefensiveRebounds => "defensiveRebounds",
            Statistic::TotalRebounds => "totalRebounds",
            Statistic::Assists => "assists",
            Statistic::Steals => "steals",
            Statistic::Turnovers => "turnovers",
            Statistic::Blocks => "blocks",
            Statistic::BlocksAgainst => "blocksAgainst",
            Statistic::FoulsCommited => "foulsCommited",
            Statistic::FoulsDrawn => "foulsDrawn",
            Statistic::Pir => "pir",
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl UpstreamToken for SortDirection {
    fn token(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct PlayerTeam {
    pub code: Option<String>,
    pub tv_codes: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

impl From<rsp::PlayerTeam> for PlayerTeam {
    fn from(raw: rsp::PlayerTeam) -> Self {
        Self {
            code: raw.code,
            tv_codes: raw.tv_codes,
            name: raw.name,
            image_url: raw.image_url,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Player {
    pub code: Option<String>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub image_url: Option<String>,
    pub team: Option<PlayerTeam>,
}

impl From<rsp::Player> for Player {
    fn from(raw: rsp::Player) -> Self {
        Self {
            code: raw.code,
            name: raw.name,
            age: raw.age,
            image_url: raw.image_url,
            team: raw.team.map(PlayerTeam::from),
        }
    }
}

/// One row of the traditional statistics table. Percentages stay the
/// preformatted strings upstream sends.
#[derive(SimpleObject, Clone, Debug)]
pub struct PlayerTraditionalStatistics {
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
    pub fouls_commited: Option<f64>,
    pub fouls_drawn: Option<f64>,
    pub pir: Option<f64>,
}

impl From<rsp::PlayerStats> for PlayerTraditionalStatistics {
    fn from(raw: rsp::PlayerStats) -> Self {
        Self {
            player_ranking: raw.player_ranking,
            player: raw.player.map(Player::from),
            games_played: raw.games_played,
            games_started: raw.games_started,
            minutes_played: raw.minutes_played,
            points_scored: raw.points_scored,
            two_pointers_made: raw.two_pointers_made,
            two_pointers_attempted: raw.two_pointers_attempted,
            two_pointers_percentage: raw.two_pointers_percentage,
            three_pointers_made: raw.three_pointers_made,
            three_pointers_attempted: raw.three_pointers_attempted,
            three_pointers_percentage: raw.three_pointers_percentage,
            free_throws_made: raw.free_throws_made,
            free_throws_attempted: raw.free_throws_attempted,
            free_throws_percentage: raw.free_throws_percentage,
            offensive_rebounds: raw.offensive_rebounds,
            defensive_rebounds: raw.defensive_rebounds,
            total_rebounds: raw.total_rebounds,
            assists: raw.assists,
            steals: raw.steals,
            turnovers: raw.turnovers,
            blocks: raw.blocks,
            blocks_against: raw.blocks_against,
            fouls_commited: raw.fouls_commited,
            fouls_drawn: raw.fouls_drawn,
            pir: raw.pir,
        }
    }
}

/// Total row count plus one page of rows, in upstream's order.
#[derive(SimpleObject, Clone, Debug)]
pub struct PlayerTraditionalResponse {
    pub total: Option<i32>,
    pub players: Vec<PlayerTraditionalStatistics>,
}

impl From<rsp::PlayerStatsRsp> for PlayerTraditionalResponse {
    fn from(raw: rsp::PlayerStatsRsp) -> Self {
        Self {
            total: raw.total,
            players: raw
                .players
                .into_iter()
                .map(PlayerTraditionalStatistics::from)
                .collect(),
        }
    }
}
