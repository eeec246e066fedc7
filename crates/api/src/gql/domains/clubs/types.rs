use async_graphql::{Enum, SimpleObject};

use upstream::models as rsp;

use crate::gql::common::types::{Images, UpstreamToken};

/// Euroleague club codes (2024-25 field).
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ClubCode {
    /// LDLC ASVEL Villeurbanne
    Asv,
    /// FC Barcelona
    Bar,
    /// Baskonia Vitoria-Gasteiz
    Bas,
    /// ALBA Berlin
    Ber,
    /// Anadolu Efes Istanbul
    Ist,
    /// Real Madrid
    Mad,
    /// AS Monaco
    Mco,
    /// EA7 Emporio Armani Milan
    Mil,
    /// FC Bayern Munich
    Mun,
    /// Olympiacos Piraeus
    Oly,
    /// Panathinaikos Athens
    Pan,
    /// Partizan Belgrade
    Par,
    /// Paris Basketball
    Prs,
    /// Crvena Zvezda Belgrade
    Red,
    /// Maccabi Tel Aviv
    Tel,
    /// Fenerbahce Istanbul
    Ulk,
    /// Virtus Bologna
    Vir,
    /// Zalgiris Kaunas
    Zal,
}

impl UpstreamToken for ClubCode {
    fn token(&self) -> &'static str {
        match self {
            ClubCode::Asv => "ASV",
            ClubCode::Bar => "BAR",
            ClubCode::Bas => "BAS",
            ClubCode::Ber => "BER",
            ClubCode::Ist => "IST",
            ClubCode::Mad => "MAD",
            ClubCode::Mco => "MCO",
            ClubCode::Mil => "MIL",
            ClubCode::Mun => "MUN",
            ClubCode::Oly => "OLY",
            ClubCode::Pan => "PAN",
            ClubCode::Par => "PAR",
            ClubCode::Prs => "PRS",
            ClubCode::Red => "RED",
            ClubCode::Tel => "TEL",
            ClubCode::Ulk => "ULK",
            ClubCode::Vir => "VIR",
            ClubCode::Zal => "ZAL",
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Country {
    pub code: Option<String>,
    pub name: Option<String>,
}

impl From<rsp::Country> for Country {
    fn from(raw: rsp::Country) -> Self {
        Self {
            code: raw.code,
            name: raw.name,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Venue {
    pub name: Option<String>,
    pub code: Option<String>,
    pub capacity: Option<i32>,
    pub address: Option<String>,
    pub images: Option<Images>,
    pub active: Option<bool>,
    pub notes: Option<String>,
}

impl From<rsp::Venue> for Venue {
    fn from(raw: rsp::Venue) -> Self {
        Self {
            name: raw.name,
            code: raw.code,
            capacity: raw.capacity,
            address: raw.address,
            images: Some(Images::from_raw(raw.images)),
            active: raw.active,
            notes: raw.notes,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
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

impl From<rsp::Club> for Club {
    fn from(raw: rsp::Club) -> Self {
        Self {
            code: raw.code,
            name: raw.name,
            alias: raw.alias,
            is_virtual: raw.is_virtual,
            country: raw.country.map(Country::from),
            address: raw.address,
            website: raw.website,
            tickets_url: raw.tickets_url,
            twitter_account: raw.twitter_account,
            instagram_account: raw.instagram_account,
            facebook_account: raw.facebook_account,
            venue: raw.venue.map(Venue::from),
            venue_backup: raw.venue_backup.map(Venue::from),
            national_competition_code: raw.national_competition_code,
            city: raw.city,
            president: raw.president,
            phone: raw.phone,
            fax: raw.fax,
            images: Some(Images::from_raw(raw.images)),
        }
    }
}
