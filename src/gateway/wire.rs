//! Wire format of the upstream API.
//!
//! Only the fields the browser reads are modelled; everything else in the
//! payloads is ignored by serde.

use serde::Deserialize;

use crate::entry::{Entry, Stat};

/// `{ name, url }` pair the API uses for every reference.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// `GET /type`
#[derive(Debug, Deserialize)]
pub struct CategoryList {
    pub results: Vec<NamedRef>,
}

/// `GET /type/{name}`
#[derive(Debug, Deserialize)]
pub struct CategoryMembers {
    #[serde(alias = "pokemon")]
    pub members: Vec<Member>,
}

#[derive(Debug, Deserialize)]
pub struct Member {
    #[serde(alias = "pokemon", rename = "memberRef")]
    pub member_ref: NamedRef,
}

/// `GET /pokemon?limit=N&offset=M`
#[derive(Debug, Deserialize)]
pub struct EntryPage {
    pub count: u64,
    pub results: Vec<NamedRef>,
}

/// `GET /pokemon/{nameOrId}`
#[derive(Debug, Deserialize)]
pub struct EntryRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub category: NamedRef,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedRef,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: i64,
    pub stat: NamedRef,
}

impl From<EntryRecord> for Entry {
    fn from(record: EntryRecord) -> Self {
        let artwork = record
            .sprites
            .other
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default);
        let image_ref = artwork.or(record.sprites.front_default);

        let mut types = record.types;
        types.sort_by_key(|t| t.slot);

        Entry {
            id: record.id,
            name: record.name,
            categories: types.into_iter().map(|t| t.category.name).collect(),
            image_ref,
            height: record.height,
            weight: record.weight,
            abilities: record
                .abilities
                .into_iter()
                .map(|a| a.ability.name)
                .collect(),
            stats: record
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
        }
    }
}
