use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Normalized, typed stats for one player row.
///
/// Assembled by the scanner from the cleaned cell texts and never mutated
/// afterwards. `survival` is formatted "MM:SS"; it is serialized under both
/// `survival` and the legacy `survival_time` key the frontend expects, and
/// either key is accepted on the way back in.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub kills: u32,
    pub assists: u32,
    pub damage: u32,
    pub survival: String,
}

impl<'de> Deserialize<'de> for PlayerRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            name: String,
            kills: u32,
            assists: u32,
            damage: u32,
            #[serde(default)]
            survival: Option<String>,
            #[serde(default)]
            survival_time: Option<String>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let survival = raw
            .survival
            .or(raw.survival_time)
            .ok_or_else(|| serde::de::Error::missing_field("survival"))?;

        Ok(PlayerRecord {
            name: raw.name,
            kills: raw.kills,
            assists: raw.assists,
            damage: raw.damage,
            survival,
        })
    }
}

impl Serialize for PlayerRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PlayerRecord", 6)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("kills", &self.kills)?;
        state.serialize_field("assists", &self.assists)?;
        state.serialize_field("damage", &self.damage)?;
        state.serialize_field("survival", &self.survival)?;
        // Duplicate key kept for frontend compatibility
        state.serialize_field("survival_time", &self.survival)?;
        state.end()
    }
}

/// Terminal output of the extraction pipeline.
///
/// Row order matches the on-screen table, top to bottom. Rows that failed the
/// name validity gate are already gone by the time this is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractionResult {
    pub players: Vec<PlayerRecord>,
}
