use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    TransgenderMale,
    TransgenderFemale,
    Intersex,
    NonBinary,
}

impl Gender {
    /// Canonical category order. Partitioned results are always reported in this order.
    pub const ALL: [Gender; 6] = [
        Gender::Male,
        Gender::Female,
        Gender::TransgenderMale,
        Gender::TransgenderFemale,
        Gender::Intersex,
        Gender::NonBinary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::TransgenderMale => "Transgender Male",
            Gender::TransgenderFemale => "Transgender Female",
            Gender::Intersex => "Intersex",
            Gender::NonBinary => "Non-Binary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// Bare reference to a studio, as nested under `parent_studio`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Studio {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_studio: Option<StudioRef>,
}

impl Studio {
    pub fn to_ref(&self) -> StudioRef {
        StudioRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub performers: Vec<Performer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio: Option<Studio>,
}

/// Shape of a `findScenes` query result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenesQueryResult {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

/// Shape of an unfiltered `findStudios` query result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudiosQueryResult {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub studios: Vec<Studio>,
}
