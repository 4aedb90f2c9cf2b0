use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A listing returned by the travel API.
///
/// Only `id` is required. Everything else defaults so partial records
/// (and fields added to the API later) don't break decoding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TravelItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub images: Vec<TravelImage>,
    #[serde(rename = "isBookmark", default)]
    pub is_bookmark: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TravelImage {
    #[serde(default)]
    pub url: String,
}

/// Listing categories the API filters on (`?category=`).
///
/// The wire name, the CLI name and [`Category::as_str`] are all the variant
/// name in lowercase.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum Category {
    Flight,
    Hotel,
    Transportation,
    TopDestination,
    Nearby,
    MightNeedThese,
}

impl Category {
    /// The query value the API expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Flight => "flight",
            Category::Hotel => "hotel",
            Category::Transportation => "transportation",
            Category::TopDestination => "topdestination",
            Category::Nearby => "nearby",
            Category::MightNeedThese => "mightneedthese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for `PUT /travel/{id}`.
#[derive(Serialize, Debug)]
pub(crate) struct BookmarkPatch {
    #[serde(rename = "isBookmark")]
    pub is_bookmark: bool,
}
