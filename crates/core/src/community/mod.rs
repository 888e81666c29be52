//! Community board: shared brews with comments and star ratings.
//!
//! Identifiers and timestamps come from the caller so board operations stay
//! deterministic under test.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrewId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrewDraft {
    pub author: String,
    pub title: String,
    pub method: String,
    #[serde(default)]
    pub coffee: Option<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub body: String,
    pub posted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedBrew {
    pub id: BrewId,
    pub author: String,
    pub title: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coffee: Option<String>,
    #[serde(default)]
    pub notes: String,
    pub shared_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Latest star rating per author.
    #[serde(default)]
    pub ratings: BTreeMap<String, u8>,
}

impl SharedBrew {
    /// Mean of all ratings rounded to one decimal place.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let total: u32 = self.ratings.values().map(|stars| u32::from(*stars)).sum();
        let mean = f64::from(total) / self.ratings.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    }

    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityBoard {
    #[serde(default)]
    brews: Vec<SharedBrew>,
}

impl CommunityBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brews(&self) -> &[SharedBrew] {
        &self.brews
    }

    pub fn brew(&self, id: &BrewId) -> Option<&SharedBrew> {
        self.brews.iter().find(|brew| brew.id == *id)
    }

    pub fn share_brew(
        &mut self,
        draft: BrewDraft,
        id: BrewId,
        now: DateTime<Utc>,
    ) -> Result<&SharedBrew, DomainError> {
        let author = required("author", &draft.author)?;
        let title = required("title", &draft.title)?;
        let method = required("method", &draft.method)?;
        if id.0.trim().is_empty() {
            return Err(DomainError::InvariantViolation("brew id must not be blank".to_string()));
        }
        if self.brew(&id).is_some() {
            return Err(DomainError::InvariantViolation(format!("brew `{}` already exists", id.0)));
        }

        let coffee = draft
            .coffee
            .map(|coffee| coffee.trim().to_string())
            .filter(|coffee| !coffee.is_empty());

        self.brews.push(SharedBrew {
            id,
            author,
            title,
            method,
            coffee,
            notes: draft.notes.trim().to_string(),
            shared_at: now,
            comments: Vec::new(),
            ratings: BTreeMap::new(),
        });

        let index = self.brews.len() - 1;
        Ok(&self.brews[index])
    }

    pub fn add_comment(
        &mut self,
        brew_id: &BrewId,
        author: &str,
        body: &str,
        id: CommentId,
        now: DateTime<Utc>,
    ) -> Result<&Comment, DomainError> {
        let author = required("author", author)?;
        let body = required("comment body", body)?;
        let brew = self.brew_mut(brew_id)?;

        brew.comments.push(Comment { id, author, body, posted_at: now });
        let index = brew.comments.len() - 1;
        Ok(&brew.comments[index])
    }

    /// Records `stars` for `author`, replacing any earlier rating by them.
    /// Returns the brew's new average.
    pub fn rate(&mut self, brew_id: &BrewId, author: &str, stars: u8) -> Result<f64, DomainError> {
        if !(MIN_STARS..=MAX_STARS).contains(&stars) {
            return Err(DomainError::InvariantViolation(format!(
                "rating must be between {MIN_STARS} and {MAX_STARS} stars, got {stars}"
            )));
        }
        let author = required("author", author)?;
        let brew = self.brew_mut(brew_id)?;

        brew.ratings.insert(author, stars);
        Ok(brew.average_rating().unwrap_or_default())
    }

    pub fn average_rating(&self, brew_id: &BrewId) -> Result<Option<f64>, DomainError> {
        self.brew(brew_id).map(SharedBrew::average_rating).ok_or_else(|| not_found(brew_id))
    }

    /// Newest first; brews shared at the same instant list the later addition first.
    pub fn recent(&self, limit: usize) -> Vec<&SharedBrew> {
        let mut brews: Vec<&SharedBrew> = self.brews.iter().rev().collect();
        brews.sort_by(|left, right| right.shared_at.cmp(&left.shared_at));
        brews.truncate(limit);
        brews
    }

    /// Rated brews by average, then by number of ratings. Unrated brews are omitted.
    pub fn top_rated(&self, limit: usize) -> Vec<&SharedBrew> {
        let mut rated: Vec<(&SharedBrew, f64)> = self
            .brews
            .iter()
            .filter_map(|brew| brew.average_rating().map(|average| (brew, average)))
            .collect();
        rated.sort_by(|(left, left_avg), (right, right_avg)| {
            right_avg
                .total_cmp(left_avg)
                .then_with(|| right.rating_count().cmp(&left.rating_count()))
        });
        rated.into_iter().take(limit).map(|(brew, _)| brew).collect()
    }

    fn brew_mut(&mut self, id: &BrewId) -> Result<&mut SharedBrew, DomainError> {
        self.brews.iter_mut().find(|brew| brew.id == *id).ok_or_else(|| not_found(id))
    }
}

fn required(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DomainError::InvariantViolation(format!("{field} must not be blank")))
    } else {
        Ok(trimmed.to_string())
    }
}

fn not_found(id: &BrewId) -> DomainError {
    DomainError::NotFound { kind: "brew", id: id.0.clone() }
}
