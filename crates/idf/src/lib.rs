//! Intermediate document format.
//!
//! This crate defines the validated, render-ready in-memory representation
//! of one trip-intention document. A `DocumentTree` is built once per
//! generation request, immutable afterwards, and discarded after rendering.

pub mod keys;

use chrono::NaiveDateTime;
use std::sync::Arc;
use varsel_fonts::FontRegistry;
use varsel_types::MessageCatalog;

/// The planned trip window. Either endpoint may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TripWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl TripWindow {
    /// True unless both endpoints are present and end precedes start.
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}

/// The declared trip activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Hiking,
    Skiing,
    Climbing,
    Other(String),
}

impl Activity {
    /// Maps a locale-independent tag to an activity; anything unknown is
    /// carried verbatim as `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "hiking" => Activity::Hiking,
            "skiing" => Activity::Skiing,
            "climbing" => Activity::Climbing,
            _ => Activity::Other(tag.to_string()),
        }
    }

    /// The message key for the activity's display label, if it has one.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            Activity::Hiking => Some(keys::HIKING),
            Activity::Skiing => Some(keys::SKIING),
            Activity::Climbing => Some(keys::CLIMBING),
            Activity::Other(_) => None,
        }
    }

    /// The localized display label; `Other` renders verbatim.
    pub fn display<'a>(&'a self, catalog: &'a MessageCatalog) -> &'a str {
        match self {
            Activity::Hiking => catalog.get(keys::HIKING),
            Activity::Skiing => catalog.get(keys::SKIING),
            Activity::Climbing => catalog.get(keys::CLIMBING),
            Activity::Other(name) => name,
        }
    }
}

/// One member of the team, ordered by position. Position 0 is the leader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamMember {
    pub position: usize,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub medical_notes: Option<String>,
}

impl TeamMember {
    pub fn is_leader(&self) -> bool {
        self.position == 0
    }
}

/// One selected gear entry. `canonical_id` is set when the display label
/// matched a catalog item; free-form custom gear carries `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct GearItem {
    pub canonical_id: Option<&'static str>,
    pub label: String,
}

/// A safety warning attached to a selected gear item.
#[derive(Debug, Clone, PartialEq)]
pub struct GearWarning {
    pub canonical_id: &'static str,
    pub title: String,
    pub description: String,
}

/// The three free-text narrative blocks. All optional; empty blocks are
/// skipped by the layout engine, not rendered as blank sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripNarrative {
    pub trip_plan: Option<String>,
    pub pre_post_intentions: Option<String>,
    pub post_trip_details: Option<String>,
}

impl TripNarrative {
    /// The narrative blocks in document order, paired with their label keys.
    pub fn sections(&self) -> [(&'static str, Option<&str>); 3] {
        [
            (keys::TRIP_DETAILS_LABEL, self.trip_plan.as_deref()),
            (
                keys::PRE_POST_INTENTIONS_LABEL,
                self.pre_post_intentions.as_deref(),
            ),
            (
                keys::POST_TRIP_DETAILS_LABEL,
                self.post_trip_details.as_deref(),
            ),
        ]
    }
}

/// Root aggregate consumed by the layout engine.
#[derive(Debug, Clone)]
pub struct DocumentTree {
    pub window: TripWindow,
    pub activity: Option<Activity>,
    /// Ordered member list; index equals position, position 0 is the leader.
    pub members: Vec<TeamMember>,
    /// Selected gear, in selection order, duplicates collapsed.
    pub gear: Vec<GearItem>,
    /// Resolved warnings, in gear selection order, one per canonical id.
    pub warnings: Vec<GearWarning>,
    /// Mandatory when the satellite-phone gear id is among selections.
    pub sat_phone_number: Option<String>,
    pub narrative: TripNarrative,
    /// Active language tag, carried into the document metadata.
    pub lang: String,
    pub catalog: MessageCatalog,
    pub fonts: Arc<FontRegistry>,
}

impl DocumentTree {
    pub fn leader(&self) -> Option<&TeamMember> {
        self.members.first()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
