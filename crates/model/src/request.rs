//! Raw request payload, as posted by the form layer.
//!
//! Field names follow the form's camelCase ids verbatim so the payload can
//! be fed through unchanged.

use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntentionsRequest {
    pub time_range: Option<TimeRangeInput>,
    /// Locale-independent activity tag ("hiking", "skiing", "climbing",
    /// or anything else as a free-form activity).
    pub activity: Option<String>,
    /// Ordered member records; index 0 is the team leader.
    pub members: Vec<MemberRecord>,
    pub trip_intentions_details: Option<String>,
    pub pre_post_trip_intentions: Option<String>,
    pub post_trip_intentions_details: Option<String>,
    /// Selected gear display labels, catalog entries and custom tags alike.
    pub essential_gear: Vec<String>,
    pub sat_phone_number: Option<String>,
    /// Active language tag, e.g. "en" or "fr".
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeRangeInput {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberRecord {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub medical_notes: Option<String>,
}
