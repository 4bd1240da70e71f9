use crate::gear;
use crate::request::IntentionsRequest;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use varsel_fonts::FontRegistry;
use varsel_idf::{Activity, DocumentTree, GearItem, TeamMember, TripNarrative, TripWindow};
use varsel_types::MessageCatalog;

/// Caller-correctable validation failures. Surfaced verbatim to the form
/// layer; generation aborts before any layout work.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Trip window end precedes its start")]
    InvalidTripWindow,

    #[error("The team has no members")]
    EmptyTeam,

    #[error("No team member occupies the leader position")]
    MissingLeader,

    #[error("Satellite phone selected but no contact number given")]
    MissingSatPhoneNumber,
}

/// Builds the render-ready document tree from a raw request.
pub fn build(
    request: IntentionsRequest,
    catalog: MessageCatalog,
    fonts: Arc<FontRegistry>,
) -> Result<DocumentTree, ValidationError> {
    let window = request
        .time_range
        .map(|range| TripWindow {
            start: range.start,
            end: range.end,
        })
        .unwrap_or_default();
    if !window.is_ordered() {
        return Err(ValidationError::InvalidTripWindow);
    }

    if request.members.is_empty() {
        return Err(ValidationError::EmptyTeam);
    }
    let members: Vec<TeamMember> = request
        .members
        .into_iter()
        .enumerate()
        .map(|(position, record)| TeamMember {
            position,
            name: non_blank(record.name),
            contact: non_blank(record.contact),
            medical_notes: non_blank(record.medical_notes),
        })
        .collect();
    // The enumeration above puts the leader at position 0; checked anyway.
    if !members.first().is_some_and(TeamMember::is_leader) {
        return Err(ValidationError::MissingLeader);
    }

    let (gear, warnings) = resolve_gear(request.essential_gear, &catalog);

    let sat_phone_selected = gear
        .iter()
        .any(|item| item.canonical_id == Some(gear::SAT_PHONE_ID));
    let sat_phone_number = non_blank(request.sat_phone_number);
    let sat_phone_number = if sat_phone_selected {
        match sat_phone_number {
            Some(number) => Some(number),
            None => return Err(ValidationError::MissingSatPhoneNumber),
        }
    } else {
        // The number section exists iff the satellite phone is selected.
        None
    };

    let activity = request
        .activity
        .as_deref()
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(Activity::from_tag);

    log::debug!(
        "Built document tree: {} member(s), {} gear item(s), {} warning(s)",
        members.len(),
        gear.len(),
        warnings.len()
    );

    Ok(DocumentTree {
        window,
        activity,
        members,
        gear,
        warnings,
        sat_phone_number,
        narrative: TripNarrative {
            trip_plan: non_blank(request.trip_intentions_details),
            pre_post_intentions: non_blank(request.pre_post_trip_intentions),
            post_trip_details: non_blank(request.post_trip_intentions_details),
        },
        lang: request.lang.unwrap_or_else(|| "en".to_string()),
        catalog,
        fonts,
    })
}

/// Collapses duplicate selections, resolves canonical ids, and collects
/// warnings in selection order with at most one entry per canonical id.
fn resolve_gear(
    selections: Vec<String>,
    catalog: &MessageCatalog,
) -> (Vec<GearItem>, Vec<varsel_idf::GearWarning>) {
    let mut seen_labels = HashSet::new();
    let mut warned_ids = HashSet::new();
    let mut items = Vec::new();
    let mut warnings = Vec::new();

    for label in selections {
        let label = label.trim().to_string();
        if label.is_empty() || !seen_labels.insert(label.clone()) {
            continue;
        }
        let canonical_id = gear::canonical_id(&label, catalog);
        if let Some(id) = canonical_id
            && warned_ids.insert(id)
            && let Some(warning) = gear::warning_for(id, catalog)
        {
            warnings.push(warning);
        }
        items.push(GearItem {
            canonical_id,
            label,
        });
    }
    (items, warnings)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
