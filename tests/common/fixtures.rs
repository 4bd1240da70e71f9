use serde_json::{Value, json};
use varsel::MessageCatalog;

/// English message catalog covering everything the document renders.
pub fn catalog_en() -> MessageCatalog {
    serde_json::from_value(json!({
        "documentTitle": "Trip intentions",
        "documentFooter": "If we are not back by the end date, call the rescue services.",
        "notSpecified": "Not specified",
        "timeRangePickerLabel": "When",
        "activityLabel": "Activity",
        "hiking": "Hiking",
        "skiing": "Skiing",
        "climbing": "Climbing",
        "aboutYou": "About you",
        "teamLeader": "team leader",
        "member": "Team member",
        "memberName": "Name",
        "memberContact": "Contact",
        "memberMedicalNotes": "Medical conditions",
        "tripIntentionsDetailsLabel": "Trip plan",
        "prePostTripIntentionsLabel": "Before and after the trip",
        "postTripIntentionsDetailsLabel": "After the trip",
        "equipment": "Essential gear",
        "gearWarning": "Gear warnings",
        "satPhoneNumberLabel": "Satellite phone number",
        "gear1": "Map",
        "gear1warning": "Check the edition date before leaving.",
        "gear2": "Compass",
        "gear3": "Headlamp",
        "gear7": "Avalanche transceiver",
        "gear7warning": "Test the transceiver with your team before leaving.",
        "gear9": "Satellite phone",
        "gear13": "Stove",
        "gear13warning": "Never use the stove inside the tent.",
        "gear14": "First aid kit"
    }))
    .expect("static catalog fixture deserializes")
}

/// French catalog subset; gear ids stay stable while labels change.
pub fn catalog_fr() -> MessageCatalog {
    serde_json::from_value(json!({
        "documentTitle": "Intentions de sortie",
        "documentFooter": "Si nous ne sommes pas rentrés, appelez les secours.",
        "notSpecified": "Non renseigné",
        "timeRangePickerLabel": "Quand",
        "activityLabel": "Activité",
        "hiking": "Randonnée",
        "aboutYou": "À propos de vous",
        "teamLeader": "chef d'équipe",
        "member": "Membre",
        "memberName": "Nom",
        "equipment": "Matériel essentiel",
        "gearWarning": "Avertissements",
        "gear1": "Carte",
        "gear1warning": "Vérifiez la date d'édition avant de partir.",
        "gear9": "Téléphone satellite",
        "satPhoneNumberLabel": "Numéro du téléphone satellite"
    }))
    .expect("static catalog fixture deserializes")
}

/// A minimal one-person request.
pub fn solo_request() -> Value {
    json!({
        "members": [{ "name": "A" }]
    })
}

/// The full end-to-end scenario: a day hike with one leader and one plain
/// gear item.
pub fn simple_hiking_request() -> Value {
    json!({
        "timeRange": { "start": "2024-06-01T08:00:00", "end": "2024-06-01T18:00:00" },
        "activity": "hiking",
        "members": [{ "name": "A" }],
        "essentialGear": ["Compass"],
        "lang": "en"
    })
}

/// A request with `count` members named "Member 0".."Member N".
pub fn team_request(count: usize) -> Value {
    let members: Vec<Value> = (0..count)
        .map(|i| json!({ "name": format!("Member {}", i), "contact": format!("+47 000 {:02}", i) }))
        .collect();
    json!({ "members": members })
}
