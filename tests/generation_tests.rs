mod common;

use common::fixtures::*;
use common::{TestResult, generate_pdf, generate_pdf_with_catalog};
use serde_json::json;

#[test]
fn test_simple_hiking_trip_end_to_end() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&simple_hiking_request())?;

    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Trip intentions");
    assert_pdf_contains_text!(pdf, "2024-06-01 08:00");
    assert_pdf_contains_text!(pdf, "2024-06-01 18:00");
    assert_pdf_contains_text!(pdf, "Activity: Hiking");
    assert_pdf_contains_text!(pdf, "About you");
    assert_pdf_contains_text!(pdf, "Name: A");
    assert_pdf_contains_text!(pdf, "Essential gear");
    assert_pdf_contains_text!(pdf, "Compass");
    assert_pdf_contains_text!(pdf, "If we are not back");

    // No warnings section, no satellite phone section, no narrative.
    assert_pdf_not_contains_text!(pdf, "Gear warnings");
    assert_pdf_not_contains_text!(pdf, "Satellite phone number");
    assert_pdf_not_contains_text!(pdf, "Trip plan");
    Ok(())
}

#[test]
fn test_output_is_byte_identical_across_runs() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let first = generate_pdf(&simple_hiking_request())?;
    let second = generate_pdf(&simple_hiking_request())?;
    assert_eq!(first.bytes, second.bytes);
    Ok(())
}

#[test]
fn test_default_page_is_a4() -> TestResult {
    let pdf = generate_pdf(&solo_request())?;
    let (width, height) =
        common::pdf_assertions::get_page_dimensions(&pdf.doc, 1).expect("page 1 has a media box");
    assert!((width - 595.28).abs() < 1.0);
    assert!((height - 841.89).abs() < 1.0);
    Ok(())
}

#[test]
fn test_only_used_faces_are_embedded() -> TestResult {
    // The simple trip uses the bold title face, the normal body face and
    // the italic footer face. The registered normal title face and bold
    // body face go unused and must not be embedded.
    let pdf = generate_pdf(&simple_hiking_request())?;
    let fonts = common::pdf_assertions::extract_font_names(&pdf.doc);
    assert_eq!(fonts, vec!["Andika", "Andika-Italic", "LifeSavers-Bold"]);
    Ok(())
}

#[test]
fn test_narrative_rendered_when_present() -> TestResult {
    let request = json!({
        "members": [{ "name": "A" }],
        "tripIntentionsDetails": "Up the east ridge, down the north face.",
        "postTripIntentionsDetails": "Check in at the hut."
    });
    let pdf = generate_pdf(&request)?;

    assert_pdf_contains_text!(pdf, "Trip plan");
    assert_pdf_contains_text!(pdf, "east ridge");
    assert_pdf_contains_text!(pdf, "After the trip");
    assert_pdf_contains_text!(pdf, "Check in at the hut.");
    // The middle field was empty and is skipped, not rendered blank.
    assert_pdf_not_contains_text!(pdf, "Before and after the trip");
    Ok(())
}

#[test]
fn test_team_renders_leader_first_with_role() -> TestResult {
    let pdf = generate_pdf(&team_request(3))?;
    let text = common::pdf_assertions::extract_text(&pdf.doc);

    assert!(text.contains("About you (team leader)"));
    let leader = text.find("Member 0").expect("leader name present");
    let second = text.find("Member 1").expect("second member present");
    let third = text.find("Member 2").expect("third member present");
    assert!(leader < second && second < third);
    Ok(())
}

#[test]
fn test_warnings_follow_selection_order() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // Stove (gear13) selected before Map (gear1); the warnings section
    // must keep selection order, not catalog order.
    let request = json!({
        "members": [{ "name": "A" }],
        "essentialGear": ["Stove", "Map"]
    });
    let pdf = generate_pdf(&request)?;
    let text = common::pdf_assertions::extract_text(&pdf.doc);

    assert!(text.contains("Gear warnings"));
    let stove = text
        .find("Never use the stove inside the tent.")
        .expect("stove warning present");
    let map = text
        .find("Check the edition date before leaving.")
        .expect("map warning present");
    assert!(stove < map);
    Ok(())
}

#[test]
fn test_duplicate_selection_yields_one_warning() -> TestResult {
    let request = json!({
        "members": [{ "name": "A" }],
        "essentialGear": ["Map", "Map"]
    });
    let pdf = generate_pdf(&request)?;
    let text = common::pdf_assertions::extract_text(&pdf.doc);

    assert_eq!(
        text.matches("Check the edition date before leaving.").count(),
        1
    );
    Ok(())
}

#[test]
fn test_sat_phone_number_rendered_with_gear() -> TestResult {
    let request = json!({
        "members": [{ "name": "A" }],
        "essentialGear": ["Satellite phone"],
        "satPhoneNumber": "+47 123 45 678"
    });
    let pdf = generate_pdf(&request)?;

    assert_pdf_contains_text!(pdf, "Satellite phone number: +47 123 45 678");
    Ok(())
}

#[test]
fn test_custom_gear_renders_without_warning() -> TestResult {
    let request = json!({
        "members": [{ "name": "A" }],
        "essentialGear": ["Lucky charm"]
    });
    let pdf = generate_pdf(&request)?;

    assert_pdf_contains_text!(pdf, "Lucky charm");
    assert_pdf_not_contains_text!(pdf, "Gear warnings");
    Ok(())
}

#[test]
fn test_french_catalog_keeps_warnings_attached() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // Warnings are keyed by canonical id, so the French label still finds
    // its (French) warning.
    let request = json!({
        "members": [{ "name": "A" }],
        "activity": "hiking",
        "essentialGear": ["Carte"],
        "lang": "fr"
    });
    let pdf = generate_pdf_with_catalog(&request, catalog_fr())?;

    assert_pdf_contains_text!(pdf, "Intentions de sortie");
    assert_pdf_contains_text!(pdf, "Activité: Randonnée");
    assert_pdf_contains_text!(pdf, "Carte");
    assert_pdf_contains_text!(pdf, "Vérifiez la date d'édition avant de partir.");
    Ok(())
}

#[test]
fn test_missing_translation_renders_key_itself() -> TestResult {
    // An empty catalog is visibly broken but never blocks generation.
    let pdf = generate_pdf_with_catalog(&solo_request(), varsel::MessageCatalog::new())?;
    assert_pdf_contains_text!(pdf, "documentTitle");
    Ok(())
}

#[test]
fn test_window_with_open_end_renders_placeholder() -> TestResult {
    let request = json!({
        "members": [{ "name": "A" }],
        "timeRange": { "start": "2024-06-01T08:00:00" }
    });
    let pdf = generate_pdf(&request)?;

    assert_pdf_contains_text!(pdf, "2024-06-01 08:00");
    assert_pdf_contains_text!(pdf, "Not specified");
    Ok(())
}
