//! Message keys shared by the builder and the layout engine.
//!
//! These mirror the ids of the form layer's per-language catalogs; the
//! catalog returns the key itself for any id it does not carry.

pub const DOCUMENT_TITLE: &str = "documentTitle";
pub const DOCUMENT_FOOTER: &str = "documentFooter";
pub const NOT_SPECIFIED: &str = "notSpecified";

pub const TIME_RANGE_LABEL: &str = "timeRangePickerLabel";
pub const ACTIVITY_LABEL: &str = "activityLabel";
pub const HIKING: &str = "hiking";
pub const SKIING: &str = "skiing";
pub const CLIMBING: &str = "climbing";

pub const ABOUT_YOU: &str = "aboutYou";
pub const TEAM_LEADER: &str = "teamLeader";
pub const MEMBER: &str = "member";
pub const MEMBER_NAME_LABEL: &str = "memberName";
pub const MEMBER_CONTACT_LABEL: &str = "memberContact";
pub const MEMBER_MEDICAL_LABEL: &str = "memberMedicalNotes";

pub const TRIP_DETAILS_LABEL: &str = "tripIntentionsDetailsLabel";
pub const PRE_POST_INTENTIONS_LABEL: &str = "prePostTripIntentionsLabel";
pub const POST_TRIP_DETAILS_LABEL: &str = "postTripIntentionsDetailsLabel";

pub const EQUIPMENT: &str = "equipment";
pub const GEAR_WARNING: &str = "gearWarning";
pub const SAT_PHONE_LABEL: &str = "satPhoneNumberLabel";
