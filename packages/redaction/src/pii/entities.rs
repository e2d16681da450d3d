//! Entity vocabularies per backend and redaction level.
//!
//! The two backends name equivalent concepts in their own vocabularies, so
//! each keeps its own table. Strict is a superset of essential for both.

use super::RedactionLevel;

const GOOGLE_DLP_STRICT: &[&str] = &[
    "FIRST_NAME",
    "LAST_NAME",
    "PERSON_NAME",
    "DATE_OF_BIRTH",
    "LOCATION",
    "STREET_ADDRESS",
    "PHONE_NUMBER",
    "EMAIL_ADDRESS",
    "CREDIT_CARD_NUMBER",
    "IBAN_CODE",
    "IP_ADDRESS",
    "PASSPORT",
    "VAT_NUMBER",
    "MEDICAL_RECORD_NUMBER",
];

const GOOGLE_DLP_ESSENTIAL: &[&str] = &[
    "PHONE_NUMBER",
    "EMAIL_ADDRESS",
    "CREDIT_CARD_NUMBER",
    "IBAN_CODE",
    "IP_ADDRESS",
    "PASSPORT",
    "VAT_NUMBER",
    "MEDICAL_RECORD_NUMBER",
];

const PRESIDIO_STRICT: &[&str] = &[
    "CREDIT_CARD",
    "CRYPTO",
    "EMAIL_ADDRESS",
    "IBAN_CODE",
    "IP_ADDRESS",
    "LOCATION",
    "PERSON",
    "PHONE_NUMBER",
    "MEDICAL_LICENSE",
    "US_BANK_NUMBER",
    "US_DRIVER_LICENSE",
    "US_ITIN",
    "US_PASSPORT",
    "US_SSN",
    "UK_NHS",
    "SG_NRIC_FIN",
    "AU_ABN",
    "AU_ACN",
    "AU_TFN",
    "AU_MEDICARE",
    "IN_PAN",
    "IN_AADHAAR",
    "IN_VEHICLE_REGISTRATION",
    "IN_VOTER",
    "IN_PASSPORT",
];

const PRESIDIO_ESSENTIAL: &[&str] = &[
    "CREDIT_CARD",
    "CRYPTO",
    "EMAIL_ADDRESS",
    "IBAN_CODE",
    "IP_ADDRESS",
    "PHONE_NUMBER",
    "MEDICAL_LICENSE",
    "US_BANK_NUMBER",
    "US_DRIVER_LICENSE",
    "US_ITIN",
    "US_PASSPORT",
    "US_SSN",
    "UK_NHS",
    "SG_NRIC_FIN",
    "AU_ABN",
    "AU_ACN",
    "AU_TFN",
    "AU_MEDICARE",
    "IN_PAN",
    "IN_AADHAAR",
    "IN_VEHICLE_REGISTRATION",
    "IN_VOTER",
    "IN_PASSPORT",
];

/// Info types for the cloud DLP backend at the given level.
pub fn google_dlp_info_types(level: RedactionLevel) -> &'static [&'static str] {
    match level {
        RedactionLevel::Essential => GOOGLE_DLP_ESSENTIAL,
        RedactionLevel::Strict => GOOGLE_DLP_STRICT,
    }
}

/// Entity names for the Presidio backend at the given level.
pub fn presidio_entities(level: RedactionLevel) -> &'static [&'static str] {
    match level {
        RedactionLevel::Essential => PRESIDIO_ESSENTIAL,
        RedactionLevel::Strict => PRESIDIO_STRICT,
    }
}
