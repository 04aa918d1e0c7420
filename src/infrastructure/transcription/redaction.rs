//! Per-backend PII masking category tables.

/// Categories AssemblyAI is asked to mask. Restricted to financial and
/// national-id spans so the rest of the consultation context survives
/// for the legal summary.
pub const ASSEMBLYAI_REDACTION_POLICIES: &[&str] = &[
    "banking_information",
    "credit_card_number",
    "credit_card_expiration",
    "credit_card_cvv",
    "us_social_security_number",
];

/// Masked spans are replaced with the entity-name placeholder token.
pub const ASSEMBLYAI_REDACTION_SUBSTITUTION: &str = "entity_name";

/// Categories Deepgram is asked to mask: financial, personal-identifier,
/// health-adjacent, and contact entities.
pub const DEEPGRAM_REDACTION_ENTITIES: &[&str] = &[
    "banking_information",
    "credit_card",
    "credit_cvv",
    "credit_expiration",
    "ssn",
    "drivers_license",
    "passport_number",
    "date_of_birth",
    "healthcare_number",
    "medical_condition",
    "email_address",
    "phone_number",
];
