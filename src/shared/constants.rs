/// Collection path for villa records
pub const VILLA_API_PATH: &str = "/api/VillaAPI";

/// Message returned by the API when a villa id does not exist
pub const VILLA_NOT_FOUND: &str = "Villa not found";

/// Patch operation kind understood by the villa PATCH endpoint
pub const PATCH_OP_REPLACE: &str = "replace";
