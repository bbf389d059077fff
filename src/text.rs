pub const ABOUT: &str =
    "Converts a geometry to WKT format or reprojects a WKT geometry to a target EPSG code.";

pub const GEO_HELP: &str =
    "Input geometry. For recipe \"wkt\" provide a GeoJSON string, for \"epsg\" provide a WKT string.";

pub const STAC_HELP: &str = "Path or URL of a STAC item JSON file containing a geometry field \
(GeoJSON format). Values containing 'https' are fetched over HTTP. Only used for recipe \"wkt\".";

pub const RECIPE_HELP: &str =
    "Choose output: \"wkt\" converts GeoJSON to WKT, \"epsg\" reprojects a WKT geometry.";

pub const TARGET_EPSG_HELP: &str =
    "Target EPSG code for reprojection (required if recipe is \"epsg\").";

pub const TIMEOUT_HELP: &str = "Timeout in seconds for fetching remote STAC items.";

pub const AFTER_HELP: &str = r#"
Examples:

$ geowkt --geo '{"type":"Point","coordinates":[1,2]}'
POINT (1 2)

$ geowkt --stac item.json
POLYGON ((-121.8 39.6, -120.5 39.6, -120.5 40.6, -121.8 39.6))

$ geowkt --geo 'POINT (-122 37)' --recipe epsg --target-epsg 32610
POINT (588977.3244... 4095339.6911...)

Input for the epsg recipe is assumed to be EPSG:4326 (lon/lat).
Set RUST_LOG=debug to log diagnostics to stderr.
"#;
