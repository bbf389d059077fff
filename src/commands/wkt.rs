use crate::{
    commands::Options,
    error::Error,
    geometry,
    stac::{self, StacSource},
};
use serde_json::Value;

/// GeoJSON (inline or from a STAC item) to WKT.
pub fn run(opts: &Options) -> Result<String, Error> {
    let geo = opts.geo.as_deref().filter(|g| !g.is_empty());
    let stac = opts.stac.as_deref().filter(|s| !s.is_empty());

    let gj = match (geo, stac) {
        (Some(geo), _) => serde_json::from_str::<Value>(geo)
            .map_err(|e| Error::BadParameter(format!("Invalid JSON format in --geo: {}", e)))?,
        (None, Some(stac)) => stac::load_geometry(&StacSource::from(stac), &opts.http)?,
        (None, None) => {
            return Err(Error::Usage(
                "You must provide either --geo or --stac for recipe 'wkt'".to_string(),
            ))
        }
    };

    let geom = geometry::from_geojson(gj)?;
    Ok(geometry::to_wkt(&geom))
}
