use crate::{
    commands::Options,
    crs::{self, Crs},
    error::Error,
    geometry,
    reproject::Transformer,
};

/// Reproject an EPSG:4326 WKT geometry to the target EPSG code.
pub fn run(opts: &Options) -> Result<String, Error> {
    let geo = match opts.geo.as_deref().filter(|g| !g.is_empty()) {
        Some(geo) => geo,
        None => {
            return Err(Error::Usage(
                "You must provide --geo with WKT geometry for recipe 'epsg'".to_string(),
            ))
        }
    };
    let target_epsg = match opts.target_epsg.filter(|code| *code != 0) {
        Some(code) => code,
        None => {
            return Err(Error::Usage(
                "You must provide --target-epsg when using recipe 'epsg'".to_string(),
            ))
        }
    };

    let geom = geometry::from_wkt(geo)
        .map_err(|e| Error::BadParameter(format!("Invalid WKT format in --geo: {}", e)))?;

    let target = Crs::epsg(target_epsg)?;
    let reprojected = Transformer::from_crs(&crs::WGS84, &target)?.transform_geometry(&geom)?;

    Ok(geometry::to_wkt(&reprojected))
}
