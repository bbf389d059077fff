use crate::error::GeometryError;
use geojson::GeoJson;
use std::str::FromStr;
use wkt::{
    types::{
        Coord, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
        Polygon,
    },
    Wkt,
};

/// Geometry as read from WKT or GeoJSON. Coordinates keep their Z and M
/// ordinates, and empty geometries keep their type.
pub type Geometry = Wkt<f64>;

/// Build a geometry from a parsed GeoJSON value.
///
/// Accepts a GeoJSON geometry object, or a Feature whose geometry is used.
/// Feature properties are dropped.
pub fn from_geojson(value: serde_json::Value) -> Result<Geometry, GeometryError> {
    match GeoJson::from_json_value(value)? {
        GeoJson::Geometry(gj_geom) => from_geojson_value(gj_geom.value),
        GeoJson::Feature(feature) => match feature.geometry {
            Some(gj_geom) => from_geojson_value(gj_geom.value),
            None => Err(GeometryError::InvalidGeoJson("Feature has no geometry".to_string())),
        },
        GeoJson::FeatureCollection(_) => Err(GeometryError::InvalidGeoJson(
            "Expected a GeoJSON Geometry or Feature, found a FeatureCollection".to_string(),
        )),
    }
}

fn from_geojson_value(value: geojson::Value) -> Result<Geometry, GeometryError> {
    use geojson::Value;

    let geom = match value {
        Value::Point(p) => Wkt::Point(Point(Some(coord(&p)?))),
        Value::MultiPoint(points) => Wkt::MultiPoint(MultiPoint(
            points
                .iter()
                .map(|p| coord(p).map(|c| Point(Some(c))))
                .collect::<Result<_, _>>()?,
        )),
        Value::LineString(line) => Wkt::LineString(line_string(&line)?),
        Value::MultiLineString(lines) => Wkt::MultiLineString(MultiLineString(
            lines.iter().map(|l| line_string(l)).collect::<Result<_, _>>()?,
        )),
        Value::Polygon(rings) => Wkt::Polygon(polygon(&rings)?),
        Value::MultiPolygon(polys) => Wkt::MultiPolygon(MultiPolygon(
            polys.iter().map(|p| polygon(p)).collect::<Result<_, _>>()?,
        )),
        Value::GeometryCollection(members) => {
            return Ok(Wkt::GeometryCollection(GeometryCollection(
                members
                    .into_iter()
                    .map(|g| from_geojson_value(g.value))
                    .collect::<Result<_, _>>()?,
            )))
        }
    };

    let has_z = any_coord(&geom, &|c: &Coord<f64>| c.z.is_some());
    let has_xy = any_coord(&geom, &|c: &Coord<f64>| c.z.is_none());
    if has_z && has_xy {
        return Err(GeometryError::InvalidGeoJson(
            "Geometry mixes 2D and 3D positions".to_string(),
        ));
    }
    Ok(geom)
}

fn coord(position: &[f64]) -> Result<Coord<f64>, GeometryError> {
    match *position {
        [x, y] => Ok(Coord { x, y, z: None, m: None }),
        [x, y, z] => Ok(Coord { x, y, z: Some(z), m: None }),
        _ => Err(GeometryError::InvalidGeoJson(format!(
            "A position must have 2 or 3 values, found {}",
            position.len()
        ))),
    }
}

fn line_string(positions: &[Vec<f64>]) -> Result<LineString<f64>, GeometryError> {
    Ok(LineString(positions.iter().map(|p| coord(p)).collect::<Result<_, _>>()?))
}

fn polygon(rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>, GeometryError> {
    Ok(Polygon(rings.iter().map(|r| line_string(r)).collect::<Result<_, _>>()?))
}

pub fn from_wkt(raw: &str) -> Result<Geometry, GeometryError> {
    Wkt::from_str(raw.trim()).map_err(|e| GeometryError::InvalidWkt(e.to_string()))
}

/// Rebuild `geom` with every coordinate passed through `f`, keeping
/// structure and vertex order. Stops at the first coordinate that fails.
pub fn try_map_coords<F, E>(geom: &Geometry, f: &F) -> Result<Geometry, E>
where
    F: Fn(&Coord<f64>) -> Result<Coord<f64>, E>,
{
    let mapped = match geom {
        Wkt::Point(p) => Wkt::Point(map_point(p, f)?),
        Wkt::LineString(ls) => Wkt::LineString(map_line(ls, f)?),
        Wkt::Polygon(p) => Wkt::Polygon(map_polygon(p, f)?),
        Wkt::MultiPoint(mp) => Wkt::MultiPoint(MultiPoint(
            mp.0.iter().map(|p| map_point(p, f)).collect::<Result<_, _>>()?,
        )),
        Wkt::MultiLineString(ml) => Wkt::MultiLineString(MultiLineString(
            ml.0.iter().map(|l| map_line(l, f)).collect::<Result<_, _>>()?,
        )),
        Wkt::MultiPolygon(mp) => Wkt::MultiPolygon(MultiPolygon(
            mp.0.iter().map(|p| map_polygon(p, f)).collect::<Result<_, _>>()?,
        )),
        Wkt::GeometryCollection(gc) => Wkt::GeometryCollection(GeometryCollection(
            gc.0.iter().map(|g| try_map_coords(g, f)).collect::<Result<_, _>>()?,
        )),
    };
    Ok(mapped)
}

fn map_point<F, E>(p: &Point<f64>, f: &F) -> Result<Point<f64>, E>
where
    F: Fn(&Coord<f64>) -> Result<Coord<f64>, E>,
{
    Ok(Point(p.0.as_ref().map(f).transpose()?))
}

fn map_line<F, E>(ls: &LineString<f64>, f: &F) -> Result<LineString<f64>, E>
where
    F: Fn(&Coord<f64>) -> Result<Coord<f64>, E>,
{
    Ok(LineString(ls.0.iter().map(f).collect::<Result<_, _>>()?))
}

fn map_polygon<F, E>(p: &Polygon<f64>, f: &F) -> Result<Polygon<f64>, E>
where
    F: Fn(&Coord<f64>) -> Result<Coord<f64>, E>,
{
    Ok(Polygon(p.0.iter().map(|r| map_line(r, f)).collect::<Result<_, _>>()?))
}

fn any_coord(geom: &Geometry, pred: &dyn Fn(&Coord<f64>) -> bool) -> bool {
    let line = |ls: &LineString<f64>| ls.0.iter().any(pred);
    match geom {
        Wkt::Point(p) => p.0.iter().any(pred),
        Wkt::LineString(ls) => line(ls),
        Wkt::Polygon(p) => p.0.iter().any(line),
        Wkt::MultiPoint(mp) => mp.0.iter().flat_map(|p| p.0.iter()).any(pred),
        Wkt::MultiLineString(ml) => ml.0.iter().any(line),
        Wkt::MultiPolygon(mp) => mp.0.iter().flat_map(|p| p.0.iter()).any(line),
        Wkt::GeometryCollection(gc) => gc.0.iter().any(|g| any_coord(g, pred)),
    }
}

/// WKT for a geometry, spaced as `POINT Z (1 2 3)` / `LINESTRING (0 0, 1 1)`.
pub fn to_wkt(geom: &Geometry) -> String {
    let body = match geom {
        Wkt::Point(p) => p.0.as_ref().map(|c| c.to_string()),
        Wkt::LineString(ls) => (!ls.0.is_empty()).then(|| coord_list(ls)),
        Wkt::Polygon(p) => (!p.0.is_empty()).then(|| rings(p)),
        Wkt::MultiPoint(mp) => (!mp.0.is_empty()).then(|| {
            join(mp.0.iter().map(|p| match &p.0 {
                Some(c) => format!("({})", c),
                None => "EMPTY".to_string(),
            }))
        }),
        Wkt::MultiLineString(ml) => (!ml.0.is_empty()).then(|| {
            join(ml.0.iter().map(|l| parenthesized(!l.0.is_empty(), || coord_list(l))))
        }),
        Wkt::MultiPolygon(mp) => (!mp.0.is_empty()).then(|| {
            join(mp.0.iter().map(|p| parenthesized(!p.0.is_empty(), || rings(p))))
        }),
        Wkt::GeometryCollection(gc) => (!gc.0.is_empty()).then(|| join(gc.0.iter().map(to_wkt))),
    };

    let keyword = keyword(geom);
    match body {
        Some(body) => format!("{}{} ({})", keyword, dimension_tag(geom), body),
        None => format!("{} EMPTY", keyword),
    }
}

fn keyword(geom: &Geometry) -> &'static str {
    match geom {
        Wkt::Point(_) => "POINT",
        Wkt::LineString(_) => "LINESTRING",
        Wkt::Polygon(_) => "POLYGON",
        Wkt::MultiPoint(_) => "MULTIPOINT",
        Wkt::MultiLineString(_) => "MULTILINESTRING",
        Wkt::MultiPolygon(_) => "MULTIPOLYGON",
        Wkt::GeometryCollection(_) => "GEOMETRYCOLLECTION",
    }
}

fn dimension_tag(geom: &Geometry) -> &'static str {
    let z = any_coord(geom, &|c: &Coord<f64>| c.z.is_some());
    let m = any_coord(geom, &|c: &Coord<f64>| c.m.is_some());
    match (z, m) {
        (false, false) => "",
        (true, false) => " Z",
        (false, true) => " M",
        (true, true) => " ZM",
    }
}

fn coord_list(ls: &LineString<f64>) -> String {
    join(ls.0.iter().map(|c| c.to_string()))
}

fn rings(p: &Polygon<f64>) -> String {
    join(p.0.iter().map(|r| parenthesized(!r.0.is_empty(), || coord_list(r))))
}

fn parenthesized(non_empty: bool, body: impl FnOnce() -> String) -> String {
    if non_empty {
        format!("({})", body())
    } else {
        "EMPTY".to_string()
    }
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}
