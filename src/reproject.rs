use crate::{
    crs::Crs,
    error::ProjectionError,
    geometry::{self, Geometry},
};
use proj4rs::{transform::transform, Proj};
use tracing::debug;
use wkt::types::Coord;

/// Coordinate transformer between two EPSG coordinate systems.
///
/// Coordinates are always taken and returned in x/y order (longitude or
/// easting first), whatever the native axis order of the CRS. Geographic
/// coordinates are in degrees on both sides. Heights pass through as z.
pub struct Transformer {
    source: Proj,
    target: Proj,
    source_crs: Crs,
    target_crs: Crs,
}

impl Transformer {
    pub fn from_crs(source: &Crs, target: &Crs) -> Result<Transformer, ProjectionError> {
        let source_def = source.definition()?;
        let target_def = target.definition()?;
        debug!(%source, %target, %source_def, %target_def, "building transformer");

        Ok(Transformer {
            source: Proj::from_proj_string(source_def)?,
            target: Proj::from_proj_string(target_def)?,
            source_crs: *source,
            target_crs: *target,
        })
    }

    pub fn transform(&self, x: f64, y: f64) -> Result<(f64, f64), ProjectionError> {
        self.transform_3d(x, y, 0.0).map(|(x, y, _)| (x, y))
    }

    pub fn transform_3d(&self, x: f64, y: f64, z: f64) -> Result<(f64, f64, f64), ProjectionError> {
        // proj4rs works in radians for geographic systems
        let mut point = if self.source.is_latlong() {
            (x.to_radians(), y.to_radians(), z)
        } else {
            (x, y, z)
        };
        transform(&self.source, &self.target, &mut point)?;

        let (out_x, out_y) = if self.target.is_latlong() {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        };

        if !out_x.is_finite() || !out_y.is_finite() || !point.2.is_finite() {
            return Err(ProjectionError::Transform(format!(
                "coordinate ({} {}) cannot be transformed from {} to {}",
                x, y, self.source_crs, self.target_crs
            )));
        }
        Ok((out_x, out_y, point.2))
    }

    /// Map every coordinate of `geom` through the transform, keeping vertex
    /// order, z and m. Stops at the first coordinate that fails.
    pub fn transform_geometry(&self, geom: &Geometry) -> Result<Geometry, ProjectionError> {
        geometry::try_map_coords(geom, &|c: &Coord<f64>| -> Result<Coord<f64>, ProjectionError> {
            let (x, y, z) = self.transform_3d(c.x, c.y, c.z.unwrap_or(0.0))?;
            Ok(Coord {
                x,
                y,
                z: c.z.map(|_| z),
                m: c.m,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::WGS84;
    use wkt::Wkt;

    const EPS_METERS: f64 = 1e-2;
    const EPS_DEGREES: f64 = 1e-6;

    fn utm10() -> Crs {
        Crs::epsg(32610).unwrap()
    }

    fn numbers(wkt: &str) -> Vec<f64> {
        wkt.split(|c: char| c == '(' || c == ')' || c == ',' || c == ' ')
            .filter_map(|s| s.parse::<f64>().ok())
            .collect()
    }

    #[test]
    fn wgs84_to_utm_zone_10() {
        let t = Transformer::from_crs(&WGS84, &utm10()).unwrap();
        let (x, y) = t.transform(-122.0, 37.0).unwrap();
        assert!((x - 588977.324).abs() < EPS_METERS, "x: {}", x);
        assert!((y - 4095339.691).abs() < EPS_METERS, "y: {}", y);
    }

    #[test]
    fn central_meridian_maps_to_false_easting() {
        let t = Transformer::from_crs(&WGS84, &utm10()).unwrap();
        let (x, y) = t.transform(-123.0, 0.0).unwrap();
        assert!((x - 500000.0).abs() < EPS_METERS, "x: {}", x);
        assert!(y.abs() < EPS_METERS, "y: {}", y);
    }

    #[test]
    fn web_mercator_origin() {
        let t = Transformer::from_crs(&WGS84, &Crs::epsg(3857).unwrap()).unwrap();
        let (x, y) = t.transform(0.0, 0.0).unwrap();
        assert!(x.abs() < EPS_METERS);
        assert!(y.abs() < EPS_METERS);
    }

    #[test]
    fn round_trip_returns_original_coordinates() {
        let cases: [(u32, &[(f64, f64)]); 7] = [
            (32610, &[(-122.0, 37.0), (-121.5, 39.9), (-123.0, 45.0)]),
            (32733, &[(14.0, -20.0), (15.5, -25.0)]),
            (3857, &[(-122.0, 37.0), (10.5, 51.2), (139.7, 35.7)]),
            (26910, &[(-122.0, 37.0)]),
            (5070, &[(-96.0, 38.0), (-122.0, 37.0)]),
            (3035, &[(10.5, 51.2), (2.35, 48.85)]),
            (2154, &[(2.35, 48.85), (5.0, 45.0)]),
        ];
        for (code, points) in cases.iter() {
            let target = Crs::epsg(*code).unwrap();
            let forward = Transformer::from_crs(&WGS84, &target).unwrap();
            let inverse = Transformer::from_crs(&target, &WGS84).unwrap();
            for (lon, lat) in points.iter() {
                let (x, y) = forward.transform(*lon, *lat).unwrap();
                let (lon2, lat2) = inverse.transform(x, y).unwrap();
                assert!((lon - lon2).abs() < EPS_DEGREES, "{} lon: {} != {}", code, lon, lon2);
                assert!((lat - lat2).abs() < EPS_DEGREES, "{} lat: {} != {}", code, lat, lat2);
            }
        }
    }

    #[test]
    fn national_grids() {
        let cases: [(u32, (f64, f64)); 5] = [
            (27700, (-1.0, 52.0)),
            (2056, (7.44, 46.95)),
            (28992, (5.39, 52.16)),
            (3413, (-45.0, 75.0)),
            (3005, (-123.4, 50.0)),
        ];
        for (code, (lon, lat)) in cases.iter() {
            let target = Crs::epsg(*code).unwrap();
            let forward = Transformer::from_crs(&WGS84, &target).unwrap();
            let inverse = Transformer::from_crs(&target, &WGS84).unwrap();
            let (x, y) = forward.transform(*lon, *lat).unwrap();
            assert!(x.abs() > 1000.0 || y.abs() > 1000.0, "{}: ({} {})", code, x, y);
            let (lon2, lat2) = inverse.transform(x, y).unwrap();
            assert!((lon - lon2).abs() < EPS_DEGREES, "{} lon: {} != {}", code, lon, lon2);
            assert!((lat - lat2).abs() < EPS_DEGREES, "{} lat: {} != {}", code, lat, lat2);
        }
    }

    #[test]
    fn unknown_target_crs() {
        match Transformer::from_crs(&WGS84, &Crs::epsg(999999).unwrap()) {
            Err(ProjectionError::UnknownCrs(crs)) => assert_eq!("EPSG:999999", crs.to_string()),
            Err(e) => panic!("unexpected error {:?}", e),
            Ok(_) => panic!("expected unknown CRS"),
        }
    }

    #[test]
    fn maps_every_vertex_in_order() {
        let t = Transformer::from_crs(&WGS84, &utm10()).unwrap();
        let ring = [(-122.0, 37.0), (-121.0, 37.0), (-121.0, 38.0), (-122.0, 37.0)];
        let poly = geometry::from_wkt("POLYGON ((-122 37, -121 37, -121 38, -122 37))").unwrap();

        let projected = match t.transform_geometry(&poly).unwrap() {
            Wkt::Polygon(p) => p,
            other => panic!("expected polygon, got {:?}", other),
        };
        let coords = &projected.0[0].0;
        assert_eq!(4, coords.len());
        for ((x, y), out) in ring.iter().zip(coords.iter()) {
            let (px, py) = t.transform(*x, *y).unwrap();
            assert_eq!(px, out.x);
            assert_eq!(py, out.y);
        }
        assert_eq!(coords[0], coords[3]);
    }

    #[test]
    fn point_geometry() {
        let t = Transformer::from_crs(&WGS84, &utm10()).unwrap();
        let g = t.transform_geometry(&geometry::from_wkt("POINT (-122 37)").unwrap()).unwrap();
        let out = geometry::to_wkt(&g);
        assert!(out.starts_with("POINT ("), "{}", out);
        let c = numbers(&out);
        assert_eq!(2, c.len());
        assert!((c[0] - 588977.324).abs() < EPS_METERS);
        assert!((c[1] - 4095339.691).abs() < EPS_METERS);
    }

    #[test]
    fn z_and_m_survive_reprojection() {
        let t = Transformer::from_crs(&WGS84, &utm10()).unwrap();
        let g = t.transform_geometry(&geometry::from_wkt("POINT Z (-122 37 10)").unwrap()).unwrap();
        let out = geometry::to_wkt(&g);
        assert!(out.starts_with("POINT Z ("), "{}", out);
        let c = numbers(&out);
        assert_eq!(3, c.len());
        assert!((c[0] - 588977.324).abs() < EPS_METERS);
        assert!((c[2] - 10.0).abs() < 1e-6, "{}", out);

        let g = t
            .transform_geometry(&geometry::from_wkt("LINESTRING M (-122 37 5, -121 38 6)").unwrap())
            .unwrap();
        let out = geometry::to_wkt(&g);
        assert!(out.starts_with("LINESTRING M ("), "{}", out);
        let c = numbers(&out);
        assert_eq!(vec![5.0, 6.0], vec![c[2], c[5]]);
    }

    #[test]
    fn empty_geometries_are_unchanged() {
        let t = Transformer::from_crs(&WGS84, &utm10()).unwrap();
        for raw in ["POINT EMPTY", "LINESTRING EMPTY", "MULTIPOLYGON EMPTY"] {
            let g = t.transform_geometry(&geometry::from_wkt(raw).unwrap()).unwrap();
            assert_eq!(raw, geometry::to_wkt(&g));
        }
    }
}
