/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rover camera as reported by the photo service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub id: i64,
    pub name: String,
    pub rover_id: i64,
    pub full_name: String,
}

/// Rover mission summary attached to every photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rover {
    pub id: i64,
    pub name: String,
    pub landing_date: String,
    pub launch_date: String,
    pub status: String,
    pub max_sol: i64,
    pub max_date: String,
    pub total_photos: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub sol: i64,
    pub camera: Camera,
    pub img_src: String,
    pub earth_date: String,
    pub rover: Rover,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoListResponse {
    pub photos: Vec<Photo>,
}

/// Gallery headline numbers. Fixed values, not derived from photo data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoverStats {
    pub total_photos: i64,
    pub active_sol: i64,
    pub active_rovers: i64,
}

impl RoverStats {
    pub const fn current() -> Self {
        Self {
            total_photos: 47_832,
            active_sol: 4_127,
            active_rovers: 3,
        }
    }
}

/// Resolved parameters for a photo listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoQuery {
    pub rover: String,
    pub sol: i64,
    pub page: i64,
    /// Camera filter; `None` when absent, empty or "all".
    pub camera: Option<String>,
}

impl PhotoQuery {
    pub const DEFAULT_SOL: i64 = 1000;
    pub const DEFAULT_PAGE: i64 = 1;

    pub fn new(rover: impl Into<String>) -> Self {
        Self {
            rover: rover.into(),
            sol: Self::DEFAULT_SOL,
            page: Self::DEFAULT_PAGE,
            camera: None,
        }
    }

    pub fn with_sol(mut self, sol: i64) -> Self {
        self.sol = sol;
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Set the camera filter. "all" and blank values clear it.
    pub fn with_camera(mut self, camera: Option<&str>) -> Self {
        self.camera = camera
            .filter(|c| !c.is_empty() && *c != "all")
            .map(str::to_string);
        self
    }
}

/// Rovers the gallery knows about.
pub const ROVER_NAMES: [&str; 3] = ["curiosity", "opportunity", "spirit"];

/// Known camera codes and their display names.
pub const CAMERA_CATALOG: [(&str, &str); 9] = [
    ("fhaz", "Front Hazard Avoidance Camera"),
    ("rhaz", "Rear Hazard Avoidance Camera"),
    ("mast", "Mast Camera"),
    ("chemcam", "Chemistry and Camera Complex"),
    ("mahli", "Mars Hand Lens Imager"),
    ("mardi", "Mars Descent Imager"),
    ("navcam", "Navigation Camera"),
    ("pancam", "Panoramic Camera"),
    ("minites", "Miniature Thermal Emission Spectrometer (Mini-TES)"),
];

/// Display name for a camera code, case-insensitive.
pub fn camera_full_name(code: &str) -> Option<&'static str> {
    CAMERA_CATALOG
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_serialize_camel_case() {
        let json = serde_json::to_value(RoverStats::current()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"totalPhotos": 47832, "activeSol": 4127, "activeRovers": 3})
        );
    }

    #[test]
    fn test_photo_query_defaults() {
        let query = PhotoQuery::new("curiosity");
        assert_eq!(query.sol, 1000);
        assert_eq!(query.page, 1);
        assert_eq!(query.camera, None);
    }

    #[test]
    fn test_camera_all_and_blank_clear_filter() {
        let query = PhotoQuery::new("spirit").with_camera(Some("all"));
        assert_eq!(query.camera, None);
        let query = PhotoQuery::new("spirit").with_camera(Some(""));
        assert_eq!(query.camera, None);
        let query = PhotoQuery::new("spirit").with_camera(Some("pancam"));
        assert_eq!(query.camera.as_deref(), Some("pancam"));
    }

    #[test]
    fn test_camera_full_name_lookup() {
        assert_eq!(camera_full_name("FHAZ"), Some("Front Hazard Avoidance Camera"));
        assert_eq!(camera_full_name("navcam"), Some("Navigation Camera"));
        assert_eq!(camera_full_name("xyz"), None);
    }

    #[test]
    fn test_photo_deserializes_upstream_shape() {
        let raw = serde_json::json!({
            "id": 424905,
            "sol": 1000,
            "camera": {"id": 20, "name": "FHAZ", "rover_id": 5, "full_name": "Front Hazard Avoidance Camera"},
            "img_src": "http://mars.jpl.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/fcam/FLB_486265257EDR_F0481570FHAZ00323M_.JPG",
            "earth_date": "2015-05-30",
            "rover": {
                "id": 5, "name": "Curiosity", "landing_date": "2012-08-06", "launch_date": "2011-11-26",
                "status": "active", "max_sol": 4102, "max_date": "2024-02-19", "total_photos": 695670
            }
        });
        let photo: Photo = serde_json::from_value(raw).unwrap();
        assert_eq!(photo.camera.name, "FHAZ");
        assert_eq!(photo.rover.status, "active");
    }
}
