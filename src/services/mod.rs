/// Business logic services layer
use crate::clients::{MarsPhotosClient, PhotoFetch};
use crate::domain::{camera_full_name, Camera, Photo, PhotoListResponse, PhotoQuery, Rover};
use crate::errors::ApiResult;
use crate::utils::capitalize_first;
use serde::Serialize;
use serde_json::value::RawValue;
use serde_json::Value;

/// Photo listing as returned to the browser
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PhotoPayload {
    Upstream(Value),
    Sample(PhotoListResponse),
}

/// Rover photo service
pub struct PhotoService {
    client: MarsPhotosClient,
}

impl PhotoService {
    pub fn new(client: MarsPhotosClient) -> Self {
        Self { client }
    }

    /// List photos, degrading to sample data when the upstream quota is spent
    pub async fn list_photos(&self, query: &PhotoQuery) -> ApiResult<PhotoPayload> {
        match self.client.fetch_photos(query).await? {
            PhotoFetch::Photos(json) => Ok(PhotoPayload::Upstream(json)),
            PhotoFetch::RateLimited => Ok(PhotoPayload::Sample(sample_photos(query))),
        }
    }

    /// Get the mission manifest, unchanged
    pub async fn get_manifest(&self, rover: &str) -> ApiResult<Box<RawValue>> {
        self.client.fetch_manifest(rover).await
    }
}

const SAMPLE_EARTH_DATE: &str = "2015-05-30";

/// (photo id, camera id, default code, default full name, image)
const SAMPLE_SHOTS: [(i64, i64, &str, &str, &str); 2] = [
    (
        102693,
        20,
        "MAST",
        "Mast Camera",
        "https://mars.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/fcam/FLB_486265257EDR_F0481570FHAZ00323M_.JPG",
    ),
    (
        102694,
        21,
        "NAVCAM",
        "Navigation Camera",
        "https://mars.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/ncam/NLB_486265257EDR_F0481570NCAM00323M_.JPG",
    ),
];

/// Canned listing served in place of a rate-limited response.
///
/// Always two photos on the requested sol. A camera filter applies to both;
/// without one they come from the mast and navigation cameras.
pub fn sample_photos(query: &PhotoQuery) -> PhotoListResponse {
    let rover = Rover {
        id: 5,
        name: capitalize_first(&query.rover),
        landing_date: "2012-08-05".to_string(),
        launch_date: "2011-11-26".to_string(),
        status: "active".to_string(),
        max_sol: 4000,
        max_date: "2023-12-15".to_string(),
        total_photos: 500_000,
    };

    let photos = SAMPLE_SHOTS
        .iter()
        .map(|&(id, camera_id, default_code, default_name, img_src)| {
            let (name, full_name) = match &query.camera {
                Some(code) => {
                    let name = code.to_uppercase();
                    let full_name = camera_full_name(code)
                        .map(str::to_string)
                        .unwrap_or_else(|| name.clone());
                    (name, full_name)
                }
                None => (default_code.to_string(), default_name.to_string()),
            };

            Photo {
                id,
                sol: query.sol,
                camera: Camera {
                    id: camera_id,
                    name,
                    rover_id: rover.id,
                    full_name,
                },
                img_src: img_src.to_string(),
                earth_date: SAMPLE_EARTH_DATE.to_string(),
                rover: rover.clone(),
            }
        })
        .collect();

    PhotoListResponse { photos }
}
