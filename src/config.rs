use crate::warn;
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_SKILL_TITLE: &str = "Tracker for International Space Station (ISS)";
const DEFAULT_TLE_TABLE: &str = "alexaISSOrbitalObjects";
const DEFAULT_LON_LAT_TABLE: &str = "alexaISSLonLatLookup";
const DEFAULT_INPUT_BUCKET: &str = "alexaissinput";
const DEFAULT_MEDIA_BASE_URL: &str = "https://s3.amazonaws.com";
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_TLE_PROVIDER_URL: &str = "https://api.wheretheiss.at/v1";
/// NORAD catalog number of the International Space Station.
pub const ISS_SAT_CAT_NUMBER: u32 = 25544;

const SMALL_CARD_IMAGE: &str = "cardImageSmall.jpg";
const LARGE_CARD_IMAGE: &str = "cardImageLarge.jpg";

/// Process-wide settings, resolved once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillConfig {
    /// Expected caller application id. Empty disables the check.
    app_id: String,
    /// Title shown on the welcome and help cards.
    skill_title: String,
    /// Name of the orbital element table.
    tle_table: String,
    /// Name of the geographic feature table.
    lon_lat_table: String,
    /// Bucket holding the card images.
    input_bucket: String,
    /// Host the card image bucket is served from.
    media_base_url: String,
    /// Root directory of the file-backed tables.
    data_dir: PathBuf,
    /// Catalog number of the tracked object.
    sat_cat_number: u32,
    /// Base URL of the element provider used by the refresh job.
    tle_provider_url: String,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            skill_title: DEFAULT_SKILL_TITLE.to_string(),
            tle_table: DEFAULT_TLE_TABLE.to_string(),
            lon_lat_table: DEFAULT_LON_LAT_TABLE.to_string(),
            input_bucket: DEFAULT_INPUT_BUCKET.to_string(),
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            sat_cat_number: ISS_SAT_CAT_NUMBER,
            tle_provider_url: DEFAULT_TLE_PROVIDER_URL.to_string(),
        }
    }
}

impl SkillConfig {
    /// Reads the `ISS_*` environment variables, falling back to the defaults
    /// for every unset one.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let sat_cat_number = match env::var("ISS_SAT_CAT_NUMBER") {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid ISS_SAT_CAT_NUMBER '{raw}'");
                defaults.sat_cat_number
            }),
            Err(_) => defaults.sat_cat_number,
        };
        Self {
            app_id: env_or("ISS_APP_ID", &defaults.app_id),
            skill_title: env_or("ISS_SKILL_TITLE", &defaults.skill_title),
            tle_table: env_or("ISS_TLE_TABLE", &defaults.tle_table),
            lon_lat_table: env_or("ISS_LONLAT_TABLE", &defaults.lon_lat_table),
            input_bucket: env_or("ISS_INPUT_BUCKET", &defaults.input_bucket),
            media_base_url: env_or("ISS_MEDIA_BASE_URL", &defaults.media_base_url),
            data_dir: env::var_os("ISS_DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            sat_cat_number,
            tle_provider_url: env_or("ISS_TLE_PROVIDER_URL", &defaults.tle_provider_url),
        }
    }

    /// Returns a copy expecting `app_id` as the caller identity.
    pub fn with_app_id(mut self, app_id: &str) -> Self {
        self.app_id = app_id.to_string();
        self
    }

    pub fn app_id(&self) -> &str { &self.app_id }
    pub fn skill_title(&self) -> &str { &self.skill_title }
    pub fn tle_table(&self) -> &str { &self.tle_table }
    pub fn lon_lat_table(&self) -> &str { &self.lon_lat_table }
    pub fn data_dir(&self) -> &Path { &self.data_dir }
    pub fn sat_cat_number(&self) -> u32 { self.sat_cat_number }
    pub fn tle_provider_url(&self) -> &str { &self.tle_provider_url }

    /// URLs of the small and large card images.
    pub fn card_image_urls(&self) -> (String, String) {
        let base = self.media_base_url.trim_end_matches('/');
        (
            format!("{base}/{}/{SMALL_CARD_IMAGE}", self.input_bucket),
            format!("{base}/{}/{LARGE_CARD_IMAGE}", self.input_bucket),
        )
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
