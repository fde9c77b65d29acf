//! AWS public dataset Sentinel-1 L1C reader
//!
//! ```no_run
//! # async fn run() -> Result<(), s1_l1c::ReaderError> {
//! use s1_l1c::provider::Provider;
//! use s1_l1c::sentinel1::S1L1CReader;
//!
//! let provider = Provider::from_env().await;
//! let scene = S1L1CReader::<s1_l1c::CogReader>::new(
//!     "S1A_IW_GRDH_1SDV_20180716T004042_20180716T004107_022812_02792A_FD5B",
//! )
//! .open(&provider)
//! .await?;
//! println!("{:?}", scene.bounds());
//! println!("{}", scene.asset_url("vv")?);
//! # Ok(())
//! # }
//! ```
use crate::asset::{AssetKey, Polarisation};
use crate::error::{ReaderError, Result};
use crate::geometry::{feature_bounds, Bounds};
use crate::object_key::ObjectKey;
use crate::reader::{CogReader, RasterReader, ReaderOptions};
use crate::s3::S3ObjOps;
use crate::scene_id::SceneParameters;
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;

pub const SCHEME: &str = "s3";
pub const BUCKET: &str = "sentinel-s1-l1c";
pub const MINZOOM: u8 = 8;
pub const MAXZOOM: u8 = 14;

const PRODUCT_INFO: &str = "productInfo.json";

/// A scene that has not been opened yet. Holds only the scene id and reader
/// configuration; nothing is fetched until [`S1L1CReader::open`].
///
/// Asset urls are only reachable from an opened [`Scene`]:
///
/// ```compile_fail
/// use s1_l1c::sentinel1::S1L1CReader;
/// let reader: S1L1CReader = S1L1CReader::new("S1A_IW_GRDH_1SDV_20180716T004042_20180716T004107_022812_02792A_FD5B");
/// reader.asset_url("vv");
/// ```
#[derive(Debug, Clone)]
pub struct S1L1CReader<R: RasterReader = CogReader> {
    sceneid: String,
    reader_options: ReaderOptions,
    reader: PhantomData<R>,
}

impl<R: RasterReader> S1L1CReader<R> {
    pub fn new(sceneid: &str) -> Self {
        Self {
            sceneid: sceneid.to_string(),
            reader_options: ReaderOptions::new(),
            reader: PhantomData,
        }
    }

    pub fn with_options(mut self, reader_options: ReaderOptions) -> Self {
        self.reader_options = reader_options;
        self
    }

    pub fn sceneid(&self) -> &str {
        &self.sceneid
    }

    /// Parse the scene id, fetch `productInfo.json` (requester pays) and
    /// derive the footprint bounds.
    pub async fn open(self, provider: &impl S3ObjOps) -> Result<Scene<R>> {
        let params = SceneParameters::parse(&self.sceneid)?;
        let prefix = scene_prefix(&params)?;

        let key = prefix.clone().push(PRODUCT_INFO)?;
        debug!("Fetching s3://{}/{}", BUCKET, key.as_string());
        let data = provider.get_object(BUCKET, &key.as_string(), true).await?;

        let product_info: Value = serde_json::from_slice(&data)?;
        let datageom = product_info
            .get("footprint")
            .cloned()
            .ok_or(ReaderError::MissingFootprint)?;
        let bounds = feature_bounds(&datageom)?;

        info!("Opened scene {}", self.sceneid);
        Ok(Scene {
            sceneid: self.sceneid,
            reader_options: self.reader_options,
            params,
            prefix,
            product_info,
            datageom,
            bounds,
            reader: PhantomData,
        })
    }

    /// Open the scene, run `f` against it and release it on every exit path.
    pub async fn with_scene<T, F>(self, provider: &impl S3ObjOps, f: F) -> Result<T>
    where
        F: FnOnce(&Scene<R>) -> Result<T>,
    {
        let scene = self.open(provider).await?;
        f(&scene)
    }
}

/// `{product}/{year}/{month}/{day}/{beam}/{polarisation}/{scene}`
fn scene_prefix(params: &SceneParameters) -> Result<ObjectKey> {
    ObjectKey::new()
        .push(&params.product)?
        .push(&params.acquisition_year())?
        .push(&params.acquisition_month())?
        .push(&params.acquisition_day())?
        .push(&params.beam)?
        .push(&params.polarisation)?
        .push(&params.scene)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpatialInfo {
    pub bounds: Bounds,
    pub center: (f64, f64, u8),
    pub minzoom: u8,
    pub maxzoom: u8,
}

/// An opened scene. All state is fixed once `open` returns.
#[derive(Debug)]
pub struct Scene<R: RasterReader = CogReader> {
    sceneid: String,
    reader_options: ReaderOptions,
    params: SceneParameters,
    prefix: ObjectKey,
    product_info: Value,
    datageom: Value,
    bounds: Bounds,
    reader: PhantomData<R>,
}

impl<R: RasterReader> Scene<R> {
    pub fn sceneid(&self) -> &str {
        &self.sceneid
    }

    pub fn params(&self) -> &SceneParameters {
        &self.params
    }

    pub fn product_info(&self) -> &Value {
        &self.product_info
    }

    pub fn datageom(&self) -> &Value {
        &self.datageom
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn minzoom(&self) -> u8 {
        MINZOOM
    }

    pub fn maxzoom(&self) -> u8 {
        MAXZOOM
    }

    pub fn center(&self) -> (f64, f64, u8) {
        let (lon, lat) = self.bounds.center();
        (lon, lat, MINZOOM)
    }

    pub fn spatial_info(&self) -> SpatialInfo {
        SpatialInfo {
            bounds: self.bounds,
            center: self.center(),
            minzoom: MINZOOM,
            maxzoom: MAXZOOM,
        }
    }

    pub fn assets(&self) -> Vec<&'static str> {
        Polarisation::ALL.into_iter().map(Polarisation::as_str).collect()
    }

    pub fn reader_options(&self) -> &ReaderOptions {
        &self.reader_options
    }

    /// Validate the asset name and return its `s3://` url.
    pub fn asset_url(&self, asset: &str) -> Result<String> {
        let asset: Polarisation = asset.parse()?;
        let file_name = format!("{}-{}.tiff", self.params.beam.to_lowercase(), asset.key());
        let key = self
            .prefix
            .clone()
            .push("measurement")?
            .push(&file_name)?;
        Ok(key.to_url(SCHEME, BUCKET))
    }

    pub fn asset_urls(&self) -> Result<Vec<(Polarisation, String)>> {
        Polarisation::ALL
            .into_iter()
            .map(|p| self.asset_url(p.as_str()).map(|url| (p, url)))
            .collect()
    }

    /// Resolve `asset` and hand its url and the reader options to `R`.
    pub fn open_asset(&self, asset: &str) -> anyhow::Result<R> {
        let url = self.asset_url(asset)?;
        R::open(&url, &self.reader_options)
    }
}

impl<R: RasterReader> Drop for Scene<R> {
    fn drop(&mut self) {
        info!("Released scene {}", self.sceneid);
    }
}
