//! Sentinel-1 scene id parsing
use crate::error::{ReaderError, Result};
use chrono::{Datelike, NaiveDateTime};
use regex::Regex;
use serde::Serialize;

const DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Fields extracted from a Sentinel-1 scene id such as
/// `S1A_IW_GRDH_1SDV_20180716T004042_20180716T004107_022812_02792A_FD5B`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneParameters {
    pub sensor: String,
    pub satellite: String,
    pub beam: String,
    pub product: String,
    pub resolution: String,
    pub processing_level: String,
    pub product_class: String,
    pub polarisation: String,
    pub start_datetime: NaiveDateTime,
    pub stop_datetime: NaiveDateTime,
    pub absolute_orbit: String,
    pub mission_task: String,
    pub product_id: String,
    pub scene: String,
}

impl SceneParameters {
    pub fn parse(sceneid: &str) -> Result<Self> {
        let re = Regex::new(
            r"^S(?<sensor>1)(?<satellite>[AB])_(?<beam>IW|EW)_(?<product>[A-Z]{3})(?<resolution>[FHM])_(?<level>[0-9])(?<class>[SA])(?<polarisation>SH|SV|DH|DV|HH|HV|VV|VH)_(?<start>[0-9]{8}T[0-9]{6})_(?<stop>[0-9]{8}T[0-9]{6})_(?<orbit>[0-9]{6})_(?<task>[0-9A-Z]{6})_(?<id>[0-9A-Z]{4})$",
        )
        .expect("Regex pattern should always compile");

        let captures = re
            .captures(sceneid)
            .ok_or_else(|| ReaderError::MalformedSceneId(sceneid.to_string()))?;

        let (
            _,
            [sensor, satellite, beam, product, resolution, level, class, polarisation, start, stop, orbit, task, id],
        ) = captures.extract();

        let parse_datetime = |value: &str| {
            NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
                .map_err(|_| ReaderError::MalformedSceneId(sceneid.to_string()))
        };

        Ok(Self {
            sensor: sensor.to_string(),
            satellite: satellite.to_string(),
            beam: beam.to_string(),
            product: product.to_string(),
            resolution: resolution.to_string(),
            processing_level: level.to_string(),
            product_class: class.to_string(),
            polarisation: polarisation.to_string(),
            start_datetime: parse_datetime(start)?,
            stop_datetime: parse_datetime(stop)?,
            absolute_orbit: orbit.to_string(),
            mission_task: task.to_string(),
            product_id: id.to_string(),
            scene: sceneid.to_string(),
        })
    }

    pub fn acquisition_year(&self) -> String {
        format!("{:04}", self.start_datetime.year())
    }

    /// Month without zero padding, as laid out in the bucket.
    pub fn acquisition_month(&self) -> String {
        self.start_datetime.month().to_string()
    }

    /// Day without zero padding, as laid out in the bucket.
    pub fn acquisition_day(&self) -> String {
        self.start_datetime.day().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE_ID: &str = "S1A_IW_GRDH_1SDV_20180716T004042_20180716T004107_022812_02792A_FD5B";

    #[test]
    fn test_parse_scene_id() {
        let params = SceneParameters::parse(SCENE_ID).unwrap();
        assert_eq!(params.sensor, "1");
        assert_eq!(params.satellite, "A");
        assert_eq!(params.beam, "IW");
        assert_eq!(params.product, "GRD");
        assert_eq!(params.resolution, "H");
        assert_eq!(params.processing_level, "1");
        assert_eq!(params.product_class, "S");
        assert_eq!(params.polarisation, "DV");
        assert_eq!(params.absolute_orbit, "022812");
        assert_eq!(params.mission_task, "02792A");
        assert_eq!(params.product_id, "FD5B");
        assert_eq!(params.scene, SCENE_ID);
        assert_eq!(
            params.start_datetime.date(),
            chrono::NaiveDate::from_ymd_opt(2018, 7, 16).unwrap()
        );
    }

    #[test]
    fn test_date_parts_are_not_padded() {
        let params = SceneParameters::parse(SCENE_ID).unwrap();
        assert_eq!(params.acquisition_year(), "2018");
        assert_eq!(params.acquisition_month(), "7");
        assert_eq!(params.acquisition_day(), "16");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = SceneParameters::parse(SCENE_ID).unwrap();
        let b = SceneParameters::parse(SCENE_ID).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_extra_wide_swath() {
        let id = "S1B_EW_GRDM_1SDH_20200101T120000_20200101T120100_019600_025000_ABCD";
        let params = SceneParameters::parse(id).unwrap();
        assert_eq!(params.beam, "EW");
        assert_eq!(params.polarisation, "DH");
        assert_eq!(params.resolution, "M");
    }

    #[test]
    fn test_malformed_scene_ids() {
        let bad = [
            "",
            "S2A_MSIL2A_20240504T195901_N0510_R128_T08VPH_20240505T015750",
            "S1A_IW_GRDH_1SDV_20180716T004042_20180716T004107_022812_02792A",
            "S1A_SM_GRDH_1SDV_20180716T004042_20180716T004107_022812_02792A_FD5B",
            "s1a_iw_grdh_1sdv_20180716t004042_20180716t004107_022812_02792a_fd5b",
            "S1A_IW_GRDH_1SDV_20180716T004042_20180716T004107_022812_02792A_FD5B/../x",
            "S1A_IW_GRDH_1SDV_20181399T004042_20180716T004107_022812_02792A_FD5B",
        ];
        for id in bad {
            match SceneParameters::parse(id) {
                Err(ReaderError::MalformedSceneId(s)) => assert_eq!(s, id),
                other => panic!("expected MalformedSceneId for {id:?}, got {other:?}"),
            }
        }
    }
}
