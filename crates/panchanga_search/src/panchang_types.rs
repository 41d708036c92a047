//! Report and configuration types for panchangam assembly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use panchanga_ephem::{AyanamsaModel, GeoLocation, RiseSetConfig};
use panchanga_time::{MAX_OFFSET_MINUTES, UtcTime};
use panchanga_vedic_base::muhurta::{ChoghadiyaSlot, GowriSlot};
use panchanga_vedic_base::{
    DishaShoola, Festival, FestivalResolution, Graha, Hora, Karana, MasaConvention, MoonChart,
    Nakshatra, NakshatraPosition, PanchakStatus, Paksha, PersonalBalam, Rashi, SpecialYoga,
    TimeWindow, Tithi, Vaar, Yoga, personal_balam,
};

use crate::calendar::CalendarInfo;
use crate::graha_positions::GrahaEntry;
use crate::locator::LocatorConfig;
use crate::sankranti::{PunyaKalamConfig, SankrantiEvent};
use crate::transitions::{ElementInfo, PanchangaElement};
use crate::vedic_day::{MoonEvents, VedicDay};

/// Settings for one panchangam query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanchangConfig {
    pub ayanamsa: AyanamsaModel,
    /// Minutes east of UTC; `None` derives whole hours from longitude.
    pub timezone_offset_minutes: Option<i32>,
    pub masa_convention: MasaConvention,
    pub riseset: RiseSetConfig,
    pub locator: LocatorConfig,
    pub punya: PunyaKalamConfig,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamsaModel::default(),
            timezone_offset_minutes: None,
            masa_convention: MasaConvention::Amanta,
            riseset: RiseSetConfig::default(),
            locator: LocatorConfig::default(),
            punya: PunyaKalamConfig::default(),
        }
    }
}

impl PanchangConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(m) = self.timezone_offset_minutes {
            if m.abs() > MAX_OFFSET_MINUTES {
                return Err("timezone offset must be within ±14 hours");
            }
        }
        self.locator.validate()?;
        self.punya.validate()
    }
}

/// Start and end of an element sector; either may be absent when its
/// boundary search did not converge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Span {
    pub start_jd: Option<f64>,
    pub end_jd: Option<f64>,
}

impl From<&ElementInfo> for Span {
    fn from(info: &ElementInfo) -> Self {
        Self {
            start_jd: info.start_jd,
            end_jd: info.end_jd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    pub tithi: Tithi,
    /// 1..=30.
    pub number: u8,
    pub name: &'static str,
    pub paksha: Paksha,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub name: &'static str,
    pub pada: u8,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    pub name: &'static str,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 0..=59 within the lunar month.
    pub sequence_index: u8,
    pub name: &'static str,
    pub is_vishti: bool,
    #[serde(flatten)]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VaarInfo {
    pub vaar: Vaar,
    pub name: &'static str,
    pub english_name: &'static str,
    pub lord: Graha,
}

/// Every element's sectors across the Vedic day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTransitions {
    pub tithi: Vec<PanchangaElement>,
    pub nakshatra: Vec<PanchangaElement>,
    pub yoga: Vec<PanchangaElement>,
    pub karana: Vec<PanchangaElement>,
    pub moon_rashi: Vec<PanchangaElement>,
    pub sun_rashi: Vec<PanchangaElement>,
}

/// Sunrise-anchored windows; night parts are empty when the next sunrise
/// or the sunset is unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Muhurtas {
    pub rahu_kalam: TimeWindow,
    pub yamaganda: TimeWindow,
    pub gulika_kalam: TimeWindow,
    pub abhijit: TimeWindow,
    pub govardhan: TimeWindow,
    pub brahma_muhurta: Option<TimeWindow>,
    pub dur_muhurtas: Vec<TimeWindow>,
    pub choghadiya_day: Vec<ChoghadiyaSlot>,
    pub choghadiya_night: Vec<ChoghadiyaSlot>,
    pub gowri_day: Vec<GowriSlot>,
    pub gowri_night: Vec<GowriSlot>,
    pub horas: Vec<Hora>,
}

/// Windows keyed to the current nakshatra's span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraWindows {
    pub nakshatra: Nakshatra,
    pub amrit_kalam: TimeWindow,
    pub varjyam: Vec<TimeWindow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankrantiInfo {
    /// Ingresses falling on the civil date of the Vedic day.
    pub today: Vec<SankrantiEvent>,
    /// First ingress after the query instant.
    pub next: Option<SankrantiEvent>,
}

/// Complete panchangam for one instant and observer.
///
/// Elements (`tithi` .. `karana`) are read at the query instant; festivals,
/// muhurtas and special yogas belong to the Vedic day containing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangamReport {
    pub instant: UtcTime,
    pub jd_utc: f64,
    pub location: GeoLocation,
    pub timezone_offset_minutes: i32,
    pub ayanamsa: AyanamsaModel,
    pub ayanamsa_deg: f64,
    /// Civil date of the Vedic day's sunrise.
    pub date: NaiveDate,
    pub vedic_day: VedicDay,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub vaar: VaarInfo,
    /// Sun's nakshatra at the query instant.
    pub sun_nakshatra: NakshatraPosition,
    /// Moon's rashi at the query instant.
    pub moon_rashi: Rashi,
    pub transitions: DayTransitions,
    /// Absent when a bounding new moon could not be found.
    pub calendar: Option<CalendarInfo>,
    pub grahas: Vec<GrahaEntry>,
    /// Absent when the day has no sunrise or sunset.
    pub muhurtas: Option<Muhurtas>,
    pub nakshatra_windows: Option<NakshatraWindows>,
    /// Moonrise and moonset on the civil date of the Vedic day.
    pub moon_events: MoonEvents,
    pub sankranti: SankrantiInfo,
    pub panchak: PanchakStatus,
    pub special_yogas: Vec<SpecialYoga>,
    pub disha_shoola: DishaShoola,
    pub festivals: Vec<Festival>,
    pub festival_resolutions: Vec<FestivalResolution>,
}

impl PanchangamReport {
    /// Tarabalam, Chandrabalam and Chandrashtama of this instant's Moon for
    /// someone with the given birth Moon.
    pub fn balam_for(&self, birth: &MoonChart) -> PersonalBalam {
        personal_balam(
            birth.nakshatra.nakshatra,
            birth.rashi.rashi,
            self.nakshatra.nakshatra,
            self.moon_rashi,
        )
    }
}
