//! Metro Istanbul API wire types.
//!
//! These types map directly to the JSON the API sends and expects. Field
//! names follow the wire exactly, including its misspellings (`Escolator`,
//! `ENTtitle`), so that nothing downstream has to know about them.
//!
//! Missing required fields and wrong types are rejected by serde; unknown
//! extra fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope wrapped around every API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawEnvelope<T> {
    pub success: bool,

    #[serde(default)]
    pub error: Option<RawApiError>,

    /// Often `null` on failure.
    #[serde(default)]
    pub data: T,
}

/// Error details inside a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawApiError {
    /// `0` when the API sends `null`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trace: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub help_link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
}

/// Element of `GetLines`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawLine {
    pub id: u32,
    pub name: String,
    pub content: String,
    #[serde(rename = "ENContent")]
    pub en_content: String,
    #[serde(rename = "ARContent")]
    pub ar_content: String,
    pub short_description: String,
    pub long_description: String,
    #[serde(rename = "ENDescription")]
    pub en_description: String,
    #[serde(rename = "ARDescription")]
    pub ar_description: String,
    pub is_active: bool,
    pub functional_code: String,
    pub color: RawColor,
    pub order: i32,
    pub first_time: String,
    pub last_time: String,
}

/// Line color, one decimal string per channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawColor {
    #[serde(rename = "Color_R")]
    pub red: String,
    #[serde(rename = "Color_G")]
    pub green: String,
    #[serde(rename = "Color_B")]
    pub blue: String,
}

/// Element of `GetStations` and `GetStationById/{lineId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawStation {
    pub id: u32,
    pub name: String,
    pub line_id: u32,
    pub line_name: String,
    pub description: String,
    pub order: i32,
    /// Tri-state: `null` means unknown.
    pub is_active: Option<bool>,
    pub functional_code: String,
    pub detail_info: RawStationDetail,
}

/// Facilities block of a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawStationDetail {
    /// Sic.
    pub escolator: u32,
    pub lift: u32,
    pub baby_room: bool,
    #[serde(rename = "WC")]
    pub wc: bool,
    pub masjid: bool,
    pub latitude: String,
    pub longitude: String,
}

/// Element of `GetDirectionById/{lineId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawDirectionInfo {
    pub line_id: u32,
    pub line_name: String,
    pub direction_id: u32,
    pub direction_name: String,
    pub direction_value: i32,
}

/// Element of `GetTimeTable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTimetable {
    pub boarding_station_id: u32,
    pub boarding_station_name: String,
    pub line_id: u32,
    pub line_name: String,
    pub first_station_id: u32,
    pub first_station: String,
    pub last_station_id: u32,
    pub last_station: String,
    pub language_text: RawLanguageText,
    pub time_infos: RawTimeInfos,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct RawLanguageText {
    pub tr: String,
    pub en: String,
    pub ar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTimeInfos {
    pub day: i32,
    pub day_name: Option<String>,
    pub times: Vec<String>,
}

/// Element of `GetMaps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawMap {
    pub id: u32,
    pub title: String,
    /// Sic.
    #[serde(rename = "ENTtitle")]
    pub en_title: String,
    #[serde(rename = "ARTitle")]
    pub ar_title: String,
    #[serde(rename = "ImageURL")]
    pub image_url: String,
    #[serde(rename = "IconURL")]
    pub icon_url: String,
    #[serde(rename = "DocumentURL")]
    pub document_url: String,
    pub is_active: bool,
    pub order: i32,
    pub date: String,
}

/// Element of `FrequentlyAskedQuestions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawFaq {
    pub id: u32,
    pub question: String,
    pub answer: String,
    pub priority: bool,
    pub short_question_title: Option<String>,
    pub language: String,
}

/// Request body for `GetTimeTable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTimetableRequest {
    pub boarding_station_id: u32,
    pub direction_id: u32,
    /// Must be in the form produced by `format_extended_iso`.
    pub date_time: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
