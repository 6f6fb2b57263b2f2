//! Conversion from Metro API wire types to domain types.
//!
//! Each converter is a pure function of one raw element. Most fields are a
//! plain rename; line colors are parsed from text, and the station detail and
//! timetable blocks are restructured.

use crate::domain::{
    Color, DirectionId, DirectionInfo, Faq, Line, LineId, LocalizedText, MetroMap, Station,
    StationDetail, StationId, TimeInfos, Timetable,
};

use super::types::{
    RawColor, RawDirectionInfo, RawFaq, RawLanguageText, RawLine, RawMap, RawStation,
    RawStationDetail, RawTimeInfos, RawTimetable,
};

/// Error during wire to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Line id outside the known set
    #[error("unknown line id: {0}")]
    UnknownLine(u32),

    /// Color channel is not a decimal number in 0-255
    #[error("invalid {channel} color channel: {value:?}")]
    InvalidColor { channel: &'static str, value: String },
}

/// Convert every element, failing on the first one that does not convert.
pub fn convert_all<R, T>(
    raw: Vec<R>,
    convert: impl Fn(R) -> Result<T, ConversionError>,
) -> Result<Vec<T>, ConversionError> {
    raw.into_iter().map(convert).collect()
}

fn line_id(n: u32) -> Result<LineId, ConversionError> {
    LineId::try_from(n).map_err(|_| ConversionError::UnknownLine(n))
}

pub fn convert_line(raw: RawLine) -> Result<Line, ConversionError> {
    Ok(Line {
        id: line_id(raw.id)?,
        name: raw.name,
        content: LocalizedText {
            tr: raw.content,
            en: raw.en_content,
            ar: raw.ar_content,
        },
        short_description: raw.short_description,
        long_description: raw.long_description,
        en_description: raw.en_description,
        ar_description: raw.ar_description,
        is_active: raw.is_active,
        functional_code: raw.functional_code,
        color: convert_color(&raw.color)?,
        order: raw.order,
        first_time: raw.first_time,
        last_time: raw.last_time,
    })
}

/// Parse the three decimal channel strings of a line color.
pub fn convert_color(raw: &RawColor) -> Result<Color, ConversionError> {
    Ok(Color {
        red: parse_channel("red", &raw.red)?,
        green: parse_channel("green", &raw.green)?,
        blue: parse_channel("blue", &raw.blue)?,
    })
}

fn parse_channel(channel: &'static str, value: &str) -> Result<u8, ConversionError> {
    value
        .trim()
        .parse::<u8>()
        .map_err(|_| ConversionError::InvalidColor {
            channel,
            value: value.to_string(),
        })
}

pub fn convert_station(raw: RawStation) -> Result<Station, ConversionError> {
    Ok(Station {
        id: StationId(raw.id),
        name: raw.name,
        line_id: raw.line_id,
        line_name: raw.line_name,
        description: raw.description,
        order: raw.order,
        is_active: raw.is_active,
        functional_code: raw.functional_code,
        detail: convert_station_detail(raw.detail_info),
    })
}

pub fn convert_station_detail(raw: RawStationDetail) -> StationDetail {
    StationDetail {
        escalator: raw.escolator,
        lift: raw.lift,
        baby_room: raw.baby_room,
        wc: raw.wc,
        masjid: raw.masjid,
        latitude: raw.latitude,
        longitude: raw.longitude,
    }
}

pub fn convert_direction_info(raw: RawDirectionInfo) -> Result<DirectionInfo, ConversionError> {
    Ok(DirectionInfo {
        line_id: raw.line_id,
        line_name: raw.line_name,
        direction_id: DirectionId(raw.direction_id),
        direction_name: raw.direction_name,
        direction_value: raw.direction_value,
    })
}

pub fn convert_timetable(raw: RawTimetable) -> Result<Timetable, ConversionError> {
    Ok(Timetable {
        boarding_station_id: StationId(raw.boarding_station_id),
        boarding_station_name: raw.boarding_station_name,
        line_id: raw.line_id,
        line_name: raw.line_name,
        first_station_id: StationId(raw.first_station_id),
        first_station: raw.first_station,
        last_station_id: StationId(raw.last_station_id),
        last_station: raw.last_station,
        language_text: convert_language_text(raw.language_text),
        time_infos: convert_time_infos(raw.time_infos),
    })
}

fn convert_language_text(raw: RawLanguageText) -> LocalizedText {
    LocalizedText {
        tr: raw.tr,
        en: raw.en,
        ar: raw.ar,
    }
}

fn convert_time_infos(raw: RawTimeInfos) -> TimeInfos {
    TimeInfos {
        day: raw.day,
        day_name: raw.day_name,
        times: raw.times,
    }
}

pub fn convert_map(raw: RawMap) -> Result<MetroMap, ConversionError> {
    Ok(MetroMap {
        id: raw.id,
        title: LocalizedText {
            tr: raw.title,
            en: raw.en_title,
            ar: raw.ar_title,
        },
        image_url: raw.image_url,
        icon_url: raw.icon_url,
        document_url: raw.document_url,
        is_active: raw.is_active,
        order: raw.order,
        date: raw.date,
    })
}

pub fn convert_faq(raw: RawFaq) -> Result<Faq, ConversionError> {
    Ok(Faq {
        id: raw.id,
        question: raw.question,
        answer: raw.answer,
        priority: raw.priority,
        short_question_title: raw.short_question_title,
        language: raw.language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(r: &str, g: &str, b: &str) -> RawColor {
        RawColor {
            red: r.to_string(),
            green: g.to_string(),
            blue: b.to_string(),
        }
    }

    fn make_station(is_active: Option<bool>) -> RawStation {
        RawStation {
            id: 105,
            name: "Şişhane".to_string(),
            line_id: 1,
            line_name: "M2".to_string(),
            description: "Yenikapı - Hacıosman".to_string(),
            order: 4,
            is_active,
            functional_code: "SIS".to_string(),
            detail_info: RawStationDetail {
                escolator: 8,
                lift: 3,
                baby_room: true,
                wc: false,
                masjid: true,
                latitude: "41.0276".to_string(),
                longitude: "28.9740".to_string(),
            },
        }
    }

    fn make_line(id: u32, order: i32) -> RawLine {
        RawLine {
            id,
            name: "M2".to_string(),
            content: "Yenikapı-Hacıosman Metro Hattı".to_string(),
            en_content: "Yenikapi-Hacıosman Metro Line".to_string(),
            ar_content: "خط مترو".to_string(),
            short_description: "Yenikapı-Hacıosman".to_string(),
            long_description: "Yenikapı - Hacıosman Metro Hattı".to_string(),
            en_description: "Yenikapi - Hacıosman".to_string(),
            ar_description: "ينيكابي".to_string(),
            is_active: true,
            functional_code: "M2".to_string(),
            color: color("0", "166", "80"),
            order,
            first_time: "06:00".to_string(),
            last_time: "00:00".to_string(),
        }
    }

    fn make_timetable(times: &[&str], day_name: Option<&str>) -> RawTimetable {
        RawTimetable {
            boarding_station_id: 105,
            boarding_station_name: "Şişhane".to_string(),
            line_id: 1,
            line_name: "M2".to_string(),
            first_station_id: 100,
            first_station: "Yenikapı".to_string(),
            last_station_id: 116,
            last_station: "Hacıosman".to_string(),
            language_text: RawLanguageText {
                tr: "Hacıosman yönü".to_string(),
                en: "To Hacıosman".to_string(),
                ar: "باتجاه".to_string(),
            },
            time_infos: RawTimeInfos {
                day: 0,
                day_name: day_name.map(str::to_string),
                times: times.iter().map(|t| t.to_string()).collect(),
            },
        }
    }

    #[test]
    fn color_parses_decimal_strings() {
        let c = convert_color(&color("0", "128", "255")).unwrap();
        assert_eq!(c, Color::new(0, 128, 255));
    }

    #[test]
    fn color_tolerates_whitespace() {
        let c = convert_color(&color(" 12", "34 ", "56")).unwrap();
        assert_eq!(c, Color::new(12, 34, 56));
    }

    #[test]
    fn color_rejects_out_of_range_and_garbage() {
        assert_eq!(
            convert_color(&color("256", "0", "0")),
            Err(ConversionError::InvalidColor {
                channel: "red",
                value: "256".to_string()
            })
        );
        assert!(convert_color(&color("0", "", "0")).is_err());
        assert!(convert_color(&color("0", "0", "ff")).is_err());
        assert!(convert_color(&color("0", "-1", "0")).is_err());
    }

    #[test]
    fn station_keeps_unknown_active_flag() {
        let station = convert_station(make_station(None)).unwrap();
        assert_eq!(station.is_active, None);
    }

    #[test]
    fn station_keeps_inactive_flag() {
        let station = convert_station(make_station(Some(false))).unwrap();
        assert_eq!(station.is_active, Some(false));

        let station = convert_station(make_station(Some(true))).unwrap();
        assert_eq!(station.is_active, Some(true));
    }

    #[test]
    fn station_detail_renames_escalator() {
        let station = convert_station(make_station(Some(true))).unwrap();
        assert_eq!(station.id, StationId(105));
        assert_eq!(station.line_id, 1);
        assert_eq!(station.line(), Some(LineId::M2));
        assert_eq!(station.detail.escalator, 8);
        assert_eq!(station.detail.lift, 3);
        assert!(station.detail.baby_room);
        assert!(!station.detail.wc);
        assert!(station.detail.masjid);
        assert_eq!(station.detail.latitude, "41.0276");
        assert_eq!(station.detail.longitude, "28.9740");
    }

    #[test]
    fn station_on_unlisted_line_still_converts() {
        let mut raw = make_station(None);
        raw.line_id = 21;
        let station = convert_station(raw).unwrap();
        assert_eq!(station.line_id, 21);
        assert_eq!(station.line(), None);
    }

    #[test]
    fn stations_on_unlisted_lines_do_not_fail_the_list() {
        let mut other = make_station(Some(true));
        other.id = 2101;
        other.line_id = 21;
        let raw = vec![make_station(Some(true)), other];
        let stations = convert_all(raw, convert_station).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].line(), Some(LineId::M2));
        assert_eq!(stations[1].line_id, 21);
    }

    #[test]
    fn line_converts_fields() {
        let line = convert_line(make_line(9, 3)).unwrap();
        assert_eq!(line.id, LineId::M1A);
        assert_eq!(line.content.en, "Yenikapi-Hacıosman Metro Line");
        assert_eq!(line.color, Color::new(0, 166, 80));
        assert_eq!(line.order, 3);
        assert_eq!(line.first_time, "06:00");
        assert_eq!(
            line.first_departure(),
            chrono::NaiveTime::from_hms_opt(6, 0, 0)
        );
    }

    #[test]
    fn timetable_preserves_time_order() {
        let raw = make_timetable(&["06:00", "06:15", "06:30"], Some("Hafta içi"));
        let timetable = convert_timetable(raw).unwrap();
        assert_eq!(timetable.time_infos.times, vec!["06:00", "06:15", "06:30"]);
    }

    #[test]
    fn timetable_never_sorts_or_dedups() {
        let raw = make_timetable(&["23:45", "00:00", "00:00", "00:15"], None);
        let timetable = convert_timetable(raw).unwrap();
        assert_eq!(
            timetable.time_infos.times,
            vec!["23:45", "00:00", "00:00", "00:15"]
        );
    }

    #[test]
    fn timetable_restructures_nested_blocks() {
        let raw = make_timetable(&["06:00"], None);
        let timetable = convert_timetable(raw).unwrap();
        assert_eq!(timetable.boarding_station_id, StationId(105));
        assert_eq!(timetable.first_station_id, StationId(100));
        assert_eq!(timetable.last_station, "Hacıosman");
        assert_eq!(timetable.language_text.tr, "Hacıosman yönü");
        assert_eq!(timetable.language_text.en, "To Hacıosman");
        assert_eq!(timetable.language_text.ar, "باتجاه");
        assert_eq!(timetable.time_infos.day, 0);
        assert_eq!(timetable.time_infos.day_name, None);
    }

    #[test]
    fn direction_info_converts() {
        let raw = RawDirectionInfo {
            line_id: 11,
            line_name: "T1".to_string(),
            direction_id: 2,
            direction_name: "Kabataş".to_string(),
            direction_value: 1,
        };
        let info = convert_direction_info(raw).unwrap();
        assert_eq!(info.line(), Some(LineId::T1));
        assert_eq!(info.direction_id, DirectionId(2));
        assert_eq!(info.direction_name, "Kabataş");
        assert_eq!(info.direction_value, 1);
    }

    #[test]
    fn map_groups_titles() {
        let raw = RawMap {
            id: 1,
            title: "Ağ Haritası".to_string(),
            en_title: "Network Map".to_string(),
            ar_title: "خريطة الشبكة".to_string(),
            image_url: "https://example.test/a.png".to_string(),
            icon_url: "https://example.test/a-icon.png".to_string(),
            document_url: "https://example.test/a.pdf".to_string(),
            is_active: false,
            order: 2,
            date: "2024-05-01T00:00:00".to_string(),
        };
        let map = convert_map(raw).unwrap();
        assert_eq!(map.title, LocalizedText::new("Ağ Haritası", "Network Map", "خريطة الشبكة"));
        assert!(!map.is_active);
        assert_eq!(map.date, "2024-05-01T00:00:00");
    }

    #[test]
    fn faq_keeps_missing_short_title() {
        let raw = RawFaq {
            id: 7,
            question: "Kayıp eşya nereye teslim edilir?".to_string(),
            answer: "Yenikapı kayıp eşya ofisine.".to_string(),
            priority: true,
            short_question_title: None,
            language: "tr".to_string(),
        };
        let faq = convert_faq(raw).unwrap();
        assert_eq!(faq.short_question_title, None);
        assert!(faq.priority);
        assert_eq!(faq.language, "tr");
    }

    #[test]
    fn convert_all_is_all_or_nothing() {
        let lines = vec![make_line(1, 1), make_line(18, 2)];
        assert_eq!(
            convert_all(lines, convert_line),
            Err(ConversionError::UnknownLine(18))
        );

        let lines = vec![make_line(1, 1), make_line(2, 2)];
        let converted = convert_all(lines, convert_line).unwrap();
        assert_eq!(converted.len(), 2);
    }
}
