//! Presentation boundary.
//!
//! Everything a card or list row needs for one division, already
//! formatted, plus the single coordinate handed to a map widget.

use serde::Serialize;

use crate::division::{Coord, Division};
use crate::format::{approximate_population, format_area, human_friendly_domain};
use crate::selection::SelectionController;

/// Display-ready fields for one division.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub population: u64,
    pub population_rounded: u64,
    /// e.g. "60만", shown as "약 60만 명".
    pub population_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_level_division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl DivisionView {
    pub fn from_division(division: &Division) -> Self {
        let (population_rounded, population_label) = approximate_population(division.population);
        DivisionView {
            id: division.id,
            name: division.name.clone(),
            kind: division.kind.label(),
            population: division.population,
            population_rounded,
            population_label,
            area_label: division.area.map(format_area),
            link: division.link.clone(),
            domain: division.link.as_deref().map(human_friendly_domain),
            highlights: division.highlights.clone(),
            info: division.info.clone(),
            first_level_division: division.first_level_division.clone(),
            lat: division.coord.map(|c| c.lat),
            lon: division.coord.map(|c| c.lon),
        }
    }
}

/// Builds views for the controller's current order.
pub fn current_views(controller: &SelectionController<'_>) -> Vec<DivisionView> {
    controller
        .current_order()
        .iter()
        .map(|d| DivisionView::from_division(d))
        .collect()
}

/// Returns the coordinate the map should centre its marker on.
///
/// The applied division's coordinates when it has them, otherwise those of
/// the first division in the current order that has any.
pub fn map_marker(controller: &SelectionController<'_>) -> Option<Coord> {
    controller
        .applied_division()
        .and_then(|d| d.coord)
        .or_else(|| controller.current_order().iter().find_map(|d| d.coord))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::division::{DivisionKey, DivisionType};

    fn seoul() -> Division {
        let mut d = Division::new("서울", 9_386_034, DivisionType::SpecialCity)
            .with_area(605.2)
            .with_link("https://www.seoul.go.kr/main/index.jsp")
            .with_coord(37.5665, 126.978);
        d.highlights = vec!["경복궁".to_string()];
        d
    }

    #[test]
    fn view_formats_fields() {
        let view = DivisionView::from_division(&seoul());
        assert_eq!(view.kind, "특별시");
        assert_eq!(view.population_rounded, 9_000_000);
        assert_eq!(view.population_label, "900만");
        assert_eq!(view.area_label.as_deref(), Some("605"));
        assert_eq!(view.domain.as_deref(), Some("seoul.go.kr"));
        assert_eq!(view.highlights, vec!["경복궁"]);
        assert_eq!(view.lat, Some(37.5665));
    }

    #[test]
    fn tiny_area_shows_less_than_one() {
        let dokdo = Division::new("독도", 40, DivisionType::Village).with_area(0.187);
        let view = DivisionView::from_division(&dokdo);
        assert_eq!(view.area_label.as_deref(), Some("<1"));
        assert_eq!(view.population_label, "40");
        assert_eq!(view.domain, None);
    }

    #[test]
    fn view_serializes_without_absent_fields() {
        let dokdo = Division::new("독도", 40, DivisionType::Village);
        let json = serde_json::to_value(DivisionView::from_division(&dokdo)).unwrap();
        assert_eq!(json["type"], "리");
        assert_eq!(json["population_label"], "40");
        assert!(json.get("lat").is_none());
        assert!(json.get("highlights").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn map_marker_follows_selection() {
        let ds = Dataset::from_divisions(vec![
            seoul(),
            Division::new("독도", 40, DivisionType::Village),
            Division::new("부산", 3_300_000, DivisionType::MetropolitanCity).with_coord(35.18, 129.08),
        ])
        .unwrap();
        let mut ctl = SelectionController::new(&ds);
        assert_eq!(map_marker(&ctl), Some(Coord::new(37.5665, 126.978)));

        ctl.select(&DivisionKey::name("부산")).unwrap();
        assert_eq!(map_marker(&ctl), Some(Coord::new(35.18, 129.08)));

        // No coordinates on the selection: fall back to the first in order.
        ctl.select(&DivisionKey::name("독도")).unwrap();
        assert_eq!(map_marker(&ctl), Some(Coord::new(37.5665, 126.978)));
    }

    #[test]
    fn current_views_follow_order() {
        let ds = Dataset::from_divisions(vec![
            Division::new("독도", 40, DivisionType::Village),
            seoul(),
        ])
        .unwrap();
        let ctl = SelectionController::new(&ds);
        let views = current_views(&ctl);
        assert_eq!(views[0].name, "서울");
        assert_eq!(views[1].name, "독도");
    }
}
