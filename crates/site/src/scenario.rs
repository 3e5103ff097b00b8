//! Canonical gallery scenarios shared by the index page, scenario routes, and
//! end-to-end harnesses that mount a single component state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised when resolving a scenario id.
pub enum ScenarioError {
    /// The id does not name a scenario.
    #[error("unknown gallery scenario `{0}`")]
    Unknown(String),
}

/// Component states the gallery can mount in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryScenario {
    /// Button with only a label.
    ButtonDefault,
    /// Danger-variant button.
    ButtonDanger,
    /// Small button.
    ButtonSmall,
    /// Large button.
    ButtonLarge,
    /// Disabled button with a callback attached.
    ButtonDisabled,
    /// Card with title and content.
    CardBasic,
    /// Card with a footer action.
    CardWithFooter,
    /// Card with a fixed pixel width.
    CardFixedWidth,
    /// Card with content only and no footer.
    CardWithoutFooter,
}

impl GalleryScenario {
    /// Every scenario in gallery order.
    pub const ALL: [Self; 9] = [
        Self::ButtonDefault,
        Self::ButtonDanger,
        Self::ButtonSmall,
        Self::ButtonLarge,
        Self::ButtonDisabled,
        Self::CardBasic,
        Self::CardWithFooter,
        Self::CardFixedWidth,
        Self::CardWithoutFooter,
    ];

    /// Stable route and query-string id.
    pub const fn id(self) -> &'static str {
        match self {
            Self::ButtonDefault => "button-default",
            Self::ButtonDanger => "button-danger",
            Self::ButtonSmall => "button-small",
            Self::ButtonLarge => "button-large",
            Self::ButtonDisabled => "button-disabled",
            Self::CardBasic => "card-basic",
            Self::CardWithFooter => "card-with-footer",
            Self::CardFixedWidth => "card-fixed-width",
            Self::CardWithoutFooter => "card-without-footer",
        }
    }

    /// Human-readable heading for the index page.
    pub const fn title(self) -> &'static str {
        match self {
            Self::ButtonDefault => "Button / default",
            Self::ButtonDanger => "Button / danger",
            Self::ButtonSmall => "Button / small",
            Self::ButtonLarge => "Button / large",
            Self::ButtonDisabled => "Button / disabled",
            Self::CardBasic => "Card / title and content",
            Self::CardWithFooter => "Card / footer",
            Self::CardFixedWidth => "Card / fixed width",
            Self::CardWithoutFooter => "Card / no footer",
        }
    }

    /// Resolves a scenario id, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|scenario| scenario.id() == raw)
    }

    /// Route path mounting this scenario alone.
    pub fn path(self) -> String {
        format!("/scenario/{}", self.id())
    }
}

impl FromStr for GalleryScenario {
    type Err = ScenarioError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw).ok_or_else(|| ScenarioError::Unknown(raw.trim().to_string()))
    }
}

/// Reads `scenario=<id>` from a URL query string (with or without the leading `?`).
///
/// Unknown ids and malformed pairs are ignored; the first known id wins.
pub fn scenario_from_query(search: &str) -> Option<GalleryScenario> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| *key == "scenario")
        .find_map(|(_, value)| GalleryScenario::parse(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_round_trip_through_parse() {
        for scenario in GalleryScenario::ALL {
            assert_eq!(GalleryScenario::parse(scenario.id()), Some(scenario));
            assert_eq!(scenario.id().parse::<GalleryScenario>(), Ok(scenario));
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = GalleryScenario::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), GalleryScenario::ALL.len());
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert_eq!(GalleryScenario::parse("button-huge"), None);
        assert_eq!(
            " modal ".parse::<GalleryScenario>(),
            Err(ScenarioError::Unknown("modal".to_string()))
        );
    }

    #[test]
    fn query_string_selects_scenario() {
        let cases = [
            ("?scenario=card-with-footer", Some(GalleryScenario::CardWithFooter)),
            ("scenario=button-danger", Some(GalleryScenario::ButtonDanger)),
            ("?theme=dark&scenario=card-basic", Some(GalleryScenario::CardBasic)),
            ("?scenario=nope&scenario=button-small", Some(GalleryScenario::ButtonSmall)),
            ("?scenario", None),
            ("", None),
        ];

        for (input, expected) in cases {
            assert_eq!(scenario_from_query(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn serde_uses_route_ids() {
        assert_eq!(
            serde_json::to_string(&GalleryScenario::CardFixedWidth).expect("serialize"),
            "\"card-fixed-width\""
        );
        assert_eq!(GalleryScenario::ButtonLarge.path(), "/scenario/button-large");
    }

    #[test]
    fn fixture_lists_deserialize_from_route_ids() {
        let fixture: Vec<GalleryScenario> =
            serde_json::from_str(r#"["button-disabled", "card-with-footer"]"#).expect("fixture");
        assert_eq!(
            fixture,
            vec![GalleryScenario::ButtonDisabled, GalleryScenario::CardWithFooter]
        );

        let all = serde_json::to_string(&GalleryScenario::ALL).expect("serialize");
        let back: Vec<GalleryScenario> = serde_json::from_str(&all).expect("deserialize");
        assert_eq!(back, GalleryScenario::ALL.to_vec());
        assert!(serde_json::from_str::<GalleryScenario>("\"card-huge\"").is_err());
    }
}
