//! Timezone droplist model
//!
//! A single-select droplist over a fixed table of timezones. The persisted
//! value is the zone id. When the stored value matches no zone in the table
//! (the host moved to a platform with different zone ids, or the value
//! predates a table change), the widget still shows the raw value, as a
//! fallback entry flagged with a warning — the value is never silently
//! discarded.

use serde::{Deserialize, Serialize};

/// One entry of the built-in timezone table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneEntry {
    /// Zone identifier, the persisted value
    pub id: &'static str,
    /// Label shown in the droplist
    pub display_name: &'static str,
}

/// Built-in timezone table, ordered by UTC offset
///
/// Stands in for the host platform's zone enumeration; a host integration
/// may substitute its own table through [`ZoneOptions::for_zones`].
pub const SYSTEM_TIME_ZONES: &[TimeZoneEntry] = &[
    TimeZoneEntry { id: "Pacific/Honolulu", display_name: "(UTC-10:00) Hawaii" },
    TimeZoneEntry { id: "America/Anchorage", display_name: "(UTC-09:00) Alaska" },
    TimeZoneEntry { id: "America/Los_Angeles", display_name: "(UTC-08:00) Pacific Time (US & Canada)" },
    TimeZoneEntry { id: "America/Denver", display_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    TimeZoneEntry { id: "America/Chicago", display_name: "(UTC-06:00) Central Time (US & Canada)" },
    TimeZoneEntry { id: "America/New_York", display_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    TimeZoneEntry { id: "America/Halifax", display_name: "(UTC-04:00) Atlantic Time (Canada)" },
    TimeZoneEntry { id: "America/Sao_Paulo", display_name: "(UTC-03:00) Brasilia" },
    TimeZoneEntry { id: "UTC", display_name: "(UTC) Coordinated Universal Time" },
    TimeZoneEntry { id: "Europe/London", display_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    TimeZoneEntry { id: "Europe/Berlin", display_name: "(UTC+01:00) Amsterdam, Berlin, Rome, Vienna" },
    TimeZoneEntry { id: "Europe/Warsaw", display_name: "(UTC+01:00) Sarajevo, Skopje, Warsaw, Zagreb" },
    TimeZoneEntry { id: "Europe/Kyiv", display_name: "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia" },
    TimeZoneEntry { id: "Europe/Istanbul", display_name: "(UTC+03:00) Istanbul" },
    TimeZoneEntry { id: "Europe/Moscow", display_name: "(UTC+03:00) Moscow, St. Petersburg" },
    TimeZoneEntry { id: "Asia/Dubai", display_name: "(UTC+04:00) Abu Dhabi, Muscat" },
    TimeZoneEntry { id: "Asia/Karachi", display_name: "(UTC+05:00) Islamabad, Karachi" },
    TimeZoneEntry { id: "Asia/Kolkata", display_name: "(UTC+05:30) Chennai, Kolkata, Mumbai, New Delhi" },
    TimeZoneEntry { id: "Asia/Shanghai", display_name: "(UTC+08:00) Beijing, Chongqing, Hong Kong" },
    TimeZoneEntry { id: "Asia/Tokyo", display_name: "(UTC+09:00) Osaka, Sapporo, Tokyo" },
    TimeZoneEntry { id: "Australia/Sydney", display_name: "(UTC+10:00) Canberra, Melbourne, Sydney" },
    TimeZoneEntry { id: "Pacific/Auckland", display_name: "(UTC+12:00) Auckland, Wellington" },
];

/// One droplist option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOption {
    /// Option value; empty on the leading blank option
    pub id: String,
    /// Option label
    pub label: String,
    /// Whether this option is the current selection
    pub selected: bool,
}

/// Droplist options for one render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOptions {
    /// Options in table order, preceded by one blank option
    pub options: Vec<ZoneOption>,
    /// Fallback entry for a stored value outside the table, shown selected
    pub fallback: Option<ZoneOption>,
}

impl ZoneOptions {
    /// Build the options for a stored value against the built-in table
    pub fn for_value(value: &str) -> Self {
        Self::for_zones(value, SYSTEM_TIME_ZONES)
    }

    /// Build the options for a stored value against a custom zone table
    pub fn for_zones(value: &str, zones: &[TimeZoneEntry]) -> Self {
        let mut options = Vec::with_capacity(zones.len() + 1);
        options.push(ZoneOption {
            id: String::new(),
            label: String::new(),
            selected: false,
        });

        let mut matched = false;
        for zone in zones {
            let selected = zone.id == value;
            matched |= selected;
            options.push(ZoneOption {
                id: zone.id.to_string(),
                label: zone.display_name.to_string(),
                selected,
            });
        }

        let fallback = (!value.is_empty() && !matched).then(|| ZoneOption {
            id: value.to_string(),
            label: value.to_string(),
            selected: true,
        });

        Self { options, fallback }
    }

    /// Whether the stored value lies outside the selection list
    ///
    /// Drives the "value not in the selection list" warning next to the
    /// droplist.
    pub fn value_outside_list(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Request-scoped state of the timezone droplist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeZonePicker {
    value: String,
}

impl TimeZonePicker {
    /// Create a picker holding a stored value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Droplist options for the current value
    pub fn options(&self) -> ZoneOptions {
        ZoneOptions::for_value(&self.value)
    }

    /// Take a posted value, returning whether the value changed
    ///
    /// `None` means the request carried no data for this widget; the value
    /// stays and no change is reported. The caller owns propagation of the
    /// dirty flag.
    pub fn load_post_data(&mut self, posted: Option<&str>) -> bool {
        let Some(posted) = posted else {
            return false;
        };
        let did_change = self.value != posted;
        self.value = posted.to_string();
        did_change
    }
}
