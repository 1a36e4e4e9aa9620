//! Toast notification composites
//!
//! A toast payload is `<toast>` wrapping one `<visual>` wrapping the
//! `ToastGeneric` `<binding>`.

pub mod binding;
pub mod visual;

pub use binding::{ToastBinding, ToastBindingChild};
pub use visual::ToastVisual;

use crate::xml::node::{AttrValue, XmlNode};
use crate::xml::to_xml;

/// Scenario hint changing how the OS presents the toast
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ToastScenario {
    #[default]
    Default,
    Alarm,
    Reminder,
    IncomingCall,
    Urgent,
}

impl ToastScenario {
    /// The schema token for this value, or `None` for the default
    pub fn schema_str(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Alarm => Some("alarm"),
            Self::Reminder => Some("reminder"),
            Self::IncomingCall => Some("incomingCall"),
            Self::Urgent => Some("urgent"),
        }
    }
}

/// How long the toast stays on screen
///
/// `Short` is the schema default and emits no attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ToastDuration {
    #[default]
    Short,
    Long,
}

impl ToastDuration {
    /// The schema token for this value, or `None` for the default
    pub fn schema_str(self) -> Option<&'static str> {
        match self {
            Self::Short => None,
            Self::Long => Some("long"),
        }
    }
}

/// What activating the toast body launches
///
/// `Foreground` is the schema default and emits no attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ToastActivationType {
    #[default]
    Foreground,
    Background,
    Protocol,
}

impl ToastActivationType {
    /// The schema token for this value, or `None` for the default
    pub fn schema_str(self) -> Option<&'static str> {
        match self {
            Self::Foreground => None,
            Self::Background => Some("background"),
            Self::Protocol => Some("protocol"),
        }
    }
}

/// The `<toast>` root element
///
/// Attribute order follows the schema: `launch`, `activationType`,
/// `scenario`, `duration`, `displayTimestamp`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Toast {
    launch: Option<String>,
    activation_type: ToastActivationType,
    scenario: ToastScenario,
    duration: ToastDuration,
    display_timestamp: Option<String>,
    visual: ToastVisual,
}

impl Toast {
    /// Create a toast wrapping the given visual
    pub fn new(visual: ToastVisual) -> Self {
        Self {
            launch: None,
            activation_type: ToastActivationType::default(),
            scenario: ToastScenario::default(),
            duration: ToastDuration::default(),
            display_timestamp: None,
            visual,
        }
    }

    /// Set the arguments passed back when the toast body is activated
    pub fn set_launch(&mut self, launch: impl Into<String>) {
        self.launch = Some(launch.into());
    }

    /// Set what body activation launches
    pub fn set_activation_type(&mut self, activation: ToastActivationType) {
        self.activation_type = activation;
    }

    /// Set the presentation scenario
    pub fn set_scenario(&mut self, scenario: ToastScenario) {
        self.scenario = scenario;
    }

    /// Set how long the toast stays on screen
    pub fn set_duration(&mut self, duration: ToastDuration) {
        self.duration = duration;
    }

    /// Override the timestamp shown for the notification (ISO 8601)
    pub fn set_display_timestamp(&mut self, timestamp: impl Into<String>) {
        self.display_timestamp = Some(timestamp.into());
    }

    pub fn visual(&self) -> &ToastVisual {
        &self.visual
    }

    pub fn visual_mut(&mut self) -> &mut ToastVisual {
        &mut self.visual
    }

    /// Serialize the whole payload to notification XML
    pub fn to_xml(&self) -> String {
        to_xml(self)
    }
}

impl XmlNode for Toast {
    fn name(&self) -> &'static str {
        "toast"
    }

    fn attributes(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        vec![
            ("launch", self.launch.as_ref().map(AttrValue::from)),
            (
                "activationType",
                self.activation_type.schema_str().map(AttrValue::from),
            ),
            ("scenario", self.scenario.schema_str().map(AttrValue::from)),
            ("duration", self.duration.schema_str().map(AttrValue::from)),
            (
                "displayTimestamp",
                self.display_timestamp.as_ref().map(AttrValue::from),
            ),
        ]
    }

    fn children(&self) -> Vec<&dyn XmlNode> {
        vec![&self.visual]
    }
}
