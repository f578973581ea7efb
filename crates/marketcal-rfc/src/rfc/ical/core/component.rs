//! iCalendar component types (RFC 5545 §3.4-3.6).

use super::{Property, names};
use crate::error::{RfcError, RfcResult};

/// Component kind for iCalendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An iCalendar component.
///
/// Components contain properties and nested sub-components; a VCALENDAR
/// contains the VEVENTs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Component type.
    pub kind: ComponentKind,
    /// Properties in order of insertion.
    pub properties: Vec<Property>,
    /// Nested sub-components.
    pub children: Vec<Component>,
}

impl Component {
    /// Creates a new component with the given kind.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a VCALENDAR component.
    #[must_use]
    pub fn calendar() -> Self {
        Self::new(ComponentKind::Calendar)
    }

    /// Creates a VEVENT component.
    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    /// Returns the component name as written on `BEGIN`/`END` lines.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Adds a property to this component.
    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Adds a child component.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the UID property value if present.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property(names::UID)?.as_text()
    }

    /// Returns the SUMMARY property value if present.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.get_property(names::SUMMARY)?.as_text()
    }

    /// Returns the DESCRIPTION property value if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get_property(names::DESCRIPTION)?.as_text()
    }

    /// Returns all VEVENT children, in insertion order.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.children
            .iter()
            .filter(|c| c.kind == ComponentKind::Event)
            .collect()
    }

    /// Fails unless the property exists with a non-empty serialized value.
    fn require(&self, property: &'static str) -> RfcResult<()> {
        match self.get_property(property) {
            Some(p) if !p.raw_value.trim().is_empty() => Ok(()),
            _ => Err(RfcError::MissingProperty {
                component: self.name(),
                property,
            }),
        }
    }
}

/// Top-level iCalendar object.
///
/// Wraps the root VCALENDAR component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    /// The root VCALENDAR component.
    pub root: Component,
}

impl ICalendar {
    /// Creates a new empty iCalendar with the required properties.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut root = Component::calendar();
        root.add_property(Property::text(names::VERSION, "2.0"));
        root.add_property(Property::text(names::PRODID, prodid));
        root.add_property(Property::text(names::CALSCALE, "GREGORIAN"));
        Self { root }
    }

    /// Sets the METHOD property (e.g. `PUBLISH`).
    pub fn set_method(&mut self, method: impl Into<String>) {
        self.set_text(names::METHOD, method);
    }

    /// Sets the calendar display name (`X-WR-CALNAME`).
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.set_text(names::X_WR_CALNAME, name);
    }

    fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.root
            .properties
            .retain(|p| !p.name.eq_ignore_ascii_case(name));
        self.root.add_property(Property::text(name, value));
    }

    /// Returns the PRODID value.
    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.root.get_property(names::PRODID)?.as_text()
    }

    /// Returns the VERSION value.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root.get_property(names::VERSION)?.as_text()
    }

    /// Returns the METHOD value.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.root.get_property(names::METHOD)?.as_text()
    }

    /// Returns the calendar display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.root.get_property(names::X_WR_CALNAME)?.as_text()
    }

    /// Adds a VEVENT component.
    pub fn add_event(&mut self, event: Component) {
        self.root.add_child(event);
    }

    /// Returns all VEVENT components.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root.events()
    }

    /// ## Summary
    /// Checks the properties RFC 5545 requires before the calendar can be
    /// published: `VERSION` and `PRODID` on the calendar, and `UID`,
    /// `DTSTAMP` and `DTSTART` on every event.
    ///
    /// ## Errors
    /// Returns the first missing or empty required property.
    pub fn validate(&self) -> RfcResult<()> {
        self.root.require(names::VERSION)?;
        self.root.require(names::PRODID)?;
        for event in self.events() {
            event.require(names::UID)?;
            event.require(names::DTSTAMP)?;
            event.require(names::DTSTART)?;
        }
        Ok(())
    }
}

impl Default for ICalendar {
    fn default() -> Self {
        Self::new("-//marketcal//US Market Holidays//EN")
    }
}
