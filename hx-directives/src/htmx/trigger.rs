//! Client-side event triggers for `HX-Trigger` and friends

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// An event for the client to trigger, with an optional JSON detail
///
/// # Examples
///
/// ```rust
/// use hx_directives::htmx::Trigger;
/// use serde_json::json;
///
/// let plain = Trigger::event("itemAdded");
/// let message = Trigger::detail("showMessage", "Saved!");
/// let object = Trigger::object("notify", &json!({"level": "info"})).unwrap();
/// # let _ = (plain, message, object);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    name: String,
    detail: Option<Value>,
}

impl Trigger {
    /// Event with no detail
    #[must_use]
    pub fn event(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }

    /// Event carrying a string detail
    #[must_use]
    pub fn detail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: Some(Value::String(detail.into())),
        }
    }

    /// Event carrying any serializable value as its detail
    pub fn object(name: impl Into<String>, detail: &impl Serialize) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            detail: Some(serde_json::to_value(detail)?),
        })
    }

    /// Event name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Trigger {
    fn from(name: &str) -> Self {
        Self::event(name)
    }
}

impl From<String> for Trigger {
    fn from(name: String) -> Self {
        Self::event(name)
    }
}

/// Renders a trigger list as a header value
///
/// Plain events are joined with `", "`. As soon as one trigger has a
/// detail the whole list becomes a JSON object keyed by event name, with
/// `""` for plain events; a repeated name keeps its last value.
pub(crate) fn render(triggers: &[Trigger]) -> Result<String> {
    if triggers.iter().all(|trigger| trigger.detail.is_none()) {
        let names: Vec<&str> = triggers.iter().map(Trigger::name).collect();
        return Ok(names.join(", "));
    }

    let mut events = Map::new();
    for trigger in triggers {
        let detail = trigger
            .detail
            .clone()
            .unwrap_or_else(|| Value::String(String::new()));
        events.insert(trigger.name.clone(), detail);
    }
    Ok(serde_json::to_string(&Value::Object(events))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_events_are_comma_joined() {
        let triggers = [Trigger::event("a"), Trigger::from("b"), "c".into()];
        assert_eq!(render(&triggers).unwrap(), "a, b, c");
    }

    #[test]
    fn test_single_detail() {
        let triggers = [Trigger::detail("showMessage", "Here Is A Message")];
        assert_eq!(
            render(&triggers).unwrap(),
            r#"{"showMessage":"Here Is A Message"}"#
        );
    }

    #[test]
    fn test_mixed_events_become_json() {
        let triggers = [
            Trigger::event("refresh"),
            Trigger::object("notify", &json!({"level": "info", "message": "hi"})).unwrap(),
        ];
        let rendered: Value = serde_json::from_str(&render(&triggers).unwrap()).unwrap();
        assert_eq!(
            rendered,
            json!({"refresh": "", "notify": {"level": "info", "message": "hi"}})
        );
    }

    #[test]
    fn test_repeated_name_keeps_last() {
        let triggers = [Trigger::detail("toast", "first"), Trigger::detail("toast", "second")];
        assert_eq!(render(&triggers).unwrap(), r#"{"toast":"second"}"#);
    }

    #[test]
    fn test_object_from_struct() {
        #[derive(Serialize)]
        struct Progress {
            done: u32,
        }

        let trigger = Trigger::object("progress", &Progress { done: 3 }).unwrap();
        assert_eq!(trigger.name(), "progress");
        assert_eq!(render(&[trigger]).unwrap(), r#"{"progress":{"done":3}}"#);
    }
}
