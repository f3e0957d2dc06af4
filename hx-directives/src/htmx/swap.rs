//! `hx-swap` expressions
//!
//! A [`SwapStrategy`] is a swap style followed by `key:value` modifiers, as
//! accepted by the `hx-swap` attribute and the `HX-Reswap` response header.
//! Every modifier method returns a new value and leaves the receiver alone,
//! so a shared base strategy can be derived from freely.
//!
//! ```rust
//! use std::time::Duration;
//! use hx_directives::htmx::{Direction, SwapStrategy};
//!
//! let swap = SwapStrategy::BEFORE_END
//!     .transition(true)
//!     .after(Duration::from_millis(500))
//!     .scroll_on("#messages", Direction::Bottom);
//!
//! assert_eq!(
//!     swap.to_string(),
//!     "beforeend transition:true swap:500ms scroll:#messages:bottom"
//! );
//! ```
//!
//! Each modifier key appears at most once. Setting a key again drops the
//! earlier token and appends the new one, so `scroll` and `show` follow
//! last-write-wins regardless of which variant set them.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SwapParseError;

/// Base swap style of an `hx-swap` expression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SwapStyle {
    /// Replace inner HTML of target element (default)
    #[default]
    InnerHTML,
    /// Replace entire target element
    OuterHTML,
    /// Insert content before target element
    BeforeBegin,
    /// Insert content at the beginning of target element
    AfterBegin,
    /// Insert content at the end of target element
    BeforeEnd,
    /// Insert content after target element
    AfterEnd,
    /// Delete the target element regardless of the response
    Delete,
    /// Do not swap (out of band items are still processed)
    None,
}

impl SwapStyle {
    /// Returns the HTMX swap style token
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InnerHTML => "innerHTML",
            Self::OuterHTML => "outerHTML",
            Self::BeforeBegin => "beforebegin",
            Self::AfterBegin => "afterbegin",
            Self::BeforeEnd => "beforeend",
            Self::AfterEnd => "afterend",
            Self::Delete => "delete",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SwapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwapStyle {
    type Err = SwapParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "innerHTML" => Ok(Self::InnerHTML),
            "outerHTML" => Ok(Self::OuterHTML),
            "beforebegin" => Ok(Self::BeforeBegin),
            "afterbegin" => Ok(Self::AfterBegin),
            "beforeend" => Ok(Self::BeforeEnd),
            "afterend" => Ok(Self::AfterEnd),
            "delete" => Ok(Self::Delete),
            "none" => Ok(Self::None),
            other => Err(SwapParseError::UnknownStyle(other.to_owned())),
        }
    }
}

/// Direction for the `scroll` and `show` modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top of the element or window
    Top,
    /// Bottom of the element or window
    Bottom,
}

impl Direction {
    /// Returns the modifier token for this direction
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SwapParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(SwapParseError::InvalidValue(other.to_owned())),
        }
    }
}

/// What a `scroll` or `show` modifier points at
#[derive(Debug, Clone, PartialEq, Eq)]
enum Viewport {
    Element(Direction),
    Selector(String, Direction),
    Window(Direction),
    /// `show:none`
    Off,
}

impl Viewport {
    fn parse(value: &str, allow_off: bool) -> Option<Self> {
        if allow_off && value == "none" {
            return Some(Self::Off);
        }

        let (anchor, direction) = match value.rsplit_once(':') {
            Some((anchor, direction)) => (Some(anchor), direction),
            None => (None, value),
        };
        let direction = direction.parse().ok()?;

        match anchor {
            None => Some(Self::Element(direction)),
            Some("") => None,
            Some("window") => Some(Self::Window(direction)),
            Some(selector) => Some(Self::Selector(selector.to_owned(), direction)),
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(direction) => write!(f, "{direction}"),
            Self::Selector(selector, direction) => write!(f, "{selector}:{direction}"),
            Self::Window(direction) => write!(f, "window:{direction}"),
            Self::Off => f.write_str("none"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Modifier {
    Transition(bool),
    IgnoreTitle(bool),
    FocusScroll(bool),
    Swap(Duration),
    Settle(Duration),
    Scroll(Viewport),
    Show(Viewport),
}

impl Modifier {
    const fn key(&self) -> &'static str {
        match self {
            Self::Transition(_) => "transition",
            Self::IgnoreTitle(_) => "ignoreTitle",
            Self::FocusScroll(_) => "focusScroll",
            Self::Swap(_) => "swap",
            Self::Settle(_) => "settle",
            Self::Scroll(_) => "scroll",
            Self::Show(_) => "show",
        }
    }

    fn parse(token: &str) -> Result<Self, SwapParseError> {
        let invalid = || SwapParseError::InvalidValue(token.to_owned());
        let (key, value) = token.split_once(':').ok_or_else(invalid)?;

        let modifier = match key {
            "transition" => Self::Transition(value.parse().map_err(|_| invalid())?),
            "ignoreTitle" => Self::IgnoreTitle(value.parse().map_err(|_| invalid())?),
            "focusScroll" => Self::FocusScroll(value.parse().map_err(|_| invalid())?),
            "swap" => Self::Swap(parse_interval(value).ok_or_else(invalid)?),
            "settle" => Self::Settle(parse_interval(value).ok_or_else(invalid)?),
            "scroll" => Self::Scroll(Viewport::parse(value, false).ok_or_else(invalid)?),
            "show" => Self::Show(Viewport::parse(value, true).ok_or_else(invalid)?),
            other => return Err(SwapParseError::UnknownModifier(other.to_owned())),
        };
        Ok(modifier)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key();
        match self {
            Self::Transition(value) | Self::IgnoreTitle(value) | Self::FocusScroll(value) => {
                write!(f, "{key}:{value}")
            }
            Self::Swap(duration) | Self::Settle(duration) => {
                write!(f, "{key}:{}", Interval(*duration))
            }
            Self::Scroll(viewport) | Self::Show(viewport) => write!(f, "{key}:{viewport}"),
        }
    }
}

/// Renders a duration in the units the htmx client understands
struct Interval(Duration);

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duration = self.0;
        let subsec = duration.subsec_nanos();

        if subsec == 0 {
            return write!(f, "{}s", duration.as_secs());
        }
        if subsec % 1_000_000 == 0 {
            return write!(f, "{}ms", duration.as_millis());
        }

        let nanos = duration.as_nanos();
        let fraction = format!("{:06}", nanos % 1_000_000);
        write!(f, "{}.{}ms", nanos / 1_000_000, fraction.trim_end_matches('0'))
    }
}

/// Parses `500ms`, `1.5s`, `2m` or a bare millisecond count
fn parse_interval(value: &str) -> Option<Duration> {
    const MS: u128 = 1_000_000;

    let (number, unit) = if let Some(number) = value.strip_suffix("ms") {
        (number, MS)
    } else if let Some(number) = value.strip_suffix('s') {
        (number, 1_000 * MS)
    } else if let Some(number) = value.strip_suffix('m') {
        (number, 60_000 * MS)
    } else {
        (value, MS)
    };

    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return None;
    }

    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(unit)?;
    let mut scale = unit;
    for digit in fraction.bytes() {
        scale /= 10;
        nanos = nanos.checked_add(u128::from(digit - b'0') * scale)?;
    }

    let secs = u64::try_from(nanos / 1_000_000_000).ok()?;
    let subsec = u32::try_from(nanos % 1_000_000_000).ok()?;
    Some(Duration::new(secs, subsec))
}

/// An `hx-swap` expression: optional swap style plus modifiers
///
/// Build one from a constant such as [`SwapStrategy::INNER_HTML`] and chain
/// modifier methods. [`SwapStrategy::DEFAULT`] carries no style and keeps
/// whatever the element is configured with, which is useful when only
/// modifiers need to change.
///
/// # Examples
///
/// ```rust
/// use hx_directives::htmx::SwapStrategy;
///
/// assert_eq!(SwapStrategy::DEFAULT.show_none().to_string(), "show:none");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapStrategy {
    style: Option<SwapStyle>,
    /// One entry per modifier key, in last-set order
    modifiers: Vec<Modifier>,
}

impl SwapStrategy {
    /// No style; inherits the element's configured swap
    pub const DEFAULT: Self = Self {
        style: None,
        modifiers: Vec::new(),
    };
    /// `innerHTML`
    pub const INNER_HTML: Self = Self::new(SwapStyle::InnerHTML);
    /// `outerHTML`
    pub const OUTER_HTML: Self = Self::new(SwapStyle::OuterHTML);
    /// `beforebegin`
    pub const BEFORE_BEGIN: Self = Self::new(SwapStyle::BeforeBegin);
    /// `afterbegin`
    pub const AFTER_BEGIN: Self = Self::new(SwapStyle::AfterBegin);
    /// `beforeend`
    pub const BEFORE_END: Self = Self::new(SwapStyle::BeforeEnd);
    /// `afterend`
    pub const AFTER_END: Self = Self::new(SwapStyle::AfterEnd);
    /// `delete`
    pub const DELETE: Self = Self::new(SwapStyle::Delete);
    /// `none`
    pub const NONE: Self = Self::new(SwapStyle::None);

    /// Creates a strategy with the given style and no modifiers
    #[must_use]
    pub const fn new(style: SwapStyle) -> Self {
        Self {
            style: Some(style),
            modifiers: Vec::new(),
        }
    }

    /// Swap style, or `None` for [`SwapStrategy::DEFAULT`]
    #[must_use]
    pub const fn style(&self) -> Option<SwapStyle> {
        self.style
    }

    /// Returns true when no style and no modifiers are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.style.is_none() && self.modifiers.is_empty()
    }

    /// Renders the value sent in `HX-Reswap`
    #[must_use]
    pub fn to_header_value(&self) -> String {
        self.to_string()
    }

    /// Use the View Transitions API for the swap (`transition:<bool>`)
    #[must_use]
    pub fn transition(&self, enabled: bool) -> Self {
        self.with(Modifier::Transition(enabled))
    }

    /// Keep the page title even if the response has a `<title>` (`ignoreTitle:<bool>`)
    #[must_use]
    pub fn ignore_title(&self, ignore: bool) -> Self {
        self.with(Modifier::IgnoreTitle(ignore))
    }

    /// Scroll to the focused element after the request (`focusScroll:<bool>`)
    #[must_use]
    pub fn focus_scroll(&self, enabled: bool) -> Self {
        self.with(Modifier::FocusScroll(enabled))
    }

    /// Wait this long after the response arrives before swapping (`swap:<duration>`)
    #[must_use]
    pub fn after(&self, delay: Duration) -> Self {
        self.with(Modifier::Swap(delay))
    }

    /// Wait this long after the swap before settling (`settle:<duration>`)
    #[must_use]
    pub fn settle_after(&self, delay: Duration) -> Self {
        self.with(Modifier::Settle(delay))
    }

    /// Scroll the swapped-in element (`scroll:<direction>`)
    #[must_use]
    pub fn scroll(&self, direction: Direction) -> Self {
        self.with(Modifier::Scroll(Viewport::Element(direction)))
    }

    /// Scroll the element matching `selector` (`scroll:<selector>:<direction>`)
    ///
    /// The selector is passed through as-is.
    #[must_use]
    pub fn scroll_on(&self, selector: impl Into<String>, direction: Direction) -> Self {
        self.with(Modifier::Scroll(Viewport::Selector(selector.into(), direction)))
    }

    /// Scroll the window (`scroll:window:<direction>`)
    #[must_use]
    pub fn scroll_window(&self, direction: Direction) -> Self {
        self.with(Modifier::Scroll(Viewport::Window(direction)))
    }

    /// Show the swapped-in element (`show:<direction>`)
    #[must_use]
    pub fn show(&self, direction: Direction) -> Self {
        self.with(Modifier::Show(Viewport::Element(direction)))
    }

    /// Show the element matching `selector` (`show:<selector>:<direction>`)
    #[must_use]
    pub fn show_on(&self, selector: impl Into<String>, direction: Direction) -> Self {
        self.with(Modifier::Show(Viewport::Selector(selector.into(), direction)))
    }

    /// Show the window (`show:window:<direction>`)
    #[must_use]
    pub fn show_window(&self, direction: Direction) -> Self {
        self.with(Modifier::Show(Viewport::Window(direction)))
    }

    /// Disable show behavior (`show:none`)
    #[must_use]
    pub fn show_none(&self) -> Self {
        self.with(Modifier::Show(Viewport::Off))
    }

    fn with(&self, modifier: Modifier) -> Self {
        let mut next = self.clone();
        next.set(modifier);
        next
    }

    fn set(&mut self, modifier: Modifier) {
        self.modifiers.retain(|m| m.key() != modifier.key());
        self.modifiers.push(modifier);
    }
}

impl From<SwapStyle> for SwapStrategy {
    fn from(style: SwapStyle) -> Self {
        Self::new(style)
    }
}

impl fmt::Display for SwapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        if let Some(style) = self.style {
            f.write_str(style.as_str())?;
            separator = " ";
        }
        for modifier in &self.modifiers {
            write!(f, "{separator}{modifier}")?;
            separator = " ";
        }
        Ok(())
    }
}

impl FromStr for SwapStrategy {
    type Err = SwapParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace().peekable();
        let mut strategy = Self::DEFAULT;

        if let Some(first) = tokens.next_if(|token| !token.contains(':')) {
            strategy.style = Some(first.parse()?);
        }
        for token in tokens {
            strategy.set(Modifier::parse(token)?);
        }

        Ok(strategy)
    }
}

impl Serialize for SwapStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SwapStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_SECONDS: Duration = Duration::from_secs(5);

    #[test]
    fn test_no_modifier() {
        assert_eq!(SwapStrategy::INNER_HTML.to_string(), "innerHTML");
    }

    #[test]
    fn test_one_modifier() {
        assert_eq!(
            SwapStrategy::INNER_HTML.transition(true).to_string(),
            "innerHTML transition:true"
        );
    }

    #[test]
    fn test_multiple_modifiers() {
        let swap = SwapStrategy::INNER_HTML.transition(true).after(FIVE_SECONDS);
        assert_eq!(swap.to_string(), "innerHTML transition:true swap:5s");
    }

    #[test]
    fn test_scroll_variants_share_one_key() {
        let swap = SwapStrategy::BEFORE_END
            .scroll(Direction::Top)
            .scroll_on("#div", Direction::Bottom);
        assert_eq!(swap.to_string(), "beforeend scroll:#div:bottom");
    }

    #[test]
    fn test_default_has_no_leading_space() {
        assert_eq!(SwapStrategy::DEFAULT.show_none().to_string(), "show:none");
        assert_eq!(SwapStrategy::DEFAULT.to_string(), "");
        assert!(SwapStrategy::DEFAULT.is_empty());
    }

    #[test]
    fn test_all_modifiers_collapse() {
        let swap = SwapStrategy::INNER_HTML
            .transition(true)
            .ignore_title(true)
            .focus_scroll(true)
            .after(FIVE_SECONDS)
            .settle_after(FIVE_SECONDS)
            .scroll(Direction::Top)
            .scroll_on("#another-div", Direction::Top)
            .scroll_window(Direction::Top)
            .show(Direction::Top)
            .show_on("#another-div", Direction::Top)
            .show_window(Direction::Top)
            .show_none();

        assert_eq!(
            swap.to_header_value(),
            "innerHTML transition:true ignoreTitle:true focusScroll:true swap:5s settle:5s scroll:window:top show:none"
        );
    }

    #[test]
    fn test_scroll_does_not_touch_show() {
        let swap = SwapStrategy::OUTER_HTML
            .show_on("#panel", Direction::Bottom)
            .scroll(Direction::Top);
        assert_eq!(swap.to_string(), "outerHTML show:#panel:bottom scroll:top");
    }

    #[test]
    fn test_reset_key_moves_to_end() {
        let swap = SwapStrategy::INNER_HTML
            .transition(true)
            .ignore_title(false)
            .transition(false);
        assert_eq!(swap.to_string(), "innerHTML ignoreTitle:false transition:false");
    }

    #[test]
    fn test_receiver_is_unchanged() {
        let base = SwapStrategy::AFTER_BEGIN.focus_scroll(true);
        let derived = base.transition(true);
        assert_eq!(base.to_string(), "afterbegin focusScroll:true");
        assert_eq!(derived.to_string(), "afterbegin focusScroll:true transition:true");
    }

    #[test]
    fn test_interval_formatting() {
        let render = |d| Interval(d).to_string();
        assert_eq!(render(Duration::ZERO), "0s");
        assert_eq!(render(Duration::from_secs(90)), "90s");
        assert_eq!(render(Duration::from_millis(500)), "500ms");
        assert_eq!(render(Duration::from_millis(1500)), "1500ms");
        assert_eq!(render(Duration::from_micros(1500)), "1.5ms");
        assert_eq!(render(Duration::from_nanos(250)), "0.00025ms");
    }

    #[test]
    fn test_style_tokens() {
        let styles = [
            (SwapStyle::InnerHTML, "innerHTML"),
            (SwapStyle::OuterHTML, "outerHTML"),
            (SwapStyle::BeforeBegin, "beforebegin"),
            (SwapStyle::AfterBegin, "afterbegin"),
            (SwapStyle::BeforeEnd, "beforeend"),
            (SwapStyle::AfterEnd, "afterend"),
            (SwapStyle::Delete, "delete"),
            (SwapStyle::None, "none"),
        ];
        for (style, token) in styles {
            assert_eq!(style.as_str(), token);
            assert_eq!(token.parse::<SwapStyle>(), Ok(style));
            assert_eq!(SwapStrategy::from(style).to_string(), token);
        }
    }

    #[test]
    fn test_parse_full_expression() {
        let swap: SwapStrategy = "beforeend transition:true swap:500ms settle:1s scroll:#log:bottom show:window:top"
            .parse()
            .unwrap();

        let expected = SwapStrategy::BEFORE_END
            .transition(true)
            .after(Duration::from_millis(500))
            .settle_after(Duration::from_secs(1))
            .scroll_on("#log", Direction::Bottom)
            .show_window(Direction::Top);
        assert_eq!(swap, expected);
    }

    #[test]
    fn test_parse_modifiers_only() {
        let swap: SwapStrategy = "show:none focusScroll:false".parse().unwrap();
        assert_eq!(swap.style(), None);
        assert_eq!(swap.to_string(), "show:none focusScroll:false");
    }

    #[test]
    fn test_parse_repeated_key_last_wins() {
        let swap: SwapStrategy = "innerHTML scroll:top scroll:window:bottom".parse().unwrap();
        assert_eq!(swap.to_string(), "innerHTML scroll:window:bottom");
    }

    #[test]
    fn test_parse_selector_with_colon() {
        let swap: SwapStrategy = "innerHTML show:li:last-child:top".parse().unwrap();
        assert_eq!(swap, SwapStrategy::INNER_HTML.show_on("li:last-child", Direction::Top));
    }

    #[test]
    fn test_parse_intervals() {
        assert_eq!(parse_interval("500ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse_interval("1.5s"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_interval("2m"), Some(Duration::from_secs(120)));
        assert_eq!(parse_interval("250"), Some(Duration::from_millis(250)));
        assert_eq!(parse_interval(".5ms"), Some(Duration::from_micros(500)));
        assert_eq!(parse_interval("s"), None);
        assert_eq!(parse_interval("-1s"), None);
        assert_eq!(parse_interval("1h"), None);
    }

    #[test]
    fn test_parse_oversized_interval() {
        let expression = "innerHTML swap:340282366920938463463374607431768.9ms";
        assert_eq!(
            expression.parse::<SwapStrategy>(),
            Err(SwapParseError::InvalidValue(
                "swap:340282366920938463463374607431768.9ms".into()
            ))
        );
        assert_eq!(parse_interval("99999999999999999999999999999999999999999s"), None);
        assert_eq!(parse_interval("18446744073709551616s"), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "sideways".parse::<SwapStrategy>(),
            Err(SwapParseError::UnknownStyle("sideways".into()))
        );
        assert_eq!(
            "innerHTML delay:1s".parse::<SwapStrategy>(),
            Err(SwapParseError::UnknownModifier("delay".into()))
        );
        assert_eq!(
            "innerHTML transition:yes".parse::<SwapStrategy>(),
            Err(SwapParseError::InvalidValue("transition:yes".into()))
        );
        assert_eq!(
            "innerHTML scroll:none".parse::<SwapStrategy>(),
            Err(SwapParseError::InvalidValue("scroll:none".into()))
        );
        assert_eq!(
            "innerHTML outerHTML".parse::<SwapStrategy>(),
            Err(SwapParseError::InvalidValue("outerHTML".into()))
        );
    }

    #[test]
    fn test_serde_uses_header_form() {
        let swap = SwapStrategy::INNER_HTML.show(Direction::Bottom);
        let json = serde_json::to_string(&swap).unwrap();
        assert_eq!(json, r#""innerHTML show:bottom""#);

        let back: SwapStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, swap);

        assert!(serde_json::from_str::<SwapStrategy>(r#""innerHTML bogus:1""#).is_err());
    }
}
