//! Navigation transition type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a navigation to a page occurred.
///
/// This mirrors the transition vocabulary reported by browser history APIs.
/// The noise filter treats [`Transition::Reload`] specially; the rest are
/// carried through untouched.
///
/// # Example
///
/// ```
/// use hindsight::Transition;
///
/// let t: hindsight::Transition = serde_json::from_str("\"auto_bookmark\"").unwrap();
/// assert_eq!(t, Transition::AutoBookmark);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// The user followed a link.
    Link,
    /// The user typed the URL into the address bar.
    Typed,
    /// Navigation via a browser-generated bookmark suggestion.
    AutoBookmark,
    /// An automatically loaded subframe.
    AutoSubframe,
    /// A subframe the user explicitly navigated.
    ManualSubframe,
    /// Navigation generated from an address-bar suggestion.
    Generated,
    /// A top-level automatic navigation (e.g. the start page).
    AutoToplevel,
    /// A form submission.
    FormSubmit,
    /// The page was reloaded.
    Reload,
    /// A keyword (search shortcut) navigation.
    Keyword,
    /// A URL generated from a keyword navigation.
    KeywordGenerated,
}

impl Transition {
    /// The wire name of this transition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::Link => "link",
            Transition::Typed => "typed",
            Transition::AutoBookmark => "auto_bookmark",
            Transition::AutoSubframe => "auto_subframe",
            Transition::ManualSubframe => "manual_subframe",
            Transition::Generated => "generated",
            Transition::AutoToplevel => "auto_toplevel",
            Transition::FormSubmit => "form_submit",
            Transition::Reload => "reload",
            Transition::Keyword => "keyword",
            Transition::KeywordGenerated => "keyword_generated",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
