//! Typed preferences and their stored string forms.
//!
//! Preferences live in the store as flat key/value strings: the alias field
//! set as a comma-separated list (`"2,5,7"`), the two flags as `"0"`/`"1"`.
//! Parsing is lenient (garbage degrades to the default); the submitted admin
//! form is validated strictly before anything is written.

use crate::error::PrefsValidationError;

/// Highest custom-field slot an alias may live in.
pub const MAX_ALIAS_FIELD: u8 = 10;

pub const PREF_ALIAS_FIELDS: &str = "alias_fields";
pub const PREF_REDIRECT_PERMANENT: &str = "redirect_permanent";
pub const PREF_SHOW_FIELD_VALIDITY: &str = "show_field_validity";
pub const PREF_ALIASES_SORT_COL: &str = "aliases_sort_col";
pub const PREF_ALIASES_SORT_DIR: &str = "aliases_sort_dir";

pub const DEFAULT_ALIAS_FIELDS: &str = "";
pub const DEFAULT_REDIRECT_PERMANENT: &str = "0";
pub const DEFAULT_SHOW_FIELD_VALIDITY: &str = "1";

/// Bounded set of designated alias field slots, deduplicated and sorted.
/// Validated once at configuration load, not at every use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasFieldSet(Vec<u8>);

impl AliasFieldSet {
    /// Build a set from explicit slot numbers, rejecting anything outside
    /// 1..=[`MAX_ALIAS_FIELD`].
    pub fn new(fields: impl IntoIterator<Item = u8>) -> Result<Self, PrefsValidationError> {
        let mut out: Vec<u8> = Vec::new();
        for f in fields {
            if f < 1 || f > MAX_ALIAS_FIELD {
                return Err(PrefsValidationError::FieldOutOfRange(f));
            }
            if !out.contains(&f) {
                out.push(f);
            }
        }
        out.sort_unstable();
        Ok(AliasFieldSet(out))
    }

    /// Lenient parse of the stored comma-separated form. Entries that are
    /// not numbers in range are skipped rather than erroring, so a corrupted
    /// preference degrades to "fewer fields" instead of breaking resolution.
    pub fn parse(stored: &str) -> Self {
        let mut out: Vec<u8> = Vec::new();
        for part in stored.split(',') {
            let part = part.trim();
            if let Ok(n) = part.parse::<u8>() {
                if (1..=MAX_ALIAS_FIELD).contains(&n) && !out.contains(&n) {
                    out.push(n);
                }
            }
        }
        out.sort_unstable();
        AliasFieldSet(out)
    }

    /// Stored comma-separated form.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: u8) -> bool {
        self.0.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

/// Typed view of the plugin preferences, loaded once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub alias_fields: AliasFieldSet,
    pub redirect_permanent: bool,
    pub show_field_validity: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            alias_fields: AliasFieldSet::default(),
            redirect_permanent: stored_flag(DEFAULT_REDIRECT_PERMANENT),
            show_field_validity: stored_flag(DEFAULT_SHOW_FIELD_VALIDITY),
        }
    }
}

/// Lenient read of a stored boolean-as-string: `"1"` is true, anything else false.
pub fn stored_flag(value: &str) -> bool {
    value.trim() == "1"
}

pub fn encode_flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Raw values submitted by the host's preferences form. `None` means the
/// field was absent from the submission and keeps its current value.
#[derive(Debug, Clone, Default)]
pub struct PrefsForm {
    pub alias_fields: Option<Vec<u8>>,
    pub redirect_permanent: Option<String>,
    pub show_field_validity: Option<String>,
}

impl PrefsForm {
    /// Strictly validate the form against the current preferences, yielding
    /// the new preference state. Nothing is persisted here.
    pub fn validate(&self, current: &Preferences) -> Result<Preferences, PrefsValidationError> {
        let alias_fields = match &self.alias_fields {
            Some(fields) => AliasFieldSet::new(fields.iter().copied())?,
            None => current.alias_fields.clone(),
        };

        let redirect_permanent = match self.redirect_permanent.as_deref() {
            Some(v) => parse_strict_flag(v)
                .ok_or_else(|| PrefsValidationError::InvalidRedirectType(v.to_string()))?,
            None => current.redirect_permanent,
        };

        let show_field_validity = match self.show_field_validity.as_deref() {
            Some(v) => parse_strict_flag(v)
                .ok_or_else(|| PrefsValidationError::InvalidValidityHint(v.to_string()))?,
            None => current.show_field_validity,
        };

        Ok(Preferences {
            alias_fields,
            redirect_permanent,
            show_field_validity,
        })
    }
}

fn parse_strict_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}
