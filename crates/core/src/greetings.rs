use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Language code every table falls back to.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Greeting stored under [`DEFAULT_LANGUAGE`].
pub const DEFAULT_GREETING: &str = "Hello world!";

const BUILTIN_GREETINGS: [(&str, &str); 4] = [
    (DEFAULT_LANGUAGE, DEFAULT_GREETING),
    ("es", "¡Hola mundo!"),
    ("fr", "Bonjour le monde!"),
    ("de", "Hallo Welt!"),
];

#[derive(Debug, Error, Eq, PartialEq)]
pub enum TableError {
    #[error("greeting table has no entry for default language \"en\"")]
    MissingDefault,
    #[error("language code must not be empty")]
    EmptyCode,
    #[error("greeting for \"{0}\" must not be empty")]
    EmptyGreeting(String),
}

/// Single-language greeter; always says the default greeting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greeter;

impl Greeter {
    pub fn say_hello(&self) -> &'static str {
        DEFAULT_GREETING
    }
}

/// Result of [`GreetingTable::resolve`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Resolved<'a> {
    pub greeting: &'a str,
    pub fallback: bool,
}

/// Immutable mapping from language code to greeting text.
///
/// Always holds an entry for [`DEFAULT_LANGUAGE`]; unknown codes resolve to it.
/// Codes are matched exactly: no case folding and no trimming.
///
/// ```
/// use greeter_core::greetings::GreetingTable;
///
/// let table = GreetingTable::new();
/// assert_eq!(table.lookup("fr"), "Bonjour le monde!");
/// assert_eq!(table.lookup("it"), "Hello world!");
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GreetingTable {
    entries: BTreeMap<String, String>,
}

impl Default for GreetingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingTable {
    /// Builds the table with the built-in en/es/fr/de greetings.
    pub fn new() -> Self {
        let entries = BUILTIN_GREETINGS
            .iter()
            .map(|(code, greeting)| (code.to_string(), greeting.to_string()))
            .collect::<BTreeMap<_, _>>();
        debug!(languages = entries.len(), "built-in greeting table initialized");
        Self { entries }
    }

    /// Builds a table from caller-supplied pairs.
    ///
    /// Later pairs overwrite earlier ones with the same code. Fails when a
    /// code or greeting is empty, or when no default-language entry remains.
    pub fn from_entries<I, C, G>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (C, G)>,
        C: Into<String>,
        G: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (code, greeting) in entries {
            let code = code.into();
            let greeting = greeting.into();
            if code.is_empty() {
                return Err(TableError::EmptyCode);
            }
            if greeting.is_empty() {
                return Err(TableError::EmptyGreeting(code));
            }
            map.insert(code, greeting);
        }
        if !map.contains_key(DEFAULT_LANGUAGE) {
            return Err(TableError::MissingDefault);
        }
        debug!(languages = map.len(), "custom greeting table initialized");
        Ok(Self { entries: map })
    }

    /// Greeting for `code`, or the default-language greeting when absent.
    pub fn lookup(&self, code: &str) -> &str {
        self.resolve(code).greeting
    }

    /// Like [`lookup`](Self::lookup), but also reports whether fallback kicked in.
    pub fn resolve(&self, code: &str) -> Resolved<'_> {
        match self.entries.get(code) {
            Some(greeting) => Resolved {
                greeting: greeting.as_str(),
                fallback: false,
            },
            None => {
                debug!(code, "no greeting for language, falling back to default");
                Resolved {
                    greeting: self.default_greeting(),
                    fallback: true,
                }
            }
        }
    }

    /// Exact lookup without fallback.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Known language codes in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn default_greeting(&self) -> &str {
        // Both constructors reject tables without the default entry.
        self.entries
            .get(DEFAULT_LANGUAGE)
            .map(String::as_str)
            .unwrap_or(DEFAULT_GREETING)
    }
}
