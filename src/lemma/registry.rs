//! Language identifiers and the dictionary asset registry.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::info;

use super::codec;
use super::error::{LemmaError, Result};
use super::index::Dictionary;
use super::lemmatizer::Lemmatizer;
use super::parser::{self, ParseOptions};

/// The closed set of supported languages.
///
/// Each variant maps to exactly one bundled dictionary asset. Adding a
/// language means adding a variant; the compiler then points at every match
/// that needs the new asset wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
    German,
    Italian,
    Spanish,
    Swedish,
}

impl Language {
    /// Every supported language, for exhaustive iteration.
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Spanish,
        Language::Swedish,
    ];

    /// The full lowercase identifier accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Spanish => "spanish",
            Language::Swedish => "swedish",
        }
    }

    /// The two-letter code used in asset paths.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Spanish => "es",
            Language::Swedish => "sv",
        }
    }

    /// Virtual path of this language's dictionary asset.
    pub fn asset_path(self) -> String {
        format!("data/{}.gz", self.code())
    }

    /// The gzip dictionary blob compiled into the crate.
    fn bundled_asset(self) -> &'static [u8] {
        match self {
            Language::English => include_bytes!("../../assets/en.gz"),
            Language::French => include_bytes!("../../assets/fr.gz"),
            Language::German => include_bytes!("../../assets/de.gz"),
            Language::Italian => include_bytes!("../../assets/it.gz"),
            Language::Spanish => include_bytes!("../../assets/es.gz"),
            Language::Swedish => include_bytes!("../../assets/sv.gz"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = LemmaError;

    fn from_str(s: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|language| language.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LemmaError::UnsupportedLanguage(s.to_string()))
    }
}

/// Maps languages to their compressed dictionary assets and builds
/// lemmatizers from them.
///
/// The bundled registry covers every [`Language`]. A registry built from
/// [`Registry::empty`] lets tests supply synthetic assets without touching
/// any process-wide state.
#[derive(Debug, Default)]
pub struct Registry {
    assets: HashMap<Language, Cow<'static, [u8]>>,
}

impl Registry {
    /// A registry with no assets; pair with [`Self::register`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// The registry of dictionary assets compiled into the crate.
    pub fn bundled() -> Self {
        let mut registry = Self::empty();
        for language in Language::ALL {
            registry
                .assets
                .insert(language, Cow::Borrowed(language.bundled_asset()));
        }
        registry
    }

    /// Adds or replaces the asset for `language`.
    pub fn register(&mut self, language: Language, asset: impl Into<Cow<'static, [u8]>>) {
        self.assets.insert(language, asset.into());
    }

    /// The raw compressed asset for `language`.
    ///
    /// # Errors
    /// [`LemmaError::UnsupportedLanguage`] if no asset is registered.
    pub fn asset(&self, language: Language) -> Result<&[u8]> {
        self.assets
            .get(&language)
            .map(Cow::as_ref)
            .ok_or_else(|| LemmaError::UnsupportedLanguage(language.name().to_string()))
    }

    /// Builds a [`Lemmatizer`] for `language` with default parse options.
    pub fn lemmatizer(&self, language: Language) -> Result<Lemmatizer> {
        self.lemmatizer_with(language, ParseOptions::default())
    }

    /// Builds a [`Lemmatizer`] for `language`, running the whole load
    /// pipeline: decompress the asset, parse the line pairs, build the
    /// lookup index.
    ///
    /// # Errors
    /// - [`LemmaError::UnsupportedLanguage`] if no asset is registered
    /// - [`LemmaError::AssetCorrupt`] if the blob fails to inflate to text
    /// - [`LemmaError::ParseError`] for malformed lines under the strict policy
    pub fn lemmatizer_with(&self, language: Language, options: ParseOptions) -> Result<Lemmatizer> {
        let asset = self.asset(language)?;
        let path = language.asset_path();

        let text = codec::decompress(&path, asset)?;
        let (entries, stats) = parser::parse(&text, options)?;
        let dict = Dictionary::build(entries);

        info!(
            "Loaded {} dictionary: {} entries from {} pairs ({} lines skipped)",
            language, stats.entries, stats.pairs, stats.skipped
        );
        Ok(Lemmatizer::from_parts(language, dict, stats))
    }
}
