// Placeholder substitution: the first stage of the text pipeline.
//
// Social-media posts carry a lot of surface variation that says nothing
// about the language being used (which URL, which user was mentioned,
// which number). Each of those patterns is replaced with a fixed
// placeholder token so that two posts differing only in those details
// produce the same term vector.
//
// The substitutions are an explicit ordered list of rules. Order matters:
// URLs go first so the NUMBER rule never sees the digits inside a link,
// and literal emoticons/emoji run before the Unicode emoji ranges so the
// caller's lists take priority.

use std::sync::LazyLock;

use regex_lite::{NoExpand, Regex};
use tracing::debug;

use super::placeholder::Placeholder;
use crate::error::{Error, Result};

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(https?|ftp|file)://[\-a-zA-Z0-9+&@#/%?=~_|!:,.;]*[\-a-zA-Z0-9+&@#/%=~_|]")
        .expect("URL pattern is valid")
});

// Anchored to the whole input: only fires when the entire text is a single
// address, optionally followed by one trailing newline. See DESIGN.md before
// broadening it.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_A-Za-z0-9\-+]+(\.[_A-Za-z0-9\-]+)*@[A-Za-z0-9\-]+(\.[A-Za-z0-9]+)*(\.[A-Za-z]{2,})\n?$")
        .expect("email pattern is valid")
});

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[A-Za-z0-9]+").expect("mention pattern is valid"));

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[A-Za-z0-9]+").expect("hashtag pattern is valid"));

// Integers, decimals ("3.5", "3.") and temperatures ("21°"). ASCII digits only.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(\.[0-9]*)?°?").expect("number pattern is valid"));

// Misc symbols & pictographs, emoticons, transport & map, misc symbols, dingbats.
static EMOJI_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{1F300}-\x{1F64F}\x{1F680}-\x{1F6FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]+")
        .expect("emoji range pattern is valid")
});

/// How a rule finds the text it replaces.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// A regular expression; every non-overlapping match is replaced.
    Pattern(Regex),
    /// A literal string; every occurrence is replaced.
    Literal(String),
}

/// One step of the substitution pipeline.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    name: String,
    matcher: Matcher,
    placeholder: Placeholder,
}

impl SubstitutionRule {
    fn pattern(name: &str, re: &Regex, placeholder: Placeholder) -> Self {
        Self {
            name: name.to_string(),
            matcher: Matcher::Pattern(re.clone()),
            placeholder,
        }
    }

    fn literal(literal: &str, placeholder: Placeholder) -> Self {
        Self {
            name: format!("{} literal {literal:?}", placeholder.as_str().to_lowercase()),
            matcher: Matcher::Literal(literal.to_string()),
            placeholder,
        }
    }

    pub fn url() -> Self {
        Self::pattern("url", &URL_RE, Placeholder::Url)
    }

    pub fn email() -> Self {
        Self::pattern("email", &EMAIL_RE, Placeholder::Email)
    }

    pub fn mention() -> Self {
        Self::pattern("mention", &MENTION_RE, Placeholder::Mention)
    }

    pub fn hashtag() -> Self {
        Self::pattern("hashtag", &HASHTAG_RE, Placeholder::Hashtag)
    }

    pub fn number() -> Self {
        Self::pattern("number", &NUMBER_RE, Placeholder::Number)
    }

    pub fn emoticon(literal: &str) -> Self {
        Self::literal(literal, Placeholder::Emoticon)
    }

    pub fn emoji(literal: &str) -> Self {
        Self::literal(literal, Placeholder::Emoji)
    }

    pub fn emoji_ranges() -> Self {
        Self::pattern("emoji ranges", &EMOJI_RANGE_RE, Placeholder::Emoji)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn placeholder(&self) -> Placeholder {
        self.placeholder
    }

    /// Apply this rule alone to `text`.
    pub fn apply(&self, text: &str) -> String {
        let replacement = self.placeholder.padded();
        match &self.matcher {
            Matcher::Pattern(re) => re.replace_all(text, NoExpand(replacement)).into_owned(),
            Matcher::Literal(lit) => text.replace(lit.as_str(), replacement),
        }
    }
}

/// Ordered placeholder substitution over a post.
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<SubstitutionRule>,
}

impl Normalizer {
    /// Start building a normalizer. Both the emoticon and the emoji list
    /// must be supplied, even if empty.
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// Build the rule list for the given emoticon and emoji literals.
    ///
    /// Empty strings are skipped: replacing "" would insert a placeholder
    /// between every pair of characters.
    pub fn new<E, J>(emoticons: &[E], emojis: &[J]) -> Self
    where
        E: AsRef<str>,
        J: AsRef<str>,
    {
        let mut rules = vec![
            SubstitutionRule::url(),
            SubstitutionRule::email(),
            SubstitutionRule::mention(),
            SubstitutionRule::hashtag(),
            SubstitutionRule::number(),
        ];
        rules.extend(
            emoticons
                .iter()
                .map(AsRef::<str>::as_ref)
                .filter(|e| !e.is_empty())
                .map(SubstitutionRule::emoticon),
        );
        rules.extend(
            emojis
                .iter()
                .map(AsRef::<str>::as_ref)
                .filter(|e| !e.is_empty())
                .map(SubstitutionRule::emoji),
        );
        rules.push(SubstitutionRule::emoji_ranges());

        debug!(
            emoticons = emoticons.len(),
            emojis = emojis.len(),
            rules = rules.len(),
            "Built normalizer"
        );

        Self { rules }
    }

    /// The rules in the order they are applied.
    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    /// Run every rule in order, each on the output of the previous one.
    pub fn normalize(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }
}

/// Collects the lists a [`Normalizer`] needs and refuses to build without them.
#[derive(Debug, Default, Clone)]
pub struct NormalizerBuilder {
    emoticons: Option<Vec<String>>,
    emojis: Option<Vec<String>>,
}

impl NormalizerBuilder {
    pub fn emoticons<I, S>(mut self, emoticons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emoticons = Some(emoticons.into_iter().map(Into::into).collect());
        self
    }

    pub fn emojis<I, S>(mut self, emojis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emojis = Some(emojis.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<Normalizer> {
        let emoticons = self.emoticons.ok_or(Error::MissingArgument("emoticons"))?;
        let emojis = self.emojis.ok_or(Error::MissingArgument("emojis"))?;
        Ok(Normalizer::new(&emoticons, &emojis))
    }
}

/// One-shot normalization with explicit lists.
pub fn normalize<E, J>(text: &str, emoticons: &[E], emojis: &[J]) -> String
where
    E: AsRef<str>,
    J: AsRef<str>,
{
    Normalizer::new(emoticons, emojis).normalize(text)
}
