/*!
Translation of the phrases produced by this crate.

Every routine in this crate that produces words asks a [`Translator`] for
them. The translator is always passed explicitly (typically via a builder
method like [`PreciseDelta::translator`](crate::PreciseDelta::translator));
there is no global or thread local "current locale." When no translator is
given, [`English`] is used.

Phrases are identified by their English text, in the style of `gettext`.
Many phrases are templates with `{name}` placeholders (e.g.,
`"{amount} days"`). A translator returns the translated template with its
placeholders intact, and this crate fills them in.

This crate does not load message catalogs from disk. [`Catalog`] is a
simple in-memory translator that can be populated by whatever catalog
loading mechanism the caller prefers.
*/

use alloc::{
    boxed::Box,
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use crate::fmt::template::{fill, Arg};

/// A source of translated phrases.
///
/// Implementations must be pure functions of their inputs (and whatever
/// locale they were constructed for). In particular, the same inputs should
/// always produce the same outputs for the lifetime of the translator.
///
/// # Example
///
/// This implements a translator that shouts the final conjunction of a
/// list and leaves everything else in English:
///
/// ```
/// use humanity::{i18n::Translator, Delta, PreciseDelta};
///
/// #[derive(Debug)]
/// struct Loud;
///
/// impl Translator for Loud {
///     fn phrase<'a>(&'a self, key: &'a str) -> &'a str {
///         match key {
///             "{head} and {tail}" => "{head} AND {tail}",
///             _ => key,
///         }
///     }
///
///     fn plural<'a>(
///         &'a self,
///         singular: &'a str,
///         plural: &'a str,
///         count: u64,
///     ) -> &'a str {
///         if count == 1 { singular } else { plural }
///     }
/// }
///
/// let delta = Delta::new(0, 3_661, 0);
/// let text = PreciseDelta::new().translator(&Loud).format(delta)?;
/// assert_eq!(text, "1 hour, 1 minute AND 1 second");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Translator: core::fmt::Debug {
    /// Returns the translation of a fixed phrase.
    ///
    /// When no translation is available, `key` itself should be returned.
    fn phrase<'a>(&'a self, key: &'a str) -> &'a str;

    /// Returns the singular or plural template, translated, that is
    /// appropriate for `count`.
    ///
    /// When no translation is available, `singular` should be returned when
    /// `count == 1` and `plural` otherwise.
    fn plural<'a>(
        &'a self,
        singular: &'a str,
        plural: &'a str,
        count: u64,
    ) -> &'a str;

    /// Returns the translation of a phrase that is disambiguated by a
    /// context string.
    ///
    /// This is used for short words whose translation depends on what they
    /// describe, like ordinal suffixes (`"1"` → `"st"`) or the spelled out
    /// number of an hour on a clock. By default, the context is ignored.
    fn phrase_in<'a>(&'a self, context: &'a str, key: &'a str) -> &'a str {
        let _ = context;
        self.phrase(key)
    }

    /// The separator placed between groups of three digits by
    /// [`Numbers::int_comma`](crate::Numbers::int_comma).
    fn thousands_separator(&self) -> &str {
        ","
    }
}

impl<'t, T: Translator + ?Sized> Translator for &'t T {
    fn phrase<'a>(&'a self, key: &'a str) -> &'a str {
        (**self).phrase(key)
    }

    fn plural<'a>(
        &'a self,
        singular: &'a str,
        plural: &'a str,
        count: u64,
    ) -> &'a str {
        (**self).plural(singular, plural, count)
    }

    fn phrase_in<'a>(&'a self, context: &'a str, key: &'a str) -> &'a str {
        (**self).phrase_in(context, key)
    }

    fn thousands_separator(&self) -> &str {
        (**self).thousands_separator()
    }
}

/// The identity translator.
///
/// Every phrase is returned untranslated, and the singular form of a
/// template is selected if and only if the count is exactly `1`.
#[derive(Clone, Copy, Debug, Default)]
pub struct English;

impl Translator for English {
    fn phrase<'a>(&'a self, key: &'a str) -> &'a str {
        key
    }

    fn plural<'a>(
        &'a self,
        singular: &'a str,
        plural: &'a str,
        count: u64,
    ) -> &'a str {
        if count == 1 {
            singular
        } else {
            plural
        }
    }
}

pub(crate) static ENGLISH: English = English;

/// A plural rule maps a count to the index of the plural form to use.
///
/// For English-like languages, this is `|n| usize::from(n != 1)`.
pub type PluralRule = fn(u64) -> usize;

/// An in-memory message catalog.
///
/// A catalog maps untranslated phrases (identified by their English text)
/// to translated phrases. Plural templates are keyed by their English
/// singular form and may have any number of translated forms; the form is
/// chosen by the catalog's [`PluralRule`]. Anything missing from the catalog
/// falls back to the untranslated English text.
///
/// # Example
///
/// ```
/// use humanity::{i18n::Catalog, Delta, PreciseDelta};
///
/// let pt = Catalog::new(|n| usize::from(n > 1))
///     .with_phrase("{head} and {tail}", "{head} e {tail}")
///     .with_plural("{amount} day", &["{amount} dia", "{amount} dias"])
///     .with_plural("{amount} hour", &["{amount} hora", "{amount} horas"]);
///
/// let pd = PreciseDelta::new().translator(&pt);
/// let text = pd.format(Delta::new(2, 3_600, 0))?;
/// assert_eq!(text, "2 dias e 1 hora");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Catalog {
    rule: PluralRule,
    phrases: BTreeMap<Box<str>, Box<str>>,
    plurals: BTreeMap<Box<str>, Vec<Box<str>>>,
    contextual: BTreeMap<(Box<str>, Box<str>), Box<str>>,
    thousands_separator: Box<str>,
}

impl Catalog {
    /// Creates a new empty catalog using the given plural rule.
    pub fn new(rule: PluralRule) -> Catalog {
        Catalog {
            rule,
            phrases: BTreeMap::new(),
            plurals: BTreeMap::new(),
            contextual: BTreeMap::new(),
            thousands_separator: ",".into(),
        }
    }

    /// Adds a translation of a fixed phrase.
    pub fn with_phrase(mut self, key: &str, translation: &str) -> Catalog {
        self.phrases.insert(key.into(), translation.into());
        self
    }

    /// Adds the translated forms of a plural template, keyed by its English
    /// singular form.
    ///
    /// If the plural rule selects a form index that is out of bounds for
    /// `forms`, then the last form is used.
    pub fn with_plural(mut self, singular: &str, forms: &[&str]) -> Catalog {
        let forms = forms.iter().map(|&form| Box::from(form)).collect();
        self.plurals.insert(singular.into(), forms);
        self
    }

    /// Adds a translation of a phrase that only applies in the given
    /// context.
    pub fn with_phrase_in(
        mut self,
        context: &str,
        key: &str,
        translation: &str,
    ) -> Catalog {
        self.contextual
            .insert((context.into(), key.into()), translation.into());
        self
    }

    /// Sets the thousands separator. The default is `,`.
    pub fn with_thousands_separator(mut self, separator: &str) -> Catalog {
        self.thousands_separator = separator.into();
        self
    }
}

impl Translator for Catalog {
    fn phrase<'a>(&'a self, key: &'a str) -> &'a str {
        self.phrases.get(key).map_or(key, |t| &**t)
    }

    fn plural<'a>(
        &'a self,
        singular: &'a str,
        plural: &'a str,
        count: u64,
    ) -> &'a str {
        let Some(forms) = self.plurals.get(singular) else {
            return ENGLISH.plural(singular, plural, count);
        };
        let index = (self.rule)(count);
        match forms.get(index).or_else(|| forms.last()) {
            Some(form) => &**form,
            None => ENGLISH.plural(singular, plural, count),
        }
    }

    fn phrase_in<'a>(&'a self, context: &'a str, key: &'a str) -> &'a str {
        // A tuple key can't be borrowed as a tuple of `&str`.
        let lookup = (Box::from(context), Box::from(key));
        match self.contextual.get(&lookup) {
            Some(t) => &**t,
            None => self.phrase(key),
        }
    }

    fn thousands_separator(&self) -> &str {
        &self.thousands_separator
    }
}

impl core::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Catalog")
            .field("phrases", &self.phrases.len())
            .field("plurals", &self.plurals.len())
            .field("contextual", &self.contextual.len())
            .field("thousands_separator", &self.thousands_separator)
            .finish()
    }
}

/// Translates a phrase and fills in its placeholders.
pub(crate) fn phrase(
    tr: &dyn Translator,
    key: &str,
    args: &[Arg<'_>],
) -> String {
    fill(tr.phrase(key), args)
}

/// Selects the singular or plural template for `count`, translates it and
/// fills in its placeholders.
pub(crate) fn plural(
    tr: &dyn Translator,
    singular: &str,
    plural: &str,
    count: u64,
    args: &[Arg<'_>],
) -> String {
    fill(tr.plural(singular, plural, count), args)
}

/// Translates a phrase without placeholders into an owned string.
pub(crate) fn word(tr: &dyn Translator, key: &str) -> String {
    tr.phrase(key).to_string()
}
