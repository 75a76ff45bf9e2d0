//! Shared query infrastructure: the [`QueryParams`] builder and the [`QueryOption`] trait.

use std::collections::BTreeMap;

use url::Url;

/// Optional query parameters for one request.
///
/// Keys are unique: setting a key that is already present overwrites it, so
/// the last option applied wins. Parameters encode in key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a parameter set from the query string already on `url`.
    pub fn from_url(url: &Url) -> Self {
        Self {
            params: url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// Sets `key` to `value`, replacing any earlier value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Sets a boolean parameter. The platform expects `1`/`0`, not `true`/`false`.
    pub fn set_flag(&mut self, key: impl Into<String>, flag: bool) -> &mut Self {
        self.set(key, if flag { "1" } else { "0" })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Applies one option.
    pub fn apply<O: QueryOption + ?Sized>(&mut self, option: &O) -> &mut Self {
        option.apply(self);
        self
    }

    /// Applies options in the order given.
    pub fn apply_all<'a, O, I>(&mut self, options: I) -> &mut Self
    where
        O: QueryOption + ?Sized + 'a,
        I: IntoIterator<Item = &'a O>,
    {
        for option in options {
            option.apply(self);
        }
        self
    }

    /// Replaces the query string of `url` with these parameters.
    ///
    /// An empty set leaves the URL without a `?`.
    pub fn write_to(&self, url: &mut Url) {
        url.set_query(None);
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter());
        }
    }

    /// The `application/x-www-form-urlencoded` form of these parameters.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}

/// A single mutation of a request's optional query parameters.
///
/// Implemented by the typed per-endpoint option enums and by any closure
/// taking `&mut QueryParams`.
pub trait QueryOption {
    fn apply(&self, params: &mut QueryParams);
}

impl<F> QueryOption for F
where
    F: Fn(&mut QueryParams),
{
    fn apply(&self, params: &mut QueryParams) {
        self(params)
    }
}
