//! Configuration options for reading documents.
//!
//! The document format itself is fixed, so the knobs here only bound how
//! much untrusted input a reader accepts and how strictly it validates
//! links.
//!
//! ## Examples
//!
//! ```rust
//! use randlist::{from_str_with_options, Options};
//!
//! let options = Options::new().with_max_records(1);
//! let doc = "[{Data='a',Prev=null,Next=1,Rand=null},{Data='b',Prev=0,Next=null,Rand=null}]";
//! assert!(from_str_with_options(doc, &options).is_err());
//! ```

/// Configuration options for deserialization.
///
/// # Examples
///
/// ```rust
/// use randlist::Options;
///
/// // Defaults: unbounded, connectivity enforced
/// let options = Options::new();
/// assert!(options.require_connected);
///
/// let options = Options::new()
///     .with_max_records(10_000)
///     .with_max_field_len(4096);
/// assert_eq!(options.max_records, Some(10_000));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub max_records: Option<usize>,
    pub max_field_len: Option<usize>,
    pub require_connected: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_records: None,
            max_field_len: None,
            require_connected: true,
        }
    }
}

impl Options {
    /// Creates default options (no limits, connectivity check on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of records a document may hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randlist::Options;
    ///
    /// let options = Options::new().with_max_records(2);
    /// assert_eq!(options.max_records, Some(2));
    /// ```
    #[must_use]
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = Some(max);
        self
    }

    /// Caps the byte length of a single field, name and quoted spans included.
    #[must_use]
    pub fn with_max_field_len(mut self, max: usize) -> Self {
        self.max_field_len = Some(max);
        self
    }

    /// Turns the unconnected-node check on or off.
    ///
    /// With the check off, records linked only through `Rand` load
    /// without error.
    #[must_use]
    pub fn with_require_connected(mut self, require: bool) -> Self {
        self.require_connected = require;
        self
    }
}
