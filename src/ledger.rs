//! Persistence of the chip balance between sessions.
//!
//! A ledger stores a single named slot holding the balance as a textual
//! integer. An absent slot means the player has never sat at the table.

use alloc::string::{String, ToString};

use crate::error::LedgerError;

/// Name of the slot that holds the chip balance.
pub const CHIP_SLOT: &str = "userChips";

/// Storage for the player's chip balance.
///
/// The game loads the balance once when it is created and saves it after
/// every change.
pub trait ChipLedger {
    /// Loads the stored balance, or `None` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read or holds something
    /// other than a balance.
    fn load(&mut self) -> Result<Option<usize>, LedgerError>;

    /// Stores the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    fn save(&mut self, balance: usize) -> Result<(), LedgerError>;
}

impl<L: ChipLedger + ?Sized> ChipLedger for &mut L {
    fn load(&mut self) -> Result<Option<usize>, LedgerError> {
        (**self).load()
    }

    fn save(&mut self, balance: usize) -> Result<(), LedgerError> {
        (**self).save(balance)
    }
}

/// Parses a stored balance.
///
/// Surrounding whitespace is ignored. A fractional part such as the one in
/// `"12.5"` is truncated.
///
/// # Errors
///
/// Returns [`LedgerError::Corrupt`] if the text is not a non-negative number.
pub fn parse_balance(text: &str) -> Result<usize, LedgerError> {
    let text = text.trim();
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

    if whole.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LedgerError::Corrupt);
    }

    whole.parse().map_err(|_| LedgerError::Corrupt)
}

/// Formats a balance for storage.
#[must_use]
pub fn format_balance(balance: usize) -> String {
    balance.to_string()
}

/// A ledger that keeps the slot in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLedger {
    slot: Option<String>,
    writes: usize,
}

impl MemoryLedger {
    /// Creates an empty ledger, as on first run.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: None,
            writes: 0,
        }
    }

    /// Creates a ledger whose slot already holds `text`.
    #[must_use]
    pub fn with_slot(text: &str) -> Self {
        Self {
            slot: Some(text.into()),
            writes: 0,
        }
    }

    /// Returns the raw slot contents.
    #[must_use]
    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Returns how many times the slot has been written.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl ChipLedger for MemoryLedger {
    fn load(&mut self) -> Result<Option<usize>, LedgerError> {
        self.slot.as_deref().map(parse_balance).transpose()
    }

    fn save(&mut self, balance: usize) -> Result<(), LedgerError> {
        self.slot = Some(format_balance(balance));
        self.writes += 1;
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::FileLedger;

#[cfg(feature = "std")]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{ChipLedger, format_balance, parse_balance};
    use crate::error::LedgerError;

    /// A ledger backed by a single text file.
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[derive(Debug, Clone)]
    pub struct FileLedger {
        path: PathBuf,
    }

    impl FileLedger {
        /// Creates a ledger stored at `path`. The file is created on first save.
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Returns the backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl ChipLedger for FileLedger {
        fn load(&mut self) -> Result<Option<usize>, LedgerError> {
            match fs::read_to_string(&self.path) {
                Ok(text) => parse_balance(&text).map(Some),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn save(&mut self, balance: usize) -> Result<(), LedgerError> {
            fs::write(&self.path, format_balance(balance))?;
            Ok(())
        }
    }
}
