//! Rendering of the portal.

use crate::wave::Wave;
use alloy_primitives::Address;
use std::fmt;

/// What the portal shows: controls depend only on whether an account is connected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct View {
    /// The connected account.
    pub account: Option<Address>,
    /// The draft message.
    pub draft: String,
    /// Waves, newest first.
    pub waves: Vec<Wave>,
}

impl View {
    /// Whether the waves are listed. They are only shown to a connected account.
    pub fn shows_waves(&self) -> bool {
        self.account.is_some()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "👋 WELCOME!")?;
        writeln!(f, "Connect your Ethereum wallet and send a 👋 (wave) ✨")?;
        writeln!(f)?;

        let Some(account) = self.account else {
            return writeln!(f, "[ Connect wallet ]");
        };

        writeln!(f, "[ Wallet Connected ] {account}")?;
        writeln!(f, "[ Wave at Me ]")?;
        if self.draft.is_empty() {
            writeln!(f, "> (type your message here)")?;
        } else {
            writeln!(f, "> {}", self.draft)?;
        }

        for wave in &self.waves {
            writeln!(f)?;
            write!(f, "{wave}")?;
        }
        Ok(())
    }
}
