use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::BitOr;

/// A set of host privileges held by a user or required by an action.
///
/// The bit layout matches the one the host persists user privileges in, so a
/// raw value read from the host can be turned into a set with
/// [`Privileges::from_bits_truncate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Privileges(u32);

impl Privileges {
    pub const NONE: Privileges = Privileges(0);
    pub const LOGIN: Privileges = Privileges(1 << 0);
    pub const LIST_FILE: Privileges = Privileges(1 << 1);
    pub const UPLOAD_FILE: Privileges = Privileges(1 << 2);
    pub const DELETE_FILE: Privileges = Privileges(1 << 3);
    pub const EDIT_FILE: Privileges = Privileges(1 << 4);
    pub const CREATE_PLAYLIST: Privileges = Privileges(1 << 5);
    pub const DELETE_PLAYLIST: Privileges = Privileges(1 << 6);
    pub const ADDTO_PLAYLIST: Privileges = Privileges(1 << 7);
    pub const STARTSTOP: Privileges = Privileges(1 << 8);
    pub const EDITUSERS: Privileges = Privileges(1 << 9);
    pub const CHANGENICK: Privileges = Privileges(1 << 10);
    pub const BROADCAST: Privileges = Privileges(1 << 11);
    pub const PLAYBACK: Privileges = Privileges(1 << 12);
    pub const ENQUEUE: Privileges = Privileges(1 << 13);
    pub const ENQUEUENEXT: Privileges = Privileges(1 << 14);
    pub const EDITBOT: Privileges = Privileges(1 << 15);
    pub const EDITINSTANCE: Privileges = Privileges(1 << 16);

    const NAMED: [(&'static str, Privileges); 17] = [
        ("LOGIN", Self::LOGIN),
        ("LIST_FILE", Self::LIST_FILE),
        ("UPLOAD_FILE", Self::UPLOAD_FILE),
        ("DELETE_FILE", Self::DELETE_FILE),
        ("EDIT_FILE", Self::EDIT_FILE),
        ("CREATE_PLAYLIST", Self::CREATE_PLAYLIST),
        ("DELETE_PLAYLIST", Self::DELETE_PLAYLIST),
        ("ADDTO_PLAYLIST", Self::ADDTO_PLAYLIST),
        ("STARTSTOP", Self::STARTSTOP),
        ("EDITUSERS", Self::EDITUSERS),
        ("CHANGENICK", Self::CHANGENICK),
        ("BROADCAST", Self::BROADCAST),
        ("PLAYBACK", Self::PLAYBACK),
        ("ENQUEUE", Self::ENQUEUE),
        ("ENQUEUENEXT", Self::ENQUEUENEXT),
        ("EDITBOT", Self::EDITBOT),
        ("EDITINSTANCE", Self::EDITINSTANCE),
    ];

    const ALL_BITS: u32 = (1 << 17) - 1;

    /// Build a set from the host's raw representation, dropping unknown bits.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Privileges(bits & Self::ALL_BITS)
    }

    /// Raw representation, as the host stores it.
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn union(self, other: Privileges) -> Self {
        Privileges(self.0 | other.0)
    }

    /// True if every privilege in `required` is also in `self`.
    pub const fn contains(self, required: Privileges) -> bool {
        self.0 & required.0 == required.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Names of the privileges in this set, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .into_iter()
            .filter(move |(_, p)| self.contains(*p))
            .map(|(name, _)| name)
    }
}

impl BitOr for Privileges {
    type Output = Privileges;

    fn bitor(self, rhs: Privileges) -> Privileges {
        self.union(rhs)
    }
}

impl Display for Privileges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let names: Vec<&str> = self.names().collect();
        f.write_str(&names.join("|"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contains() {
        let held = Privileges::PLAYBACK | Privileges::EDITBOT;
        assert!(held.contains(Privileges::PLAYBACK));
        assert!(held.contains(Privileges::PLAYBACK | Privileges::EDITBOT));
        assert!(!held.contains(Privileges::PLAYBACK | Privileges::ENQUEUE));
        assert!(held.contains(Privileges::NONE));
    }

    #[test]
    fn test_host_bit_layout() {
        assert_eq!(Privileges::PLAYBACK.bits(), 4096);
        assert_eq!(Privileges::ENQUEUE.bits(), 8192);
        assert_eq!(Privileges::EDITBOT.bits(), 32768);
        assert_eq!(
            Privileges::from_bits_truncate(u32::MAX).bits(),
            (1 << 17) - 1
        );
    }

    #[test]
    fn test_display_and_names() {
        let held = Privileges::ENQUEUE | Privileges::LOGIN;
        assert_eq!(held.to_string(), "LOGIN|ENQUEUE");
        assert_eq!(Privileges::NONE.to_string(), "NONE");
        assert_eq!(held.names().collect::<Vec<_>>(), vec!["LOGIN", "ENQUEUE"]);
    }
}
