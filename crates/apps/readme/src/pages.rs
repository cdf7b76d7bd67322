//! Reader navigation and the system-information figures shown in About.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ReadmePage {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl ReadmePage {
    pub(crate) const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::About => "ABOUT",
            Self::Skills => "SKILLS",
            Self::Projects => "PROJECTS",
            Self::Contact => "CONTACT",
        }
    }
}

pub(crate) const SYSTEM_VERSION: &str = "Cruz OS 9.0";
pub(crate) const TOTAL_MEMORY_KB: u32 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MemoryUse {
    pub(crate) label: &'static str,
    pub(crate) used_kb: u32,
}

pub(crate) const MEMORY_USERS: &[MemoryUse] = &[
    MemoryUse {
        label: "Cruz OS",
        used_kb: 1420,
    },
    MemoryUse {
        label: "Finder",
        used_kb: 512,
    },
];

impl MemoryUse {
    pub(crate) fn percent_of_total(self) -> f64 {
        f64::from(self.used_kb) * 100.0 / f64::from(TOTAL_MEMORY_KB)
    }
}

pub(crate) fn largest_unused_kb() -> u32 {
    MEMORY_USERS
        .iter()
        .fold(TOTAL_MEMORY_KB, |free, user| free.saturating_sub(user.used_kb))
}

/// Kilobytes rendered as megabytes with one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Megabytes(pub(crate) u32);

impl fmt::Display for Megabytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} MB", f64::from(self.0) / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn navigation_order_starts_at_home() {
        let labels: Vec<_> = ReadmePage::ALL.iter().map(|page| page.label()).collect();
        assert_eq!(labels, vec!["HOME", "ABOUT", "SKILLS", "PROJECTS", "CONTACT"]);
        assert_eq!(ReadmePage::default(), ReadmePage::Home);
    }

    #[test]
    fn memory_figures() {
        assert_eq!(largest_unused_kb(), 2164);
        assert_eq!(Megabytes(largest_unused_kb()).to_string(), "2.1 MB");
        assert_eq!(Megabytes(1420).to_string(), "1.4 MB");
        assert_eq!(MEMORY_USERS[1].percent_of_total(), 12.5);
    }
}
