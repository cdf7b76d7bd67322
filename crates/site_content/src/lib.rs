//! Static portfolio content shared by the landing page and the desktop applications.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Owner profile and contact details.
pub struct Profile {
    /// Display name.
    pub name: &'static str,
    /// Short role badge.
    pub badge: &'static str,
    /// One-line pitch.
    pub description: &'static str,
    /// Longer biography paragraphs.
    pub paragraphs: &'static [&'static str],
    /// City and country.
    pub location: &'static str,
    /// Contact address.
    pub email: &'static str,
    /// GitHub profile URL.
    pub github_url: &'static str,
    /// LinkedIn profile URL.
    pub linkedin_url: &'static str,
    /// Whether the owner is open to new opportunities.
    pub available: bool,
}

impl Profile {
    /// `mailto:` link for [`Profile::email`].
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A group of related technologies.
pub struct SkillCategory {
    /// Category name.
    pub title: &'static str,
    /// Summary sentence.
    pub description: &'static str,
    /// Individual technologies.
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A portfolio project entry.
pub struct Project {
    /// Two-digit ordinal.
    pub number: &'static str,
    /// Project name.
    pub title: &'static str,
    /// Product category.
    pub category: &'static str,
    /// `MM/YYYY` delivery date.
    pub year: &'static str,
    /// Bullet-separated stack summary.
    pub tech: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A headline number on the about page.
pub struct Stat {
    /// Number as displayed.
    pub value: &'static str,
    /// Caption.
    pub label: &'static str,
}

/// Site owner.
pub const PROFILE: Profile = Profile {
    name: "Giovanni Cruz",
    badge: "Software Engineer",
    description:
        "Building robust digital solutions with modern technology and clean architecture.",
    paragraphs: &[
        "Software Engineer with a degree in Systems Analysis from FIAP, specialized in web development and backend systems.",
        "Working in the tech industry since 2021, focused on building custom software solutions and scalable applications.",
    ],
    location: "São Paulo, Brazil",
    email: "giovanni@crz.dev",
    github_url: "https://github.com/giovannicruz97",
    linkedin_url: "https://linkedin.com/in/giovannicruz97",
    available: true,
};

/// Skill groups in display order.
pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Backend",
        description: "TypeScript, Bun, Node.js, ORMs, PostgreSQL, MongoDB, BaaS Platforms",
        technologies: &[
            "TypeScript",
            "Bun",
            "Node.js",
            "PostgreSQL",
            "MongoDB",
            "Prisma",
            "Drizzle",
            "Supabase",
            "Firebase",
        ],
    },
    SkillCategory {
        title: "Frontend",
        description: "React, Next.js, TypeScript, Tailwind CSS, Framer Motion",
        technologies: &["React", "Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"],
    },
    SkillCategory {
        title: "Blockchain",
        description: "Solidity, Hardhat, Ethereum",
        technologies: &["Solidity", "Hardhat", "Ethereum"],
    },
    SkillCategory {
        title: "DevOps",
        description: "Docker, CI/CD, AWS, Vercel, Linux",
        technologies: &["Docker", "CI/CD", "AWS", "Vercel", "Linux", "Git"],
    },
];

/// Projects, newest first.
pub const PROJECTS: &[Project] = &[
    Project {
        number: "01",
        title: "Solution Card",
        category: "Digital Health Platform",
        year: "07/2025",
        tech: "Next.js • Tailwind CSS • Framer Motion",
    },
    Project {
        number: "02",
        title: "Book SaaS",
        category: "SaaS with Auth & Subscriptions",
        year: "02/2025",
        tech: "Next.js • Prisma • Stripe • NextAuth",
    },
    Project {
        number: "03",
        title: "Delivery FSW",
        category: "Real-time Delivery System",
        year: "02/2025",
        tech: "Next.js • Prisma • NeonDB • Stripe",
    },
    Project {
        number: "04",
        title: "Piva Insurances",
        category: "Insurance Management Platform",
        year: "11/2024",
        tech: "React • Pocketbase • Shadcn UI",
    },
];

/// About-page headline numbers.
pub const STATS: &[Stat] = &[
    Stat {
        value: "4+",
        label: "Years in tech",
    },
    Stat {
        value: "10+",
        label: "Projects delivered",
    },
];

/// Landing-page navigation anchors, in order.
pub const NAV_ITEMS: &[&str] = &["Home", "Work", "Skills", "About", "Contact"];

/// Contact form labels.
pub mod contact_form {
    /// Submit button label.
    pub const SUBMIT: &str = "Send Message";
    /// Submit button label while the simulated request is pending.
    pub const SUBMITTING: &str = "Sending...";
    /// Confirmation text shown after submission.
    pub const SUCCESS: &str = "Message sent successfully!";
    /// Name field placeholder.
    pub const NAME_PLACEHOLDER: &str = "Your name";
    /// Email field placeholder.
    pub const EMAIL_PLACEHOLDER: &str = "your@email.com";
    /// Message field placeholder.
    pub const MESSAGE_PLACEHOLDER: &str = "Tell me about your project...";
}

/// Anchor id used for a landing-page navigation label.
pub fn section_anchor(label: &str) -> String {
    label.trim().to_ascii_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mailto_uses_profile_email() {
        assert_eq!(PROFILE.mailto(), "mailto:giovanni@crz.dev");
    }

    #[test]
    fn projects_are_numbered_in_order() {
        let numbers: Vec<_> = PROJECTS.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec!["01", "02", "03", "04"]);
    }

    #[test]
    fn every_skill_category_lists_technologies() {
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.technologies.is_empty()));
    }

    #[test]
    fn nav_labels_map_to_lowercase_anchors() {
        let anchors: Vec<_> = NAV_ITEMS.iter().map(|label| section_anchor(label)).collect();
        assert_eq!(anchors, vec!["home", "work", "skills", "about", "contact"]);
    }
}
