//! Static data behind each section of the page.

pub const OWNER: &str = "Zachary Napier";
pub const OWNER_TITLE: &str = "Software Engineer & Technical Founder";
pub const GITHUB_URL: &str = "https://github.com/zacharynapier";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/zacharynapier";
pub const EMAIL: &str = "zacharynapier07@gmail.com";

/// Year the crate was built, stamped by `build.rs`.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

/// Served from `public/` at the site root.
pub const AVATAR_SRC: &str = "/profile.svg";
pub const FAVICON_HREF: &str = "/favicon.svg";

/// Marks a project with no public deployment.
pub const NO_LIVE_URL: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    /// Anchor id of the rendered `<section>`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub name: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

impl SocialLink {
    /// Mail links stay in the current tab; everything else opens a new one.
    pub fn opens_new_tab(&self) -> bool {
        self.kind != SocialKind::Email
    }

    pub fn icon(&self) -> Icon {
        match self.kind {
            SocialKind::GitHub => Icon::GitHub,
            SocialKind::LinkedIn => Icon::LinkedIn,
            SocialKind::Email => Icon::Mail,
        }
    }
}

/// Line icons drawn inline on a 24x24 stroked viewBox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    LinkedIn,
    Mail,
    ExternalLink,
}

impl Icon {
    pub const ALL: [Icon; 4] = [Self::GitHub, Self::LinkedIn, Self::Mail, Self::ExternalLink];

    /// `d` attributes of the icon's `<path>` elements.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::GitHub => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::LinkedIn => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Self::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
        }
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::GitHub,
        name: "GitHub",
        href: GITHUB_URL,
        label: "@zacharynapier",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        name: "LinkedIn",
        href: LINKEDIN_URL,
        label: OWNER,
    },
    SocialLink {
        kind: SocialKind::Email,
        name: "Email",
        href: "mailto:zacharynapier07@gmail.com",
        label: EMAIL,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "7+",
        label: "Years Experience",
    },
    Stat {
        value: "500K+",
        label: "Documents Processed",
    },
    Stat {
        value: "$50K+",
        label: "Annual Savings Delivered",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        icon: "💻",
        skills: &[
            "React.js",
            "TypeScript",
            "JavaScript",
            "Vite",
            "Tailwind CSS",
            "Vitest",
            "Playwright",
        ],
    },
    SkillCategory {
        title: "Backend",
        icon: "🖥️",
        skills: &[
            "Python",
            "FastAPI",
            "SQLAlchemy",
            "PostgreSQL",
            "Redis",
            "Alembic",
            "Pydantic",
            "JWT",
            "WebSockets",
            "pytest",
        ],
    },
    SkillCategory {
        title: "ML & GenAI",
        icon: "🧠",
        skills: &[
            "RAG",
            "Semantic Search",
            "pgvector",
            "LlamaIndex",
            "Groq",
            "Gemini",
            "ElevenLabs",
            "MCP",
            "Hugging Face",
        ],
    },
    SkillCategory {
        title: "Cloud & DevOps",
        icon: "☁️",
        skills: &[
            "Docker",
            "GCP Cloud Run",
            "Vertex AI",
            "Cloud SQL",
            "BigQuery",
            "AWS EC2",
            "Kubernetes",
            "GitHub Actions",
            "MLflow",
            "ELK",
        ],
    },
    SkillCategory {
        title: "Architecture",
        icon: "🔀",
        skills: &[
            "Microservices",
            "Event-Driven",
            "CI/CD",
            "Observability",
            "SLI/SLO",
            "Incident Management",
        ],
    },
    SkillCategory {
        title: "Testing & Quality",
        icon: "🧪",
        skills: &[
            "pytest",
            "Vitest",
            "Playwright",
            "E2E Testing",
            "Integration Testing",
            "TDD",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Technical Founder",
        company: "Tarina AI, Inc.",
        location: "Salt Lake City, UT",
        duration: "Jun 2024 – Oct 2025",
        highlights: &[
            "Owned roadmap and cross-functional delivery across product, design, and go-to-market for a React and Python platform on GCP and Vercel",
            "Secured paid pilots with the United Nations World Food Programme and the International Olympic Committee IKL through solution discovery and technical demos",
            "Architected WebSocket video infrastructure with <100ms latency across 3 GCP regions with Redis for caching, pub/sub, presence, and rate limiting",
            "Implemented CI/CD with GitHub Actions to run tests, build Docker images, migrate DB with Alembic, and deploy to Cloud Run and Vercel",
        ],
    },
    Experience {
        role: "Software Engineer",
        company: "Rakonto Inc.",
        location: "Salt Lake City, UT",
        duration: "Jan 2021 – Jun 2024",
        highlights: &[
            "Led development of automated transcription, translation, and summarization workflows",
            "Built containerized speech recognition on on-prem Whisper deployment, reducing turnaround from 2.5-4 weeks to ~100 seconds",
            "Saved $50,000/year through automated processing pipeline optimizations",
            "Partnered with product and customer teams to scope solutions and run live demos",
        ],
    },
    Experience {
        role: "Software Engineer (Contract)",
        company: "Liberty Health",
        location: "Remote",
        duration: "Nov 2022 – Jan 2023",
        highlights: &[
            "Implemented retrieval-augmented generation with LlamaIndex over 10,000+ pages to improve retrieval quality",
            "Shipped a React testing UI that cut iteration and setup time for the learning and development team",
        ],
    },
    Experience {
        role: "Software Engineer",
        company: "GPFour Inc.",
        location: "Salt Lake City, UT",
        duration: "Dec 2019 – Jan 2021",
        highlights: &[
            "Automated video processing with Python, FFmpeg, and SQL, removing a large share of manual edits",
            "Implemented ELK monitoring and React dashboards to reduce incident response time",
        ],
    },
    Experience {
        role: "Junior Software Engineer",
        company: "GPFour Inc.",
        location: "Salt Lake City, UT",
        duration: "Jul 2017 – Dec 2019",
        highlights: &["Processed 500,000+ transcripts with NLTK and spaCy to reduce manual review time"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub detail: &'static str,
}

pub const EDUCATION: Education = Education {
    school: "Western Governors University",
    degree: "Bachelor of Science in Computer Science",
    detail: "Expected March 2026 • Salt Lake City, UT",
};

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
    pub icon: &'static str,
    pub featured: bool,
}

impl Project {
    pub fn live_url(&self) -> Option<&'static str> {
        if self.live == NO_LIVE_URL || self.live.is_empty() {
            None
        } else {
            Some(self.live)
        }
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Tarina AI Platform",
        description: "AI-powered video platform with real-time WebSocket infrastructure, serving enterprise clients including the UN World Food Programme and International Olympic Committee.",
        tech: &["React", "Python", "FastAPI", "GCP", "Redis", "WebSockets"],
        github: GITHUB_URL,
        live: "https://tarina.ai",
        icon: "🎬",
        featured: true,
    },
    Project {
        title: "Speech Recognition Pipeline",
        description: "Containerized Whisper deployment automating transcription, translation, and summarization. Reduced turnaround from weeks to ~100 seconds, saving $50K/year.",
        tech: &["Python", "Whisper", "Docker", "PostgreSQL", "FastAPI"],
        github: GITHUB_URL,
        live: NO_LIVE_URL,
        icon: "🎙️",
        featured: true,
    },
    Project {
        title: "RAG Knowledge System",
        description: "Retrieval-augmented generation system with LlamaIndex over 10,000+ pages, improving retrieval quality for enterprise training content.",
        tech: &["Python", "LlamaIndex", "pgvector", "React", "PostgreSQL"],
        github: GITHUB_URL,
        live: NO_LIVE_URL,
        icon: "✨",
        featured: true,
    },
    Project {
        title: "Video Processing Automation",
        description: "Automated video processing pipeline with Python, FFmpeg, and SQL, eliminating manual editing workflows and reducing processing time by 80%.",
        tech: &["Python", "FFmpeg", "PostgreSQL", "ELK Stack"],
        github: GITHUB_URL,
        live: NO_LIVE_URL,
        icon: "🎬",
        featured: false,
    },
    Project {
        title: "NLP Transcript Processor",
        description: "Large-scale NLP pipeline processing 500,000+ transcripts with NLTK and spaCy for entity extraction and classification.",
        tech: &["Python", "NLTK", "spaCy", "PostgreSQL"],
        github: GITHUB_URL,
        live: NO_LIVE_URL,
        icon: "📄",
        featured: false,
    },
    Project {
        title: "Real-Time Analytics Dashboard",
        description: "React-based analytics UI with ELK monitoring integration, providing real-time insights and reducing incident response time.",
        tech: &["React", "TypeScript", "ELK Stack", "Grafana"],
        github: GITHUB_URL,
        live: NO_LIVE_URL,
        icon: "📊",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_section_ids_unique() {
        let ids: HashSet<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
        assert_eq!(Section::Contact.id(), "contact");
    }

    #[test]
    fn test_live_url() {
        let with_live: Vec<&str> = PROJECTS
            .iter()
            .filter_map(|p| p.live_url())
            .collect();
        assert_eq!(with_live, vec!["https://tarina.ai"]);
    }

    #[test]
    fn test_social_links() {
        let email = SOCIAL_LINKS
            .iter()
            .find(|l| l.kind == SocialKind::Email)
            .expect("email link should exist");
        assert!(!email.opens_new_tab());
        assert!(email.href.starts_with("mailto:"));
        assert!(SOCIAL_LINKS
            .iter()
            .filter(|l| l.kind != SocialKind::Email)
            .all(|l| l.opens_new_tab() && l.href.starts_with("https://")));
    }

    #[test]
    fn test_icons_resolve_to_paths() {
        for icon in Icon::ALL {
            let paths = icon.paths();
            assert!(!paths.is_empty(), "{icon:?} has no paths");
            for d in paths {
                assert!(d.starts_with(['M', 'm']), "{icon:?} path must open with a moveto: {d}");
                assert!(
                    d.chars().all(|c| c.is_ascii_digit() || " .-,MmLlHhVvCcSsAaZz".contains(c)),
                    "{icon:?} path has stray characters: {d}"
                );
            }
        }
        let icons: Vec<Icon> = SOCIAL_LINKS.iter().map(|l| l.icon()).collect();
        assert_eq!(icons, vec![Icon::GitHub, Icon::LinkedIn, Icon::Mail]);
    }

    #[test]
    fn test_static_assets_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for href in [AVATAR_SRC, FAVICON_HREF] {
            let file = public.join(href.trim_start_matches('/'));
            assert!(file.is_file(), "{href} is referenced but {} is missing", file.display());
        }
    }

    #[test]
    fn test_build_year() {
        let year: i32 = BUILD_YEAR.parse().expect("BUILD_YEAR should be a plain year");
        assert!(year >= 2024);
    }

    #[test]
    fn test_content_not_empty() {
        assert_eq!(SKILL_CATEGORIES.len(), 6);
        assert_eq!(EXPERIENCES.len(), 5);
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
        assert!(EXPERIENCES.iter().all(|e| !e.highlights.is_empty()));
        assert!(PROJECTS.iter().all(|p| !p.tech.is_empty()));
    }
}
