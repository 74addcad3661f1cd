use serde::Deserialize;

pub const OWNER_NAME: &str = "Mark Daniel";
pub const OWNER_ROLE: &str = "Application Developer & IT Supervisor";
pub const CONTACT_EMAIL: &str = "mark@example.com";
pub const GITHUB_URL: &str = "https://github.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com";

pub const CARD_TECHNOLOGY_LIMIT: usize = 3;

const TAGLINE_BASE_DELAY_MS: u32 = 1_500;
const TAGLINE_WORD_STAGGER_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const TAGLINE_WORDS: [&str; 12] = [
    "Building",
    "Scalable",
    "Systems",
    "and",
    "Beautiful",
    "Interfaces",
    "where",
    "backend",
    "power",
    "meets",
    "frontend",
    "finesse.",
];

pub const HERO_TECH: [&str; 5] = [
    "ASP.NET Core",
    "React TypeScript",
    "SignalR",
    "Microservices",
    "Cloud DevOps",
];

pub fn tagline_word_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    TAGLINE_BASE_DELAY_MS.saturating_add(index.saturating_mul(TAGLINE_WORD_STAGGER_MS))
}

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm an Application Developer and IT Supervisor with over 3 years of experience in building enterprise systems using ASP.NET, React, and modern DevOps practices. I specialize in scalable, secure, and real-time applications powered by SignalR and microservice architecture.",
    "My journey in tech has been marked by a passion for solving complex problems and mentoring talented teams. From reverse-engineering legacy systems to architecting cloud-native solutions, I bring both technical depth and strategic vision to every project.",
];

pub const ABOUT_HIGHLIGHTS: [&str; 4] = [
    "Enterprise System Architecture",
    "Real-Time Application Development",
    "DevOps & Cloud Infrastructure",
    "Team Leadership & Mentoring",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub target: u32,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { target: 3, label: "Years Experience" },
    Stat { target: 20, label: "Projects Delivered" },
    Stat { target: 50, label: "Systems Managed" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
    pub accent: &'static str,
}

pub const SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        name: "Backend",
        skills: &["ASP.NET Core", "C#", "Entity Framework", "SQL Server", "PostgreSQL", "RabbitMQ"],
        accent: "blue",
    },
    SkillCategory {
        name: "Frontend",
        skills: &["React", "TypeScript", "TailwindCSS", "Redux", "Framer Motion", "HTML/CSS"],
        accent: "emerald",
    },
    SkillCategory {
        name: "Real-Time & Messaging",
        skills: &["SignalR", "WebSockets", "gRPC", "Message Brokers", "Event-Driven Architecture"],
        accent: "purple",
    },
    SkillCategory {
        name: "DevOps & Cloud",
        skills: &["Docker", "Kubernetes", "Azure", "AWS", "CI/CD Pipelines", "Terraform"],
        accent: "orange",
    },
    SkillCategory {
        name: "Architecture",
        skills: &[
            "Microservices",
            "SOLID Principles",
            "Design Patterns",
            "System Design",
            "API Design",
        ],
        accent: "pink",
    },
    SkillCategory {
        name: "Tools & Practices",
        skills: &["Git", "Azure DevOps", "Jira", "Agile/Scrum", "Code Reviews", "Testing"],
        accent: "cyan",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub tenure: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: [ExperienceEntry; 3] = [
    ExperienceEntry {
        title: "IT Supervisor",
        company: "Golden Topper",
        duration: "2021 - Present",
        tenure: "3.5 years",
        description: "Leading technical teams and overseeing enterprise system architecture. Responsible for infrastructure management, process improvements, and mentoring junior developers.",
        highlights: &[
            "Managed 15+ developers across multiple projects",
            "Architected microservices migration saving 40% operational costs",
            "Implemented DevOps pipeline reducing deployment time from 2h to 15m",
            "Established code review and quality standards improving code quality by 35%",
        ],
    },
    ExperienceEntry {
        title: "Senior Application Developer",
        company: "Golden Topper",
        duration: "2023 - 2024",
        tenure: "1+ year",
        description: "Developed enterprise applications using ASP.NET Core and React. Led architecture design and technical decision-making.",
        highlights: &[
            "Built real-time dashboard processing 1000+ data points/second",
            "Designed FAQ system serving 10,000+ concurrent users",
            "Led team of 8 developers on multiple concurrent projects",
            "Mentored 3 junior developers",
        ],
    },
    ExperienceEntry {
        title: "Application Developer",
        company: "Golden Topper",
        duration: "2020 - 2023",
        tenure: "3 years",
        description: "Full-stack development of web applications. Worked on reverse engineering legacy systems and modernizing infrastructure.",
        highlights: &[
            "Reverse-engineered and modernized legacy ERP system",
            "Developed inventory and HRIS system for 500+ employees",
            "Implemented SignalR for real-time features",
            "Improved system performance by 40%",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub handle: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Email",
        href: "mailto:mark@example.com",
        handle: CONTACT_EMAIL,
    },
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN_URL,
        handle: "Mark Daniel",
    },
    SocialLink {
        label: "GitHub",
        href: GITHUB_URL,
        handle: "@markdaniel",
    },
];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub technologies: Vec<String>,
    pub year: String,
}

impl ProjectCard {
    pub fn technology_badges(&self, limit: usize) -> (&[String], usize) {
        let shown = self.technologies.len().min(limit);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

pub fn parse_project_feed(raw: &str) -> Result<Vec<ProjectCard>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLED_FEED: &str = include_str!("../data/projects.json");

    #[test]
    fn bundled_feed_decodes_in_order() {
        let projects = parse_project_feed(BUNDLED_FEED).expect("bundled feed is valid");

        assert!(!projects.is_empty());
        assert_eq!(projects[0].id, "realtime-dashboard");
        for project in &projects {
            assert!(!project.title.is_empty());
            assert!(!project.technologies.is_empty());
        }
    }

    #[test]
    fn feed_fields_are_camel_case() {
        let projects = parse_project_feed(
            r#"[{"id":"a","title":"A","description":"Long","shortDescription":"Short","technologies":[],"year":"2024"}]"#,
        )
        .expect("valid feed");

        assert_eq!(projects[0].short_description, "Short");
        assert!(parse_project_feed(r#"[{"id":"a"}]"#).is_err());
    }

    #[test]
    fn badges_collapse_overflow() {
        let card = ProjectCard {
            id: "x".to_string(),
            title: "X".to_string(),
            description: String::new(),
            short_description: String::new(),
            technologies: ["Rust", "Yew", "WASM", "Trunk", "CSS"]
                .map(str::to_string)
                .to_vec(),
            year: "2025".to_string(),
        };

        let (shown, hidden) = card.technology_badges(CARD_TECHNOLOGY_LIMIT);
        assert_eq!(shown, ["Rust", "Yew", "WASM"].map(str::to_string));
        assert_eq!(hidden, 2);

        let (shown, hidden) = card.technology_badges(10);
        assert_eq!(shown.len(), 5);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn tagline_words_are_staggered() {
        assert_eq!(tagline_word_delay_ms(0), 1_500);
        assert_eq!(tagline_word_delay_ms(3), 1_800);
        assert_eq!(tagline_word_delay_ms(usize::MAX), u32::MAX);
    }
}
