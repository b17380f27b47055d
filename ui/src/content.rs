//! Fixture data for the page. Everything here is `'static` and immutable;
//! components iterate these lists, nothing mutates them at runtime.

use crate::components::icons::Icon;

/// Anchor ids of the rendered sections, in page order. The Header scans
/// these top to bottom when deriving the active section.
pub const SECTION_IDS: [&str; 4] = ["home", "about", "projects", "contact"];

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub section: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", section: "home" },
    NavLink { label: "About", section: "about" },
    NavLink { label: "Projects", section: "projects" },
    NavLink { label: "Contact", section: "contact" },
];

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub icon: Icon,
    pub url: &'static str,
    pub label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { icon: Icon::Github, url: "https://github.com/abhishekranjan", label: "GitHub" },
    SocialLink { icon: Icon::Linkedin, url: "https://linkedin.com/in/abhishekranjan", label: "LinkedIn" },
    SocialLink { icon: Icon::Telegram, url: "https://t.me/abhishek_ranjan", label: "Telegram" },
    SocialLink { icon: Icon::Mail, url: "mailto:contact@abhishek.dev", label: "Email" },
];

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub name: &'static str,
    pub tech: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory { name: "Frontend", tech: &["React", "Next.js", "TypeScript", "Tailwind CSS"] },
    SkillCategory { name: "Backend", tech: &["Node.js", "Express", "NestJS", "Python"] },
    SkillCategory { name: "Database", tech: &["MongoDB", "PostgreSQL", "Firebase", "Redis"] },
    SkillCategory { name: "DevOps", tech: &["AWS", "Docker", "CI/CD", "NGINX"] },
];

/// Renders top to bottom, most recent first.
#[derive(Clone, Copy, Debug)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        period: "2023 - Present",
        role: "Senior Full Stack Developer",
        organization: "Tech Innovations Inc.",
        description: "Led development of SaaS platform serving 50K+ users. \
                      Implemented microservices architecture.",
    },
    TimelineEntry {
        period: "2021 - 2023",
        role: "Full Stack Developer",
        organization: "Digital Solutions LLC",
        description: "Built e-commerce platforms with React and Node.js. \
                      Improved performance by 40%.",
    },
    TimelineEntry {
        period: "2020 - 2021",
        role: "Frontend Developer",
        organization: "Web Creations",
        description: "Developed responsive UIs for client projects. \
                      Collaborated with design teams.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Gallery-category labels first, then the tech stack. The filter tabs
    /// match against this list.
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub repo_url: &'static str,
    pub live_url: Option<&'static str>,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "E-Commerce Platform",
        description: "Full-featured online store with payment integration, \
                      admin dashboard, and inventory management.",
        tags: &["Full Stack", "Web App", "React", "Node.js", "MongoDB", "Stripe"],
        image: "/assets/img/ecommerce-project.jpg",
        repo_url: "https://github.com/abhishekranjan/ecommerce-platform",
        live_url: Some("https://shop.abhishek.dev"),
    },
    Project {
        title: "Task Management App",
        description: "Productivity application with real-time collaboration, \
                      drag-and-drop interface, and team features.",
        tags: &["Web App", "UI/UX", "Next.js", "TypeScript", "Firebase"],
        image: "/assets/img/task-app.jpg",
        repo_url: "https://github.com/abhishekranjan/task-manager",
        live_url: Some("https://tasks.abhishek.dev"),
    },
    Project {
        title: "AI Content Generator",
        description: "Web application leveraging the OpenAI API to generate \
                      marketing content with customizable templates.",
        tags: &["Full Stack", "Web App", "React", "Express", "OpenAI API"],
        image: "/assets/img/ai-generator.jpg",
        repo_url: "https://github.com/abhishekranjan/ai-content-generator",
        live_url: Some("https://write.abhishek.dev"),
    },
    Project {
        title: "Habit Tracker",
        description: "Offline-first mobile habit tracker with streak \
                      analytics and home-screen widgets.",
        tags: &["Mobile", "UI/UX", "React Native", "SQLite"],
        image: "/assets/img/habit-tracker.jpg",
        repo_url: "https://github.com/abhishekranjan/habit-tracker",
        live_url: None,
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectFilter {
    All,
    WebApp,
    Mobile,
    FullStack,
    UiUx,
}

pub const PROJECT_FILTERS: [ProjectFilter; 5] = [
    ProjectFilter::All,
    ProjectFilter::WebApp,
    ProjectFilter::Mobile,
    ProjectFilter::FullStack,
    ProjectFilter::UiUx,
];

impl ProjectFilter {
    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::WebApp => "Web App",
            ProjectFilter::Mobile => "Mobile",
            ProjectFilter::FullStack => "Full Stack",
            ProjectFilter::UiUx => "UI/UX",
        }
    }

    pub fn admits(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            _ => project.tags.contains(&self.label()),
        }
    }
}

/// The subset of `PROJECTS` the gallery renders for `filter`.
pub fn visible_projects(filter: ProjectFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.admits(p)).collect()
}

#[derive(Clone, Copy, Debug)]
pub struct ContactMethod {
    pub icon: Icon,
    pub title: &'static str,
    pub value: &'static str,
    pub action: &'static str,
}

pub const CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        icon: Icon::Mail,
        title: "Email Me",
        value: "contact@abhishek.dev",
        action: "mailto:contact@abhishek.dev",
    },
    ContactMethod {
        icon: Icon::Telegram,
        title: "Telegram",
        value: "@abhishek_ranjan",
        action: "https://t.me/abhishek_ranjan",
    },
    ContactMethod {
        icon: Icon::MapPin,
        title: "Location",
        value: "Bangalore, India",
        action: "https://maps.google.com/?q=Bangalore",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct FooterLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct FooterGroup {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_GROUPS: [FooterGroup; 3] = [
    FooterGroup {
        title: "Navigation",
        links: &[
            FooterLink { label: "Home", url: "#home" },
            FooterLink { label: "About", url: "#about" },
            FooterLink { label: "Projects", url: "#projects" },
            FooterLink { label: "Contact", url: "#contact" },
        ],
    },
    FooterGroup {
        title: "Resources",
        links: &[
            FooterLink { label: "Resume", url: "/assets/resume.pdf" },
            FooterLink { label: "Blog", url: "https://blog.abhishek.dev" },
            FooterLink { label: "GitHub", url: "https://github.com/abhishekranjan" },
        ],
    },
    FooterGroup {
        title: "Legal",
        links: &[
            FooterLink { label: "Privacy Policy", url: "/privacy" },
            FooterLink { label: "Terms", url: "/terms" },
        ],
    },
];

pub const RESUME_URL: &str = "/assets/resume.pdf";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_link_targets_a_rendered_section() {
        for link in NAV_LINKS {
            assert!(
                SECTION_IDS.contains(&link.section),
                "nav link {:?} points at a section that is never rendered",
                link.label,
            );
        }
    }

    #[test]
    fn footer_anchors_match_rendered_sections() {
        for link in FOOTER_GROUPS[0].links {
            let target = link.url.trim_start_matches('#');
            assert!(SECTION_IDS.contains(&target));
        }
    }

    #[test]
    fn all_filter_shows_every_project() {
        assert_eq!(visible_projects(ProjectFilter::All).len(), PROJECTS.len());
    }

    #[test]
    fn filters_narrow_to_tagged_projects() {
        let mobile = visible_projects(ProjectFilter::Mobile);
        assert_eq!(mobile.len(), 1);
        assert_eq!(mobile[0].title, "Habit Tracker");

        let full_stack = visible_projects(ProjectFilter::FullStack);
        assert!(!full_stack.is_empty());
        assert!(full_stack.iter().all(|p| p.tags.contains(&"Full Stack")));
        assert!(full_stack.iter().all(|p| p.title != "Habit Tracker"));
    }

    #[test]
    fn every_filter_matches_at_least_one_project() {
        for filter in PROJECT_FILTERS {
            assert!(
                !visible_projects(filter).is_empty(),
                "filter {:?} would render an empty gallery",
                filter,
            );
        }
    }
}
