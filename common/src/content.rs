//! Static site content
//!
//! All records are hard-coded and loaded once at startup; nothing here is
//! mutated afterwards. `verify` checks the content invariants so a broken
//! edit is caught at mount time instead of rendering silently wrong.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::{Certificate, NavItem, Profile, Project, Skill, SkillCategory, Social};

/// Section ids the nav anchors must resolve to
pub const SECTION_IDS: [&str; 6] = [
    "home",
    "about",
    "skills",
    "projects",
    "certificates",
    "contact",
];

/// Immutable, process-wide content for the whole site
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub nav_items: Vec<NavItem>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub socials: Vec<Social>,
    pub profile: Profile,
}

impl ContentStore {
    /// Build the full content set
    pub fn load() -> Self {
        Self {
            nav_items: nav_items(),
            skills: skills(),
            projects: projects(),
            certificates: certificates(),
            socials: socials(),
            profile: profile(),
        }
    }

    /// Check content invariants: unique project/certificate ids, skill
    /// levels within 0-100, nav hrefs pointing at known sections
    pub fn verify(&self) -> Result<()> {
        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !project_ids.insert(project.id.as_str()) {
                return Err(Error::Content(format!(
                    "duplicate project id: {}",
                    project.id
                )));
            }
        }

        let mut certificate_ids = HashSet::new();
        for certificate in &self.certificates {
            if !certificate_ids.insert(certificate.id.as_str()) {
                return Err(Error::Content(format!(
                    "duplicate certificate id: {}",
                    certificate.id
                )));
            }
        }

        for skill in &self.skills {
            if skill.level > 100 {
                return Err(Error::Content(format!(
                    "skill level out of range: {} = {}",
                    skill.name, skill.level
                )));
            }
        }

        for item in &self.nav_items {
            let target = item.href.strip_prefix('#').unwrap_or(&item.href);
            if !SECTION_IDS.contains(&target) {
                return Err(Error::Content(format!(
                    "nav item {} points at unknown section {}",
                    item.name, item.href
                )));
            }
        }

        Ok(())
    }
}

fn nav_items() -> Vec<NavItem> {
    [
        ("Home", "#home"),
        ("About", "#about"),
        ("Skills", "#skills"),
        ("Projects", "#projects"),
        ("Certificates", "#certificates"),
        ("Contact", "#contact"),
    ]
    .into_iter()
    .map(|(name, href)| NavItem {
        name: name.to_string(),
        href: href.to_string(),
    })
    .collect()
}

fn skills() -> Vec<Skill> {
    use SkillCategory::*;

    [
        ("React", 90, Frontend),
        ("TypeScript", 85, Frontend),
        ("Next.js", 88, Frontend),
        ("Tailwind CSS", 92, Frontend),
        ("Node.js", 85, Backend),
        ("Express", 82, Backend),
        ("PostgreSQL", 78, Backend),
        ("MongoDB", 75, Backend),
        ("UI/UX Design", 88, Design),
        ("Figma", 85, Design),
        ("Git", 90, Other),
        ("DevOps", 75, Other),
    ]
    .into_iter()
    .map(|(name, level, category)| Skill {
        name: name.to_string(),
        level,
        category,
    })
    .collect()
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "project-1".to_string(),
            title: "AI-Powered Task Manager".to_string(),
            description: "Smart task management app with AI-driven prioritization and scheduling."
                .to_string(),
            image: "https://images.pexels.com/photos/2115217/pexels-photo-2115217.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
                .to_string(),
            tags: ["React", "TypeScript", "Node.js", "AI"]
                .map(str::to_string)
                .to_vec(),
            github: Some("https://github.com/Akshargangani".to_string()),
            link: Some("https://ai-task-manager.demo".to_string()),
            featured: true,
        },
        Project {
            id: "project-2".to_string(),
            title: "Real-time Analytics Dashboard".to_string(),
            description: "Interactive dashboard for real-time data visualization and analysis."
                .to_string(),
            image: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
                .to_string(),
            tags: ["Next.js", "D3.js", "WebSocket"].map(str::to_string).to_vec(),
            github: Some("https://github.com/Akshargangani".to_string()),
            link: Some("https://analytics-dashboard.demo".to_string()),
            featured: true,
        },
        Project {
            id: "project-3".to_string(),
            title: "E-Learning Platform".to_string(),
            description: "Modern platform for online education with interactive courses."
                .to_string(),
            image: "https://images.pexels.com/photos/5905709/pexels-photo-5905709.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
                .to_string(),
            tags: ["React", "Node.js", "MongoDB"].map(str::to_string).to_vec(),
            github: Some("https://github.com/Akshargangani".to_string()),
            link: Some("https://elearning-platform.demo".to_string()),
            featured: true,
        },
    ]
}

fn certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: "cert-1".to_string(),
            title: "Advanced React & GraphQL".to_string(),
            organization: "Frontend Masters".to_string(),
            date: "March 2024".to_string(),
            description: "Advanced concepts in React and GraphQL development.".to_string(),
            link: Some("https://frontendmasters.com/cert/123".to_string()),
            image: None,
        },
        Certificate {
            id: "cert-2".to_string(),
            title: "AWS Solutions Architect".to_string(),
            organization: "Amazon Web Services".to_string(),
            date: "January 2024".to_string(),
            description: "Cloud architecture and AWS services certification.".to_string(),
            link: Some("https://aws.amazon.com/cert/456".to_string()),
            image: None,
        },
        Certificate {
            id: "cert-3".to_string(),
            title: "Full Stack Development".to_string(),
            organization: "University of Technology".to_string(),
            date: "December 2023".to_string(),
            description: "Comprehensive full stack web development program.".to_string(),
            link: Some("https://university.edu/cert/789".to_string()),
            image: None,
        },
    ]
}

fn socials() -> Vec<Social> {
    [
        ("GitHub", "https://github.com/Akshargangani", "github"),
        (
            "LinkedIn",
            "https://www.linkedin.com/in/akshar-gangani/",
            "linkedin",
        ),
        ("Twitter", "https://x.com/akshar_gangani", "twitter"),
    ]
    .into_iter()
    .map(|(name, url, icon)| Social {
        name: name.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

fn profile() -> Profile {
    Profile {
        name: "Akshar Patel".to_string(),
        title: "Full Stack Developer".to_string(),
        profile_image:
            "https://gateway.pinata.cloud/ipfs/QmciTgwt3iUndBu1TerQSaEva3mQMXzr2EUvGBMPeusJAZ"
                .to_string(),
        bio: "Passionate full stack developer with expertise in building modern web applications. Specializing in React, Node.js, and cloud technologies.\n\nWith 5+ years of experience, I've helped startups and enterprises deliver exceptional digital experiences. I believe in clean code, user-centric design, and continuous learning.\n\nCurrently focused on AI integration and cloud-native applications."
            .to_string(),
        location: "San Francisco, CA".to_string(),
        email: "akshargangani2006@gmail.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        availability: "Open to new opportunities".to_string(),
    }
}
