// src/content.rs

// ───────────────────────────────────────
// Hard-coded portfolio content
// ───────────────────────────────────────
#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub skills: &'static [&'static str],
    pub projects: &'static [Project],
}

#[derive(Debug)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Tilak",
    tagline: "A passionate IT student and aspiring software developer focused on building \
              scalable, user-friendly applications with modern web technologies.",
    about: "I enjoy designing clean user interfaces, solving complex logical problems, and \
            continuously improving my development skills. I work primarily with JavaScript, \
            React, and backend APIs, and I am always exploring new technologies.",
    email: "tilakrathi@example.com",
    github: "https://github.com/tilakrathi",
    linkedin: "https://www.linkedin.com/in/tilakrathi/",
    skills: &[
        "React.js",
        "JavaScript",
        "HTML / CSS",
        "Tailwind CSS",
        "Git & GitHub",
        "REST APIs",
    ],
    projects: &[
        Project {
            title: "Portfolio Website",
            summary: "A fully-responsive portfolio website built using React and Tailwind CSS.",
        },
        Project {
            title: "Connect-4 Game",
            summary: "A fun interactive game implementing game logic, UX, and state-management.",
        },
    ],
};
