//! Fixed landing-page copy. Order here is document order.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TextBlock {
    pub id: &'static str,
    pub text: &'static str,
    /// Seconds before the first word starts once the block is visible.
    pub delay: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExpertiseArea {
    pub title: &'static str,
    pub description: &'static str,
}

pub const LANDING_TEXT: &[TextBlock] = &[
    TextBlock {
        id: "hero-name",
        text: "Parth Thapa Chhetri",
        delay: 0.0,
    },
    TextBlock {
        id: "hero-tagline",
        text: "A developer building community-focused digital experiences.",
        delay: 0.6,
    },
    TextBlock {
        id: "about-heading",
        text: "About Me",
        delay: 0.0,
    },
    TextBlock {
        id: "about-body",
        text: "My passion for computer science is rooted in its power to create meaningful change. As a student at Colby College, I've pursued this by building a community platform for users in Nepal and architecting automation for systems, always with a focus on scalability and a great user experience. When I step away from the keyboard, I recharge through hiking, volleyball, and the chaos of a good trivia night.",
        delay: 0.3,
    },
    TextBlock {
        id: "expertise-heading",
        text: "Core Expertise",
        delay: 0.0,
    },
    TextBlock {
        id: "cta-heading",
        text: "Ready to build something amazing?",
        delay: 0.0,
    },
    TextBlock {
        id: "cta-body",
        text: "Explore my full experience or get in touch to discuss your project.",
        delay: 0.3,
    },
    TextBlock {
        id: "contact-heading",
        text: "Contact Me",
        delay: 0.0,
    },
    TextBlock {
        id: "contact-body",
        text: "Have a project in mind or just want to connect? Send me a message.",
        delay: 0.3,
    },
];

pub const EXPERTISE: &[ExpertiseArea] = &[
    ExpertiseArea {
        title: "Full-Stack Development",
        description: "Building dynamic, high-performance web applications using React, Node.js, and Python.",
    },
    ExpertiseArea {
        title: "Interactive & Animated UI",
        description: "Creating fluid, engaging user experiences with Framer Motion and advanced CSS.",
    },
    ExpertiseArea {
        title: "Automation & System Admin",
        description: "Writing clean, scalable code and automating workflows for long-term project health.",
    },
    ExpertiseArea {
        title: "Performance Optimization",
        description: "Delivering lightning-fast load times and a silky-smooth 60fps user experience.",
    },
];
