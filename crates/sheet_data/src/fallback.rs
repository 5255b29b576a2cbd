use shared::domain::{AboutProfile, PortfolioSnapshot, ProjectId, ProjectRecord};

const CEE_DESCRIPTION: &str = "Cee is not about creating a better robotic vacuum. \
It asks what it means to live alongside a machine that shares our space.\n\
- Speculative design research\n\
- Interaction prototyping\n\
- Installation and film";

/// Built-in snapshot shown whenever the live sheet cannot be used.
pub fn fallback_snapshot() -> PortfolioSnapshot {
    let project = ProjectRecord {
        id: ProjectId(1),
        title: Some("Companion, Cohabitant and Continuum (Cee)".into()),
        date: Some("Fall 2024 - Spring 2025".into()),
        description: Some(CEE_DESCRIPTION.into()),
        thumbnail: Some("assets/thumbnail.png".into()),
        images: vec![
            "assets/thumbnail.png".into(),
            "assets/demo.gif".into(),
            "assets/about.png".into(),
        ],
        video: None,
        external_link: Some(
            "https://gsapp-cdp.github.io/archive/projects/2025/companion-cohabitant-and-continuum/"
                .into(),
        ),
        extra: Default::default(),
    };

    let about: AboutProfile = [
        ("name", "Fern Itthisang"),
        ("greeting", "Hello! I'm **Fern Itthisang**"),
        (
            "introduction",
            "Currently, I'm a designer who is passionate about data visualization \
             and the stories hidden inside everyday systems.",
        ),
        (
            "current_status",
            "Right now, I'm pursuing my studies in Computational Design Practices (CDP) \
             at GSAPP, Columbia University.",
        ),
        (
            "skills",
            "- Data Visualization\n- UX/UI Design\n- Interaction Design\n- AI and Coding\n\
             - Storytelling through Design",
        ),
        ("email", "pakjira[dot]itt[at]gmail[dot]com"),
    ]
    .into_iter()
    .collect();

    PortfolioSnapshot::new(vec![project], about)
}
